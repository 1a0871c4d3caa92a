use clap::Parser;
use proxylog::flags::go_style_args;
use proxylog::{errorf, fatalf, infof, requestf, LogConfig, LogFlags, Logger};
use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "proxylog")]
#[command(about = "Record proxied requests read from stdin into the request history")]
struct Args {
    #[command(flatten)]
    flags: LogFlags,

    /// Append log output to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,

    /// Append request history to this file (required)
    #[arg(long, value_name = "FILE")]
    history_file: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Accept -info=false as well as --info=false
    let args = Args::parse_from(go_style_args(std::env::args()));

    let mut logger = Logger::new(args.flags.into());
    let config = LogConfig::new(args.log_file, args.history_file);
    if let Err(e) = logger.configure(&config) {
        fatalf!("Invalid log configuration: {}", e);
    }

    infof!(logger, "recording history, verbose={}", logger.verbose());

    let mut count = 0usize;
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                errorf!(logger, "reading stdin: {}", e);
                return Err(e.into());
            }
        };
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        requestf!(logger, "{}", record);
        logger.history().write(record);
        count += 1;
    }

    infof!(logger, "recorded {} requests", count);
    Ok(())
}
