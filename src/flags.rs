//! Command-line switches for the log channels.
//!
//! [`LogFlags`] is meant to be flattened into the host's own clap parser.
//! Each boolean takes an optional value, so `--debug`, `--debug=true` and
//! `--info=false` all work.
//!
//! Unlike Go's `flag` package, a separate word is also taken as the value:
//! `--info false` turns info off. Hosts that flatten [`LogFlags`] next to
//! positional arguments should write `--flag=value` or place the positional
//! first, otherwise a positional `true`/`false` is consumed by the flag.

use clap::{ArgAction, Args};

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LogFlags {
    /// Enable the info channel
    #[arg(long = "info", action = ArgAction::Set, num_args = 0..=1,
          default_value_t = true, default_missing_value = "true")]
    pub info: bool,

    /// Enable the debug channel (best paired with console output and --color)
    #[arg(long = "debug", action = ArgAction::Set, num_args = 0..=1,
          default_value_t = false, default_missing_value = "true")]
    pub debug: bool,

    /// Enable the error channel
    #[arg(long = "err", action = ArgAction::Set, num_args = 0..=1,
          default_value_t = true, default_missing_value = "true")]
    pub err: bool,

    /// Log outgoing requests
    #[arg(long = "request", action = ArgAction::Set, num_args = 0..=1,
          default_value_t = false, default_missing_value = "true")]
    pub request: bool,

    /// Log upstream replies
    #[arg(long = "reply", action = ArgAction::Set, num_args = 0..=1,
          default_value_t = false, default_missing_value = "true")]
    pub reply: bool,

    /// Include more detail in request/reply logging
    #[arg(short = 'v', action = ArgAction::Set, num_args = 0..=1,
          default_value_t = false, default_missing_value = "true")]
    pub verbose: bool,

    /// Colorize channel tags
    #[arg(long = "color", action = ArgAction::Set, num_args = 0..=1,
          default_value_t = false, default_missing_value = "true")]
    pub color: bool,
}

impl Default for LogFlags {
    fn default() -> Self {
        Switches::default().into()
    }
}

/// Channel switches and presentation settings, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switches {
    pub info: bool,
    pub debug: bool,
    pub error: bool,
    pub request: bool,
    pub response: bool,
    /// Read by callers to decide how much detail to log
    pub verbose: bool,
    pub colorize: bool,
}

impl Default for Switches {
    fn default() -> Self {
        Self {
            info: true,
            debug: false,
            error: true,
            request: false,
            response: false,
            verbose: false,
            colorize: false,
        }
    }
}

impl From<LogFlags> for Switches {
    fn from(flags: LogFlags) -> Self {
        Self {
            info: flags.info,
            debug: flags.debug,
            error: flags.err,
            request: flags.request,
            response: flags.reply,
            verbose: flags.verbose,
            colorize: flags.color,
        }
    }
}

impl From<Switches> for LogFlags {
    fn from(switches: Switches) -> Self {
        Self {
            info: switches.info,
            debug: switches.debug,
            err: switches.error,
            request: switches.request,
            reply: switches.response,
            verbose: switches.verbose,
            color: switches.colorize,
        }
    }
}

/// Rewrite single-dash long flags (`-info=false`, `-color`) to the
/// double-dash form clap expects. Single-letter flags and everything after
/// a bare `--` pass through unchanged.
pub fn go_style_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| -> String { arg.into() })
        .enumerate()
        .map(|(i, arg)| {
            // argv[0] is the program name
            if i == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.strip_prefix('-') {
                Some(rest) if is_long_name(rest) => format!("--{}", rest),
                _ => arg,
            }
        })
        .collect()
}

fn is_long_name(rest: &str) -> bool {
    let name = rest.split('=').next().unwrap_or(rest);
    name.len() > 1 && name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}
