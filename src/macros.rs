//! `format!`-style shorthands for the channel methods.
//!
//! Each expands at the call site, so the reported `file:line` is the line
//! the macro was written on.

/// Log to the info channel: `infof!(logger, "listening on {}", addr)`
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info().printf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug().printf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error().printf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! requestf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.request().printf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! responsef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.response().printf(format_args!($($arg)+))
    };
}

/// Append a record to the history file regardless of any switch.
#[macro_export]
macro_rules! historyf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.history().printf(format_args!($($arg)+))
    };
}

/// Print to stdout and exit with status 1.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::logging::fatal(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Logger, Sink, Switches};

    #[test]
    fn test_macros_route_to_channels() {
        let general = Sink::memory();
        let history = Sink::memory();
        let switches = Switches {
            request: true,
            response: true,
            ..Switches::default()
        };
        let logger = Logger::with_sinks(switches, general.clone(), history.clone());

        infof!(logger, "listening on {}", "127.0.0.1:7777");
        debugf!(logger, "hidden {}", 1);
        errorf!(logger, "dial {} failed", "example.com:80");
        let line = line!() + 1;
        requestf!(logger, "GET {}", "/index.html");
        responsef!(logger, "{} {}", 200, "OK");
        historyf!(logger, "GET http://example.com/ {}", 200);

        let out = general.contents().unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with(": listening on 127.0.0.1:7777"));
        assert!(lines[1].starts_with("[ERROR] "));
        assert!(lines[2].starts_with("[>>>>>] "));
        assert!(lines[2].ends_with(&format!("macros.rs:{}: GET /index.html", line)));
        assert!(lines[3].starts_with("[<<<<<] "));
        assert!(!out.contains("hidden"));

        assert_eq!(history.contents().unwrap(), "GET http://example.com/ 200\n");
    }
}
