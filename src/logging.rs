//! The logging facade.
//!
//! A [`Logger`] owns one [`Channel`] per category plus the [`History`]
//! recorder. It starts out unconfigured, with every channel on the console
//! and uncolored tags, so it can be used from the moment the flags are
//! parsed. [`Logger::configure`] then resolves the file destinations once
//! the host's configuration is known.

use crate::channel::{Channel, ChannelKind, History};
use crate::config::LogConfig;
use crate::default_logger;
use crate::error::{LogError, Result};
use crate::flags::Switches;
use crate::sink::Sink;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unconfigured,
    Configured,
}

#[derive(Debug, Clone)]
pub struct Logger {
    switches: Switches,
    state: State,
    info: Channel,
    debug: Channel,
    error: Channel,
    request: Channel,
    response: Channel,
    history: History,
}

impl Logger {
    /// Console-only logger with plain tags. Safe to use before [`configure`](Self::configure).
    pub fn new(switches: Switches) -> Self {
        // Color is only applied once destinations are resolved
        let plain = Switches {
            colorize: false,
            ..switches
        };
        let mut logger = Self::bound(plain, Sink::Stdout, Sink::Stdout, State::Unconfigured);
        logger.switches = switches;
        logger
    }

    /// Configured logger writing to explicit destinations.
    ///
    /// Leaves the global `log` logger alone.
    pub fn with_sinks(switches: Switches, general: Sink, history: Sink) -> Self {
        Self::bound(switches, general, history, State::Configured)
    }

    fn bound(switches: Switches, general: Sink, history: Sink, state: State) -> Self {
        let channel = |kind: ChannelKind, enabled: bool| {
            Channel::new(kind, enabled, general.clone(), switches.colorize)
        };
        Self {
            switches,
            state,
            info: channel(ChannelKind::Info, switches.info),
            debug: channel(ChannelKind::Debug, switches.debug),
            error: channel(ChannelKind::Error, switches.error),
            request: channel(ChannelKind::Request, switches.request),
            response: channel(ChannelKind::Response, switches.response),
            history: History::new(history),
        }
    }

    /// Resolve destinations and rebuild every channel.
    ///
    /// A missing history path is the only error; nothing is opened or
    /// written in that case. Files that fail to open are reported on stdout
    /// and replaced by the console.
    pub fn configure(&mut self, config: &LogConfig) -> Result<()> {
        let history_path = config.history_path().ok_or(LogError::MissingHistoryFile)?;

        let general = match config.log_path() {
            Some(path) => open_or_console(&path),
            None => Sink::Stdout,
        };
        let history = open_or_console(&history_path);

        default_logger::redirect(general.clone(), default_logger::level_for(&self.switches));

        *self = Self::bound(self.switches, general, history, State::Configured);
        Ok(())
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn switches(&self) -> &Switches {
        &self.switches
    }

    /// Whether callers should include extra request/reply detail
    pub fn verbose(&self) -> bool {
        self.switches.verbose
    }

    pub fn info(&self) -> &Channel {
        &self.info
    }

    pub fn debug(&self) -> &Channel {
        &self.debug
    }

    pub fn error(&self) -> &Channel {
        &self.error
    }

    pub fn request(&self) -> &Channel {
        &self.request
    }

    pub fn response(&self) -> &Channel {
        &self.response
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn channel(&self, kind: ChannelKind) -> &Channel {
        match kind {
            ChannelKind::Info => &self.info,
            ChannelKind::Debug => &self.debug,
            ChannelKind::Error => &self.error,
            ChannelKind::Request => &self.request,
            ChannelKind::Response => &self.response,
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Switches::default())
    }
}

/// Open `path` for appending, or fall back to the console. The failure is
/// printed directly since the logger itself is what's being set up.
fn open_or_console(path: &Path) -> Sink {
    match Sink::open_append(path) {
        Ok(sink) => sink,
        Err(e) => {
            println!("Can't open log file, logging to stdout: {}", e);
            Sink::Stdout
        }
    }
}

/// Print to stdout and exit with status 1.
pub fn fatal(msg: impl std::fmt::Display) -> ! {
    println!("{}", msg);
    std::process::exit(1)
}
