//! Routes the `log` crate's global logger to the general destination.
//!
//! `log::set_logger` can only succeed once per process, so a forwarding
//! logger is installed on first use and each later redirect just swaps the
//! `simplelog::WriteLogger` behind it.

use crate::flags::Switches;
use crate::sink::Sink;
use log::{LevelFilter, Log, Metadata, Record};
use simplelog::{format_description, ConfigBuilder, LevelPadding, WriteLogger};
use std::sync::{OnceLock, PoisonError, RwLock};

static DEFAULT_LOGGER: DefaultLogger = DefaultLogger {
    inner: RwLock::new(None),
};
static INSTALLED: OnceLock<bool> = OnceLock::new();

struct DefaultLogger {
    inner: RwLock<Option<Box<dyn Log>>>,
}

impl Log for DefaultLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.as_ref().is_some_and(|logger| logger.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(logger) = inner.as_ref() {
            logger.log(record);
        }
    }

    fn flush(&self) {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(logger) = inner.as_ref() {
            logger.flush();
        }
    }
}

/// Most verbose level any enabled channel asks for
pub fn level_for(switches: &Switches) -> LevelFilter {
    match (switches.debug, switches.info, switches.error) {
        (true, _, _) => LevelFilter::Debug,
        (_, true, _) => LevelFilter::Info,
        (_, _, true) => LevelFilter::Error,
        _ => LevelFilter::Off,
    }
}

/// Point bare `log::info!` and friends at `sink`.
///
/// Returns false when some other global logger was installed first; the
/// redirect then has no effect.
pub fn redirect(sink: Sink, level: LevelFilter) -> bool {
    let installed = *INSTALLED.get_or_init(|| log::set_logger(&DEFAULT_LOGGER).is_ok());
    if !installed {
        println!("Another logger is already installed, default log output not redirected");
        return false;
    }

    let logger: Box<dyn Log> = WriteLogger::new(level, config(), sink);

    let mut inner = DEFAULT_LOGGER
        .inner
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *inner = Some(logger);
    log::set_max_level(level);
    true
}

/// Layout close to the channels' own `YYYY/MM/DD HH:MM:SS` lines.
fn config() -> simplelog::Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_custom(format_description!(
            "[year]/[month]/[day] [hour]:[minute]:[second]"
        ))
        .set_level_padding(LevelPadding::Off)
        .set_location_level(LevelFilter::Debug)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off);
    // Stays on UTC when the local offset can't be determined
    let _ = builder.set_time_offset_to_local();
    builder.build()
}
