//! Leveled, channel-based logging for a forwarding proxy.
//!
//! Five switchable channels (info, debug, error, request, response) share a
//! general destination; an always-on history channel appends bare records to
//! its own file.
//!
//! ```no_run
//! use proxylog::{LogConfig, Logger, Switches};
//!
//! let mut logger = Logger::new(Switches::default());
//! let config = LogConfig::new(None, Some("~/.proxy/history".to_string()));
//! if let Err(e) = logger.configure(&config) {
//!     proxylog::fatal(e);
//! }
//! proxylog::infof!(logger, "listening on {}", "127.0.0.1:7777");
//! logger.history().write("GET http://example.com/ 200");
//! ```

pub mod channel;
pub mod color;
pub mod config;
pub mod default_logger;
pub mod error;
pub mod flags;
pub mod logging;
mod macros;
pub mod sink;

pub use channel::{Channel, ChannelKind, History};
pub use config::LogConfig;
pub use error::LogError;
pub use flags::{LogFlags, Switches};
pub use logging::{fatal, Logger, State};
pub use sink::Sink;
