//! Destinations for log output.
//!
//! The host application owns loading these values (rc file, environment,
//! command line); the logger only consumes them during
//! [`Logger::configure`](crate::Logger::configure).

use std::path::PathBuf;

/// File destinations for the general log and the request history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// General log file. Unset or empty means the console.
    pub log_file: Option<String>,
    /// History file. Required: configuring without one is an error.
    pub history_file: Option<String>,
}

impl LogConfig {
    pub fn new(log_file: Option<String>, history_file: Option<String>) -> Self {
        Self {
            log_file,
            history_file,
        }
    }

    /// Expanded general log path, if one is set
    pub fn log_path(&self) -> Option<PathBuf> {
        non_empty(self.log_file.as_deref()).map(expand_path)
    }

    /// Expanded history path, if one is set
    pub fn history_path(&self) -> Option<PathBuf> {
        non_empty(self.history_file.as_deref()).map(expand_path)
    }
}

fn non_empty(path: Option<&str>) -> Option<&str> {
    path.filter(|p| !p.is_empty())
}

/// Expand a leading `~` to the home directory
pub fn expand_path(path_str: &str) -> PathBuf {
    match path_str.starts_with('~') {
        true => match dirs::home_dir() {
            Some(home) => match path_str {
                "~" => home,
                _ => match path_str.strip_prefix("~/") {
                    Some(rest) => home.join(rest),
                    None => PathBuf::from(path_str),
                },
            },
            None => PathBuf::from(path_str),
        },
        false => PathBuf::from(path_str),
    }
}
