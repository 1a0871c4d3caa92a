//! Channels: a switch, a destination and a line format.
//!
//! Every regular channel renders lines as
//! `PREFIX YYYY/MM/DD HH:MM:SS file.rs:LINE: message`. The history channel
//! writes the bare message.

use crate::color::render_prefix;
use crate::sink::Sink;
use chrono::Local;
use std::fmt::{self, Display, Write as _};
use std::panic::Location;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Info,
    Debug,
    Error,
    Request,
    Response,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 5] = [
        ChannelKind::Info,
        ChannelKind::Debug,
        ChannelKind::Error,
        ChannelKind::Request,
        ChannelKind::Response,
    ];

    /// Uncolored tag written at the start of each line
    pub fn tag(self) -> &'static str {
        match self {
            ChannelKind::Info => "",
            ChannelKind::Debug => "[DEBUG] ",
            ChannelKind::Error => "[ERROR] ",
            ChannelKind::Request => "[>>>>>] ",
            ChannelKind::Response => "[<<<<<] ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChannelKind::Info => "info",
            ChannelKind::Debug => "debug",
            ChannelKind::Error => "error",
            ChannelKind::Request => "request",
            ChannelKind::Response => "response",
        }
    }
}

/// What gets written between the prefix and the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub timestamp: bool,
    pub location: bool,
}

impl Metadata {
    /// Date, time and caller's `file:line`
    pub const STANDARD: Metadata = Metadata {
        timestamp: true,
        location: true,
    };
}

/// One switchable log channel.
#[derive(Debug, Clone)]
pub struct Channel {
    kind: ChannelKind,
    enabled: bool,
    sink: Sink,
    prefix: String,
    metadata: Metadata,
}

impl Channel {
    pub fn new(kind: ChannelKind, enabled: bool, sink: Sink, colorize: bool) -> Self {
        Self {
            kind,
            enabled,
            sink,
            prefix: render_prefix(kind, colorize),
            metadata: Metadata::STANDARD,
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Emit a formatted message. No-op when the channel is off.
    ///
    /// The reported location is the caller of this method; build the
    /// arguments with `format_args!` or use the `*f!` macros.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        if self.enabled {
            self.output(Location::caller(), args);
        }
    }

    /// Emit a single displayable value. No-op when the channel is off.
    #[track_caller]
    pub fn println(&self, msg: impl Display) {
        if self.enabled {
            self.output(Location::caller(), format_args!("{}", msg));
        }
    }

    /// Low-level write. `caller` must be captured by the outermost public
    /// entry point so wrappers don't show up as the call site.
    pub fn output(&self, caller: &Location<'_>, args: fmt::Arguments<'_>) {
        let caller = self.metadata.location.then_some(caller);
        let line = format_line(&self.prefix, self.metadata.timestamp, caller, args);
        self.sink.write_line(&line);
    }
}

/// The append-only request history. Never switched off.
#[derive(Debug, Clone)]
pub struct History {
    sink: Sink,
}

impl History {
    pub fn new(sink: Sink) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn write(&self, record: impl Display) {
        self.printf(format_args!("{}", record));
    }

    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let line = format_line("", false, None, args);
        self.sink.write_line(&line);
    }
}

/// Assemble one newline-terminated line.
pub(crate) fn format_line(
    prefix: &str,
    timestamp: bool,
    caller: Option<&Location<'_>>,
    args: fmt::Arguments<'_>,
) -> String {
    let mut line = String::with_capacity(prefix.len() + 64);
    line.push_str(prefix);
    if timestamp {
        let _ = write!(line, "{} ", Local::now().format(TIMESTAMP_FORMAT));
    }
    if let Some(caller) = caller {
        let _ = write!(line, "{}:{}: ", short_file(caller.file()), caller.line());
    }
    let _ = line.write_fmt(args);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

fn short_file(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits `DATE TIME rest` and checks the timestamp shape.
    fn strip_timestamp(line: &str) -> &str {
        let mut parts = line.splitn(3, ' ');
        let date = parts.next().unwrap();
        let time = parts.next().unwrap();
        assert!(chrono::NaiveDate::parse_from_str(date, "%Y/%m/%d").is_ok(), "date: {}", date);
        assert!(chrono::NaiveTime::parse_from_str(time, "%H:%M:%S").is_ok(), "time: {}", time);
        parts.next().unwrap()
    }

    #[test]
    fn test_disabled_channel_writes_nothing() {
        let sink = Sink::memory();
        let channel = Channel::new(ChannelKind::Debug, false, sink.clone(), false);
        channel.printf(format_args!("conn {} closed", 7));
        channel.println("ignored");
        assert_eq!(sink.contents().unwrap(), "");
    }

    #[test]
    fn test_enabled_channel_line_format() {
        let sink = Sink::memory();
        let channel = Channel::new(ChannelKind::Debug, true, sink.clone(), false);
        let line = line!() + 1;
        channel.printf(format_args!("conn {} closed", 7));

        let out = sink.contents().unwrap();
        assert_eq!(out.matches('\n').count(), 1);
        let rest = out.strip_prefix("[DEBUG] ").unwrap();
        assert_eq!(strip_timestamp(rest), format!("channel.rs:{}: conn 7 closed\n", line));
    }

    #[test]
    fn test_info_has_no_tag() {
        let sink = Sink::memory();
        let channel = Channel::new(ChannelKind::Info, true, sink.clone(), true);
        let line = line!() + 1;
        channel.println("started");

        let out = sink.contents().unwrap();
        assert!(!out.starts_with('['));
        assert_eq!(strip_timestamp(&out), format!("channel.rs:{}: started\n", line));
    }

    #[test]
    fn test_trailing_newline_not_doubled() {
        let sink = Sink::memory();
        let channel = Channel::new(ChannelKind::Error, true, sink.clone(), false);
        channel.printf(format_args!("boom\n"));
        let out = sink.contents().unwrap();
        assert!(out.ends_with("boom\n"));
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn test_history_is_bare() {
        let sink = Sink::memory();
        let history = History::new(sink.clone());
        history.write("GET http://example.com 200");
        history.printf(format_args!("CONNECT {}:{} {}", "example.com", 443, 200));
        assert_eq!(
            sink.contents().unwrap(),
            "GET http://example.com 200\nCONNECT example.com:443 200\n"
        );
    }

    #[test]
    fn test_short_file() {
        assert_eq!(short_file("src/channel.rs"), "channel.rs");
        assert_eq!(short_file("channel.rs"), "channel.rs");
    }

    #[test]
    fn test_location_through_wrapper() {
        #[track_caller]
        fn forward(channel: &Channel, msg: &str) {
            channel.println(msg);
        }

        let sink = Sink::memory();
        let channel = Channel::new(ChannelKind::Request, true, sink.clone(), false);
        let line = line!() + 1;
        forward(&channel, "GET /");

        let out = sink.contents().unwrap();
        assert!(out.contains(&format!("channel.rs:{}: GET /", line)), "{}", out);
    }
}
