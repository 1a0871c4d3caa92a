//! Prefix rendering for channel tags.
//!
//! Colored tags use the basic SGR foreground codes (31-34) and ignore the
//! terminal environment: `--color` always means escapes in the output.

use crate::channel::ChannelKind;
use ansi_term::Colour;

/// ANSI color of a channel's tag, if it has one
pub fn tag_color(kind: ChannelKind) -> Option<Colour> {
    match kind {
        ChannelKind::Info => None,
        ChannelKind::Error => Some(Colour::Red),
        ChannelKind::Debug => Some(Colour::Blue),
        ChannelKind::Request => Some(Colour::Green),
        ChannelKind::Response => Some(Colour::Yellow),
    }
}

/// Render the prefix written before every line of `kind`.
pub fn render_prefix(kind: ChannelKind, colorize: bool) -> String {
    let tag = kind.tag();
    match (colorize, tag_color(kind)) {
        (true, Some(colour)) if !tag.is_empty() => colour.paint(tag).to_string(),
        _ => tag.to_string(),
    }
}
