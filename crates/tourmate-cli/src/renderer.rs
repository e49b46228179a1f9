//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.
//! Generated guides lean heavily on headings, bullet lists and pipe tables,
//! all of which termimad lays out natively.

use std::borrow::Cow;
use std::io::Write;

use anyhow::{Context, Result};
use termimad::{
    crossterm::{style::Color, terminal},
    MadSkin,
};
use tourmate_core::OutputFormat;

/// Width used when the terminal size cannot be determined.
const FALLBACK_WIDTH: usize = 100;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Configure termimad skin for better appearance
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin.table.set_fg(Color::AnsiValue(244));

        Self { rich_enabled, skin }
    }

    /// Render generated text according to the form's output format
    pub fn render_output(&self, text: &str, format: OutputFormat) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.write_output(&mut stdout, text, format)?;
        stdout.flush().context("Failed to flush stdout")
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.render_output(markdown, OutputFormat::Markup)
    }

    /// Lay out markdown for a terminal `width` columns wide.
    ///
    /// The same input and width always produce the same output.
    pub fn render_to_string(&self, markdown: &str, width: usize) -> String {
        let prepared = inline_links(markdown);
        self.skin.text(&prepared, Some(width)).to_string()
    }

    fn write_output<W: Write>(&self, out: &mut W, text: &str, format: OutputFormat) -> Result<()> {
        if format == OutputFormat::Markup && self.rich_enabled {
            let width = match terminal::size() {
                Ok((columns, _)) if columns > 0 => usize::from(columns),
                _ => FALLBACK_WIDTH,
            };
            let rendered = self.render_to_string(text, width);
            return out
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout");
        }

        out.write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
        if !text.ends_with('\n') {
            out.write_all(b"\n").context("Failed to write to stdout")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Rewrites `[text](url)` links as `text (url)`.
///
/// Terminals have no anchors, so the target is kept visible next to the
/// label. A link whose label already is its URL is reduced to the URL.
fn inline_links(markdown: &str) -> Cow<'_, str> {
    if !markdown.contains("](") {
        return Cow::Borrowed(markdown);
    }

    let mut out = String::with_capacity(markdown.len());
    let mut rest = markdown;
    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        if let Some((label, url, remainder)) = split_link(after_open) {
            out.push_str(&rest[..open]);
            if label == url {
                out.push_str(url);
            } else {
                out.push_str(label);
                out.push_str(" (");
                out.push_str(url);
                out.push(')');
            }
            rest = remainder;
        } else {
            out.push_str(&rest[..=open]);
            rest = after_open;
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

// Expects the text right after a `[`; returns label, url and what follows
// the closing parenthesis.
fn split_link(after_open: &str) -> Option<(&str, &str, &str)> {
    let close = after_open.find(']')?;
    let label = &after_open[..close];
    if label.contains('[') || label.contains('\n') {
        return None;
    }
    let target = after_open[close + 1..].strip_prefix('(')?;
    let end = target.find(')')?;
    let url = target[..end].trim();
    if url.is_empty() || url.contains(char::is_whitespace) {
        return None;
    }
    Some((label, url, &target[end + 1..]))
}
