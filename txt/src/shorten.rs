//! Fixed-length truncation with a marker token spliced into the gap.

use tracing::trace;

pub const DEFAULT_SHORTEN_TOKEN: &str = "..";

/// Where and how [`shorten_with`] cuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shorten<'a> {
    /// Char offset at which the deleted window starts. `None` places the
    /// window near the end of the string.
    pub index: Option<usize>,
    /// Marker inserted in place of the deleted chars.
    pub token: &'a str,
    /// Rendered length of `token`, when it differs from its char count
    /// (e.g. markup around the visible marker).
    pub token_length: Option<usize>,
}

impl Default for Shorten<'_> {
    fn default() -> Self {
        Self {
            index: None,
            token: DEFAULT_SHORTEN_TOKEN,
            token_length: None,
        }
    }
}

impl<'a> Shorten<'a> {
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn token(mut self, token: &'a str) -> Self {
        self.token = token;
        self
    }

    pub fn token_length(mut self, token_length: usize) -> Self {
        self.token_length = Some(token_length);
        self
    }

    fn effective_token_length(&self) -> usize {
        self.token_length.unwrap_or_else(|| self.token.chars().count())
    }
}

/// Shorten `text` to `target_length` chars with the default `..` marker
/// placed near the end.
pub fn shorten(text: &str, target_length: usize) -> String {
    shorten_with(text, target_length, &Shorten::default())
}

/// Shorten `text` to `target_length` chars by deleting a window starting at
/// `options.index` and splicing `options.token` into the gap.
///
/// Text that already fits is returned unchanged. A window that would run
/// past the end of the string is shifted left until it ends there, and never
/// starts before the first char.
pub fn shorten_with(text: &str, target_length: usize, options: &Shorten<'_>) -> String {
    let text_length = text.chars().count();
    if text_length <= target_length {
        return text.to_string();
    }

    let to_delete =
        (text_length - target_length).saturating_add(options.effective_token_length());
    let mut start = options.index.unwrap_or(text_length - target_length);
    let mut end = start.saturating_add(to_delete);
    if end > text_length {
        // start - (end - text_length), clamped at zero.
        start = text_length.saturating_sub(to_delete);
        end = text_length;
    }
    trace!(text_length, target_length, start, end, "shortening text");

    let mut shortened = String::with_capacity(text.len() + options.token.len());
    shortened.extend(text.chars().take(start));
    shortened.push_str(options.token);
    shortened.extend(text.chars().skip(end));
    shortened
}
