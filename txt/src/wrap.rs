//! Paragraph-aware word wrapping.
//!
//! Text is cut into paragraphs on a separator regex, every paragraph is
//! wrapped on its own, and the wrapped lines are joined back with single
//! newlines. Paragraph boundaries do not survive as blank lines.

use regex_lite::Regex;
use regex_lite::RegexBuilder;
use textwrap::Options;
use textwrap::WordSeparator;
use tracing::debug;

use crate::error::Result;

/// A blank line: two consecutive newlines.
pub const DEFAULT_PARAGRAPH_SEPARATOR: &str = "\n\n";
pub const DEFAULT_WRAP_WIDTH: usize = 70;

const TAB_SIZE: usize = 8;

/// Compiled paragraph wrapping settings, reusable across many inputs.
#[derive(Debug, Clone)]
pub struct ParagraphWrap {
    separator: Regex,
    width: usize,
}

impl ParagraphWrap {
    /// Compile `separator` in multi-line mode. Wraps at
    /// [`DEFAULT_WRAP_WIDTH`] columns until [`Self::with_width`] says
    /// otherwise.
    pub fn new(separator: &str) -> Result<Self> {
        let separator = RegexBuilder::new(separator).multi_line(true).build()?;
        Ok(Self {
            separator,
            width: DEFAULT_WRAP_WIDTH,
        })
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn wrap(&self, text: &str) -> String {
        // Break only at whitespace, not at every Unicode line-break opportunity.
        let options = Options::new(self.width).word_separator(WordSeparator::AsciiSpace);
        let paragraphs: Vec<String> = self
            .separator
            .split(text)
            .map(|paragraph| wrap_paragraph(paragraph, &options))
            .collect();
        debug!(
            paragraphs = paragraphs.len(),
            width = self.width,
            "wrapped paragraphs"
        );
        paragraphs.join("\n").trim().to_string()
    }
}

/// Wrap every paragraph of `text` (split on the `separator` regex) at
/// [`DEFAULT_WRAP_WIDTH`] columns.
pub fn paragraph_wrap(text: &str, separator: &str) -> Result<String> {
    Ok(ParagraphWrap::new(separator)?.wrap(text))
}

fn wrap_paragraph(paragraph: &str, options: &Options<'_>) -> String {
    // Tabs become spaces up to the next tab stop, then every other ASCII
    // whitespace char is a single space. Other whitespace (NBSP, ...) stays
    // inside its word.
    let flattened: String = expand_tabs(paragraph.trim())
        .chars()
        .map(|ch| {
            if matches!(ch, '\n' | '\r' | '\x0b' | '\x0c') {
                ' '
            } else {
                ch
            }
        })
        .collect();
    textwrap::wrap(&flattened, options).join("\n")
}

fn expand_tabs(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut column = 0usize;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                expanded.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' | '\r' => {
                expanded.push(ch);
                column = 0;
            }
            _ => {
                expanded.push(ch);
                column += 1;
            }
        }
    }
    expanded
}
