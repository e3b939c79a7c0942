//! Standalone text-formatting helpers.
//!
//! Every function here is a pure transformation of its input string: no
//! shared state, no I/O. Lengths and indices are counted in chars, and all
//! slicing happens on char boundaries.

mod case;
mod dedent;
mod error;
mod indent;
mod shorten;
mod wrap;

pub use case::ucfirst;
pub use case::ucfirst_or_empty;
pub use dedent::dedent;
pub use error::Result;
pub use error::TxtError;
pub use indent::DEFAULT_INDENT_PREFIX;
pub use indent::indent;
pub use indent::indent_default;
pub use shorten::DEFAULT_SHORTEN_TOKEN;
pub use shorten::Shorten;
pub use shorten::shorten;
pub use shorten::shorten as truncate;
pub use shorten::shorten_with;
pub use shorten::shorten_with as truncate_with;
pub use wrap::DEFAULT_PARAGRAPH_SEPARATOR;
pub use wrap::DEFAULT_WRAP_WIDTH;
pub use wrap::ParagraphWrap;
pub use wrap::paragraph_wrap;
