use thiserror::Error;

pub type Result<T> = std::result::Result<T, TxtError>;

#[derive(Debug, Error)]
pub enum TxtError {
    /// `ucfirst` was asked for the first character of an empty string.
    #[error("cannot uppercase the first character of an empty string")]
    EmptyInput,
    /// The paragraph separator did not compile as a regular expression.
    #[error(transparent)]
    InvalidSeparator(#[from] regex_lite::Error),
}
