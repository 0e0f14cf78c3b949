//! Error types surfaced by the language-range compiler.

use thiserror::Error;

/// Errors surfaced while converting a language range into a regular
/// expression.
///
/// Malformed tag *content* never produces an error; it is reported through
/// [`LanguageTag::invalid`](crate::LanguageTag::invalid) instead.
///
/// # Examples
/// ```
/// use langtag::RangeError;
/// let err = RangeError::Regex(regex::Error::Syntax("bad".into()));
/// assert!(err.to_string().contains("bad"));
/// ```
#[derive(Debug, Error)]
pub enum RangeError {
    /// The generated expression could not be compiled.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}
