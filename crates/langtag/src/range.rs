//! RFC 4647 basic filtering: language ranges compiled to anchored regular
//! expressions.

use regex::Regex;

use crate::errors::RangeError;
use crate::tag::LanguageTag;

const SUBTAG: &str = "[a-z0-9]{1,8}";
const TRAILING_SUBTAGS: &str = "(?:-[a-z0-9]{1,8})*";

/// Build an anchored, case-insensitive regular expression from a language
/// range.
///
/// A lone `*` matches any well-formed subtag sequence. Every other `*`
/// segment matches zero or more further subtags (or exactly one subtag when
/// it leads the range). Literal segments are escaped. Both `-` and `_`
/// separate segments.
///
/// # Examples
/// ```
/// use langtag::build_range_regex;
/// assert_eq!(build_range_regex("en-*"), "(?i)^en(?:-[a-z0-9]{1,8})*$");
/// assert_eq!(build_range_regex("de-CH"), "(?i)^de-CH$");
/// ```
#[must_use]
pub fn build_range_regex(range: &str) -> String {
    let mut regex = String::with_capacity(range.len().saturating_mul(2) + 8);
    regex.push_str("(?i)^");

    if range == "*" {
        regex.push_str(SUBTAG);
        regex.push_str(TRAILING_SUBTAGS);
    } else {
        for (index, segment) in range.split(['-', '_']).enumerate() {
            match (index, segment) {
                (0, "*") => regex.push_str(SUBTAG),
                (_, "*") => regex.push_str(TRAILING_SUBTAGS),
                (0, literal) => regex.push_str(&regex::escape(literal)),
                (_, literal) => {
                    regex.push('-');
                    regex.push_str(&regex::escape(literal));
                }
            }
        }
    }

    regex.push('$');
    regex
}

/// A compiled language range.
///
/// # Examples
/// ```
/// use langtag::LanguageRange;
///
/// let range = LanguageRange::new("en-*").expect("range compiles");
/// assert!(range.is_match("en-Latn-US"));
/// assert!(range.is_match("EN"));
/// assert!(!range.is_match("fr-FR"));
/// ```
#[derive(Debug, Clone)]
pub struct LanguageRange {
    text: String,
    regex: Regex,
}

impl LanguageRange {
    /// Compile `range` into a matcher.
    ///
    /// # Errors
    /// Returns [`RangeError::Regex`] when the generated expression cannot be
    /// compiled, for example because it exceeds the regex size limit.
    pub fn new(range: &str) -> Result<Self, RangeError> {
        let regex = Regex::new(&build_range_regex(range))?;
        Ok(Self {
            text: range.to_owned(),
            regex,
        })
    }

    /// The range text this matcher was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the whole of `subject` falls inside the range.
    #[must_use]
    pub fn is_match(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }
}

impl LanguageTag {
    /// Test this tag against a language range, or a wildcard tag against
    /// another tag.
    ///
    /// When this tag carries a wildcard it acts as the range and `other` is
    /// the subject; otherwise `other` is the range and this tag the subject.
    /// A range that fails to compile is logged and treated as a mismatch.
    ///
    /// # Examples
    /// ```
    /// use langtag::LanguageTag;
    ///
    /// assert!(LanguageTag::parse("en-Latn-US").matches("en-*"));
    /// assert!(!LanguageTag::parse("en-US").matches("fr-*"));
    /// assert!(LanguageTag::parse("en-*").matches("en-GB"));
    /// ```
    #[must_use]
    pub fn matches(&self, other: impl AsRef<str>) -> bool {
        let other = other.as_ref();
        let normalised;
        let (range, subject) = if self.wild() {
            normalised = Self::parse(other);
            (self.as_str(), normalised.as_str())
        } else {
            (other, self.as_str())
        };
        match LanguageRange::new(range) {
            Ok(compiled) => compiled.is_match(subject),
            Err(err) => {
                log::warn!("language range '{range}' could not be compiled: {err}");
                false
            }
        }
    }
}
