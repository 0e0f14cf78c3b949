//! Liberal parsing and classification of BCP 47 language tags.
//!
//! Any string parses into a [`LanguageTag`]. Each hyphen- or
//! underscore-separated token becomes a [`Subtag`] whose [`SubtagKind`] is
//! decided by its shape and by the kind of the subtag before it. Tokens that
//! fit no rule are kept and marked invalid rather than rejected.
//!
//! On top of the parsed tag the crate offers RFC 4647 range matching
//! ([`LanguageTag::matches`]), a specificity check
//! ([`LanguageTag::suitable_for`]) and truncation
//! ([`LanguageTag::truncate`]).
//!
//! ```
//! use langtag::LanguageTag;
//!
//! let tag = LanguageTag::parse("zh_cmn_hans_cn");
//! assert_eq!(tag, "zh-cmn-Hans-CN");
//! assert!(tag.matches("zh-*"));
//! assert_eq!(tag.minimal(), "zh-CN");
//! ```

mod classify;
mod errors;
mod kind;
mod range;
mod subtag;
mod suitability;
mod tag;
#[cfg(test)]
mod test_support;
mod truncation;

pub use classify::classify;
pub use errors::RangeError;
pub use kind::SubtagKind;
pub use range::{LanguageRange, build_range_regex};
pub use subtag::{Subtag, SubtagRef, Subtags};
pub use tag::LanguageTag;
pub use truncation::TruncateOptions;
