//! Truncation: dropping extension and private-use areas, and optionally
//! extlang, script and variant subtags.

use crate::kind::SubtagKind;
use crate::tag::LanguageTag;

/// Which optional primary subtags survive [`LanguageTag::truncate`].
///
/// Every field defaults to `true` (keep). Extension and private-use areas
/// are always removed regardless of these options.
///
/// # Examples
/// ```
/// use langtag::{LanguageTag, TruncateOptions};
///
/// let tag = LanguageTag::parse("en-Latn-US");
/// let options = TruncateOptions { script: false, ..TruncateOptions::default() };
/// assert_eq!(tag.truncate(options), "en-US");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncateOptions {
    /// Keep extended-language subtags.
    pub extlang: bool,
    /// Keep script subtags.
    pub script: bool,
    /// Keep variant subtags.
    pub variant: bool,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            extlang: true,
            script: true,
            variant: true,
        }
    }
}

impl TruncateOptions {
    /// Options that keep only language and region subtags (plus any
    /// unclassified primary subtags).
    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            extlang: false,
            script: false,
            variant: false,
        }
    }

    fn keeps(self, kind: SubtagKind) -> bool {
        if !kind.is_primary() {
            return false;
        }
        match kind {
            SubtagKind::EXTLANG => self.extlang,
            SubtagKind::SCRIPT => self.script,
            SubtagKind::VARIANT => self.variant,
            _ => true,
        }
    }
}

impl LanguageTag {
    /// Build a new tag without extension and private-use areas, optionally
    /// dropping extlang, script and variant subtags as well.
    ///
    /// A tag that starts with a private-use singleton is returned unchanged.
    /// Wildcard and invalid subtags never survive truncation.
    ///
    /// # Examples
    /// ```
    /// use langtag::{LanguageTag, TruncateOptions};
    ///
    /// let tag = LanguageTag::parse("en-Latn-US-u-co-phonebk");
    /// assert_eq!(tag.truncate(TruncateOptions::default()), "en-Latn-US");
    /// assert_eq!(LanguageTag::parse("x-whatever").truncate(TruncateOptions::minimal()), "x-whatever");
    /// ```
    #[must_use]
    pub fn truncate(&self, options: TruncateOptions) -> Self {
        if self.first().is_some_and(|first| first.is_private_use()) {
            return self.clone();
        }
        let kept: Vec<String> = self
            .iter()
            .filter(|subtag| options.keeps(subtag.kind()))
            .map(|subtag| subtag.to_string())
            .collect();
        let truncated = kept.join("-");
        log::trace!("truncated '{self}' to '{truncated}' with {options:?}");
        Self::parse(&truncated)
    }

    /// Shorthand for truncating to language and region only.
    ///
    /// # Examples
    /// ```
    /// use langtag::LanguageTag;
    ///
    /// assert_eq!(LanguageTag::parse("en-Latn-US").minimal(), "en-US");
    /// ```
    #[must_use]
    pub fn minimal(&self) -> Self {
        self.truncate(TruncateOptions::minimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en-Latn-US", "en-Latn-US")]
    #[case("en-Latn-US-u-co-phonebk", "en-Latn-US")]
    #[case("en-US-x-twain", "en-US")]
    #[case("zh-cmn-Hans-CN", "zh-cmn-Hans-CN")]
    #[case("de-CH-1901-a-bbb", "de-CH-1901")]
    #[case("en-*", "en")]
    fn default_truncation_drops_areas(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(
            LanguageTag::parse(raw).truncate(TruncateOptions::default()),
            expected
        );
    }

    #[rstest]
    #[case("en-x-*-foo", "en")]
    #[case("en-x-toolongtoken-foo", "en")]
    #[case("en-u-*-abc", "en")]
    #[case("en-US-x-priv-*-abc", "en-US")]
    #[case("de-CH-a-*-*-bbb-x-cc", "de-CH")]
    fn markers_inside_areas_are_dropped_with_them(#[case] raw: &str, #[case] expected: &str) {
        let tag = LanguageTag::parse(raw);
        let truncated = tag.truncate(TruncateOptions::default());
        assert_eq!(truncated, expected);
        assert!(!truncated.wild());
        assert_eq!(tag.minimal(), expected);
    }

    #[rstest]
    #[case("en-Latn-US", "en-US")]
    #[case("zh-cmn-Hans-CN", "zh-CN")]
    #[case("de-CH-1901", "de-CH")]
    #[case("sl-rozaj-biske", "sl")]
    fn minimal_keeps_language_and_region(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(LanguageTag::parse(raw).minimal(), expected);
    }

    #[test]
    fn options_drop_kinds_independently() {
        let tag = LanguageTag::parse("zh-cmn-Hans-CN");
        let no_script = TruncateOptions {
            script: false,
            ..TruncateOptions::default()
        };
        let no_extlang = TruncateOptions {
            extlang: false,
            ..TruncateOptions::default()
        };
        assert_eq!(tag.truncate(no_script), "zh-cmn-CN");
        assert_eq!(tag.truncate(no_extlang), "zh-Hans-CN");
    }

    #[test]
    fn private_use_tags_are_never_truncated() {
        let tag = LanguageTag::parse("x-whatever");
        assert_eq!(tag.truncate(TruncateOptions::default()), tag);
        assert_eq!(tag.minimal().to_string(), "x-whatever");
    }

    #[test]
    fn truncation_returns_independent_tag() {
        let tag = LanguageTag::parse("en-Latn-US-a-bbb");
        let truncated = tag.truncate(TruncateOptions::default());
        assert_eq!(tag.len(), 5);
        assert_eq!(truncated.len(), 3);
        assert!(truncated.extensions().next().is_none());
    }

    #[test]
    fn truncating_everything_leaves_invalid_tag() {
        let tag = LanguageTag::parse("a");
        let truncated = tag.truncate(TruncateOptions::default());
        assert!(truncated.invalid());
        assert_eq!(truncated, "");
    }
}
