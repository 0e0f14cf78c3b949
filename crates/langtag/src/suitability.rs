//! Asymmetric suitability between tags of differing specificity.

use crate::tag::LanguageTag;

impl LanguageTag {
    /// Whether this tag can stand in for `other`.
    ///
    /// A wildcard tag is suitable for anything. Otherwise both tags must name
    /// the same language, and every region, script or variant that `other`
    /// specifies must be carried unchanged by this tag. Fields `other` leaves
    /// open are not constrained, so a more specific tag is suitable for a
    /// less specific one but not the other way round.
    ///
    /// # Examples
    /// ```
    /// use langtag::LanguageTag;
    ///
    /// let specific = LanguageTag::parse("en-Latn-US");
    /// assert!(specific.suitable_for("en-US"));
    /// assert!(!LanguageTag::parse("en-US").suitable_for("en-Latn-US"));
    /// ```
    #[must_use]
    pub fn suitable_for(&self, other: impl AsRef<str>) -> bool {
        if self.wild() {
            return true;
        }
        let other = Self::parse(other.as_ref());
        if self.language() != other.language() {
            return false;
        }
        [
            (self.region(), other.region()),
            (self.script(), other.script()),
            (self.variant(), other.variant()),
        ]
        .into_iter()
        .all(|(mine, required)| required.is_none() || mine == required)
    }
}
