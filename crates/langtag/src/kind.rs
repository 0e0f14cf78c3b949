//! Subtag kinds and the modifier flags that mark extension and private-use
//! areas.

use std::fmt;
use std::ops::BitOr;

/// Classification assigned to a single subtag.
///
/// Primary kinds occupy the low nibble and all compare below
/// [`SINGLETON`](Self::SINGLETON). The modifier flags (`SINGLETON`,
/// `EXTENSION`, `PRIVATE_USE`) combine onto a primary kind with `|`.
/// [`WILDCARD`](Self::WILDCARD) and [`INVALID`](Self::INVALID) are standalone
/// markers and never report any flag.
///
/// # Examples
///
/// ```
/// use langtag::SubtagKind;
///
/// let member = SubtagKind::OTHER | SubtagKind::EXTENSION;
/// assert!(member.contains(SubtagKind::EXTENSION));
/// assert_eq!(member.base(), SubtagKind::OTHER);
/// assert!(SubtagKind::VARIANT < SubtagKind::SINGLETON);
/// assert!(!SubtagKind::INVALID.contains(SubtagKind::SINGLETON));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubtagKind(u8);

const BASE_MASK: u8 = 0x0F;
const FLAG_MASK: u8 = 0x70;

impl SubtagKind {
    /// Alphanumeric subtag that fits no more specific shape.
    pub const OTHER: Self = Self(0x00);
    /// Primary language subtag (2–3 letters, first position).
    pub const LANGUAGE: Self = Self(0x01);
    /// Extended language subtag (3 letters after the language).
    pub const EXTLANG: Self = Self(0x02);
    /// Script subtag (4 letters).
    pub const SCRIPT: Self = Self(0x03);
    /// Region subtag (2 letters or 3 digits).
    pub const REGION: Self = Self(0x04);
    /// Variant subtag (5–8 alphanumerics, or a digit and 3 alphanumerics).
    pub const VARIANT: Self = Self(0x05);
    /// Flag: single-character subtag opening an extension or private-use area.
    pub const SINGLETON: Self = Self(0x10);
    /// Flag: subtag belongs to an extension area.
    pub const EXTENSION: Self = Self(0x20);
    /// Flag: subtag belongs to a private-use area.
    pub const PRIVATE_USE: Self = Self(0x40);
    /// The `*` wildcard marker.
    pub const WILDCARD: Self = Self(0x80);
    /// No shape or position rule matched the token.
    pub const INVALID: Self = Self(0xFF);

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The primary kind with every modifier flag removed.
    ///
    /// Markers (`WILDCARD`, `INVALID`) are their own base.
    #[must_use]
    pub const fn base(self) -> Self {
        if self.is_marker() {
            self
        } else {
            Self(self.0 & BASE_MASK)
        }
    }

    /// Modifier flags carried by this kind.
    #[must_use]
    pub const fn flags(self) -> Self {
        if self.is_marker() {
            Self(0)
        } else {
            Self(self.0 & FLAG_MASK)
        }
    }

    /// Whether every flag bit of `flag` is set on this kind.
    ///
    /// Always `false` for the `WILDCARD` and `INVALID` markers.
    #[must_use]
    pub const fn contains(self, flag: Self) -> bool {
        !self.is_marker() && flag.0 != 0 && self.0 & flag.0 == flag.0
    }

    /// Combine two kinds, as `|` does, in const context.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        if self.is_marker() || other.is_marker() {
            Self::INVALID
        } else {
            Self(self.0 | other.0)
        }
    }

    /// Whether the kind sits below the singleton boundary, i.e. it is a
    /// primary kind without any area flag.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        self.0 < Self::SINGLETON.0
    }

    pub(crate) const fn is_marker(self) -> bool {
        self.0 == Self::WILDCARD.0 || self.0 == Self::INVALID.0
    }

    const fn base_name(self) -> &'static str {
        match self.base().0 {
            0x01 => "Language",
            0x02 => "ExtLang",
            0x03 => "Script",
            0x04 => "Region",
            0x05 => "Variant",
            0x80 => "Wildcard",
            0xFF => "Invalid",
            _ => "Other",
        }
    }
}

impl BitOr for SubtagKind {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Display for SubtagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_name())?;
        for (flag, name) in [
            (Self::EXTENSION, "Extension"),
            (Self::PRIVATE_USE, "PrivateUse"),
            (Self::SINGLETON, "Singleton"),
        ] {
            if self.contains(flag) {
                write!(f, "|{name}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SubtagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubtagKind({self} = {:#04x})", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SubtagKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SubtagKind::OTHER)]
    #[case(SubtagKind::LANGUAGE)]
    #[case(SubtagKind::EXTLANG)]
    #[case(SubtagKind::SCRIPT)]
    #[case(SubtagKind::REGION)]
    #[case(SubtagKind::VARIANT)]
    fn primary_kinds_sit_below_singleton_boundary(#[case] kind: SubtagKind) {
        assert!(kind.is_primary());
        assert!(kind < SubtagKind::SINGLETON);
    }

    #[rstest]
    #[case(SubtagKind::SINGLETON | SubtagKind::EXTENSION)]
    #[case(SubtagKind::OTHER | SubtagKind::PRIVATE_USE)]
    #[case(SubtagKind::WILDCARD)]
    #[case(SubtagKind::INVALID)]
    fn flagged_and_marker_kinds_are_not_primary(#[case] kind: SubtagKind) {
        assert!(!kind.is_primary());
    }

    #[test]
    fn markers_report_no_flags() {
        for marker in [SubtagKind::WILDCARD, SubtagKind::INVALID] {
            assert!(!marker.contains(SubtagKind::SINGLETON));
            assert!(!marker.contains(SubtagKind::EXTENSION));
            assert!(!marker.contains(SubtagKind::PRIVATE_USE));
            assert_eq!(marker.flags().bits(), 0);
            assert_eq!(marker.base(), marker);
        }
    }

    #[test]
    fn combining_with_a_marker_yields_invalid() {
        assert_eq!(
            SubtagKind::WILDCARD | SubtagKind::EXTENSION,
            SubtagKind::INVALID
        );
    }

    #[test]
    fn base_strips_area_flags() {
        let kind = SubtagKind::OTHER | SubtagKind::PRIVATE_USE;
        assert_eq!(kind.base(), SubtagKind::OTHER);
        assert_eq!(kind.flags(), SubtagKind::PRIVATE_USE);
    }

    #[rstest]
    #[case(SubtagKind::SCRIPT, "Script")]
    #[case(SubtagKind::PRIVATE_USE | SubtagKind::SINGLETON, "Other|PrivateUse|Singleton")]
    #[case(SubtagKind::OTHER | SubtagKind::EXTENSION, "Other|Extension")]
    #[case(SubtagKind::WILDCARD, "Wildcard")]
    #[case(SubtagKind::INVALID, "Invalid")]
    fn displays_base_then_flags(#[case] kind: SubtagKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
