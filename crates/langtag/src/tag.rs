//! The [`LanguageTag`] aggregate and its chain builder.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::kind::SubtagKind;
use crate::subtag::{Subtag, SubtagRef, Subtags, build_chain};

/// A parsed, immutable language tag.
///
/// Parsing is liberal: any string yields a tag. Tokens that fit no shape or
/// position rule are classified [`SubtagKind::INVALID`] and flip
/// [`invalid`](Self::invalid). Equality, ordering and hashing follow the
/// canonical string form.
///
/// When a kind occurs more than once, `language`, `region`, `script` and
/// `variant` report the last occurrence, while `privateuse` reports the
/// first private-use singleton.
///
/// # Examples
/// ```
/// use langtag::LanguageTag;
///
/// let tag = LanguageTag::parse("en-latn-us");
/// assert_eq!(tag.language(), Some("en"));
/// assert_eq!(tag.script(), Some("Latn"));
/// assert_eq!(tag.region(), Some("US"));
/// assert_eq!(tag.variant(), None);
/// assert_eq!(tag, "en-Latn-US");
/// ```
#[derive(Clone)]
pub struct LanguageTag {
    chain: Vec<Subtag>,
    rendered: String,
    language: Option<String>,
    region: Option<String>,
    script: Option<String>,
    variant: Option<String>,
    invalid: bool,
    privateuse: Option<usize>,
    extensions: BTreeMap<String, usize>,
    wild: bool,
}

impl LanguageTag {
    /// Parse `raw`, splitting on `-` and `_`.
    ///
    /// Never fails. An empty string produces a single empty, invalid subtag.
    ///
    /// # Examples
    /// ```
    /// use langtag::LanguageTag;
    ///
    /// let tag = LanguageTag::parse("a");
    /// assert!(tag.invalid());
    /// assert_eq!(tag.len(), 1);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let tokens: Vec<&str> = raw.split(['-', '_']).collect();
        let chain = build_chain(&tokens);
        let mut tag = Self {
            rendered: render(&chain),
            chain: Vec::new(),
            language: None,
            region: None,
            script: None,
            variant: None,
            invalid: false,
            privateuse: None,
            extensions: BTreeMap::new(),
            wild: false,
        };
        for subtag in Subtags::starting_at(&chain, Some(0)) {
            tag.absorb(subtag);
        }
        tag.chain = chain;
        if tag.invalid {
            log::debug!("language tag '{raw}' contains invalid subtags");
        }
        tag
    }

    fn absorb(&mut self, subtag: SubtagRef<'_>) {
        match subtag.kind() {
            SubtagKind::LANGUAGE => self.language = Some(subtag.to_string()),
            SubtagKind::REGION => self.region = Some(subtag.to_string()),
            SubtagKind::SCRIPT => self.script = Some(subtag.to_string()),
            SubtagKind::VARIANT => self.variant = Some(subtag.to_string()),
            SubtagKind::INVALID => self.invalid = true,
            SubtagKind::WILDCARD => self.wild = true,
            _ if subtag.is_singleton() => {
                if subtag.is_private_use() {
                    self.privateuse.get_or_insert(subtag.position());
                } else if subtag.is_extension() {
                    self.extensions
                        .insert(subtag.token().to_owned(), subtag.position());
                }
            }
            _ => {}
        }
    }

    /// The primary language subtag.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The region subtag, uppercased.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The script subtag, title-cased.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// The last variant subtag.
    #[must_use]
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Whether any subtag failed classification.
    #[must_use]
    pub const fn invalid(&self) -> bool {
        self.invalid
    }

    /// The first private-use singleton (`x`).
    #[must_use]
    pub fn privateuse(&self) -> Option<SubtagRef<'_>> {
        self.privateuse
            .and_then(|position| SubtagRef::at(&self.chain, position))
    }

    /// Extension singletons keyed by their letter, in letter order.
    ///
    /// Each value is the singleton node; its members follow it in the chain
    /// and are available through [`SubtagRef::members`].
    pub fn extensions(&self) -> impl Iterator<Item = (&str, SubtagRef<'_>)> {
        self.extensions.iter().filter_map(|(letter, position)| {
            SubtagRef::at(&self.chain, *position).map(|subtag| (letter.as_str(), subtag))
        })
    }

    /// The extension singleton for `letter`, if present.
    #[must_use]
    pub fn extension(&self, letter: &str) -> Option<SubtagRef<'_>> {
        self.extensions
            .get(&letter.to_ascii_lowercase())
            .and_then(|position| SubtagRef::at(&self.chain, *position))
    }

    /// Whether any subtag is the `*` wildcard.
    #[must_use]
    pub const fn wild(&self) -> bool {
        self.wild
    }

    /// Number of subtags (tokens) in the tag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always `false`: parsing yields at least one, possibly empty, subtag.
    /// Provided alongside [`len`](Self::len) for `clippy::len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Head of the subtag chain.
    #[must_use]
    pub fn first(&self) -> Option<SubtagRef<'_>> {
        SubtagRef::at(&self.chain, 0)
    }

    /// Every subtag node in token order.
    #[must_use]
    pub fn subtags(&self) -> &[Subtag] {
        &self.chain
    }

    /// Traverse the subtags in order, one node per token.
    ///
    /// # Examples
    /// ```
    /// use langtag::LanguageTag;
    ///
    /// let tag = LanguageTag::parse("en-a-bbb");
    /// let tokens: Vec<_> = tag.iter().map(|s| s.token().to_owned()).collect();
    /// assert_eq!(tokens, ["en", "a", "bbb"]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Subtags<'_> {
        Subtags::starting_at(&self.chain, Some(0))
    }

    /// Call `visit` with each subtag in order.
    pub fn for_each(&self, visit: impl FnMut(SubtagRef<'_>)) {
        self.iter().for_each(visit);
    }

    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

/// Render a chain: area members are printed as part of their singleton.
fn render(chain: &[Subtag]) -> String {
    Subtags::starting_at(chain, Some(0))
        .filter(|subtag| !subtag.is_area_member())
        .map(|subtag| subtag.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl fmt::Debug for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageTag")
            .field("tag", &self.rendered)
            .field("language", &self.language)
            .field("script", &self.script)
            .field("region", &self.region)
            .field("variant", &self.variant)
            .field("invalid", &self.invalid)
            .field("wild", &self.wild)
            .finish_non_exhaustive()
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl FromStr for LanguageTag {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(raw))
    }
}

impl From<&str> for LanguageTag {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for LanguageTag {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &Self) -> bool {
        self.rendered == other.rendered
    }
}

impl Eq for LanguageTag {}

impl PartialEq<str> for LanguageTag {
    fn eq(&self, other: &str) -> bool {
        self.rendered == other
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.rendered == *other
    }
}

impl PartialOrd for LanguageTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LanguageTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered.cmp(&other.rendered)
    }
}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rendered.hash(state);
    }
}

impl<'a> IntoIterator for &'a LanguageTag {
    type Item = SubtagRef<'a>;
    type IntoIter = Subtags<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LanguageTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.rendered)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LanguageTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
