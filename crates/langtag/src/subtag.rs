//! Subtag nodes and the borrowed cursor used to walk a tag's chain.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;

use crate::classify::{classify, enclosing_area};
use crate::kind::SubtagKind;

/// One classified token of a language tag.
///
/// Nodes are stored in token order inside their [`LanguageTag`]; `previous`
/// and `next` are positions in that chain.
///
/// [`LanguageTag`]: crate::LanguageTag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtag {
    token: String,
    kind: SubtagKind,
    position: usize,
    next: Option<usize>,
    area_member: bool,
}

impl Subtag {
    /// The lowercased token text.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Kind assigned when the node was built.
    #[must_use]
    pub const fn kind(&self) -> SubtagKind {
        self.kind
    }

    /// Zero-based position of the node in its chain.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Position of the preceding node, if any.
    #[must_use]
    pub const fn previous_position(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Position of the following node, if any.
    #[must_use]
    pub const fn next_position(&self) -> Option<usize> {
        self.next
    }

    /// The token is the `*` wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.kind == SubtagKind::WILDCARD
    }

    /// The token opens an extension or private-use area.
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        self.kind.contains(SubtagKind::SINGLETON)
    }

    /// The token opens or belongs to an extension area.
    #[must_use]
    pub const fn is_extension(&self) -> bool {
        self.kind.contains(SubtagKind::EXTENSION)
    }

    /// The token opens or belongs to a private-use area.
    #[must_use]
    pub const fn is_private_use(&self) -> bool {
        self.kind.contains(SubtagKind::PRIVATE_USE)
    }

    /// A non-singleton node inside an extension or private-use area,
    /// including wildcard and invalid markers, which carry no area flag.
    pub(crate) const fn is_area_member(&self) -> bool {
        self.area_member
    }
}

/// Build the chain for `tokens` in a single forward pass.
///
/// Each token is lowercased, then classified against the nodes already in
/// the chain. Every non-singleton token after a singleton joins its area.
pub(crate) fn build_chain(tokens: &[&str]) -> Vec<Subtag> {
    let len = tokens.len();
    let mut chain: Vec<Subtag> = Vec::with_capacity(len);
    for (position, raw) in tokens.iter().enumerate() {
        let token = raw.to_lowercase();
        let kind = classify(&token, &chain);
        let area_member =
            !kind.contains(SubtagKind::SINGLETON) && enclosing_area(&chain).is_some();
        let next = position.checked_add(1).filter(|next| *next < len);
        chain.push(Subtag {
            token,
            kind,
            position,
            next,
            area_member,
        });
    }
    chain
}

/// A subtag together with the chain it lives in.
///
/// The cursor can step to its neighbours and renders the node in its
/// canonical form, grouping a singleton with the members of its area.
///
/// # Examples
///
/// ```
/// use langtag::LanguageTag;
///
/// let tag = LanguageTag::parse("en-a-bbb-ccc-x-priv");
/// let ext = tag.extension("a").expect("extension present");
/// assert_eq!(ext.to_string(), "a-bbb-ccc");
/// assert_eq!(ext.next().map(|n| n.token().to_owned()).as_deref(), Some("bbb"));
/// ```
#[derive(Clone, Copy)]
pub struct SubtagRef<'a> {
    chain: &'a [Subtag],
    node: &'a Subtag,
}

impl<'a> SubtagRef<'a> {
    pub(crate) fn at(chain: &'a [Subtag], position: usize) -> Option<Self> {
        chain.get(position).map(|node| Self { chain, node })
    }

    /// The underlying node.
    #[must_use]
    pub const fn subtag(&self) -> &'a Subtag {
        self.node
    }

    /// The preceding subtag.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        self.node
            .previous_position()
            .and_then(|position| Self::at(self.chain, position))
    }

    /// The following subtag.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.node
            .next_position()
            .and_then(|position| Self::at(self.chain, position))
    }

    /// Area members following this singleton, up to the next singleton.
    ///
    /// Empty for nodes that are not singletons. Wildcard and invalid tokens
    /// inside the area are members too.
    pub fn members(&self) -> impl Iterator<Item = Self> + 'a {
        let start = if self.is_singleton() {
            self.node.next_position()
        } else {
            None
        };
        Subtags::starting_at(self.chain, start).take_while(|subtag| subtag.is_area_member())
    }
}

impl Deref for SubtagRef<'_> {
    type Target = Subtag;

    fn deref(&self) -> &Subtag {
        self.node
    }
}

impl fmt::Debug for SubtagRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.node, f)
    }
}

impl PartialEq for SubtagRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for SubtagRef<'_> {}

impl fmt::Display for SubtagRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.node.token();
        match self.node.kind() {
            SubtagKind::SCRIPT => {
                let mut chars = token.chars();
                if let Some(first) = chars.next() {
                    write!(f, "{}", first.to_ascii_uppercase())?;
                }
                f.write_str(chars.as_str())
            }
            SubtagKind::REGION => f.write_str(&token.to_ascii_uppercase()),
            _ if self.node.is_singleton() => {
                f.write_str(token)?;
                for member in self.members() {
                    write!(f, "-{}", member.token())?;
                }
                Ok(())
            }
            _ => f.write_str(token),
        }
    }
}

/// Lazy, in-order traversal over a tag's subtags.
///
/// Produced by [`LanguageTag::iter`](crate::LanguageTag::iter). Every call
/// to `iter` starts again from the first subtag.
#[derive(Clone)]
pub struct Subtags<'a> {
    chain: &'a [Subtag],
    cursor: Option<usize>,
}

impl<'a> Subtags<'a> {
    pub(crate) const fn starting_at(chain: &'a [Subtag], cursor: Option<usize>) -> Self {
        Self { chain, cursor }
    }
}

impl<'a> Iterator for Subtags<'a> {
    type Item = SubtagRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = SubtagRef::at(self.chain, self.cursor?)?;
        self.cursor = current.next_position();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .cursor
            .map_or(0, |cursor| self.chain.len().saturating_sub(cursor));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Subtags<'_> {}

impl FusedIterator for Subtags<'_> {}
