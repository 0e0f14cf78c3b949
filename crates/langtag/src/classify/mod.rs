//! Position-aware subtag classification.
//!
//! A token's kind depends on its shape and on the kind of the subtag that
//! precedes it. Each position selects one static rule table; the first rule
//! whose shape matches decides the kind.

mod shape;

use crate::kind::SubtagKind;
use crate::subtag::Subtag;

/// Consecutive extended-language subtags allowed after the language.
pub(crate) const MAX_EXTLANGS: usize = 3;

struct Rule {
    shape: fn(&str) -> bool,
    kind: SubtagKind,
}

const WILDCARD: Rule = Rule {
    shape: shape::wildcard,
    kind: SubtagKind::WILDCARD,
};
const PRIVATE_USE: Rule = Rule {
    shape: shape::private_use_singleton,
    kind: SubtagKind::PRIVATE_USE.union(SubtagKind::SINGLETON),
};
const EXTENSION: Rule = Rule {
    shape: shape::extension_singleton,
    kind: SubtagKind::EXTENSION.union(SubtagKind::SINGLETON),
};
const LANGUAGE: Rule = Rule {
    shape: shape::language,
    kind: SubtagKind::LANGUAGE,
};
const EXTLANG: Rule = Rule {
    shape: shape::extlang,
    kind: SubtagKind::EXTLANG,
};
const SCRIPT: Rule = Rule {
    shape: shape::script,
    kind: SubtagKind::SCRIPT,
};
const REGION: Rule = Rule {
    shape: shape::region,
    kind: SubtagKind::REGION,
};
const VARIANT: Rule = Rule {
    shape: shape::variant,
    kind: SubtagKind::VARIANT,
};
const OTHER: Rule = Rule {
    shape: shape::other,
    kind: SubtagKind::OTHER,
};

static LEADING: [Rule; 3] = [WILDCARD, PRIVATE_USE, LANGUAGE];
static AFTER_LANGUAGE: [Rule; 8] = [
    WILDCARD,
    PRIVATE_USE,
    EXTENSION,
    EXTLANG,
    SCRIPT,
    REGION,
    VARIANT,
    OTHER,
];
static AFTER_SCRIPT: [Rule; 6] = [WILDCARD, PRIVATE_USE, EXTENSION, REGION, VARIANT, OTHER];
static AFTER_REGION: [Rule; 5] = [WILDCARD, PRIVATE_USE, EXTENSION, VARIANT, OTHER];
static AFTER_VARIANT: [Rule; 5] = [WILDCARD, PRIVATE_USE, EXTENSION, VARIANT, OTHER];
static TRAILING: [Rule; 4] = [WILDCARD, PRIVATE_USE, EXTENSION, OTHER];

fn rules_after(previous: Option<SubtagKind>) -> &'static [Rule] {
    match previous {
        None => &LEADING,
        Some(SubtagKind::LANGUAGE | SubtagKind::EXTLANG) => &AFTER_LANGUAGE,
        Some(SubtagKind::SCRIPT) => &AFTER_SCRIPT,
        Some(SubtagKind::REGION) => &AFTER_REGION,
        Some(SubtagKind::VARIANT) => &AFTER_VARIANT,
        Some(_) => &TRAILING,
    }
}

/// Number of extended-language subtags in the run that `token` would extend.
fn extlang_run(preceding: &[Subtag]) -> usize {
    1 + preceding
        .iter()
        .rev()
        .take_while(|subtag| subtag.kind() == SubtagKind::EXTLANG)
        .count()
}

/// The area flag (`EXTENSION` or `PRIVATE_USE`) enclosing the next token.
///
/// Wildcard and invalid markers carry no flags of their own, so they are
/// skipped and the nearest classified node before them decides.
pub(crate) fn enclosing_area(preceding: &[Subtag]) -> Option<SubtagKind> {
    let kind = preceding
        .iter()
        .rev()
        .map(Subtag::kind)
        .find(|kind| !kind.is_marker())?;
    [SubtagKind::EXTENSION, SubtagKind::PRIVATE_USE]
        .into_iter()
        .find(|flag| kind.contains(*flag))
}

/// Carry the enclosing extension or private-use area onto a non-singleton
/// match.
fn inherit_area(kind: SubtagKind, area: Option<SubtagKind>) -> SubtagKind {
    match area {
        Some(flag) if !kind.is_marker() && !kind.contains(SubtagKind::SINGLETON) => kind | flag,
        _ => kind,
    }
}

/// Classify `token` given the subtags already built before it.
///
/// `preceding` is the chain so far; its last element is the immediately
/// preceding subtag. The token is expected to be lowercase already, though
/// every shape test is case-insensitive.
///
/// Classification never fails: a token that matches no rule for its
/// position is [`SubtagKind::INVALID`].
///
/// # Examples
///
/// ```
/// use langtag::{SubtagKind, classify};
///
/// assert_eq!(classify("en", &[]), SubtagKind::LANGUAGE);
/// assert_eq!(classify("", &[]), SubtagKind::INVALID);
/// assert_eq!(classify("a", &[]), SubtagKind::INVALID);
/// ```
#[must_use]
pub fn classify(token: &str, preceding: &[Subtag]) -> SubtagKind {
    if token.is_empty() {
        return SubtagKind::INVALID;
    }
    let previous = preceding.last().map(Subtag::kind);
    let Some(rule) = rules_after(previous)
        .iter()
        .find(|rule| (rule.shape)(token))
    else {
        log::trace!("no rule matched subtag '{token}' after {previous:?}");
        return SubtagKind::INVALID;
    };

    if rule.kind == SubtagKind::EXTLANG {
        let run = extlang_run(preceding);
        if run > MAX_EXTLANGS {
            log::debug!("extlang '{token}' exceeds the limit of {MAX_EXTLANGS}");
            return SubtagKind::INVALID;
        }
        return rule.kind;
    }

    inherit_area(rule.kind, enclosing_area(preceding))
}
