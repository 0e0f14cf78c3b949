//! Helpers shared by unit tests.

use crate::subtag::{Subtag, build_chain};

/// Build a classified chain from already-split tokens.
pub(crate) fn chain_of(tokens: &[&str]) -> Vec<Subtag> {
    build_chain(tokens)
}
