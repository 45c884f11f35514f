//! Pseudo-random DOL-system construction from an alphabet.
//!
//! All randomness happens once, here, through an explicitly threaded RNG;
//! the returned [`LSystem`] is an ordinary deterministic grammar from then
//! on. Seed the RNG to make construction reproducible.
//! See <https://gpfault.net/posts/generating-trees.txt.html> for the idea.

use crate::grammar::{GrammarError, LSystem};
use crate::turtle::TurtleOp;
use rand::Rng;
use rand::seq::SliceRandom;

/// Builds a single-production grammar from `alphabet`.
///
/// The axiom is drawn uniformly from `alphabet`; its replacement is drawn
/// uniformly from the alphabet extended with the operator symbols, so the
/// generated word can contain both abstract letters and drawing commands.
///
/// Fails with [`GrammarError::InvalidArgument`] on an empty alphabet.
pub fn pseudo_random(alphabet: &[char], rng: &mut impl Rng) -> Result<LSystem, GrammarError> {
    let axiom = *alphabet.choose(rng).ok_or_else(|| {
        GrammarError::InvalidArgument("alphabet must not be empty".to_string())
    })?;

    let mut pool: Vec<char> = alphabet.to_vec();
    pool.extend(TurtleOp::ALL.iter().map(|op| op.symbol()));
    // The pool is never empty here; the alphabet alone already has a symbol.
    let replacement = *pool.choose(rng).expect("pool contains the alphabet");

    Ok(LSystem::new(
        "pseudo-random",
        axiom.to_string(),
        [(axiom, replacement.to_string())],
    ))
}
