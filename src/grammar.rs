//! Deterministic L-System grammar engine: axiom + production table,
//! expanded by round-synchronous parallel rewriting.
//!
//! The entry point is [`LSystem`]. Construct it with an axiom and a set of
//! productions, then call [`LSystem::apply`] to obtain the [`Derivation`]
//! (the generated word) after `n` rewriting rounds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Errors produced while constructing or expanding a grammar.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// A caller-supplied value was out of range or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A deterministic, context-free L-System (DOL-system).
///
/// Holds the *Genotype*: an axiom string and a symbol-to-replacement
/// production table. The grammar is immutable after construction; expansion
/// never mutates it, so a single instance can serve any number of
/// [`apply`](Self::apply) calls.
///
/// Symbols with no entry in the production table rewrite to themselves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LSystem {
    name: String,
    axiom: String,
    productions: HashMap<char, String>,
}

impl LSystem {
    /// Creates a grammar from an axiom and a production table.
    ///
    /// `productions` may be any iterable of `(symbol, replacement)` pairs;
    /// later pairs win on duplicate symbols.
    pub fn new(
        name: impl Into<String>,
        axiom: impl Into<String>,
        productions: impl IntoIterator<Item = (char, String)>,
    ) -> Self {
        Self {
            name: name.into(),
            axiom: axiom.into(),
            productions: productions.into_iter().collect(),
        }
    }

    /// Identifier used by catalogs and selection UIs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The initial word, before any rewriting.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// The production table. Symbols absent from it pass through unchanged.
    pub fn productions(&self) -> &HashMap<char, String> {
        &self.productions
    }

    /// Performs `n` rounds of parallel substitution starting from the axiom.
    ///
    /// Each round rewrites *every* symbol of the current word exactly once
    /// through the production table and concatenates the replacements in
    /// order; the next round only sees the finished result of the previous
    /// one. `apply(0)` returns the axiom unchanged.
    ///
    /// Identical `(axiom, productions, n)` always yield an identical word.
    /// Word length is exponential in `n` for growing productions; the engine
    /// never truncates, so callers pick an `n` they can afford.
    pub fn apply(&self, n: u32) -> Derivation {
        let mut word = self.axiom.clone();
        for _ in 0..n {
            let mut next = String::with_capacity(word.len() * 2);
            for symbol in word.chars() {
                match self.productions.get(&symbol) {
                    Some(replacement) => next.push_str(replacement),
                    None => next.push(symbol),
                }
            }
            word = next;
        }
        debug!(
            system = %self.name,
            rounds = n,
            symbols = word.chars().count(),
            "expanded L-system"
        );
        Derivation::new(word)
    }
}

/// The word produced by [`LSystem::apply`]: a finite sequence of
/// single-character symbols with its length known up front.
///
/// Enumeration is lazy and restartable: every call to
/// [`symbols`](Self::symbols) walks the word again from the first symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    word: String,
    len: usize,
}

impl Derivation {
    fn new(word: String) -> Self {
        let len = word.chars().count();
        Self { word, len }
    }

    /// Number of symbols in the word. Consistent with full enumeration of
    /// [`symbols`](Self::symbols).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The raw word.
    pub fn as_str(&self) -> &str {
        &self.word
    }

    /// A restartable iterator over the symbols, in rewriting order.
    pub fn symbols(&self) -> Symbols<'_> {
        Symbols {
            iter: self.word.chars(),
            remaining: self.len,
        }
    }
}

impl<'a> IntoIterator for &'a Derivation {
    type Item = char;
    type IntoIter = Symbols<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols()
    }
}

/// Iterator over the symbols of a [`Derivation`].
#[derive(Clone, Debug)]
pub struct Symbols<'a> {
    iter: std::str::Chars<'a>,
    remaining: usize,
}

impl Iterator for Symbols<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let symbol = self.iter.next()?;
        self.remaining -= 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Symbols<'_> {}
