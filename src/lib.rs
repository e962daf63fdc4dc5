//! Grapheme-to-phoneme (G2P) conversion for speech-synthesis front ends.
//!
//! The pipeline has three stages:
//!
//! 1. A pronunciation [`Lexicon`] is loaded from a dictionary file, mapping
//!    upper-case words to IPA phoneme strings via a fixed symbol table
//!    ([`PhonemeSymbols`]).
//! 2. The [`Normalizer`] rewrites raw input text into a canonical written
//!    form (abbreviation expansion, punctuation canonicalization, whitespace
//!    cleanup).
//! 3. The [`Phonemizer`] segments normalized text on punctuation, replaces
//!    each word with its pronunciation where the lexicon has one, and applies
//!    a final ordered chain of phonetic corrections.
//!
//! The intended call pattern is `phonemizer.phonemize(&normalizer.normalize(text))`.
//! Words absent from the lexicon pass through unchanged.

pub mod lexicon;
pub mod normalizer;
pub mod phonemizer;

mod rewrite;
mod split;

pub use lexicon::{Lexicon, LexiconError, PhonemeSymbols};
pub use normalizer::Normalizer;
pub use phonemizer::{Phonemizer, Segment};
