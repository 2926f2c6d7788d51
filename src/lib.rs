//! wordsieve is an embeddable sensitive-word filter.
//!
//! A word list is registered once into a prefix tree keyed by code point;
//! afterwards the filter answers whether a string contains a registered word,
//! and produces censored copies with matched spans overwritten by a
//! replacement character. Matching operates over code points, never bytes, so
//! multi-byte text is censored without splitting characters.

mod filter;
mod load;
mod trie;

pub use crate::filter::{EmptyWord, Match, WordFilter};
pub use crate::load::LoadError;

pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;


use doc_comment::doctest;
doctest!("../README.md");
