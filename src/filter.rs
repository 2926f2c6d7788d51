use crate::trie::Trie;
use std::borrow::Cow;
use std::iter::FromIterator;
use thiserror::Error;

/// Attempted to register an empty word.
///
/// An empty word would mark the trie root terminal, making every scan report
/// a zero-length match, so registration rejects it outright.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("cannot register an empty word")]
pub struct EmptyWord;

/// A confirmed occurrence of a registered word within scanned text.
///
/// Offsets are code point offsets into the text, not byte offsets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Match<'f> {
    start: usize,
    end: usize,
    word: &'f str,
}

impl<'f> Match<'f> {
    /// Offset of the first matched code point.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last matched code point.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The registered word that matched.
    pub fn word(&self) -> &'f str {
        self.word
    }
}

/// `WordFilter` detects and censors occurrences of registered words in
/// arbitrary text.
///
/// Words are registered up front; after that the filter is read-only, so it
/// can be shared behind an `Arc` and queried from any number of threads.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordFilter {
    pub(crate) trie: Trie,
    pub(crate) censor_replacement: char,
}

impl WordFilter {
    /// Allocates an empty filter.
    pub fn new() -> Self {
        Self {
            trie: Trie::default(),
            censor_replacement: '*',
        }
    }

    /// Sets the character used to overwrite censored words.
    ///
    /// The default is `'*'`.
    pub fn with_censor_replacement(&mut self, censor_replacement: char) -> &mut Self {
        self.censor_replacement = censor_replacement;
        self
    }

    /// Registers a word. Registering the same word twice is a no-op.
    pub fn add_word(&mut self, word: &str) -> Result<(), EmptyWord> {
        if word.is_empty() {
            return Err(EmptyWord);
        }
        self.trie.add(word);
        Ok(())
    }

    /// Registers each word in order. Stops at the first empty word.
    pub fn add_words<'a, I: IntoIterator<Item = &'a str>>(
        &mut self,
        words: I,
    ) -> Result<(), EmptyWord> {
        for word in words {
            self.add_word(word)?;
        }
        Ok(())
    }

    /// Returns `true` if the text contains at least one registered word.
    pub fn contains(&self, text: &str) -> bool {
        let chars = text.chars().collect::<Vec<_>>();
        self.scan(&chars, 0).is_some()
    }

    /// Reports the first match in the text, if any.
    pub fn find(&self, text: &str) -> Option<Match<'_>> {
        let chars = text.chars().collect::<Vec<_>>();
        self.scan(&chars, 0)
    }

    /// Produces a censored copy of the text, with every code point of every
    /// match overwritten by the censor replacement character.
    ///
    /// Clean input is returned borrowed, without allocating a new string.
    pub fn censor<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut chars = text.chars().collect::<Vec<_>>();
        let mut censored = false;
        let mut offset = 0;
        while let Some(m) = self.scan(&chars, offset) {
            for c in &mut chars[m.start..m.end] {
                *c = self.censor_replacement;
            }
            offset = m.end;
            censored = true;
        }
        if censored {
            Cow::Owned(chars.into_iter().collect())
        } else {
            Cow::Borrowed(text)
        }
    }

    /// One linear pass over `chars` from `start`, locating the next match.
    ///
    /// Walks the trie as code points are consumed. A candidate that dies on a
    /// non-terminal node restarts the scan one past the candidate's first
    /// code point, so a word beginning inside the failed candidate is still
    /// found. Restarting re-reads those code points instead of following
    /// Aho-Corasick failure links; which match wins in overlapping-pattern
    /// inputs is part of the contract.
    fn scan(&self, chars: &[char], start: usize) -> Option<Match<'_>> {
        if start >= chars.len() {
            return None;
        }
        let mut node = &self.trie.root;
        let mut match_start = None;
        let mut i = start;
        while i < chars.len() {
            match node.find_child(chars[i]) {
                Some(next) => {
                    if match_start.is_none() {
                        // First code point of a candidate match.
                        match_start = Some(i);
                    }
                    node = next;
                    i += 1;
                }
                None => match match_start.take() {
                    // No candidate open. Try the next starting position.
                    None => i += 1,
                    Some(begin) => {
                        if let Some(word) = node.word.as_deref() {
                            return Some(Match {
                                start: begin,
                                end: i,
                                word,
                            });
                        }
                        // Dead end. Restart one past where the candidate began.
                        i = begin + 1;
                        node = &self.trie.root;
                    }
                },
            }
        }
        // A candidate still open at end of input matches only if it ended on
        // a terminal node. A strict prefix of a longer word does not match.
        match_start.and_then(|begin| {
            node.word.as_deref().map(|word| Match {
                start: begin,
                end: chars.len(),
                word,
            })
        })
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FromIterator<&'a str> for WordFilter {
    /// Builds a filter from a list of words.
    ///
    /// # Panics
    ///
    /// Panics if a word is empty. Use `add_word` for fallible registration.
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut ret = Self::new();
        for word in iter.into_iter() {
            assert!(!word.is_empty(), "cannot register an empty word");
            ret.trie.add(word);
        }
        ret
    }
}
