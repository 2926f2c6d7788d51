use crate::Map;
use std::iter::FromIterator;

/// Prefix tree over code points. Shared prefixes share nodes.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct Trie {
    pub(crate) root: Node,
}

#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct Node {
    pub children: Map<char, Node>,
    /// The registered word ending exactly at this node, if any.
    pub word: Option<Box<str>>,
}

impl Trie {
    /// Registers a word, creating one node per code point past the longest
    /// existing prefix. Registering the same word again changes nothing.
    pub fn add(&mut self, word: &str) {
        debug_assert!(!word.is_empty(), "an empty word would mark the root");
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.children.entry(c).or_default();
        }
        current.word = Some(word.into());
    }
}

impl Node {
    pub fn find_child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut ret = Self::default();
        for word in iter.into_iter() {
            ret.add(word);
        }
        ret
    }
}
