use crate::filter::WordFilter;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Failed to load a word list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

impl WordFilter {
    /// Registers one word per line from the reader, in order.
    ///
    /// Lines are trimmed of surrounding whitespace; blank lines and lines
    /// starting with `#` are skipped. Returns the number of words registered.
    pub fn load_words<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        let mut added = 0;
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            self.trie.add(word);
            added += 1;
        }
        Ok(added)
    }

    /// Builds a filter from a word list file, one word per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let mut ret = Self::new();
        ret.load_words(BufReader::new(File::open(path)?))?;
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use crate::WordFilter;
    use std::io::Cursor;

    #[test]
    fn loads_trimmed_lines() {
        let list = "sb\n  TMD  \n\n# comment line\n他妈的\n";
        let mut f = WordFilter::new();
        let added = f.load_words(Cursor::new(list)).unwrap();
        assert_eq!(added, 3);
        assert!(f.contains("sb"));
        assert!(f.contains("TMD"));
        assert!(f.contains("他妈的"));
        assert!(!f.contains("# comment line"));
    }

    #[test]
    fn loaded_words_behave_like_added_words() {
        let mut loaded = WordFilter::new();
        loaded.load_words(Cursor::new("sb\nTMD\n")).unwrap();
        let mut added = WordFilter::new();
        added.add_words(["sb", "TMD"]).unwrap();
        for text in ["sb TMD", "你好 sb", "clean", ""] {
            assert_eq!(loaded.censor(text), added.censor(text));
        }
    }

    #[test]
    fn empty_list_loads_nothing() {
        let mut f = WordFilter::new();
        assert_eq!(f.load_words(Cursor::new("\n\n# only comments\n")).unwrap(), 0);
        assert!(!f.contains("anything"));
    }
}
