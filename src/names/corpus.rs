use std::fs;
use std::path::Path;
use crate::error::Error;

// Ship names from the Culture novels, one per line.
const SHIPS: &str = include_str!("ships.txt");

/// Ordered list of candidate names. Every entry holds at least one word.
#[derive(Clone, Debug, PartialEq)]
pub struct Corpus {
    entries: Vec<String>,
}

impl Corpus {
    pub fn builtin() -> Self {
        Self::from_entries(SHIPS.lines())
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads one entry per line. A file without a single non-blank line is
    /// rejected rather than producing a corpus nothing can be drawn from.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let corpus = Self::from_entries(content.lines());
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|s| s.as_str())
    }

    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.entries
            .iter()
            .flat_map(|entry| entry.split_whitespace())
            .any(|w| w.to_lowercase() == word)
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::builtin()
    }
}
