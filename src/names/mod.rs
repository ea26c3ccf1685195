mod corpus;
mod history;
mod random;

use rayon::prelude::*;

use crate::error::Error;

pub use self::corpus::Corpus;
pub use self::history::NameLog;
pub use self::random::{
    ensure_non_deterministic, process_source, FixedSequence, ProcessSource, RandomSource,
    RngSource, SharedSource,
};

/// Picks ship names from a corpus and formats them as identifiers.
///
/// A generated name is a single corpus entry: its words are lowercased and
/// joined with the separator, so `"Grey Area"` becomes `grey-area` with `"-"`.
#[derive(Clone, Debug, Default)]
pub struct NameGenerator {
    corpus: Corpus,
}

impl NameGenerator {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn generate<S: RandomSource>(&self, mut source: S, separator: &str) -> Result<String, Error> {
        if self.corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let index = source.pick(self.corpus.len());
        let entry = self.corpus.get(index).ok_or_else(|| {
            Error::Generation(format!(
                "Random source returned index {} for a corpus of {} entries",
                index,
                self.corpus.len()
            ))
        })?;
        Ok(format_entry(entry, separator))
    }

    pub fn generate_with_prefix<S: RandomSource>(
        &self,
        source: S,
        prefix: Option<&str>,
        separator: &str,
    ) -> Result<String, Error> {
        let name = self.generate(source, separator)?;
        Ok(apply_prefix(&name, prefix.unwrap_or(""), separator))
    }

    /// Generates `count` names in parallel against one shared source. The
    /// lock is held only while an index is drawn.
    pub fn generate_batch<S: RandomSource + Send>(
        &self,
        source: &SharedSource<S>,
        count: usize,
        prefix: Option<&str>,
        separator: &str,
    ) -> Result<Vec<String>, Error> {
        (0..count)
            .into_par_iter()
            .map(|_| self.generate_with_prefix(source, prefix, separator))
            .collect()
    }
}

fn format_entry(entry: &str, separator: &str) -> String {
    entry
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Returns `name` unchanged for an empty prefix, otherwise
/// `prefix + separator + name`. The prefix is used verbatim.
pub fn apply_prefix(name: &str, prefix: &str, separator: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", prefix, separator, name)
    }
}

/// Generates a name from the built-in ship list using the process-wide source.
pub fn generate(separator: &str) -> Result<String, Error> {
    generate_with_prefix("", separator)
}

pub fn generate_with_prefix(prefix: &str, separator: &str) -> Result<String, Error> {
    ensure_non_deterministic();
    NameGenerator::default().generate_with_prefix(process_source(), Some(prefix), separator)
}
