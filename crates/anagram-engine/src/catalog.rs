// Phrase catalog: the candidate list for sentence construction.

use std::io::BufRead;

use anagram_core::phrase::{Phrase, PhraseFilter, default_filter};
use anagram_core::pool::LetterPool;

/// Error type for catalog construction failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The phrase list source could not be read.
    #[error("failed to read phrase list: {0}")]
    Read(#[from] std::io::Error),
}

/// An ordered, immutable collection of accepted candidate phrases.
///
/// Built once per run from a newline-delimited phrase list; insertion order
/// is read order, which in turn determines the order sentences are emitted
/// in. Once built the catalog never changes, so it may be shared read-only
/// across any number of search workers.
#[derive(Debug, Default)]
pub struct PhraseCatalog {
    phrases: Vec<Phrase>,
}

impl PhraseCatalog {
    /// Read a catalog from `reader` using the default acceptance filter.
    ///
    /// If `initial_pool` is given, phrases that cannot be spelled from it
    /// are discarded as well. A phrase unspellable from the full subject
    /// can never appear in any sentence, so this pruning shrinks the
    /// search's working set without changing its results.
    pub fn load<R: BufRead>(
        reader: R,
        initial_pool: Option<&LetterPool>,
    ) -> Result<Self, CatalogError> {
        Self::load_filtered(reader, initial_pool, &default_filter)
    }

    /// Read a catalog from `reader` using a custom acceptance filter.
    ///
    /// `filter` receives each line and returns the byte length of the
    /// accepted prefix, or `None` to reject the line (see
    /// [`PhraseFilter`]).
    pub fn load_filtered<R: BufRead>(
        reader: R,
        initial_pool: Option<&LetterPool>,
        filter: PhraseFilter<'_>,
    ) -> Result<Self, CatalogError> {
        let mut phrases = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let Some(len) = filter(&line) else {
                continue;
            };
            let accepted = &line[..len];
            if let Some(pool) = initial_pool {
                if !pool.can_spell(accepted) {
                    continue;
                }
            }
            phrases.push(Phrase::new(accepted));
        }
        Ok(Self { phrases })
    }

    /// Number of accepted phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// True iff no phrase was accepted.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The accepted phrases, in read order.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }
}
