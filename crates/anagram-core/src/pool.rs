// Letter pool: a multiset of remaining usable letters.

use crate::letters::{POOL_SIZE, pool_index};

/// A multiset of letters, stored as one count per alphabet slot.
///
/// The pool tracks which letters of the subject are still available while a
/// sentence is being built: placing a phrase subtracts its letters, and
/// backtracking adds them again. Representing the pool as per-letter counts
/// keeps [`can_spell`](LetterPool::can_spell) at O(phrase length) and
/// subtract/add at O(phrase length) regardless of how many letters remain,
/// which matters because all three run on every step of an exponential
/// search.
///
/// Every slot is non-negative at all times outside a subtract/add pair.
/// Exactly one pool is live per search branch; a partitioned search gives
/// each worker its own clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: [u32; POOL_SIZE],
}

impl LetterPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            counts: [0; POOL_SIZE],
        }
    }

    /// Create a pool holding the letters of `text`.
    pub fn from_phrase(text: &str) -> Self {
        let mut pool = Self::new();
        pool.add(text);
        pool
    }

    /// Zero all slots.
    pub fn reset(&mut self) {
        self.counts = [0; POOL_SIZE];
    }

    /// Add each pool letter of `text` to the multiset.
    ///
    /// Characters outside the working alphabet are ignored.
    pub fn add(&mut self, text: &str) {
        for c in text.chars() {
            if let Some(slot) = pool_index(c) {
                self.counts[slot] += 1;
            }
        }
    }

    /// Remove each pool letter of `text` from the multiset.
    ///
    /// The caller must have verified spellability with
    /// [`can_spell`](LetterPool::can_spell) first. Subtracting letters that
    /// are not present is a programming error; it is not detected in
    /// release builds.
    pub fn subtract(&mut self, text: &str) {
        for c in text.chars() {
            if let Some(slot) = pool_index(c) {
                debug_assert!(self.counts[slot] > 0, "subtracting {c:?} not in pool");
                self.counts[slot] -= 1;
            }
        }
    }

    /// Check whether `text` can be spelled from the letters in the pool.
    ///
    /// True iff for every letter, `text` requires no more occurrences than
    /// the pool currently holds. Does not mutate the pool. This is the
    /// feasibility filter applied before every tentative placement.
    pub fn can_spell(&self, text: &str) -> bool {
        let mut needed = [0u32; POOL_SIZE];
        for c in text.chars() {
            if let Some(slot) = pool_index(c) {
                needed[slot] += 1;
                if needed[slot] > self.counts[slot] {
                    return false;
                }
            }
        }
        true
    }

    /// True iff every slot is exactly zero.
    ///
    /// An empty pool during sentence construction means every subject
    /// letter has been used: the sentence is complete.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Total number of letters in the pool across all slots.
    pub fn count_all(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::new()
    }
}
