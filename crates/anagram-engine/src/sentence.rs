// Sentence construction from a phrase catalog.
//
// A sentence is any combination of one or more catalog phrases, separated
// by single spaces, whose combined letters exhaust the subject's letter
// pool exactly. The builder explores placements depth-first: it filters
// the candidate list against the live pool, tentatively places a phrase,
// recurses on the shrunken pool, and restores the letters on backtrack.

use anagram_core::phrase::Phrase;
use anagram_core::pool::LetterPool;

use crate::catalog::PhraseCatalog;

/// Options constraining a sentence search.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Maximum number of phrases in a sentence. 0 means unlimited.
    pub max_words: usize,

    /// Take every `step`-th surviving top-level candidate. Together with
    /// `offset` this divides the top-level candidate list among shards;
    /// values below 1 are treated as 1.
    pub step: usize,

    /// Skip the first `offset` surviving top-level candidates.
    pub offset: usize,
}

impl Default for BuildOptions {
    /// Unlimited sentence length, every candidate, no offset.
    fn default() -> Self {
        Self {
            max_words: 0,
            step: 1,
            offset: 0,
        }
    }
}

/// Optional callbacks observing and steering a sentence search.
///
/// Every hook defaults to `None`, which means "accept everything" for the
/// predicates and "use the default action" for the rest. Hooks are plain
/// shared references so that a single set can serve several shards at
/// once; anything a hook captures must therefore be `Sync`.
#[derive(Clone, Copy, Default)]
pub struct BuildHooks<'a> {
    /// Polled at the top of every recursive call. Returning `true` makes
    /// the current call return without exploring further; enclosing calls
    /// observe the same answer on their next recursion, so the whole
    /// search winds down cooperatively.
    pub cancel: Option<&'a (dyn Fn() -> bool + Sync)>,

    /// Per-placement check, applied at every depth to every candidate that
    /// already passed the feasibility filter. Receives the candidate
    /// phrase and the sentence built so far; returning `false` drops the
    /// candidate at this recursion level.
    pub check: Option<&'a (dyn Fn(&str, &str) -> bool + Sync)>,

    /// Called once before expanding each distinct top-level candidate.
    pub first_phrase: Option<&'a (dyn Fn(&str) + Sync)>,

    /// Called after all sentences rooted at the current top-level
    /// candidate have been built.
    pub progress: Option<&'a (dyn Fn() + Sync)>,

    /// Receives each completed sentence. The buffer belongs to the engine
    /// and is only valid for the duration of the call; copy it to keep it.
    /// When absent, sentences are printed to stdout one per line. The
    /// engine does not serialize sink calls: a sink shared across shards
    /// must provide its own synchronization.
    pub sink: Option<&'a (dyn Fn(&str) + Sync)>,
}

/// Working state for one search invocation.
///
/// Allocated once per top-level call and mutated destructively across all
/// recursion levels: the sentence buffer is truncated back on backtrack
/// and the pool restored in place, so no per-level reallocation happens on
/// either.
struct SearchState<'a, 'h> {
    pool: LetterPool,
    sentence: String,
    options: &'a BuildOptions,
    hooks: &'a BuildHooks<'h>,
}

impl SearchState<'_, '_> {
    fn emit(&self) {
        match self.hooks.sink {
            Some(sink) => sink(&self.sentence),
            None => println!("{}", self.sentence),
        }
    }

    fn canceled(&self) -> bool {
        match self.hooks.cancel {
            Some(cancel) => cancel(),
            None => false,
        }
    }
}

/// Build every sentence that exactly exhausts `pool`.
///
/// One-shot, synchronous enumeration: the call returns once every
/// combination reachable under `options` has been explored (or the cancel
/// hook reported cancellation). The caller's pool is cloned into private
/// working state and never mutated.
///
/// Sentences are emitted in depth-first order following the catalog's read
/// order at every level, restricted to candidates surviving that level's
/// feasibility filter. The order is deterministic but not alphabetical.
///
/// An empty pool, an empty catalog, or a subject no catalog phrase fits
/// yields no emissions; none of these are errors.
pub fn build_sentences(
    pool: &LetterPool,
    catalog: &PhraseCatalog,
    options: &BuildOptions,
    hooks: &BuildHooks<'_>,
) {
    if pool.is_empty() || catalog.is_empty() {
        return;
    }

    // Worst possible sentence: every letter spelled as its own one-letter
    // word with a separator after it. Reserving that up front keeps the
    // buffer from reallocating mid-search.
    let max_len = 2 * pool.count_all() as usize;
    let mut state = SearchState {
        pool: pool.clone(),
        sentence: String::with_capacity(max_len),
        options,
        hooks,
    };

    let candidates: Vec<&Phrase> = catalog.phrases().iter().collect();
    build_inner(&mut state, &candidates, 0);
}

/// One recursion level: filter the working candidate list against the live
/// pool, then try each survivor at the current write position.
fn build_inner(state: &mut SearchState<'_, '_>, candidates: &[&Phrase], depth: usize) {
    if state.canceled() {
        return;
    }

    // Keep only candidates still spellable from the live pool, preserving
    // relative order. Feasibility only shrinks along a branch, so deeper
    // levels start from this level's survivors rather than the full list.
    let mut survivors: Vec<&Phrase> = Vec::with_capacity(candidates.len());
    for &phrase in candidates {
        if !state.pool.can_spell(phrase.text()) {
            continue;
        }
        if let Some(check) = state.hooks.check {
            if !check(phrase.text(), &state.sentence) {
                continue;
            }
        }
        survivors.push(phrase);
    }

    // At the top level each shard starts `offset` candidates in and
    // advances by its stride, leaving the skipped candidates to the other
    // shards. Every other level walks its survivors one by one.
    let (mut cursor, stride) = if depth == 0 {
        (state.options.offset, state.options.step.max(1))
    } else {
        (0, 1)
    };

    while let Some(&phrase) = survivors.get(cursor) {
        if depth == 0 {
            if let Some(first_phrase) = state.hooks.first_phrase {
                first_phrase(phrase.text());
            }
        }

        state.pool.subtract(phrase.text());
        let mark = state.sentence.len();
        state.sentence.push_str(phrase.text());

        if state.pool.is_empty() {
            state.emit();
        } else if state.options.max_words == 0 || depth + 1 < state.options.max_words {
            state.sentence.push(' ');
            build_inner(state, &survivors, depth + 1);
        }

        state.sentence.truncate(mark);
        state.pool.add(phrase.text());

        if depth == 0 {
            if let Some(progress) = state.hooks.progress {
                progress();
            }
        }

        cursor += stride;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Mutex;

    fn catalog_of(phrases: &[&str]) -> PhraseCatalog {
        let source = phrases.join("\n");
        PhraseCatalog::load(Cursor::new(source), None).unwrap()
    }

    /// Run a search and collect the emitted sentences in emission order.
    fn collect(pool: &LetterPool, catalog: &PhraseCatalog, options: &BuildOptions) -> Vec<String> {
        let found = Mutex::new(Vec::new());
        let sink = |sentence: &str| found.lock().unwrap().push(sentence.to_string());
        let hooks = BuildHooks {
            sink: Some(&sink),
            ..BuildHooks::default()
        };
        build_sentences(pool, catalog, options, &hooks);
        found.into_inner().unwrap()
    }

    #[test]
    fn single_word_subject() {
        let pool = LetterPool::from_phrase("a");
        let catalog = catalog_of(&["a", "b"]);
        assert_eq!(collect(&pool, &catalog, &BuildOptions::default()), ["a"]);
    }

    #[test]
    fn emits_in_depth_first_catalog_order() {
        let pool = LetterPool::from_phrase("eat");
        let catalog = catalog_of(&["eat", "tea", "ate", "at", "e"]);
        assert_eq!(
            collect(&pool, &catalog, &BuildOptions::default()),
            ["eat", "tea", "ate", "at e", "e at"]
        );
    }

    #[test]
    fn reuses_a_phrase_when_letters_allow() {
        let pool = LetterPool::from_phrase("papa");
        let catalog = catalog_of(&["pa", "ap"]);
        assert_eq!(
            collect(&pool, &catalog, &BuildOptions::default()),
            ["pa pa", "pa ap", "ap pa", "ap ap"]
        );
    }

    #[test]
    fn empty_catalog_emits_nothing() {
        let pool = LetterPool::from_phrase("subject");
        let catalog = PhraseCatalog::default();
        assert!(collect(&pool, &catalog, &BuildOptions::default()).is_empty());
    }

    #[test]
    fn unspellable_subject_emits_nothing() {
        let pool = LetterPool::from_phrase("zzz");
        let catalog = catalog_of(&["eat", "tea"]);
        assert!(collect(&pool, &catalog, &BuildOptions::default()).is_empty());
    }

    #[test]
    fn empty_pool_emits_nothing() {
        let pool = LetterPool::new();
        let catalog = catalog_of(&["eat"]);
        assert!(collect(&pool, &catalog, &BuildOptions::default()).is_empty());
    }

    #[test]
    fn max_words_caps_sentence_length() {
        let pool = LetterPool::from_phrase("eat");
        let catalog = catalog_of(&["eat", "tea", "ate", "at", "e"]);
        let options = BuildOptions {
            max_words: 1,
            ..BuildOptions::default()
        };
        assert_eq!(collect(&pool, &catalog, &options), ["eat", "tea", "ate"]);
    }

    #[test]
    fn offset_and_step_partition_the_top_level() {
        let pool = LetterPool::from_phrase("eat");
        let catalog = catalog_of(&["eat", "tea", "ate", "at", "e"]);

        // Survivors at the top are all five candidates; stride 2 from
        // offset 0 takes eat, ate, e and offset 1 takes tea, at.
        let shard0 = BuildOptions {
            step: 2,
            offset: 0,
            ..BuildOptions::default()
        };
        let shard1 = BuildOptions {
            step: 2,
            offset: 1,
            ..BuildOptions::default()
        };
        assert_eq!(collect(&pool, &catalog, &shard0), ["eat", "ate", "e at"]);
        assert_eq!(collect(&pool, &catalog, &shard1), ["tea", "at e"]);
    }

    #[test]
    fn offset_past_the_survivors_emits_nothing() {
        let pool = LetterPool::from_phrase("eat");
        let catalog = catalog_of(&["eat", "tea"]);
        let options = BuildOptions {
            offset: 5,
            ..BuildOptions::default()
        };
        assert!(collect(&pool, &catalog, &options).is_empty());
    }

    #[test]
    fn cancellation_before_any_placement_emits_nothing() {
        let pool = LetterPool::from_phrase("eat");
        let catalog = catalog_of(&["eat", "tea", "ate"]);
        let found = Mutex::new(Vec::new());
        let sink = |sentence: &str| found.lock().unwrap().push(sentence.to_string());
        let cancel = || true;
        let hooks = BuildHooks {
            sink: Some(&sink),
            cancel: Some(&cancel),
            ..BuildHooks::default()
        };
        build_sentences(&pool, &catalog, &BuildOptions::default(), &hooks);
        assert!(found.into_inner().unwrap().is_empty());
    }

    #[test]
    fn check_rejecting_everything_emits_nothing() {
        let pool = LetterPool::from_phrase("eat");
        let catalog = catalog_of(&["eat", "tea", "ate"]);
        let found = Mutex::new(Vec::new());
        let sink = |sentence: &str| found.lock().unwrap().push(sentence.to_string());
        let check = |_candidate: &str, _sentence: &str| false;
        let hooks = BuildHooks {
            sink: Some(&sink),
            check: Some(&check),
            ..BuildHooks::default()
        };
        build_sentences(&pool, &catalog, &BuildOptions::default(), &hooks);
        assert!(found.into_inner().unwrap().is_empty());
    }

    #[test]
    fn check_sees_the_sentence_so_far() {
        let pool = LetterPool::from_phrase("eat");
        let catalog = catalog_of(&["at", "e"]);
        // forbid "e" as the opening phrase, leaving only "at e"
        let check = |candidate: &str, sentence: &str| {
            !(sentence.is_empty() && candidate == "e")
        };
        let found = Mutex::new(Vec::new());
        let sink = |sentence: &str| found.lock().unwrap().push(sentence.to_string());
        let hooks = BuildHooks {
            sink: Some(&sink),
            check: Some(&check),
            ..BuildHooks::default()
        };
        build_sentences(&pool, &catalog, &BuildOptions::default(), &hooks);
        assert_eq!(found.into_inner().unwrap(), ["at e"]);
    }

    #[test]
    fn first_phrase_and_progress_fire_per_top_level_candidate() {
        let pool = LetterPool::from_phrase("eat");
        let catalog = catalog_of(&["eat", "tea", "ate"]);
        let started = Mutex::new(Vec::new());
        let finished = Mutex::new(0usize);
        let first_phrase = |phrase: &str| started.lock().unwrap().push(phrase.to_string());
        let progress = || *finished.lock().unwrap() += 1;
        let sink = |_sentence: &str| {};
        let hooks = BuildHooks {
            sink: Some(&sink),
            first_phrase: Some(&first_phrase),
            progress: Some(&progress),
            ..BuildHooks::default()
        };
        build_sentences(&pool, &catalog, &BuildOptions::default(), &hooks);
        assert_eq!(started.into_inner().unwrap(), ["eat", "tea", "ate"]);
        assert_eq!(finished.into_inner().unwrap(), 3);
    }
}
