//! Golden-file tests: compare search output against recorded expectations.
//!
//! The fixtures live in `tests/data/`: a small word list, and per subject
//! the complete set of sentences the engine is expected to find in it.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

use anagram_core::pool::LetterPool;
use anagram_engine::{BuildHooks, BuildOptions, PhraseCatalog, build_sharded};

fn data_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(filename)
}

fn load_golden() -> Value {
    let path = data_path("golden_sentences.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

/// Search the fixture word list for `subject` and return the sentences
/// found, sorted for set comparison.
fn find_sentences(subject: &str, shard_count: usize) -> Vec<String> {
    let pool = LetterPool::from_phrase(subject);
    let path = data_path("wordlist.txt");
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("failed to open wordlist {}: {}", path.display(), e));
    let catalog =
        PhraseCatalog::load(BufReader::new(file), Some(&pool)).expect("wordlist fixture reads");

    let found = Mutex::new(Vec::new());
    let sink = |sentence: &str| found.lock().unwrap().push(sentence.to_string());
    let hooks = BuildHooks {
        sink: Some(&sink),
        ..BuildHooks::default()
    };
    build_sharded(&pool, &catalog, &BuildOptions::default(), &hooks, shard_count)
        .expect("sharded search");

    let mut found = found.into_inner().unwrap();
    found.sort();
    found
}

fn golden_expectations() -> Vec<(String, Vec<String>)> {
    let golden = load_golden();
    golden
        .as_object()
        .expect("golden file holds an object")
        .iter()
        .map(|(subject, sentences)| {
            let mut expected: Vec<String> = sentences
                .as_array()
                .expect("sentence list")
                .iter()
                .map(|v| v.as_str().expect("sentence string").to_string())
                .collect();
            expected.sort();
            (subject.clone(), expected)
        })
        .collect()
}

#[test]
fn golden_subjects_match() {
    for (subject, expected) in golden_expectations() {
        assert_eq!(
            find_sentences(&subject, 1),
            expected,
            "wrong sentence set for subject {subject:?}"
        );
    }
}

#[test]
fn golden_subjects_match_when_sharded() {
    for (subject, expected) in golden_expectations() {
        assert_eq!(
            find_sentences(&subject, 3),
            expected,
            "wrong sharded sentence set for subject {subject:?}"
        );
    }
}
