// anagram-search: find anagram sentences of a subject phrase.
//
// Every combination of phrase-list entries that uses the subject's letters
// exactly once is printed to stdout, one sentence per line. Matching is
// case-sensitive; characters other than ASCII letters in the subject are
// ignored.
//
// Usage:
//   anagram-search [-l PATH] [-t N] [-w N] [-v] SUBJECT...
//
// Options:
//   -l, --list PATH        Phrase list to search (one phrase per line)
//   -t, --threads N        Split the search across N worker threads
//   -w, --max-words N      Emit sentences of at most N phrases
//   -v, --verbose          Report each top-level phrase on stderr
//   -h, --help             Print help

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::sync::Mutex;

use anagram_core::pool::LetterPool;
use anagram_engine::{BuildHooks, BuildOptions, PhraseCatalog, build_sharded};

fn print_usage() {
    println!("anagram-search: find anagram sentences of a subject phrase.");
    println!();
    println!("Usage: anagram-search [-l PATH] [-t N] [-w N] [-v] SUBJECT...");
    println!();
    println!("Prints every combination of phrase-list entries that uses the");
    println!("subject's letters exactly once, one sentence per line.");
    println!();
    println!("Options:");
    println!("  -l, --list PATH        Phrase list to search (one phrase per line)");
    println!("  -t, --threads N        Split the search across N worker threads");
    println!("  -w, --max-words N      Emit sentences of at most N phrases");
    println!("  -v, --verbose          Report each top-level phrase on stderr");
    println!("  -h, --help             Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (list_path, args) = anagram_cli::parse_list_path(&args);
    let (threads, args) = anagram_cli::parse_option(&args, "-t", "--threads");
    let (max_words, args) = anagram_cli::parse_option(&args, "-w", "--max-words");

    if anagram_cli::wants_help(&args) {
        print_usage();
        return;
    }

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");

    let shard_count = match threads {
        Some(t) => t
            .parse::<usize>()
            .unwrap_or_else(|_| anagram_cli::fatal(&format!("invalid thread count: {t}"))),
        None => 1,
    };
    let max_words = match max_words {
        Some(w) => w
            .parse::<usize>()
            .unwrap_or_else(|_| anagram_cli::fatal(&format!("invalid word limit: {w}"))),
        None => 0,
    };

    // Whatever is left after the options is the subject.
    let subject: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    if subject.is_empty() {
        eprintln!("Usage: anagram-search [-l PATH] [-t N] [-w N] [-v] SUBJECT...");
        std::process::exit(1);
    }

    let mut pool = LetterPool::new();
    for part in &subject {
        pool.add(part);
    }
    if pool.is_empty() {
        anagram_cli::fatal("the subject contains no letters");
    }

    let Some(path) = anagram_cli::find_phrase_list(list_path.as_deref()) else {
        anagram_cli::fatal(&format!(
            "no phrase list found; pass -l PATH or set {}",
            anagram_cli::PHRASE_LIST_ENV
        ));
    };
    let file = File::open(&path)
        .unwrap_or_else(|e| anagram_cli::fatal(&format!("failed to open {}: {}", path.display(), e)));
    let catalog = PhraseCatalog::load(BufReader::new(file), Some(&pool))
        .unwrap_or_else(|e| anagram_cli::fatal(&format!("{}: {}", path.display(), e)));

    // An empty catalog just means there is nothing to find.
    if catalog.is_empty() {
        return;
    }

    let options = BuildOptions {
        max_words,
        ..BuildOptions::default()
    };

    // Shards emit concurrently, so the shared writer is behind a mutex.
    let out = Mutex::new(BufWriter::new(io::stdout()));
    let sink = |sentence: &str| {
        let mut out = out.lock().unwrap_or_else(|e| e.into_inner());
        let _ = writeln!(out, "{sentence}");
    };
    let first_phrase = |phrase: &str| eprintln!("trying: {phrase}");

    let mut hooks = BuildHooks {
        sink: Some(&sink),
        ..BuildHooks::default()
    };
    if verbose {
        hooks.first_phrase = Some(&first_phrase);
    }

    if let Err(e) = build_sharded(&pool, &catalog, &options, &hooks, shard_count) {
        anagram_cli::fatal(&e.to_string());
    }

    let mut out = out.lock().unwrap_or_else(|e| e.into_inner());
    let _ = out.flush();
}
