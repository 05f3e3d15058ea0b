// anagram-filter: show which phrases are spellable from a subject's letters.
//
// Reads the phrase list, keeps the entries that can be spelled from the
// subject's letters, and prints them in list order. This is the same
// pruning the search applies before it starts, exposed as a tool for
// inspecting a phrase list.
//
// Usage:
//   anagram-filter [-l PATH] SUBJECT...
//
// Options:
//   -l, --list PATH   Phrase list to filter (one phrase per line)
//   -h, --help        Print help

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anagram_core::pool::LetterPool;
use anagram_engine::PhraseCatalog;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (list_path, args) = anagram_cli::parse_list_path(&args);

    if anagram_cli::wants_help(&args) {
        println!("anagram-filter: show which phrases are spellable from a subject's letters.");
        println!();
        println!("Usage: anagram-filter [-l PATH] SUBJECT...");
        println!();
        println!("Options:");
        println!("  -l, --list PATH   Phrase list to filter (one phrase per line)");
        println!("  -h, --help        Print this help");
        return;
    }

    let subject: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    if subject.is_empty() {
        eprintln!("Usage: anagram-filter [-l PATH] SUBJECT...");
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

    let mut out = BufWriter::new(io::stdout());
    for phrase in catalog.phrases() {
        let _ = writeln!(out, "{}", phrase.text());
    }
    let _ = out.flush();
}
