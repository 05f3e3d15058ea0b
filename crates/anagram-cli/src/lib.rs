// anagram-cli: shared utilities for the command-line tools.

use std::path::{Path, PathBuf};
use std::process;

/// Environment variable overriding the phrase list location.
pub const PHRASE_LIST_ENV: &str = "ANAGRAM_PHRASE_LIST";

/// Conventional phrase list shipped next to the tools.
const PHRASE_LIST_LOCAL: &str = "web2.txt";

/// System word list present on most unix installations.
#[cfg(unix)]
const PHRASE_LIST_SYSTEM: &str = "/usr/share/dict/words";

/// Locate the phrase list to search.
///
/// Search order:
/// 1. `list_path` argument (if provided)
/// 2. `ANAGRAM_PHRASE_LIST` environment variable
/// 3. `./web2.txt`
/// 4. `/usr/share/dict/words` (unix only)
///
/// An explicitly requested path is returned without checking that it
/// exists, so opening it reports the real error; the fallback locations
/// are only returned when present.
pub fn find_phrase_list(list_path: Option<&str>) -> Option<PathBuf> {
    if let Some(p) = list_path {
        return Some(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var(PHRASE_LIST_ENV) {
        return Some(PathBuf::from(env_path));
    }

    let local = Path::new(PHRASE_LIST_LOCAL);
    if local.is_file() {
        return Some(local.to_path_buf());
    }

    #[cfg(unix)]
    {
        let system = Path::new(PHRASE_LIST_SYSTEM);
        if system.is_file() {
            return Some(system.to_path_buf());
        }
    }

    None
}

/// Extract one value-taking option from command line args.
///
/// Recognizes `-s VALUE`, `--long VALUE` and `--long=VALUE` forms.
/// Returns `(value, remaining_args)`; a later occurrence wins.
pub fn parse_option(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let long_eq = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == short || arg == long {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `-l PATH`, `--list PATH` or `--list=PATH` argument.
///
/// Returns `(list_path, remaining_args)`.
pub fn parse_list_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "-l", "--list")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
