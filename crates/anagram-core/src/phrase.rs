// Phrases: the atomic unit of sentence construction.
//
// A phrase is one or more words joined by spaces, considered for placement
// in a sentence as a whole; for its constituent words to be considered
// individually they must also be listed individually. Phrases may contain
// punctuation, which allows for contractions, but never digits.

use crate::letters::is_pool_letter;

/// An immutable candidate phrase with its pre-computed byte length.
///
/// Phrases are read once from the phrase list and never change afterwards.
/// The catalog owns phrase storage for the lifetime of a run; the search
/// engine only borrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: Box<str>,
    len: usize,
}

impl Phrase {
    /// Create a phrase from already-accepted text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            len: text.len(),
        }
    }

    /// The phrase text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte length of the phrase text.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff the phrase has no text.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Contract for a phrase acceptance filter.
///
/// A filter sanitizes one candidate line and decides whether it is suitable
/// for sentence construction. It returns the byte length of the accepted
/// prefix (after trimming any trailing line terminator), or `None` to
/// reject the candidate. [`default_filter`] suits most uses; substitute a
/// custom filter for stricter policies such as length limits or profanity
/// filtering.
pub type PhraseFilter<'a> = &'a dyn Fn(&str) -> Option<usize>;

/// The default phrase acceptance filter.
///
/// Trims a single trailing line terminator (`\n` or `\r\n`), then accepts
/// the candidate iff it is non-empty, contains only pool letters, spaces
/// and ASCII punctuation, and its non-letter characters make up no more
/// than half of its characters. Digits, control characters and characters
/// outside ASCII reject the candidate outright.
pub fn default_filter(candidate: &str) -> Option<usize> {
    let trimmed = candidate.strip_suffix('\n').unwrap_or(candidate);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }

    let mut letters = 0usize;
    let mut others = 0usize;
    for c in trimmed.chars() {
        if is_pool_letter(c) {
            letters += 1;
        } else if c == ' ' || c.is_ascii_punctuation() {
            others += 1;
        } else {
            return None;
        }
    }
    if others > letters {
        return None;
    }
    Some(trimmed.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_records_text_and_length() {
        let phrase = Phrase::new("red herring");
        assert_eq!(phrase.text(), "red herring");
        assert_eq!(phrase.len(), 11);
        assert!(!phrase.is_empty());
    }

    // --- default_filter ---

    #[test]
    fn accepts_plain_words() {
        assert_eq!(default_filter("leprechaun"), Some(10));
        assert_eq!(default_filter("a"), Some(1));
    }

    #[test]
    fn accepts_contractions_and_multi_word_phrases() {
        assert_eq!(default_filter("o'clock"), Some(7));
        assert_eq!(default_filter("red herring"), Some(11));
    }

    #[test]
    fn trims_one_trailing_line_terminator() {
        assert_eq!(default_filter("word\n"), Some(4));
        assert_eq!(default_filter("word\r\n"), Some(4));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(default_filter(""), None);
        assert_eq!(default_filter("\n"), None);
    }

    #[test]
    fn rejects_digits_and_control_characters() {
        assert_eq!(default_filter("a1"), None);
        assert_eq!(default_filter("tab\there"), None);
    }

    #[test]
    fn rejects_mostly_non_letter_candidates() {
        assert_eq!(default_filter("''"), None);
        assert_eq!(default_filter("-a-"), None);
        // one apostrophe against one letter is exactly half: still accepted
        assert_eq!(default_filter("a'"), Some(2));
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert_eq!(default_filter("caf\u{00E9}"), None);
    }
}
