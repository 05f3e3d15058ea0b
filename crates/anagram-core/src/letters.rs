// Working alphabet for the letter pool.

/// Number of slots in the pool alphabet.
///
/// The working alphabet is case-sensitive ASCII: `'A'..='Z'` occupy slots
/// 0-25 and `'a'..='z'` slots 26-51. Uppercase and lowercase forms are
/// distinct letters, so subjects and phrase lists must agree on case.
pub const POOL_SIZE: usize = 52;

/// Map a character to its pool slot.
///
/// Returns `None` for every character outside the working alphabet
/// (digits, punctuation, whitespace, non-ASCII). Such characters are never
/// tracked as consumable letters: they may appear in a phrase without
/// requiring anything from the pool.
pub fn pool_index(c: char) -> Option<usize> {
    match c {
        'A'..='Z' => Some(c as usize - 'A' as usize),
        'a'..='z' => Some(c as usize - 'a' as usize + 26),
        _ => None,
    }
}

/// Check whether a character occupies a pool slot.
pub fn is_pool_letter(c: char) -> bool {
    pool_index(c).is_some()
}
