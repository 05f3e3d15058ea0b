//! Core primitives for anagram sentence search.
//!
//! - [`letters`] -- the working alphabet and pool slot indexing
//! - [`pool`] -- the [`pool::LetterPool`] letter multiset
//! - [`phrase`] -- the [`phrase::Phrase`] placement unit and candidate
//!   acceptance filters

pub mod letters;
pub mod phrase;
pub mod pool;
