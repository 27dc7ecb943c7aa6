//! Cleansing core - dictionary-driven normalization of short social-media text.
//!
//! ## Processing flow
//! 1. Lowercasing
//! 2. Escape-token stripping (`\xNN`, `\n`, `\t`, raw tabs)
//! 3. Numeric-noise removal
//! 4. Kamus alay substitution (declaration order, chaining allowed)
//! 5. Abusive-word elision
//! 6. Repetition-marker expansion
//! 7. Non-alphabetic stripping
//! 8. Whitespace collapse
//!
//! The stage order is a behavioral commitment: reordering changes results.

mod batch;
mod dictionary;
mod engine;
mod rules;

pub use batch::{apply_all, find_text_column, MissingFieldError, TextRecord};
pub use dictionary::{Dictionaries, LoadError};
pub use engine::CleanseEngine;
