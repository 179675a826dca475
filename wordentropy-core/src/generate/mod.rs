//! Passphrase generation from a part-of-speech tagged word list.
//!
//! The pipeline, bottom up:
//! - Classification of tagged words into eleven grammatical types
//!   (`word_type`, `word_map`)
//! - A fixed transition grammar walked at random to build word fragments
//! - Fragment assembly, truncation and decoration (`generator`)
//! - Optional denylist filtering with a bounded retry (`offensive`)

/// High-level interface owning the loaded word lists.
///
/// Exposes loading, passphrase generation and word map introspection.
pub mod generator;

/// Denylist of words excluded from prudish generation.
pub mod offensive;

/// Generation and loading options, bounds and defaults.
pub mod options;

/// Word type to words mapping, built from a tagged word list file.
///
/// Supports parallel construction and a binary on-disk cache.
pub mod word_map;

/// The eleven grammatical word types, their classification rules and the
/// transition grammar between them.
pub mod word_type;
