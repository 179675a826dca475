//! Pseudo-grammatical passphrase generation library.
//!
//! This crate builds passphrases that read like fragments of English
//! sentences instead of flat word lists:
//! - A part-of-speech tagged word list is classified into eleven word types
//! - A fixed transition grammar drives a random walk from type to type
//! - Fragments are joined with conjunctions, truncated and decorated
//! - An optional denylist filters words with a bounded retry
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Errors raised by loading and generation.
pub mod error;

/// Word classification, grammar walk and passphrase assembly.
///
/// This module exposes the high-level generator interface while keeping
/// internal helpers private.
pub mod generate;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

/// Uniform draws from the operating system entropy source.
///
/// Not exposed
pub(crate) mod rng;
