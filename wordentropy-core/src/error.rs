use std::path::PathBuf;

use thiserror::Error;

use crate::generate::options::{COUNT_MAX, FRAGMENT_MAX, LENGTH_MAX};
use crate::generate::word_type::WordType;

/// Errors raised while loading word lists from disk.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The word list or offensive list file could not be read.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Errors raised while generating passphrases.
///
/// Option bound violations reject the request before any word is drawn.
/// The remaining variants report a degraded or failed generation state;
/// none of them abort the process.
#[derive(Debug, Error)]
pub enum GenerateError {
	/// The requested passphrase count is over the supported bound.
	#[error("count exceeds max: {max} (got {0})", max = COUNT_MAX)]
	CountTooLarge(usize),

	/// The requested passphrase length is over the supported bound.
	#[error("length exceeds max: {max} (got {0})", max = LENGTH_MAX)]
	LengthTooLarge(usize),

	/// The requested fragment length is over the supported bound.
	#[error("fragment length exceeds max: {max} (got {0})", max = FRAGMENT_MAX)]
	FragmentLengthTooLarge(usize),

	/// The word map holds no words at all.
	#[error("empty word map, load a word list first")]
	EmptyWordMap,

	/// A consulted word type has no words to draw from.
	#[error("no words of type {0} are loaded")]
	EmptyWordType(WordType),

	/// The operating system entropy source failed to produce a value.
	#[error("random source failure: {0}")]
	RandomSource(String),
}
