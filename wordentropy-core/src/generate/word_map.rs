use std::cmp::max;
use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::generate::word_type::WordType;
use crate::io::{build_output_path, read_file};

/// Mapping from word type to the words of that type.
///
/// ## Responsibilities
/// - Classify `word<TAB>tag` lines into the eleven word types
/// - Build once from disk (in parallel, with a binary cache), read forever
/// - Serve stably indexable word vectors to the generator
///
/// ## Invariants
/// - Every word type key is present from construction on
/// - Stored words are non-empty strings
/// - Duplicates and source order are kept as-is
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WordMap {
	words: HashMap<WordType, Vec<String>>,
}

impl WordMap {
	/// Creates an empty map with every word type present.
	pub fn new() -> Self {
		let mut words = HashMap::new();
		for word_type in WordType::ALL {
			words.insert(word_type, Vec::new());
		}
		Self { words }
	}

	/// Classifies an in-memory sequence of `word<TAB>tag` lines.
	///
	/// Malformed or unclassifiable lines are skipped with a diagnostic,
	/// they never fail the whole build.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut map = WordMap::new();
		for line in lines {
			map.add_line(line.as_ref());
		}
		map
	}

	/// Loads a word map from a tagged word list file.
	///
	/// # Behavior
	/// - A decodable binary cache next to the word list (same stem, `.bin`
	///   extension) is loaded directly and parsing is skipped.
	/// - Otherwise the file is parsed in parallel and the cache is written
	///   for the next load. Cache problems are diagnostics, never errors.
	///
	/// # Errors
	/// Returns `LoadError::Io` when the word list itself cannot be read.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
		let path = path.as_ref();
		let cache_path = build_output_path(path, "bin").ok();

		if let Some(cache) = cache_path.as_deref().filter(|c| c.exists()) {
			match Self::read_cache(cache) {
				Ok(map) => return Ok(map),
				Err(reason) => {
					log::warn!("rebuilding word map, cache {} unusable: {reason}", cache.display());
				}
			}
		}

		let lines = read_file(path).map_err(|source| LoadError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let map = Self::parse_parallel(lines);

		if let Some(cache) = cache_path.as_deref() {
			match postcard::to_stdvec(&map) {
				Ok(bytes) => {
					if let Err(e) = std::fs::write(cache, bytes) {
						log::warn!("cannot write word map cache {}: {e}", cache.display());
					}
				}
				Err(e) => log::warn!("cannot encode word map cache: {e}"),
			}
		}

		Ok(map)
	}

	fn read_cache(cache: &Path) -> Result<WordMap, String> {
		let bytes = std::fs::read(cache).map_err(|e| e.to_string())?;
		postcard::from_bytes(&bytes).map_err(|e| e.to_string())
	}

	/// Splits lines into chunks, classifies each chunk on its own thread
	/// and merges the partial maps.
	///
	/// # Notes
	/// - Chunk count scales with CPU cores.
	/// - Uses MPSC channels to collect partial maps from threads.
	/// - Merge order follows thread completion, not input order.
	fn parse_parallel(lines: Vec<String>) -> WordMap {
		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = max(1, (lines.len() + chunks - 1) / chunks);

		let (tx, rx) = mpsc::channel();
		for chunk in lines.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();

			thread::spawn(move || {
				let partial = WordMap::from_lines(&chunk);
				tx.send(partial).expect("failed to send from thread");
			});
		}
		drop(tx);

		let mut map = WordMap::new();
		for partial in rx.iter() {
			map.merge(partial);
		}
		map
	}

	/// Classifies one line and appends the word to its type.
	fn add_line(&mut self, line: &str) {
		let mut fields = line.split('\t');
		let (word, tag) = match (fields.next(), fields.next(), fields.next()) {
			(Some(word), Some(tag), None) => (word, tag),
			_ => {
				log::warn!("bad field count, line: {line:?}");
				return;
			}
		};

		let Some(word_type) = WordType::classify(tag) else {
			log::warn!("unknown word type, word: {word}, pos: {tag}");
			return;
		};
		if word.is_empty() {
			log::warn!("got zero length word, line: {line:?} (interpreted type: {word_type})");
			return;
		}

		self.words.entry(word_type).or_default().push(word.to_owned());
	}

	/// Appends another map's words to this one.
	pub fn merge(&mut self, other: WordMap) {
		for (word_type, mut words) in other.words {
			self.words.entry(word_type).or_default().append(&mut words);
		}
	}

	/// Words of the given type. Unknown keys read as empty.
	pub fn words_of(&self, word_type: WordType) -> &[String] {
		self.words.get(&word_type).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Iterates over every word type and its words.
	pub fn iter(&self) -> impl Iterator<Item = (WordType, &[String])> {
		self.words.iter().map(|(word_type, words)| (*word_type, words.as_slice()))
	}

	/// Total number of words across all types.
	pub fn word_count(&self) -> usize {
		self.words.values().map(Vec::len).sum()
	}

	/// True when no type holds any word.
	pub fn is_empty(&self) -> bool {
		self.words.values().all(Vec::is_empty)
	}
}

impl Default for WordMap {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classifies_lines_into_types() {
		let map = WordMap::from_lines(["dog\tN", "dogs\tNp", "runs\tt", "and\tC"]);
		assert_eq!(map.words_of(WordType::SingularNoun), vec!["dog"]);
		assert_eq!(map.words_of(WordType::PluralNoun), vec!["dogs"]);
		assert_eq!(map.words_of(WordType::Verb), vec!["runs"]);
		assert_eq!(map.words_of(WordType::Conjunction), vec!["and"]);
		assert_eq!(map.word_count(), 4);
	}

	#[test]
	fn skips_bad_field_counts() {
		let map = WordMap::from_lines(["dog", "dog\tN\textra", "cat\tN"]);
		assert_eq!(map.word_count(), 1);
		assert_eq!(map.words_of(WordType::SingularNoun), vec!["cat"]);
	}

	#[test]
	fn skips_unknown_tags_and_empty_words() {
		let map = WordMap::from_lines(["dog\tzz", "\tN"]);
		assert!(map.is_empty());
		assert_eq!(map.word_count(), 0);
	}

	#[test]
	fn keeps_duplicates_and_source_order() {
		let map = WordMap::from_lines(["dog\tN", "dog\tN", "cat\tN"]);
		assert_eq!(map.words_of(WordType::SingularNoun), vec!["dog", "dog", "cat"]);
	}

	#[test]
	fn merge_appends_words() {
		let mut map = WordMap::from_lines(["dog\tN"]);
		map.merge(WordMap::from_lines(["cat\tN", "runs\tt"]));
		assert_eq!(map.words_of(WordType::SingularNoun), vec!["dog", "cat"]);
		assert_eq!(map.words_of(WordType::Verb), vec!["runs"]);
	}

	#[test]
	fn all_types_present_when_empty() {
		let map = WordMap::new();
		for word_type in WordType::ALL {
			assert!(map.words_of(word_type).is_empty());
		}
		assert!(map.is_empty());
	}

	#[test]
	fn survives_a_cache_encoding_round_trip() {
		let map = WordMap::from_lines(["dog\tN", "dogs\tNp"]);
		let bytes = postcard::to_stdvec(&map).unwrap();
		let decoded: WordMap = postcard::from_bytes(&bytes).unwrap();
		assert_eq!(decoded.words_of(WordType::SingularNoun), vec!["dog"]);
		assert_eq!(decoded.words_of(WordType::PluralNoun), vec!["dogs"]);
	}
}
