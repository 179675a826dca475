use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{GenerateError, LoadError};
use crate::generate::offensive::OffensiveList;
use crate::generate::options::{GenerateOptions, WordListOptions};
use crate::generate::word_map::WordMap;
use crate::generate::word_type::WordType;
use crate::rng::{random_choice, random_digit};

/// Number of redraws allowed before offensive filtering gives up on a slot.
///
/// Exhausting the retries leaves an empty placeholder in the fragment
/// instead of failing the whole request.
pub const OFFENSIVE_RETRY_LIMIT: usize = 10;

/// Top-level passphrase generator.
///
/// # Responsibilities
/// - Own the loaded word map and offensive list, immutable after loading
/// - Walk the transition grammar to build word fragments
/// - Assemble, truncate and decorate fragments into passphrases
///
/// Concurrent read-only use is safe without locking; every request draws
/// from its own entropy source handle.
#[derive(Clone, Debug)]
pub struct Generator {
	word_map: WordMap,
	offensive: OffensiveList,
}

impl Generator {
	/// Assembles a generator from already-built word lists.
	pub fn new(word_map: WordMap, offensive: OffensiveList) -> Self {
		Self { word_map, offensive }
	}

	/// Loads word lists from disk and returns a ready generator.
	///
	/// # Errors
	/// Fails when the word list, or a configured offensive list, cannot be
	/// read. Leaving the offensive option unset is not an error, it just
	/// keeps the denylist empty.
	pub fn load(options: &WordListOptions) -> Result<Self, LoadError> {
		let word_map = WordMap::load(&options.wordlist)?;
		log::debug!("loaded {} words", word_map.word_count());

		let offensive = match &options.offensive {
			Some(path) => {
				let list = OffensiveList::load(path)?;
				log::debug!("loaded {} offensive words", list.len());
				list
			}
			None => OffensiveList::default(),
		};

		Ok(Self::new(word_map, offensive))
	}

	/// Parsed word list as a map of word type to words of that type.
	pub fn word_map(&self) -> &WordMap {
		&self.word_map
	}

	/// Generates and returns passphrases according to the options provided.
	///
	/// # Behavior
	/// - Validates the options and applies defaults, see
	///   [`GenerateOptions::checked`].
	/// - Builds `count` independent passphrases, each from grammar-walk
	///   fragments joined by conjunction words.
	/// - Listed "words" can themselves be multi-word phrases, so every
	///   passphrase is joined and re-split on spaces before truncation.
	/// - Truncates to the requested length, joins with the configured
	///   separator and appends the optional digit and symbol.
	///
	/// # Errors
	/// - Option bound violations and an unloaded or empty word map reject
	///   the request before any word is drawn.
	/// - An entropy source failure is reported as
	///   [`GenerateError::RandomSource`]; the request fails but the
	///   process keeps running.
	/// - A consulted word type with no words is reported as
	///   [`GenerateError::EmptyWordType`].
	pub fn generate_passphrases(&self, options: &GenerateOptions) -> Result<Vec<String>, GenerateError> {
		let mut rng = OsRng;
		self.generate_passphrases_with(options, &mut rng)
	}

	fn generate_passphrases_with<R: TryRngCore>(
		&self,
		options: &GenerateOptions,
		rng: &mut R,
	) -> Result<Vec<String>, GenerateError> {
		let options = self.check_options(options)?;
		let separator = if options.no_spaces { "" } else { " " };

		let mut passphrases = Vec::with_capacity(options.count);
		for _ in 0..options.count {
			let phrase = self.generate_passphrase(&options, rng)?;

			// Normalize multi-word draws into space-delimited tokens.
			let joined = phrase.join(" ");
			let mut tokens: Vec<&str> = joined.split(' ').collect();
			// The leading placeholder token keeps the cut at `length` words.
			tokens.truncate(options.length + 1);

			let mut passphrase = tokens.join(separator).trim().to_owned();
			if options.add_digit {
				passphrase.push(random_digit(rng)?);
			}
			if options.add_symbol {
				passphrase.push(*random_choice(rng, &options.symbols)?);
			}
			passphrases.push(passphrase);
		}
		Ok(passphrases)
	}

	/// Rejects generation against an unloaded or empty word map, then
	/// defers to the option bound checks.
	fn check_options(&self, options: &GenerateOptions) -> Result<GenerateOptions, GenerateError> {
		if self.word_map.is_empty() {
			return Err(GenerateError::EmptyWordMap);
		}
		options.checked()
	}

	/// Builds the word sequence of one passphrase.
	///
	/// Starts with one fragment, then appends a conjunction word and
	/// another fragment `length / fragment_length` times. The sequence is
	/// seeded with an empty placeholder token and deliberately overshoots
	/// the requested length; truncation happens during assembly.
	fn generate_passphrase<R: TryRngCore>(
		&self,
		options: &GenerateOptions,
		rng: &mut R,
	) -> Result<Vec<String>, GenerateError> {
		let iterations = options.length / options.fragment_length;

		let mut phrase = vec![String::new()];
		phrase.extend(self.generate_fragment(options, rng)?);
		for _ in 0..iterations {
			phrase.push(self.random_word(WordType::Conjunction, options, rng)?);
			phrase.extend(self.generate_fragment(options, rng)?);
		}
		Ok(phrase)
	}

	/// A fragment is an autonomous run of words constructed using the
	/// transition grammar.
	///
	/// The starting type is uniform over all eleven word types. Every
	/// following type is uniform over the allowed successors of the
	/// current one; a single allowed successor is taken as-is.
	fn generate_fragment<R: TryRngCore>(
		&self,
		options: &GenerateOptions,
		rng: &mut R,
	) -> Result<Vec<String>, GenerateError> {
		let mut fragment = Vec::with_capacity(options.fragment_length);

		let mut current = *random_choice(rng, &WordType::ALL)?;
		fragment.push(self.random_word(current, options, rng)?);

		for _ in 1..options.fragment_length {
			let successors = current.successors();
			let next = if successors.len() > 1 {
				*random_choice(rng, successors)?
			} else {
				successors[0]
			};
			fragment.push(self.random_word(next, options, rng)?);
			current = next;
		}
		Ok(fragment)
	}

	/// Draws one word of the given type, uniformly at random.
	///
	/// With `prudish` set, words on the offensive list are redrawn up to
	/// [`OFFENSIVE_RETRY_LIMIT`] times. Exhausting the retries yields an
	/// empty placeholder string rather than failing the request.
	///
	/// # Errors
	/// A word type with no words loaded is reported as `EmptyWordType`.
	fn random_word<R: TryRngCore>(
		&self,
		word_type: WordType,
		options: &GenerateOptions,
		rng: &mut R,
	) -> Result<String, GenerateError> {
		let words = self.word_map.words_of(word_type);
		if words.is_empty() {
			return Err(GenerateError::EmptyWordType(word_type));
		}

		let word = random_choice(rng, words)?;
		if !(options.prudish && self.offensive.contains(word)) {
			return Ok(word.clone());
		}

		log::debug!("got offensive word: {word}");
		for _ in 0..OFFENSIVE_RETRY_LIMIT {
			let word = random_choice(rng, words)?;
			if !self.offensive.contains(word) {
				return Ok(word.clone());
			}
			log::debug!("got offensive word (retry): {word}");
		}

		log::warn!("gave up trying to get a non-offensive {word_type} word");
		Ok(String::new())
	}
}
