use std::fs;
use std::path::PathBuf;
use std::process;

use wordentropy_core::error::LoadError;
use wordentropy_core::generate::generator::Generator;
use wordentropy_core::generate::options::{GenerateOptions, WordListOptions};

const WORDLIST: &str = "dog\tN\n\
cat\tN\n\
tree\tN\n\
damn\tN\n\
dogs\tNp\n\
cats\tNp\n\
runs\tt\n\
jumps\tt\n\
red\tA\n\
quickly\tv\n\
over\tP\n\
it\tr\n\
and\tC\n\
or\tC\n\
the\tD\n\
these\tDp\n\
wow\t!\n";

const OFFENSIVE: &str = "damn\n";

/// Word list files in a private temp directory, removed on drop.
struct Fixture {
	dir: PathBuf,
}

impl Fixture {
	fn new(name: &str) -> Self {
		let dir = std::env::temp_dir().join(format!("wordentropy-{}-{}", name, process::id()));
		fs::create_dir_all(&dir).unwrap();
		fs::write(dir.join("wordlist.txt"), WORDLIST).unwrap();
		fs::write(dir.join("offensive.txt"), OFFENSIVE).unwrap();
		Self { dir }
	}

	fn options(&self) -> WordListOptions {
		WordListOptions {
			wordlist: self.dir.join("wordlist.txt"),
			offensive: Some(self.dir.join("offensive.txt")),
		}
	}
}

impl Drop for Fixture {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.dir);
	}
}

#[test]
fn loads_and_generates_from_files() {
	let fixture = Fixture::new("load");
	let generator = Generator::load(&fixture.options()).unwrap();
	assert_eq!(generator.word_map().word_count(), 17);

	let passphrases = generator.generate_passphrases(&GenerateOptions::default()).unwrap();
	assert_eq!(passphrases.len(), 4);
	for passphrase in &passphrases {
		assert_eq!(passphrase.split(' ').count(), 5);
	}
}

#[test]
fn caches_the_parsed_word_map() {
	let fixture = Fixture::new("cache");
	let first = Generator::load(&fixture.options()).unwrap();
	assert!(fixture.dir.join("wordlist.bin").exists());

	// The second load decodes the cache instead of re-parsing.
	let second = Generator::load(&fixture.options()).unwrap();
	assert_eq!(first.word_map().word_count(), second.word_map().word_count());
}

#[test]
fn prudish_generation_avoids_denylisted_words() {
	let fixture = Fixture::new("prude");
	let generator = Generator::load(&fixture.options()).unwrap();
	let options = GenerateOptions { count: 8, prudish: true, ..Default::default() };
	for passphrase in generator.generate_passphrases(&options).unwrap() {
		for token in passphrase.split(' ') {
			assert_ne!(token, "damn");
		}
	}
}

#[test]
fn missing_wordlist_is_a_load_error() {
	let options = WordListOptions {
		wordlist: PathBuf::from("/nonexistent/words.txt"),
		offensive: None,
	};
	assert!(matches!(Generator::load(&options), Err(LoadError::Io { .. })));
}

#[test]
fn missing_offensive_list_is_a_load_error_when_configured() {
	let fixture = Fixture::new("offensive");
	let options = WordListOptions {
		wordlist: fixture.dir.join("wordlist.txt"),
		offensive: Some(fixture.dir.join("nonexistent.txt")),
	};
	assert!(matches!(Generator::load(&options), Err(LoadError::Io { .. })));
}
