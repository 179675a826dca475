use std::path::PathBuf;
use std::process;

use clap::Parser;

use wordentropy_core::generate::generator::Generator;
use wordentropy_core::generate::options::{GenerateOptions, WordListOptions};

/// Generate pseudo-grammatical passphrases from a part-of-speech word list.
#[derive(Parser, Debug)]
#[command(name = "we", version, about)]
struct Args {
	/// Number of passphrases to generate
	#[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=99))]
	count: u64,

	/// Number of words per passphrase
	#[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(1..=99))]
	length: u64,

	/// Filter offensive words
	#[arg(long)]
	prude: bool,

	/// No spaces between words
	#[arg(long)]
	no_spaces: bool,

	/// Add a random digit to each passphrase (password requirement workaround)
	#[arg(long)]
	add_number: bool,

	/// Add a random symbol to each passphrase (password requirement workaround)
	#[arg(long)]
	add_symbol: bool,

	/// Path to the part-of-speech word list
	#[arg(long, default_value = "./data/part-of-speech.txt")]
	wordlist_path: PathBuf,

	/// Path to the offensive word list (optional)
	#[arg(long, default_value = "./data/offensive.txt")]
	offensive_path: PathBuf,

	/// Verbose output
	#[arg(long)]
	verbose: bool,
}

fn main() {
	let args = Args::parse();

	let mut logger = env_logger::Builder::from_default_env();
	if args.verbose {
		logger.filter_level(log::LevelFilter::Debug);
	}
	logger.init();

	if !args.wordlist_path.is_file() {
		eprintln!("wordlist error: {} is not a readable file", args.wordlist_path.display());
		process::exit(1);
	}

	// A missing offensive list disables filtering instead of failing.
	let mut prude = args.prude;
	if prude && !args.offensive_path.is_file() {
		log::warn!(
			"offensive path error: {} not found, disabling filtering",
			args.offensive_path.display()
		);
		prude = false;
	}

	log::debug!("loading word list...");
	let word_options = WordListOptions {
		wordlist: args.wordlist_path.clone(),
		// The denylist is only read when filtering is requested.
		offensive: prude.then(|| args.offensive_path.clone()),
	};
	let generator = match Generator::load(&word_options) {
		Ok(generator) => generator,
		Err(e) => {
			eprintln!("error loading wordlist: {e}");
			process::exit(1);
		}
	};

	let options = GenerateOptions {
		count: args.count as usize,
		length: args.length as usize,
		prudish: prude,
		no_spaces: args.no_spaces,
		add_digit: args.add_number,
		add_symbol: args.add_symbol,
		..GenerateOptions::default()
	};
	log::debug!("options: {options:?}");

	match generator.generate_passphrases(&options) {
		Ok(passphrases) => {
			for passphrase in passphrases {
				println!("{passphrase}");
			}
		}
		Err(e) => {
			eprintln!("error generating passphrases: {e}");
			process::exit(1);
		}
	}
}
