use std::path::PathBuf;

use crate::error::GenerateError;

/// Highest accepted passphrase count per request.
pub const COUNT_MAX: usize = 99;
/// Count used when the option is left at zero.
pub const COUNT_DEFAULT: usize = 4;
/// Highest accepted passphrase length in words.
pub const LENGTH_MAX: usize = 99;
/// Length used when the option is left at zero.
pub const LENGTH_DEFAULT: usize = 5;
/// Highest accepted fragment length in words.
pub const FRAGMENT_MAX: usize = 99;
/// Fragment length used when the option is left at zero.
pub const FRAGMENT_DEFAULT: usize = 4;

/// Symbols drawn from when `add_symbol` is set and no custom set is given.
pub const DEFAULT_SYMBOLS: [char; 14] = [
	'!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '+', '_', '=',
];

/// Options for loading word lists. The word list is required, the
/// offensive list is optional.
///
/// The word list must be formatted according to
/// http://wordlist.aspell.net/pos-readme. The offensive list must be
/// plain UTF-8, one word per line.
#[derive(Clone, Debug)]
pub struct WordListOptions {
	/// Path to the part-of-speech tagged word list.
	pub wordlist: PathBuf,
	/// Optional path to the offensive word list. `None` leaves the
	/// denylist empty without being an error.
	pub offensive: Option<PathBuf>,
}

/// Options for passphrase generation. All fields have sane defaults, none
/// are required: zero numeric values and an empty symbol set select the
/// documented defaults.
#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
	/// Number of passphrases to generate.
	pub count: usize,
	/// Length in words of each passphrase.
	pub length: usize,
	/// Number of words per fragment before a conjunction is inserted.
	pub fragment_length: usize,
	/// Filter out words on the offensive list.
	pub prudish: bool,
	/// Do not put spaces between words.
	pub no_spaces: bool,
	/// Append a random digit to each passphrase.
	pub add_digit: bool,
	/// Append a random symbol to each passphrase.
	pub add_symbol: bool,
	/// Candidate symbols for `add_symbol`. Empty selects `DEFAULT_SYMBOLS`.
	pub symbols: Vec<char>,
}

impl GenerateOptions {
	/// Applies defaults and bound checks, returning the effective options.
	///
	/// The receiver is left untouched; generation works on the returned
	/// copy.
	///
	/// # Errors
	/// Any of `count`, `length` or `fragment_length` above the documented
	/// bound is rejected and generation must not proceed.
	pub fn checked(&self) -> Result<GenerateOptions, GenerateError> {
		let mut options = self.clone();

		if options.count > COUNT_MAX {
			return Err(GenerateError::CountTooLarge(options.count));
		}
		if options.count == 0 {
			options.count = COUNT_DEFAULT;
		}
		if options.length > LENGTH_MAX {
			return Err(GenerateError::LengthTooLarge(options.length));
		}
		if options.length == 0 {
			options.length = LENGTH_DEFAULT;
		}
		if options.fragment_length > FRAGMENT_MAX {
			return Err(GenerateError::FragmentLengthTooLarge(options.fragment_length));
		}
		if options.fragment_length == 0 {
			options.fragment_length = FRAGMENT_DEFAULT;
		}
		if options.symbols.is_empty() {
			options.symbols = DEFAULT_SYMBOLS.to_vec();
		}

		Ok(options)
	}
}
