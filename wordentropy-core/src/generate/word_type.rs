use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical role of a word.
///
/// The eleven types form a closed set; there is no runtime extension.
/// Articles and other determiners are split by number the same way nouns
/// are, so the grammar can keep `these dogs` apart from `the dog`.
///
/// ## Invariants
/// - Every type has at least one allowed successor in the grammar
/// - Successor sets only reference members of this set
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordType {
	SingularNoun,
	PluralNoun,
	Verb,
	Adjective,
	Adverb,
	Preposition,
	Pronoun,
	Conjunction,
	SingularArticle,
	PluralArticle,
	Interjection,
}

impl WordType {
	/// All word types, in stable order.
	///
	/// The order is the index space for the uniform starting draw of a
	/// fragment walk.
	pub const ALL: [WordType; 11] = [
		WordType::SingularNoun,
		WordType::PluralNoun,
		WordType::Verb,
		WordType::Adjective,
		WordType::Adverb,
		WordType::Preposition,
		WordType::Pronoun,
		WordType::Conjunction,
		WordType::SingularArticle,
		WordType::PluralArticle,
		WordType::Interjection,
	];

	/// Short name used in logs and listings.
	pub fn as_str(self) -> &'static str {
		match self {
			WordType::SingularNoun => "snoun",
			WordType::PluralNoun => "pnoun",
			WordType::Verb => "verb",
			WordType::Adjective => "adjective",
			WordType::Adverb => "adverb",
			WordType::Preposition => "preposition",
			WordType::Pronoun => "pronoun",
			WordType::Conjunction => "conjunction",
			WordType::SingularArticle => "sarticle",
			WordType::PluralArticle => "particle",
			WordType::Interjection => "interjection",
		}
	}

	/// Word types allowed to follow `self` inside a fragment.
	///
	/// This table is the whole grammar: a fragment is built by walking
	/// these edges and drawing one word per visited type. It is fixed,
	/// read-only data shared by every generator in the process.
	pub fn successors(self) -> &'static [WordType] {
		use WordType::*;
		match self {
			SingularNoun | PluralNoun => &[Adverb, Verb, Pronoun, Conjunction],
			Verb => &[
				SingularNoun,
				PluralNoun,
				Preposition,
				Adjective,
				Conjunction,
				SingularArticle,
				PluralArticle,
			],
			Adjective => &[SingularNoun, PluralNoun],
			Adverb => &[Verb],
			Preposition => &[SingularNoun, PluralNoun, Adverb, Adjective, Verb],
			Pronoun => &[Verb, Adverb, Conjunction],
			Conjunction => &[
				SingularNoun,
				PluralNoun,
				Pronoun,
				Verb,
				SingularArticle,
				PluralArticle,
			],
			SingularArticle => &[SingularNoun, Adjective],
			PluralArticle => &[PluralNoun, Adjective],
			Interjection => &[
				SingularNoun,
				PluralNoun,
				Preposition,
				Adjective,
				Conjunction,
				SingularArticle,
				PluralArticle,
			],
		}
	}

	/// Classifies a part-of-speech tag into a word type.
	///
	/// Tags are short marker strings interpreted by substring containment
	/// (see http://wordlist.aspell.net/pos-readme). Markers are not
	/// mutually exclusive, so the rules are applied in a fixed order and
	/// the first match wins:
	///
	/// 1. determiner or indefinite-article markers (`D`, `I`)
	/// 2. noun-class markers (`N`, plus the `h` and `o` subtypes)
	/// 3. verb-class markers (`V`, plus transitive `t` and intransitive `i`)
	/// 4. adjective `A`, then adverb `v`, then conjunction `C`
	/// 5. preposition (`p`, `P`), pronoun `r`, interjection `!`
	///
	/// Plurality (marker `p` or `P`, either case accepted) only applies to
	/// tags already in the noun or determiner class. Returns `None` when no
	/// rule matches.
	pub fn classify(tag: &str) -> Option<WordType> {
		let noun_class = tag.contains('N') || tag.contains('D') || tag.contains('I');
		let plural = noun_class && (tag.contains('p') || tag.contains('P'));

		if tag.contains('D') || tag.contains('I') {
			Some(if plural {
				WordType::PluralArticle
			} else {
				WordType::SingularArticle
			})
		} else if tag.contains('N') || tag.contains('h') || tag.contains('o') {
			Some(if plural {
				WordType::PluralNoun
			} else {
				WordType::SingularNoun
			})
		} else if tag.contains('V') || tag.contains('t') || tag.contains('i') {
			Some(WordType::Verb)
		} else if tag.contains('A') {
			Some(WordType::Adjective)
		} else if tag.contains('v') {
			Some(WordType::Adverb)
		} else if tag.contains('C') {
			Some(WordType::Conjunction)
		} else if tag.contains('p') || tag.contains('P') {
			Some(WordType::Preposition)
		} else if tag.contains('r') {
			Some(WordType::Pronoun)
		} else if tag.contains('!') {
			Some(WordType::Interjection)
		} else {
			None
		}
	}
}

impl fmt::Display for WordType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classifies_singular_and_plural_nouns() {
		assert_eq!(WordType::classify("N"), Some(WordType::SingularNoun));
		assert_eq!(WordType::classify("Ns"), Some(WordType::SingularNoun));
		assert_eq!(WordType::classify("Np"), Some(WordType::PluralNoun));
		assert_eq!(WordType::classify("NP"), Some(WordType::PluralNoun));
		assert_eq!(WordType::classify("h"), Some(WordType::SingularNoun));
		assert_eq!(WordType::classify("o"), Some(WordType::SingularNoun));
	}

	#[test]
	fn determiners_win_over_nouns() {
		assert_eq!(WordType::classify("DN"), Some(WordType::SingularArticle));
		assert_eq!(WordType::classify("I"), Some(WordType::SingularArticle));
		assert_eq!(WordType::classify("Dp"), Some(WordType::PluralArticle));
	}

	#[test]
	fn nouns_win_over_verbs() {
		assert_eq!(WordType::classify("Nt"), Some(WordType::SingularNoun));
		assert_eq!(WordType::classify("V"), Some(WordType::Verb));
		assert_eq!(WordType::classify("t"), Some(WordType::Verb));
		assert_eq!(WordType::classify("i"), Some(WordType::Verb));
	}

	#[test]
	fn plurality_needs_a_noun_class_tag() {
		// A bare plural marker is a preposition tag, not a plural noun.
		assert_eq!(WordType::classify("p"), Some(WordType::Preposition));
		assert_eq!(WordType::classify("P"), Some(WordType::Preposition));
	}

	#[test]
	fn remaining_markers() {
		assert_eq!(WordType::classify("A"), Some(WordType::Adjective));
		assert_eq!(WordType::classify("v"), Some(WordType::Adverb));
		assert_eq!(WordType::classify("C"), Some(WordType::Conjunction));
		assert_eq!(WordType::classify("r"), Some(WordType::Pronoun));
		assert_eq!(WordType::classify("!"), Some(WordType::Interjection));
		assert_eq!(WordType::classify("zz"), None);
		assert_eq!(WordType::classify(""), None);
	}

	#[test]
	fn grammar_table_rows() {
		use WordType::*;
		assert_eq!(SingularNoun.successors(), vec![Adverb, Verb, Pronoun, Conjunction]);
		assert_eq!(PluralNoun.successors(), SingularNoun.successors());
		assert_eq!(Adverb.successors(), vec![Verb]);
		assert_eq!(Adjective.successors(), vec![SingularNoun, PluralNoun]);
		assert_eq!(SingularArticle.successors(), vec![SingularNoun, Adjective]);
		assert_eq!(PluralArticle.successors(), vec![PluralNoun, Adjective]);
	}

	#[test]
	fn every_type_has_successors_within_the_set() {
		for word_type in WordType::ALL {
			let successors = word_type.successors();
			assert!(!successors.is_empty());
			for next in successors {
				assert!(WordType::ALL.contains(next));
			}
		}
	}
}
