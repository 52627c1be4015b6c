use tracing::trace;

use super::alphabet::{Alphabet, LetterClass};
use super::random::RandomSource;
use super::state::State;
use crate::error::{Error, Result};
use crate::text::title_case;

/// Maximum number of rejected draws before a letter emission gives up.
pub const MAX_LETTER_ATTEMPTS: usize = 256;

/// Builds pronounceable syllable units from an `Alphabet`.
///
/// A unit is consonant(s) followed by vowel(s); the very first unit may
/// also open with a vowel. Units are appended to the run `State`.
pub(crate) struct SyllableGenerator<'a> {
	alphabet: &'a Alphabet,
}

impl<'a> SyllableGenerator<'a> {
	/// `alphabet` must have its "anywhere" tables resolved.
	pub fn new(alphabet: &'a Alphabet) -> Self {
		Self { alphabet }
	}

	/// Appends one unit to `state`.
	///
	/// # Behavior
	/// - First unit: 50% chance of a leading vowel, then a consonant.
	/// - Later units: a consonant only if the password ends with a vowel.
	/// - Always ends with a vowel.
	/// - Title-cased when first, otherwise with a 30% chance.
	///
	/// # Errors
	/// Returns `ExhaustedRetries` if rare-letter rejection never accepts.
	pub fn emit_unit<R: RandomSource>(&self, state: &mut State, rng: &mut R) -> Result<()> {
		let first = state.word_count() == 0;
		let mut unit = String::new();

		if first {
			if rng.draw_int(0, 1) == 1 {
				unit.push_str(&self.emit(LetterClass::Vowel, first, rng)?);
			}
			unit.push_str(&self.emit(LetterClass::Consonant, first, rng)?);
		} else if state.last_char().is_some_and(|c| self.alphabet.classify(c) == LetterClass::Vowel) {
			unit.push_str(&self.emit(LetterClass::Consonant, first, rng)?);
		}
		unit.push_str(&self.emit(LetterClass::Vowel, first, rng)?);

		if first || rng.draw_int(1, 100) > 70 {
			unit = title_case(&unit);
		}

		trace!(unit_length = unit.chars().count(), word_count = state.word_count(), "emitted unit");
		state.push_unit(&unit);
		Ok(())
	}

	/// Draws a consonant or vowel token, single or double.
	///
	/// A token containing a rare letter is kept only with
	/// `rare_characters_chance` percent; otherwise it is drawn again.
	fn emit<R: RandomSource>(&self, class: LetterClass, first: bool, rng: &mut R) -> Result<String> {
		let kind = match class {
			LetterClass::Vowel => "vowel",
			_ => "consonant",
		};

		for _ in 0..MAX_LETTER_ATTEMPTS {
			let token = self.draw_token(class, first, rng);
			if !self.rejects(&token, rng) {
				return Ok(token);
			}
		}

		Err(Error::ExhaustedRetries { kind, attempts: MAX_LETTER_ATTEMPTS })
	}

	fn draw_token<R: RandomSource>(&self, class: LetterClass, first: bool, rng: &mut R) -> String {
		let a = self.alphabet;
		let (singles, doubles) = match (class, first) {
			(LetterClass::Vowel, true) => (a.vowels(), a.double_vowels_first()),
			(LetterClass::Vowel, false) => (a.vowels(), a.double_vowels_anywhere().unwrap_or_default()),
			(_, true) => (a.consonants(), a.double_consonants_first()),
			(_, false) => (a.consonants(), a.double_consonants_anywhere().unwrap_or_default()),
		};

		// An empty double table falls back to single letters.
		if rng.draw_int(0, 1) == 1 {
			if let Some(double) = rng.pick(doubles) {
				return double.clone();
			}
		}
		rng.pick(singles).map(|c| c.to_string()).unwrap_or_default()
	}

	/// Checks every letter of `token`; one rejected rare letter rejects it.
	fn rejects<R: RandomSource>(&self, token: &str, rng: &mut R) -> bool {
		if !self.alphabet.rare_filter_active() {
			return false;
		}
		let chance = usize::from(self.alphabet.rare_characters_chance());
		token
			.chars()
			.any(|c| self.alphabet.is_rare(c) && rng.draw_int(1, 100) > chance)
	}
}
