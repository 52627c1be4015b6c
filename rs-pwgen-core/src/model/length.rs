use tracing::{debug, trace, warn};

use super::alphabet::{Alphabet, LetterClass};
use super::finisher::{add_digits, add_special_chars};
use super::random::RandomSource;
use super::state::State;
use super::syllable::SyllableGenerator;
use super::warp::warp;
use crate::error::{Error, Result};

/// Maximum number of full regenerations after the first run.
///
/// Bounds barely above `digits + num_special_chars` can still run out: a short
/// body often has no letter pair left to shorten.
pub const MAX_REGENERATIONS: usize = 64;

/// Drives syllable generation and post-processing so that the password fits
/// `[min_length, max_length]`.
///
/// # Invariants
/// - `alphabet` has been validated and its "anywhere" tables resolved
/// - `0 < min_length <= max_length`
pub(crate) struct LengthController<'a> {
	alphabet: &'a Alphabet,
	syllables: SyllableGenerator<'a>,
	min_length: usize,
	max_length: usize,
}

impl<'a> LengthController<'a> {
	pub fn new(alphabet: &'a Alphabet, min_length: usize, max_length: usize) -> Self {
		Self {
			alphabet,
			syllables: SyllableGenerator::new(alphabet),
			min_length,
			max_length,
		}
	}

	/// Generates a password within bounds.
	///
	/// Each run starts from a fresh `State`. A run that overshoots
	/// `max_length` and cannot be shortened is thrown away and the whole
	/// process restarts.
	///
	/// # Errors
	/// - `ExhaustedRetries` from letter emission
	/// - `UnsatisfiableConfiguration` after `MAX_REGENERATIONS` restarts
	pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Result<String> {
		for regeneration in 0..=MAX_REGENERATIONS {
			let state = self.run(rng)?;
			if let Some(password) = self.fit(state) {
				debug!(length = password.chars().count(), regeneration, "password accepted");
				return Ok(password);
			}
			debug!(regeneration, "overshoot could not be shortened, regenerating");
		}

		warn!(attempts = MAX_REGENERATIONS, "giving up on regeneration");
		Err(Error::UnsatisfiableConfiguration { attempts: MAX_REGENERATIONS })
	}

	/// One pass of the pipeline: body, warp, special characters, digits.
	fn run<R: RandomSource>(&self, rng: &mut R) -> Result<State> {
		let a = self.alphabet;
		let mut state = State::new(rng.draw_int(self.min_length, self.max_length));
		let word_length = state.target_length().saturating_sub(a.digits());
		debug!(target_length = state.target_length(), word_length, "starting run");

		while state.len() < word_length {
			self.syllables.emit_unit(&mut state, rng)?;
		}
		state.truncate(word_length);

		if a.warp_characters_chance() > 0 {
			let warped = warp(a, state.password(), rng);
			state.replace(warped);
		}
		if a.num_special_chars() > 0 {
			add_special_chars(a, &mut state, rng);
		}
		if a.digits() > 0 {
			add_digits(a.digits(), &mut state, rng);
		}

		Ok(state)
	}

	/// Shortens until the password fits; `None` if it cannot.
	fn fit(&self, state: State) -> Option<String> {
		let mut password = state.into_password();
		while password.chars().count() > self.max_length {
			password = shorten(self.alphabet, &password)?;
			trace!(length = password.chars().count(), "shortened");
		}
		Some(password)
	}
}

/// Removes one letter of the last adjacent consonant or vowel pair.
///
/// The password is scanned from the end; the first time a character has the
/// same class (consonant or vowel) as the one scanned just before it, it is
/// removed. Any other character breaks the pair.
///
/// Returns `None` if there is no such pair.
pub(crate) fn shorten(alphabet: &Alphabet, password: &str) -> Option<String> {
	let mut chars: Vec<char> = password.chars().collect();
	let mut previous = LetterClass::Neither;

	for index in (0..chars.len()).rev() {
		let class = alphabet.classify(chars[index]);
		if class != LetterClass::Neither && class == previous {
			chars.remove(index);
			return Some(chars.into_iter().collect());
		}
		previous = class;
	}

	None
}
