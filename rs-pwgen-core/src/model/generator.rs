use tracing::debug;

use crate::error::Result;
use crate::model::alphabet::Alphabet;
use crate::model::length::LengthController;
use crate::model::random::{RandomSource, ThreadRandom};

/// High-level pronounceable password generator.
///
/// # Responsibilities
/// - Validate and finalize an `Alphabet` once (derive the "anywhere" tables)
/// - Generate passwords within the configured or one-shot length bounds
///
/// The generator is immutable after construction, so a single instance can
/// be shared between threads; every call owns its own generation state and
/// random source.
#[derive(Clone, Debug)]
pub struct Generator {
	alphabet: Alphabet,
}

impl Generator {
	/// Creates a generator from `alphabet`.
	///
	/// # Behavior
	/// - Validates bounds, chances and required tables.
	/// - Derives unset "anywhere" double-letter tables as the sorted,
	///   deduplicated union of their positional tables.
	///
	/// # Errors
	/// `InvalidBounds`, `InvalidChance`, `EmptyTable` or `ImpossibleLength`.
	pub fn new(mut alphabet: Alphabet) -> Result<Self> {
		alphabet.validate()?;
		alphabet.resolve_anywhere_tables();
		debug!(
			min_length = alphabet.min_length(),
			max_length = alphabet.max_length(),
			"generator ready"
		);
		Ok(Self { alphabet })
	}

	/// Returns the finalized configuration.
	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	/// Generates a password within the configured bounds.
	///
	/// # Errors
	/// - `ExhaustedRetries` when rare-letter rejection never accepts a draw
	/// - `UnsatisfiableConfiguration` when no run fits the bounds. Bounds only
	///   slightly above `digits + num_special_chars` leave few letter pairs to
	///   shorten, so they can fail on some seeds (5/5 with the defaults).
	pub fn generate(&self) -> Result<String> {
		self.generate_with(&mut ThreadRandom::new())
	}

	/// Same as [`Generator::generate`] with a caller supplied random source.
	pub fn generate_with<R: RandomSource>(&self, rng: &mut R) -> Result<String> {
		LengthController::new(&self.alphabet, self.alphabet.min_length(), self.alphabet.max_length())
			.generate(rng)
	}

	/// Generates a password with one-shot bounds.
	///
	/// The bounds are normalized instead of rejected: a zero minimum becomes
	/// 1 and `max_length` is raised to `min_length` when smaller.
	///
	/// # Errors
	/// `ImpossibleLength` if the normalized maximum cannot hold the digits and
	/// special characters, otherwise the same as [`Generator::generate`].
	pub fn create(&self, min_length: usize, max_length: usize) -> Result<String> {
		self.create_with(min_length, max_length, &mut ThreadRandom::new())
	}

	/// Same as [`Generator::create`] with a caller supplied random source.
	pub fn create_with<R: RandomSource>(&self, min_length: usize, max_length: usize, rng: &mut R) -> Result<String> {
		let min_length = min_length.max(1);
		let max_length = max_length.max(min_length);
		self.alphabet.check_reserved(max_length)?;
		LengthController::new(&self.alphabet, min_length, max_length).generate(rng)
	}

	/// Generates `count` passwords within the configured bounds.
	pub fn generate_many(&self, count: usize) -> Result<Vec<String>> {
		let mut rng = ThreadRandom::new();
		(0..count).map(|_| self.generate_with(&mut rng)).collect()
	}
}
