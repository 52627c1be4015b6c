//! Pronounceable password generation library.
//!
//! This crate builds passwords out of syllable units (alternating consonants
//! and vowels) and then obfuscates them:
//! - Double-letter clusters with position dependent tables
//! - Rare letters drawn with a reduced probability
//! - Leet-style warping and unconditional replacements
//! - Special character quota and trailing digits
//! - Length fitting by shortening or full regeneration
//!
//! The random sources shipped here give no cryptographic guarantee. Wrap a
//! CSPRNG in [`model::random::RngSource`] when that matters.
//!
//! ```no_run
//! let password = rs_pwgen_core::create(8, 12)?;
//! # Ok::<(), rs_pwgen_core::Error>(())
//! ```

/// Alphabet configuration and the generation pipeline.
pub mod model;

/// Error type shared by configuration and generation.
pub mod error;

/// Textual list helpers (letter runs, token lists, sorting).
///
/// Not exposed
pub(crate) mod text;

pub use error::{Error, Result};
pub use model::alphabet::{Alphabet, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use model::generator::Generator;
pub use model::random::{RandomSource, RngSource, SeededRandom, ThreadRandom};

/// Creates a password with the default alphabet.
///
/// Bounds are normalized like [`Generator::create`]; the documented defaults
/// are [`DEFAULT_MIN_LENGTH`] and [`DEFAULT_MAX_LENGTH`].
pub fn create(min_length: usize, max_length: usize) -> Result<String> {
	Generator::new(Alphabet::default())?.create(min_length, max_length)
}
