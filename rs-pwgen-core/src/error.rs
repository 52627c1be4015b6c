use thiserror::Error;

/// Errors produced while configuring or running a password generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// Length bounds are inverted or zero.
	#[error("invalid length bounds: minimum ({min}) must be > 0 and not larger than maximum ({max})")]
	InvalidBounds { min: usize, max: usize },

	/// A percentile option is outside `0..=100`.
	#[error("{name} must be between 0 and 100, got {value}")]
	InvalidChance { name: &'static str, value: u8 },

	/// A table required for generation has no entries.
	#[error("table '{0}' must not be empty")]
	EmptyTable(&'static str),

	/// A textual double-letter list contained an empty token.
	#[error("invalid token '{token}' in table '{table}'")]
	InvalidToken { table: &'static str, token: String },

	/// Digits and the special character quota alone exceed the maximum length.
	#[error("digits and special characters need {required} characters, more than the maximum length ({max})")]
	ImpossibleLength { required: usize, max: usize },

	/// Rare-letter rejection sampling did not accept a draw in time.
	///
	/// This points at a configuration where (almost) every entry of a table
	/// is rare while the acceptance chance is 0.
	#[error("gave up drawing a {kind} after {attempts} rejected attempts")]
	ExhaustedRetries { kind: &'static str, attempts: usize },

	/// Full regeneration never produced a password within bounds.
	///
	/// Bounds that leave little room besides the digits and special
	/// characters (5/5 with the default alphabet) hit this on some seeds.
	#[error("no password within bounds after {attempts} regenerations")]
	UnsatisfiableConfiguration { attempts: usize },
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
