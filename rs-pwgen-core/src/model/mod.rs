//! Top-level module for pronounceable password generation.
//!
//! The generation pipeline, leaf first:
//! - Alphabet tables and options (`Alphabet`)
//! - Uniform integer draws (`RandomSource`)
//! - Syllable units (`SyllableGenerator`, internal)
//! - Length fitting, shortening and regeneration (`LengthController`, internal)
//! - Character warping and the special character / digit finisher (internal)
//! - A high-level generation interface (`Generator`)

/// Alphabet tables, composition options and their validation.
pub mod alphabet;

/// High-level interface validating an `Alphabet` once and generating
/// passwords from it.
pub mod generator;

/// Random source abstraction and its `rand` backed implementations.
pub mod random;

/// Syllable unit builder with double-letter and rare-letter rules.
///
/// Exposes the letter retry limit.
pub mod syllable;

/// Drives syllable generation to a target length, then warps, finishes,
/// shortens or regenerates.
///
/// Exposes the regeneration limit.
pub mod length;

/// Mutable state of a single generation run.
///
/// This module is not exposed publicly.
mod state;

/// Probabilistic and unconditional character substitution.
mod warp;

/// Special character quota and trailing digits.
mod finisher;
