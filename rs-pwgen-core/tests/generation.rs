//! Property checks of the public API over many seeded runs.
//!
//! Every test drives `Generator` with `SeededRandom` so failures can be
//! replayed from the seed printed in the assertion message.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use rs_pwgen_core::model::length::MAX_REGENERATIONS;
use rs_pwgen_core::model::syllable::MAX_LETTER_ATTEMPTS;
use rs_pwgen_core::{Alphabet, Error, Generator, RandomSource, SeededRandom};

const SEEDS: u64 = 500;

fn char_len(s: &str) -> usize {
	s.chars().count()
}

#[test]
fn length_stays_within_bounds() {
	for (min, max) in [(8, 12), (6, 6), (4, 9), (14, 20)] {
		let mut alphabet = Alphabet::default();
		alphabet.set_lengths(min, max).unwrap();
		let generator = Generator::new(alphabet).unwrap();

		for seed in 0..SEEDS {
			let password = generator.generate_with(&mut SeededRandom::new(seed)).unwrap();
			let len = char_len(&password);
			assert!(
				(min..=max).contains(&len),
				"seed {seed}: '{password}' has length {len}, expected {min}..={max}"
			);
		}
	}
}

#[test]
fn trailing_digits() {
	let mut alphabet = Alphabet::default();
	alphabet.set_digits(3);
	let generator = Generator::new(alphabet).unwrap();

	for seed in 0..SEEDS {
		let password = generator.generate_with(&mut SeededRandom::new(seed)).unwrap();
		let tail: Vec<char> = password.chars().rev().take(3).collect();
		assert!(tail.iter().all(char::is_ascii_digit), "seed {seed}: '{password}'");
	}
}

#[test]
fn special_character_quota() {
	let mut alphabet = Alphabet::default();
	alphabet.set_num_special_chars(3);
	alphabet.set_lengths(10, 14).unwrap();
	let generator = Generator::new(alphabet).unwrap();
	let specials = generator.alphabet().special_chars().to_vec();

	for seed in 0..SEEDS {
		let password = generator.generate_with(&mut SeededRandom::new(seed)).unwrap();
		let count = password.chars().filter(|c| specials.contains(c)).count();
		assert!(count >= 3, "seed {seed}: '{password}' has {count} special characters");
	}
}

#[test]
fn always_replace_is_unconditional() {
	let mut alphabet = Alphabet::default();
	// Every unit carries an 'o' (or 'O' when title-cased). The warp pass, and
	// with it the replacement map, only runs with a non-zero warp chance.
	alphabet.set_vowels_str("o");
	alphabet.set_double_vowels_first(Vec::new());
	alphabet.set_double_vowels_after_consonant(Vec::new());
	alphabet.set_warp_characters_chance(100).unwrap();
	alphabet.set_always_replace_chars(BTreeMap::from([('O', '0'), ('o', '0')]));
	let generator = Generator::new(alphabet).unwrap();

	for seed in 0..SEEDS {
		let password = generator.generate_with(&mut SeededRandom::new(seed)).unwrap();
		assert!(!password.contains(['o', 'O']), "seed {seed}: '{password}'");
	}
}

#[test]
fn derived_anywhere_tables() {
	let mut alphabet = Alphabet::default();
	alphabet.set_double_consonants_first_str("bl br").unwrap();
	alphabet.set_double_consonants_after_vowel_str("br ck").unwrap();
	alphabet.set_double_vowels_first_str("au ai").unwrap();
	alphabet.set_double_vowels_after_consonant_str("ie ai").unwrap();
	let generator = Generator::new(alphabet).unwrap();
	generator.generate_with(&mut SeededRandom::new(1)).unwrap();

	let owned = |t: &[&str]| t.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();
	assert_eq!(generator.alphabet().double_consonants_anywhere(), Some(&owned(&["bl", "br", "ck"])[..]));
	assert_eq!(generator.alphabet().double_vowels_anywhere(), Some(&owned(&["ai", "au", "ie"])[..]));
}

#[test]
fn rare_chance_zero_with_disjoint_tables() {
	let mut alphabet = Alphabet::default();
	alphabet.set_rare_characters_chance(0).unwrap();
	alphabet.set_consonants_str("bdfgkmnprst");
	alphabet.set_double_consonants_first_str("br dr st").unwrap();
	alphabet.set_double_consonants_after_vowel_str("nd nt rs").unwrap();
	let generator = Generator::new(alphabet).unwrap();

	for seed in 0..SEEDS {
		let password = generator.generate_with(&mut SeededRandom::new(seed)).unwrap();
		assert!(!password.contains(['q', 'w', 'x', 'z']), "seed {seed}: '{password}'");
	}
}

#[test]
fn rare_letters_only_is_a_configuration_error() {
	let mut alphabet = Alphabet::default();
	alphabet.set_rare_characters_chance(0).unwrap();
	alphabet.set_consonants_str("xz");
	alphabet.set_double_consonants_first(Vec::new());
	alphabet.set_double_consonants_after_vowel(Vec::new());
	let generator = Generator::new(alphabet).unwrap();

	assert_eq!(
		generator.generate_with(&mut SeededRandom::new(9)),
		Err(Error::ExhaustedRetries { kind: "consonant", attempts: MAX_LETTER_ATTEMPTS })
	);
}

#[test]
fn too_many_digits_is_rejected_up_front() {
	let mut alphabet = Alphabet::default();
	alphabet.set_lengths(3, 4).unwrap();
	alphabet.set_digits(6);
	assert_eq!(Generator::new(alphabet).unwrap_err(), Error::ImpossibleLength { required: 8, max: 4 });
}

#[test]
fn tight_bounds_fail_cleanly() {
	let mut alphabet = Alphabet::default();
	alphabet.set_lengths(5, 5).unwrap();
	let generator = Generator::new(alphabet).unwrap();

	for seed in 0..SEEDS {
		match generator.generate_with(&mut SeededRandom::new(seed)) {
			Ok(password) => assert_eq!(char_len(&password), 5, "seed {seed}: '{password}'"),
			Err(err) => assert_eq!(err, Error::UnsatisfiableConfiguration { attempts: MAX_REGENERATIONS }, "seed {seed}"),
		}
	}
}

#[test]
fn bounds_setters() {
	let mut alphabet = Alphabet::default();
	alphabet.set_max_length(8).unwrap();
	assert_eq!(alphabet.set_min_length(10), Err(Error::InvalidBounds { min: 10, max: 8 }));

	alphabet.set_max_length(12).unwrap();
	alphabet.set_min_length(10).unwrap();
	assert_eq!(alphabet.min_length(), 10);
}

#[test]
fn same_seed_same_password() {
	let generator = Generator::new(Alphabet::default()).unwrap();
	let mut first = SeededRandom::new(2024);
	let mut second = SeededRandom::new(2024);
	for _ in 0..20 {
		assert_eq!(generator.generate_with(&mut first).unwrap(), generator.generate_with(&mut second).unwrap());
	}
}

/// Always answers with the lower bound.
struct Lowest;

impl RandomSource for Lowest {
	fn draw_int(&mut self, low: usize, _high: usize) -> usize {
		low
	}
}

#[test]
fn lowest_source_is_deterministic() {
	let generator = Generator::new(Alphabet::default()).unwrap();
	assert_eq!(generator.create_with(8, 8, &mut Lowest).unwrap(), "B@b@b@00");
	// min 0 is raised to 1, max to min: no room for 2 digits and 2 specials.
	assert_eq!(generator.create_with(0, 0, &mut Lowest), Err(Error::ImpossibleLength { required: 4, max: 1 }));
}

#[test]
fn shared_between_threads() {
	let generator = Arc::new(Generator::new(Alphabet::default()).unwrap());

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let generator = Arc::clone(&generator);
			thread::spawn(move || generator.generate_many(50))
		})
		.collect();

	for handle in handles {
		let passwords = handle.join().unwrap().unwrap();
		assert_eq!(passwords.len(), 50);
		assert!(passwords.iter().all(|p| (8..=12).contains(&char_len(p))));
	}
}

#[test]
fn free_function_with_defaults() {
	let password = rs_pwgen_core::create(rs_pwgen_core::DEFAULT_MIN_LENGTH, rs_pwgen_core::DEFAULT_MAX_LENGTH).unwrap();
	assert!((8..=12).contains(&char_len(&password)));
}
