use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::{sorted_union, split_letters, split_tokens};

/// Default minimum password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Default maximum password length.
pub const DEFAULT_MAX_LENGTH: usize = 12;

const CONSONANTS: &str = "bcdfghjklmnprstvwxz";
const VOWELS: &str = "aeiouy";
const SPECIAL_CHARS: &str = "!@#$%&*-+?";
const RARE_CHARACTERS: &str = "lqwxz";

const ALWAYS_REPLACE: &[(char, char)] = &[('O', '0')];

const WARP_MAP: &[(char, char)] = &[
	('a', '@'),
	('e', '3'),
	('i', '!'),
	('l', '|'),
	('o', '0'),
	('s', '$'),
	('t', '+'),
	('x', '%'),
	('7', '/'),
];

const DOUBLE_CONSONANTS_FIRST: &str = "bl br cl cr cv dr fl fr fs fj gl gr kl kr kj kv \
	pl pr ps pj sc sh sk sl sm sn sp st sv sw tj tr ts tv tw tz vl vr wl wr \
	zk zl zm zn zp zt zv";

const DOUBLE_CONSONANTS_AFTER_VOWEL: &str = "ck dv fk fp fs ft gs \
	lb lc ld lf lg lk lm ln lp ls lv lw lz md mg ml mn ms mt mx nd ng nl ns nt nx \
	pc pk px rb rd rf rm rn rp rs rv rw rz tf vc vd vg vj vl vt vx vz wd wg wt wx wz";

const DOUBLE_VOWELS_FIRST: &str = "ai au ay ei eu ey io iu oi ua uo ya ye yo yu";

const DOUBLE_VOWELS_AFTER_CONSONANT: &str = "ia ie oe ue ui";

/// Letter class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
	/// Listed in `consonants`.
	Consonant,
	/// Listed in `vowels`.
	Vowel,
	/// Anything else: upper-case letters, digits, symbols.
	Neither,
}

/// Alphabet tables and composition options used to build passwords.
///
/// Every option has a getter and a setter. List setters come in two forms:
/// a prepared list, or a compact textual form (`*_str`): a character run for
/// single-letter sets (`"bcdfg"`), a space separated list for double-letter
/// tables (`"bl br cl"`).
///
/// The type is (de)serializable with camelCase keys; missing fields take
/// their defaults, so an external loader can override only what it needs.
///
/// # Invariants
/// - `min_length > 0` and `min_length <= max_length` (enforced by the setters,
///   checked again when a generator is built from a deserialized value)
/// - Chances are percentiles in `0..=100`
/// - An `*_anywhere` table set to `None` is derived when a generator is built
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Alphabet {
	consonants: Vec<char>,
	vowels: Vec<char>,
	special_chars: Vec<char>,
	/// Exact (case sensitive) unconditional replacements.
	always_replace_chars: BTreeMap<char, char>,
	/// Lower-case keyed replacements applied with `warp_characters_chance`.
	warp_characters_map: BTreeMap<char, char>,
	warp_characters_chance: u8,
	rare_characters: Vec<char>,
	/// Chance (percent) that a drawn rare character is kept.
	rare_characters_chance: u8,
	double_consonants_first: Vec<String>,
	double_consonants_after_vowel: Vec<String>,
	double_consonants_anywhere: Option<Vec<String>>,
	double_vowels_first: Vec<String>,
	double_vowels_after_consonant: Vec<String>,
	double_vowels_anywhere: Option<Vec<String>>,
	digits: usize,
	num_special_chars: usize,
	min_length: usize,
	max_length: usize,
}

impl Default for Alphabet {
	fn default() -> Self {
		let tokens = |list: &str| -> Vec<String> { list.split_whitespace().map(str::to_owned).collect() };
		Self {
			consonants: split_letters(CONSONANTS),
			vowels: split_letters(VOWELS),
			special_chars: split_letters(SPECIAL_CHARS),
			always_replace_chars: ALWAYS_REPLACE.iter().copied().collect(),
			warp_characters_map: WARP_MAP.iter().copied().collect(),
			warp_characters_chance: 75,
			rare_characters: split_letters(RARE_CHARACTERS),
			rare_characters_chance: 30,
			double_consonants_first: tokens(DOUBLE_CONSONANTS_FIRST),
			double_consonants_after_vowel: tokens(DOUBLE_CONSONANTS_AFTER_VOWEL),
			double_consonants_anywhere: None,
			double_vowels_first: tokens(DOUBLE_VOWELS_FIRST),
			double_vowels_after_consonant: tokens(DOUBLE_VOWELS_AFTER_CONSONANT),
			double_vowels_anywhere: None,
			digits: 2,
			num_special_chars: 2,
			min_length: DEFAULT_MIN_LENGTH,
			max_length: DEFAULT_MAX_LENGTH,
		}
	}
}

/// Sorts and deduplicates an explicit "anywhere" table; empty means unset.
fn normalize_anywhere(table: Option<Vec<String>>) -> Option<Vec<String>> {
	table.filter(|t| !t.is_empty()).map(|t| sorted_union(&t, &[]))
}

fn check_chance(name: &'static str, value: u8) -> Result<u8> {
	if value > 100 {
		return Err(Error::InvalidChance { name, value });
	}
	Ok(value)
}

fn check_bounds(min: usize, max: usize) -> Result<()> {
	if min == 0 || min > max {
		return Err(Error::InvalidBounds { min, max });
	}
	Ok(())
}

impl Alphabet {
	/// Single consonants drawn when no double consonant is chosen.
	pub fn consonants(&self) -> &[char] {
		&self.consonants
	}

	/// Sets the single consonants.
	pub fn set_consonants(&mut self, consonants: Vec<char>) {
		self.consonants = consonants;
	}

	/// Sets consonants from a run of letters, like `"bcdfghjklmnpqrstvwxz"`.
	pub fn set_consonants_str(&mut self, consonants: &str) {
		self.consonants = split_letters(consonants);
	}

	/// Single vowels drawn when no double vowel is chosen.
	pub fn vowels(&self) -> &[char] {
		&self.vowels
	}

	/// Sets the single vowels.
	pub fn set_vowels(&mut self, vowels: Vec<char>) {
		self.vowels = vowels;
	}

	/// Sets vowels from a run of letters, like `"aeiouy"`.
	pub fn set_vowels_str(&mut self, vowels: &str) {
		self.vowels = split_letters(vowels);
	}

	/// Characters appended to reach the special character quota.
	pub fn special_chars(&self) -> &[char] {
		&self.special_chars
	}

	/// Sets the special characters.
	pub fn set_special_chars(&mut self, special_chars: Vec<char>) {
		self.special_chars = special_chars;
	}

	/// Sets special characters from a run, like `"!@#$"`.
	pub fn set_special_chars_str(&mut self, special_chars: &str) {
		self.special_chars = split_letters(special_chars);
	}

	/// Case sensitive map of characters that are always replaced.
	pub fn always_replace_chars(&self) -> &BTreeMap<char, char> {
		&self.always_replace_chars
	}

	/// Sets the case sensitive map of characters that are always replaced.
	pub fn set_always_replace_chars(&mut self, map: BTreeMap<char, char>) {
		self.always_replace_chars = map;
	}

	/// Map of characters warped with `warp_characters_chance`.
	pub fn warp_characters_map(&self) -> &BTreeMap<char, char> {
		&self.warp_characters_map
	}

	/// Sets the warp map. Keys are matched against the lower-cased character.
	pub fn set_warp_characters_map(&mut self, map: BTreeMap<char, char>) {
		self.warp_characters_map = map;
	}

	/// Percentile chance of warping an eligible character.
	pub fn warp_characters_chance(&self) -> u8 {
		self.warp_characters_chance
	}

	/// Sets the percentile chance of warping an eligible character.
	/// 0 disables warping, 100 always warps.
	///
	/// # Errors
	/// Returns `InvalidChance` above 100.
	pub fn set_warp_characters_chance(&mut self, chance: u8) -> Result<()> {
		self.warp_characters_chance = check_chance("warpCharactersChance", chance)?;
		Ok(())
	}

	/// Letters drawn with a reduced probability.
	pub fn rare_characters(&self) -> &[char] {
		&self.rare_characters
	}

	/// Sets the rare characters. An empty list disables the effect.
	pub fn set_rare_characters(&mut self, rare: Vec<char>) {
		self.rare_characters = rare;
	}

	/// Sets rare characters from a run, like `"lqwxz"`.
	pub fn set_rare_characters_str(&mut self, rare: &str) {
		self.rare_characters = split_letters(rare);
	}

	/// Percentile chance of a drawn rare character being kept.
	pub fn rare_characters_chance(&self) -> u8 {
		self.rare_characters_chance
	}

	/// Sets the percentile chance of a drawn rare character being kept.
	/// 0 never keeps them, 100 disables the effect.
	///
	/// # Errors
	/// Returns `InvalidChance` above 100.
	pub fn set_rare_characters_chance(&mut self, chance: u8) -> Result<()> {
		self.rare_characters_chance = check_chance("rareCharactersChance", chance)?;
		Ok(())
	}

	/// Double consonants only used in the first unit.
	pub fn double_consonants_first(&self) -> &[String] {
		&self.double_consonants_first
	}

	/// Sets the double consonants used in the first unit.
	pub fn set_double_consonants_first(&mut self, table: Vec<String>) {
		self.double_consonants_first = table;
	}

	/// Sets the table from a space separated list, like `"bl br cl"`.
	pub fn set_double_consonants_first_str(&mut self, table: &str) -> Result<()> {
		self.double_consonants_first = split_tokens("doubleConsonantsFirst", table)?;
		Ok(())
	}

	/// Double consonants only used after a vowel.
	pub fn double_consonants_after_vowel(&self) -> &[String] {
		&self.double_consonants_after_vowel
	}

	/// Sets the double consonants used after a vowel.
	pub fn set_double_consonants_after_vowel(&mut self, table: Vec<String>) {
		self.double_consonants_after_vowel = table;
	}

	/// Sets the table from a space separated list, like `"ck nd rs"`.
	pub fn set_double_consonants_after_vowel_str(&mut self, table: &str) -> Result<()> {
		self.double_consonants_after_vowel = split_tokens("doubleConsonantsAfterVowel", table)?;
		Ok(())
	}

	/// Returns `None` until set explicitly or derived by [`Generator::new`].
	///
	/// [`Generator::new`]: crate::model::generator::Generator::new
	pub fn double_consonants_anywhere(&self) -> Option<&[String]> {
		self.double_consonants_anywhere.as_deref()
	}

	/// Sets the table (sorted and deduplicated). `None` or an empty list
	/// marks it unset so it is derived again from the positional tables.
	pub fn set_double_consonants_anywhere(&mut self, table: Option<Vec<String>>) {
		self.double_consonants_anywhere = normalize_anywhere(table);
	}

	/// Sets the table from a space separated list; a blank list marks it unset.
	pub fn set_double_consonants_anywhere_str(&mut self, table: &str) -> Result<()> {
		let table = split_tokens("doubleConsonantsAnywhere", table)?;
		self.set_double_consonants_anywhere(Some(table));
		Ok(())
	}

	/// Double vowels only used in the first unit.
	pub fn double_vowels_first(&self) -> &[String] {
		&self.double_vowels_first
	}

	/// Sets the double vowels used in the first unit.
	pub fn set_double_vowels_first(&mut self, table: Vec<String>) {
		self.double_vowels_first = table;
	}

	/// Sets the table from a space separated list, like `"ai au eu"`.
	pub fn set_double_vowels_first_str(&mut self, table: &str) -> Result<()> {
		self.double_vowels_first = split_tokens("doubleVowelsFirst", table)?;
		Ok(())
	}

	/// Double vowels only used after a consonant.
	pub fn double_vowels_after_consonant(&self) -> &[String] {
		&self.double_vowels_after_consonant
	}

	/// Sets the double vowels used after a consonant.
	pub fn set_double_vowels_after_consonant(&mut self, table: Vec<String>) {
		self.double_vowels_after_consonant = table;
	}

	/// Sets the table from a space separated list, like `"ia ie ue"`.
	pub fn set_double_vowels_after_consonant_str(&mut self, table: &str) -> Result<()> {
		self.double_vowels_after_consonant = split_tokens("doubleVowelsAfterConsonant", table)?;
		Ok(())
	}

	/// Returns `None` until set explicitly or derived by [`Generator::new`].
	///
	/// [`Generator::new`]: crate::model::generator::Generator::new
	pub fn double_vowels_anywhere(&self) -> Option<&[String]> {
		self.double_vowels_anywhere.as_deref()
	}

	/// Same rules as [`Alphabet::set_double_consonants_anywhere`].
	pub fn set_double_vowels_anywhere(&mut self, table: Option<Vec<String>>) {
		self.double_vowels_anywhere = normalize_anywhere(table);
	}

	/// Sets the table from a space separated list; a blank list marks it unset.
	pub fn set_double_vowels_anywhere_str(&mut self, table: &str) -> Result<()> {
		let table = split_tokens("doubleVowelsAnywhere", table)?;
		self.set_double_vowels_anywhere(Some(table));
		Ok(())
	}

	/// Number of digits appended to the password.
	pub fn digits(&self) -> usize {
		self.digits
	}

	/// 0 disables trailing digits.
	pub fn set_digits(&mut self, digits: usize) {
		self.digits = digits;
	}

	/// Minimum number of special characters in the password.
	pub fn num_special_chars(&self) -> usize {
		self.num_special_chars
	}

	/// 0 disables the special character step. Special characters produced
	/// by warping still count towards the quota.
	pub fn set_num_special_chars(&mut self, num_special_chars: usize) {
		self.num_special_chars = num_special_chars;
	}

	/// Minimum password length, in characters.
	pub fn min_length(&self) -> usize {
		self.min_length
	}

	/// Sets the minimum password length.
	///
	/// # Errors
	/// Returns `InvalidBounds` if `min_length` is 0 or above `max_length`.
	pub fn set_min_length(&mut self, min_length: usize) -> Result<()> {
		check_bounds(min_length, self.max_length)?;
		self.min_length = min_length;
		Ok(())
	}

	/// Maximum password length, in characters.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Sets the maximum password length.
	///
	/// # Errors
	/// Returns `InvalidBounds` if `max_length` is below `min_length`.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<()> {
		check_bounds(self.min_length, max_length)?;
		self.max_length = max_length;
		Ok(())
	}

	/// Sets both bounds at once, avoiding ordering issues between the two
	/// single setters.
	pub fn set_lengths(&mut self, min_length: usize, max_length: usize) -> Result<()> {
		check_bounds(min_length, max_length)?;
		self.min_length = min_length;
		self.max_length = max_length;
		Ok(())
	}

	/// Checks what the setters cannot see (deserialized values, tables left
	/// empty).
	pub(crate) fn validate(&self) -> Result<()> {
		check_bounds(self.min_length, self.max_length)?;
		check_chance("warpCharactersChance", self.warp_characters_chance)?;
		check_chance("rareCharactersChance", self.rare_characters_chance)?;
		if self.consonants.is_empty() {
			return Err(Error::EmptyTable("consonants"));
		}
		if self.vowels.is_empty() {
			return Err(Error::EmptyTable("vowels"));
		}
		if self.num_special_chars > 0 && self.special_chars.is_empty() {
			return Err(Error::EmptyTable("specialChars"));
		}
		self.check_reserved(self.max_length)
	}

	/// Digits and the special quota are never removed by shortening, so a
	/// maximum below their sum can never be met.
	///
	/// # Errors
	/// Returns `ImpossibleLength`.
	pub(crate) fn check_reserved(&self, max_length: usize) -> Result<()> {
		let required = self.digits + self.num_special_chars;
		if required > max_length {
			return Err(Error::ImpossibleLength { required, max: max_length });
		}
		Ok(())
	}

	/// Derives unset "anywhere" tables as the sorted, deduplicated union of
	/// their positional tables. Tables already present are sorted and
	/// deduplicated; an empty one (from a deserialized value) counts as unset.
	pub(crate) fn resolve_anywhere_tables(&mut self) {
		self.double_consonants_anywhere = normalize_anywhere(self.double_consonants_anywhere.take());
		self.double_vowels_anywhere = normalize_anywhere(self.double_vowels_anywhere.take());
		if self.double_consonants_anywhere.is_none() {
			self.double_consonants_anywhere =
				Some(sorted_union(&self.double_consonants_first, &self.double_consonants_after_vowel));
		}
		if self.double_vowels_anywhere.is_none() {
			self.double_vowels_anywhere =
				Some(sorted_union(&self.double_vowels_first, &self.double_vowels_after_consonant));
		}
	}

	/// Letter class by exact membership in `consonants` / `vowels`.
	pub fn classify(&self, c: char) -> LetterClass {
		if self.consonants.contains(&c) {
			LetterClass::Consonant
		} else if self.vowels.contains(&c) {
			LetterClass::Vowel
		} else {
			LetterClass::Neither
		}
	}

	pub(crate) fn is_special(&self, c: char) -> bool {
		self.special_chars.contains(&c)
	}

	/// Whether rare-letter rejection applies at all.
	pub(crate) fn rare_filter_active(&self) -> bool {
		self.rare_characters_chance < 100 && !self.rare_characters.is_empty()
	}

	pub(crate) fn is_rare(&self, c: char) -> bool {
		self.rare_characters.contains(&c)
	}
}
