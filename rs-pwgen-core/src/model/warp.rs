use super::alphabet::Alphabet;
use super::random::RandomSource;

/// Lower-cases a single character, keeping it when the lower-case form is
/// not a single character.
fn lower(c: char) -> char {
	let mut lowered = c.to_lowercase();
	match (lowered.next(), lowered.next()) {
		(Some(l), None) => l,
		_ => c,
	}
}

/// Rewrites characters of `password` for obfuscation.
///
/// # Behavior
/// - Characters in `always_replace_chars` (exact match) are always replaced,
///   the first character included.
/// - Other characters whose lower-case form is in `warp_characters_map` are
///   replaced when a draw in `[0, 100]` is below `warp_characters_chance`.
///   The first character is never warped this way.
pub(crate) fn warp<R: RandomSource>(alphabet: &Alphabet, password: &str, rng: &mut R) -> String {
	let chance = usize::from(alphabet.warp_characters_chance());
	let mut warped = String::with_capacity(password.len());

	for c in password.chars() {
		let replacement = match alphabet.always_replace_chars().get(&c) {
			Some(&always) => always,
			None if warped.is_empty() => c,
			None => match alphabet.warp_characters_map().get(&lower(c)) {
				Some(&mapped) if rng.draw_int(0, 100) < chance => mapped,
				_ => c,
			},
		};
		warped.push(replacement);
	}

	warped
}
