use super::alphabet::Alphabet;
use super::random::RandomSource;
use super::state::State;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Appends special characters until the password holds at least
/// `num_special_chars` of them. Existing ones (from warping) count.
pub(crate) fn add_special_chars<R: RandomSource>(alphabet: &Alphabet, state: &mut State, rng: &mut R) {
	let mut count = state.password().chars().filter(|c| alphabet.is_special(*c)).count();

	while count < alphabet.num_special_chars() {
		match rng.pick(alphabet.special_chars()) {
			Some(&special) => state.push(special),
			None => return,
		}
		count += 1;
	}
}

/// Appends `count` random digits.
pub(crate) fn add_digits<R: RandomSource>(count: usize, state: &mut State, rng: &mut R) {
	for _ in 0..count {
		let digit = rng.draw_int(0, 9).min(9);
		state.push(DIGITS[digit]);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::random::stubs::{LowestRandom, ScriptedRandom};

	#[test]
	fn specials_fill_up_to_quota() {
		let alphabet = Alphabet::default();
		let mut state = State::new(8);
		state.push_unit("Bab@");

		let mut rng = ScriptedRandom::new(&[9]);
		add_special_chars(&alphabet, &mut state, &mut rng);
		assert_eq!(state.password(), "Bab@?");
		assert_eq!(rng.requests, vec![(0, 9)]);
	}

	#[test]
	fn specials_already_present() {
		let alphabet = Alphabet::default();
		let mut state = State::new(8);
		state.push_unit("B@b$");

		add_special_chars(&alphabet, &mut state, &mut LowestRandom);
		assert_eq!(state.password(), "B@b$");
	}

	#[test]
	fn digits_are_appended() {
		let mut state = State::new(8);
		state.push_unit("Ba");

		let mut rng = ScriptedRandom::new(&[4, 2, 9]);
		add_digits(3, &mut state, &mut rng);
		assert_eq!(state.password(), "Ba429");
		assert!(rng.requests.iter().all(|r| *r == (0, 9)));
	}
}
