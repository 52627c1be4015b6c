use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers used by every generation step.
///
/// Implementations only need uniform sampling. None of the sources in this
/// crate promise cryptographic unpredictability; wrap a CSPRNG in
/// [`RngSource`] when that property is required.
pub trait RandomSource {
	/// Returns an integer in `[low, high]` (inclusive).
	///
	/// Callers guarantee `low <= high`.
	fn draw_int(&mut self, low: usize, high: usize) -> usize;

	/// Draws a uniformly chosen element of `items`.
	///
	/// Returns `None` if `items` is empty (no draw is consumed).
	fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
	where
		Self: Sized,
	{
		if items.is_empty() {
			return None;
		}
		items.get(self.draw_int(0, items.len() - 1))
	}
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
	fn draw_int(&mut self, low: usize, high: usize) -> usize {
		(**self).draw_int(low, high)
	}
}

/// Adapter turning any `rand::Rng` into a [`RandomSource`].
///
/// Example with the operating system CSPRNG:
/// `RngSource(rand::rngs::OsRng.unwrap_err())`
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
	fn draw_int(&mut self, low: usize, high: usize) -> usize {
		self.0.random_range(low..=high)
	}
}

/// Default source, backed by the thread-local generator of `rand`.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
	/// Handle to the thread-local generator.
	pub fn new() -> Self {
		Self(rand::rng())
	}
}

impl RandomSource for ThreadRandom {
	fn draw_int(&mut self, low: usize, high: usize) -> usize {
		self.0.random_range(low..=high)
	}
}

/// Re-seedable source for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
	seed: u64,
	rng: StdRng,
}

impl SeededRandom {
	/// Creates a source that replays the same sequence for the same `seed`.
	pub fn new(seed: u64) -> Self {
		Self { seed, rng: StdRng::seed_from_u64(seed) }
	}

	/// Creates a source seeded from the current time.
	pub fn from_time() -> Self {
		let seed = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|elapsed| elapsed.as_nanos() as u64)
			.unwrap_or_default();
		Self::new(seed)
	}

	/// Returns the seed in use.
	pub fn seed(&self) -> u64 {
		self.seed
	}

	/// Restarts the sequence from `seed`.
	pub fn reseed(&mut self, seed: u64) {
		*self = Self::new(seed);
	}
}

impl RandomSource for SeededRandom {
	fn draw_int(&mut self, low: usize, high: usize) -> usize {
		self.rng.random_range(low..=high)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn draws_stay_in_inclusive_range() {
		let mut rng = SeededRandom::new(7);
		for _ in 0..1000 {
			let value = rng.draw_int(3, 5);
			assert!((3..=5).contains(&value));
		}
		assert_eq!(rng.draw_int(4, 4), 4);
	}

	#[test]
	fn reseed_replays_sequence() {
		let mut rng = SeededRandom::new(42);
		let first: Vec<usize> = (0..16).map(|_| rng.draw_int(0, 100)).collect();
		rng.reseed(42);
		let second: Vec<usize> = (0..16).map(|_| rng.draw_int(0, 100)).collect();
		assert_eq!(first, second);
		assert_eq!(rng.seed(), 42);
	}

	#[test]
	fn pick_empty_returns_none() {
		let mut rng = ThreadRandom::new();
		let empty: [char; 0] = [];
		assert_eq!(rng.pick(&empty), None);
		assert_eq!(rng.pick(&['x']), Some(&'x'));
	}

	#[test]
	fn rng_adapter() {
		let mut rng = RngSource(StdRng::seed_from_u64(1));
		assert!(rng.draw_int(0, 9) <= 9);
	}
}
