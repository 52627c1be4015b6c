/// Mutable state of a single generation run.
///
/// A `State` is created at the start of a run, threaded through every step
/// and dropped when the run ends (or restarts). It is never shared between
/// runs, which keeps concurrent generations independent.
///
/// ## Invariants
/// - `word_count` is the number of syllable units appended since creation
/// - Lengths are counted in characters, not bytes
#[derive(Clone, Debug)]
pub(crate) struct State {
	/// Password being built.
	password: String,
	/// Number of syllable units emitted so far.
	word_count: usize,
	/// Length drawn for this run, in `[min_length, max_length]`.
	target_length: usize,
}

impl State {
	/// Creates an empty state for a run aiming at `target_length`.
	pub fn new(target_length: usize) -> Self {
		Self {
			password: String::with_capacity(target_length),
			word_count: 0,
			target_length,
		}
	}

	pub fn password(&self) -> &str {
		&self.password
	}

	pub fn into_password(self) -> String {
		self.password
	}

	pub fn word_count(&self) -> usize {
		self.word_count
	}

	pub fn target_length(&self) -> usize {
		self.target_length
	}

	/// Length in characters.
	pub fn len(&self) -> usize {
		self.password.chars().count()
	}

	pub fn last_char(&self) -> Option<char> {
		self.password.chars().next_back()
	}

	/// Appends a syllable unit and counts it.
	pub fn push_unit(&mut self, unit: &str) {
		self.password.push_str(unit);
		self.word_count += 1;
	}

	pub fn push(&mut self, c: char) {
		self.password.push(c);
	}

	/// Keeps the first `length` characters.
	pub fn truncate(&mut self, length: usize) {
		if let Some((index, _)) = self.password.char_indices().nth(length) {
			self.password.truncate(index);
		}
	}

	/// Replaces the whole password (after a transform).
	pub fn replace(&mut self, password: String) {
		self.password = password;
	}
}
