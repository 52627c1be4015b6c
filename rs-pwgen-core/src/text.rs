use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Splits a character run into single letters.
///
/// Example: `"bcdf"` → `['b', 'c', 'd', 'f']`
///
/// Whitespace is ignored so that `"b c d"` is accepted as well.
pub(crate) fn split_letters(input: &str) -> Vec<char> {
	input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits a whitespace separated token list.
///
/// Example: `"bl br cl"` → `["bl", "br", "cl"]`
///
/// Any single whitespace character separates tokens. An empty (or blank)
/// input yields an empty list.
///
/// # Errors
/// Returns `InvalidToken` if two separators follow each other.
pub(crate) fn split_tokens(table: &'static str, input: &str) -> Result<Vec<String>> {
	let input = input.trim();
	if input.is_empty() {
		return Ok(Vec::new());
	}

	input
		.split(char::is_whitespace)
		.map(|token| {
			if token.is_empty() {
				Err(Error::InvalidToken { table, token: token.to_owned() })
			} else {
				Ok(token.to_owned())
			}
		})
		.collect()
}

/// Sorted, deduplicated union of two token tables.
pub(crate) fn sorted_union(first: &[String], second: &[String]) -> Vec<String> {
	first
		.iter()
		.chain(second)
		.cloned()
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect()
}

/// Upper-cases the first character of `unit`, leaving the rest untouched.
pub(crate) fn title_case(unit: &str) -> String {
	let mut chars = unit.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn letters_skip_whitespace() {
		assert_eq!(split_letters("ab c"), vec!['a', 'b', 'c']);
		assert_eq!(split_letters("æøå"), vec!['æ', 'ø', 'å']);
	}

	#[test]
	fn tokens_from_space_separated_list() {
		assert_eq!(split_tokens("t", "bl br cl").unwrap(), vec!["bl", "br", "cl"]);
		assert!(split_tokens("t", "  ").unwrap().is_empty());
		assert_eq!(
			split_tokens("t", "bl  br"),
			Err(Error::InvalidToken { table: "t", token: String::new() })
		);
	}

	#[test]
	fn tokens_split_on_tabs_and_newlines() {
		assert_eq!(split_tokens("t", "bl\tbr").unwrap(), vec!["bl", "br"]);
		assert_eq!(split_tokens("t", "bl\nbr cl").unwrap(), vec!["bl", "br", "cl"]);
		assert_eq!(
			split_tokens("t", "bl\t br"),
			Err(Error::InvalidToken { table: "t", token: String::new() })
		);
	}

	#[test]
	fn union_is_sorted_and_deduplicated() {
		let first = vec!["br".to_owned(), "bl".to_owned()];
		let second = vec!["ck".to_owned(), "br".to_owned()];
		assert_eq!(sorted_union(&first, &second), vec!["bl", "br", "ck"]);
	}

	#[test]
	fn title_case_first_char_only() {
		assert_eq!(title_case("blau"), "Blau");
		assert_eq!(title_case("øy"), "Øy");
		assert_eq!(title_case(""), "");
	}
}
