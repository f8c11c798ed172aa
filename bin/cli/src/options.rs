// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use commitsort_core::{Direction, Error};

pub const USAGE: &str = "\
usage: commitsort [--order asc|desc|both] [--log] [--json] [VALUES...]

Sorts VALUES, or whitespace separated values read from stdin when none are given.
Each value is read as an integer, then a float, then a boolean, and otherwise as text.

options:
  --order <ORDER>  asc, desc or both (default: both)
  --log            print the commit log
  --json           print one JSON object instead of text
  -h, --help       print this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
	Single(Direction),
	#[default]
	Both,
}

impl FromStr for Order {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.trim().eq_ignore_ascii_case("both") {
			return Ok(Order::Both);
		}
		s.parse().map(Order::Single)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
	#[error("option `{flag}` needs a value")]
	MissingValue {
		flag: String,
	},

	#[error("unknown option `{flag}`")]
	UnknownFlag {
		flag: String,
	},

	#[error(transparent)]
	InvalidOrder(#[from] Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
	pub order: Order,
	pub log: bool,
	pub json: bool,
	pub help: bool,
	/// Raw value tokens; empty means read stdin.
	pub values: Vec<String>,
}

impl Options {
	/// Parses the arguments following the program name.
	///
	/// Anything after `--` is a value, and so is any token starting with a
	/// single `-`, which keeps negative numbers usable.
	pub fn parse<I, S>(args: I) -> Result<Self, OptionsError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut options = Options::default();
		let mut args = args.into_iter().map(Into::into);
		let mut flags_done = false;

		while let Some(arg) = args.next() {
			if flags_done {
				options.values.push(arg);
				continue;
			}

			match arg.as_str() {
				"--" => flags_done = true,
				"-h" | "--help" => options.help = true,
				"--log" => options.log = true,
				"--json" => options.json = true,
				"--order" => {
					let value = args.next().ok_or_else(|| OptionsError::MissingValue {
						flag: arg.clone(),
					})?;
					options.order = value.parse()?;
				}
				flag if flag.starts_with("--order=") => {
					options.order = flag["--order=".len()..].parse()?;
				}
				flag if flag.starts_with("--") => {
					return Err(OptionsError::UnknownFlag {
						flag: flag.to_string(),
					});
				}
				_ => options.values.push(arg),
			}
		}

		Ok(options)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let options = Options::parse(Vec::<String>::new()).unwrap();
		assert_eq!(options, Options::default());
		assert_eq!(options.order, Order::Both);
	}

	#[test]
	fn test_flags_and_values() {
		let options = Options::parse(["--order", "desc", "--log", "5", "-3", "apple"]).unwrap();
		assert_eq!(options.order, Order::Single(Direction::Descending));
		assert!(options.log);
		assert!(!options.json);
		assert_eq!(options.values, vec!["5", "-3", "apple"]);
	}

	#[test]
	fn test_inline_order_and_separator() {
		let options = Options::parse(["--order=ASC", "--json", "--", "--log"]).unwrap();
		assert_eq!(options.order, Order::Single(Direction::Ascending));
		assert!(options.json);
		assert!(!options.log);
		assert_eq!(options.values, vec!["--log"]);
	}

	#[test]
	fn test_invalid_order() {
		let err = Options::parse(["--order", "sideways"]).unwrap_err();
		assert!(matches!(err, OptionsError::InvalidOrder(Error::InvalidDirection { .. })));
	}

	#[test]
	fn test_missing_order_value() {
		let err = Options::parse(["--order"]).unwrap_err();
		assert!(matches!(err, OptionsError::MissingValue { .. }));
	}

	#[test]
	fn test_unknown_flag() {
		let err = Options::parse(["--fast"]).unwrap_err();
		assert!(matches!(err, OptionsError::UnknownFlag { flag } if flag == "--fast"));
	}
}
