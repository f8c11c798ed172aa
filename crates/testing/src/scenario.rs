// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Scenario files describe one sort run and its expected outputs.
//!
//! Each non-empty line that does not start with `#` is `key: value`:
//!
//! ```text
//! # worked example
//! input: 5 3 8 3 9 1 5
//! counts: 5=2 3=2 8=1 9=1 1=1
//! min: 5 3 1
//! max: 8 9
//! unique: 1 3 5 8 9
//! ascending: 1 3 3 5 5 8 9
//! descending: 9 8 5 5 3 3 1
//! ```
//!
//! `log` holds the rendered commit log entries joined by `, `, and `error`
//! holds the diagnostic code the run must fail with. Every key except
//! `input` is optional; only the keys present are checked. Values on one
//! line are parsed together with [`Value::parse_all`].

use std::str::FromStr;

use commitsort_type::{Error, Value};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
	#[error("line {line}: expected `key: value`")]
	MalformedLine {
		line: usize,
	},

	#[error("line {line}: unknown key `{key}`")]
	UnknownKey {
		line: usize,
		key: String,
	},

	#[error("line {line}: key `{key}` given twice")]
	DuplicateKey {
		line: usize,
		key: String,
	},

	#[error("line {line}: invalid count `{token}`")]
	InvalidCount {
		line: usize,
		token: String,
	},

	#[error("line {line}: {source}")]
	InvalidValue {
		line: usize,
		source: Error,
	},

	#[error("scenario has no `input` line")]
	MissingInput,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
	pub input: Vec<Value>,
	pub log: Option<String>,
	pub counts: Option<Vec<(Value, usize)>>,
	pub mins: Option<Vec<Value>>,
	pub maxs: Option<Vec<Value>>,
	pub unique: Option<Vec<Value>>,
	pub ascending: Option<Vec<Value>>,
	pub descending: Option<Vec<Value>>,
	pub error: Option<String>,
}

impl Scenario {
	pub fn parse(source: &str) -> Result<Self, ScenarioError> {
		let mut scenario = Scenario::default();
		let mut input = None;

		for (idx, raw) in source.lines().enumerate() {
			let line = idx + 1;
			let trimmed = raw.trim();
			if trimmed.is_empty() || trimmed.starts_with('#') {
				continue;
			}

			let (key, rest) = trimmed.split_once(':').ok_or(ScenarioError::MalformedLine {
				line,
			})?;
			let key = key.trim();
			let rest = rest.trim();

			let duplicate = || ScenarioError::DuplicateKey {
				line,
				key: key.to_string(),
			};

			match key {
				"input" => set_once(&mut input, parse_values(line, rest)?, duplicate)?,
				"log" => set_once(&mut scenario.log, rest.to_string(), duplicate)?,
				"counts" => set_once(&mut scenario.counts, parse_counts(line, rest)?, duplicate)?,
				"min" => set_once(&mut scenario.mins, parse_values(line, rest)?, duplicate)?,
				"max" => set_once(&mut scenario.maxs, parse_values(line, rest)?, duplicate)?,
				"unique" => set_once(&mut scenario.unique, parse_values(line, rest)?, duplicate)?,
				"ascending" => set_once(&mut scenario.ascending, parse_values(line, rest)?, duplicate)?,
				"descending" => set_once(&mut scenario.descending, parse_values(line, rest)?, duplicate)?,
				"error" => set_once(&mut scenario.error, rest.to_string(), duplicate)?,
				_ => {
					return Err(ScenarioError::UnknownKey {
						line,
						key: key.to_string(),
					});
				}
			}
		}

		scenario.input = input.ok_or(ScenarioError::MissingInput)?;
		Ok(scenario)
	}
}

impl FromStr for Scenario {
	type Err = ScenarioError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Scenario::parse(s)
	}
}

fn set_once<T>(
	slot: &mut Option<T>,
	value: T,
	duplicate: impl FnOnce() -> ScenarioError,
) -> Result<(), ScenarioError> {
	if slot.is_some() {
		return Err(duplicate());
	}
	*slot = Some(value);
	Ok(())
}

fn parse_values(line: usize, rest: &str) -> Result<Vec<Value>, ScenarioError> {
	Value::parse_all(rest.split_whitespace()).map_err(|source| ScenarioError::InvalidValue {
		line,
		source,
	})
}

fn parse_counts(line: usize, rest: &str) -> Result<Vec<(Value, usize)>, ScenarioError> {
	let mut tokens = Vec::new();
	let mut counts = Vec::new();
	for token in rest.split_whitespace() {
		let invalid = || ScenarioError::InvalidCount {
			line,
			token: token.to_string(),
		};
		let (value, count) = token.rsplit_once('=').ok_or_else(invalid)?;
		tokens.push(value);
		counts.push(count.parse::<usize>().map_err(|_| invalid())?);
	}
	Ok(parse_values(line, &tokens.join(" "))?.into_iter().zip(counts).collect())
}
