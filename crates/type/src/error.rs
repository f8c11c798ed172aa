// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Error types and diagnostics for the commit-log sort pipeline.

use std::{
	fmt,
	fmt::{Debug, Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::Direction;

/// Result type used across the commit-log sort crates.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("cannot order {left} relative to {right}")]
	Incomparable {
		left: String,
		right: String,
	},

	#[error("value {value} has no entry in the count table")]
	MissingCount {
		value: String,
	},

	#[error("reconstruction produced {actual} distinct values but the count table holds {expected}")]
	UniqueCountMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("replay produced {actual} values but {expected} were observed")]
	LengthMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("replay output is not {direction} at position {position}")]
	OutOfOrder {
		position: usize,
		direction: Direction,
	},

	#[error("invalid sort direction `{value}`, expected `ascending` or `descending`")]
	InvalidDirection {
		value: String,
	},

	#[error("cannot parse `{value}` as a value")]
	InvalidValue {
		value: String,
	},
}

impl Error {
	pub fn incomparable(left: &impl Debug, right: &impl Debug) -> Self {
		Error::Incomparable {
			left: format!("{left:?}"),
			right: format!("{right:?}"),
		}
	}

	pub fn missing_count(value: &impl Debug) -> Self {
		Error::MissingCount {
			value: format!("{value:?}"),
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			Error::Incomparable {
				..
			} => "SORT_001",
			Error::MissingCount {
				..
			} => "SORT_002",
			Error::UniqueCountMismatch {
				..
			} => "SORT_003",
			Error::LengthMismatch {
				..
			} => "SORT_004",
			Error::OutOfOrder {
				..
			} => "SORT_005",
			Error::InvalidDirection {
				..
			} => "SORT_006",
			Error::InvalidValue {
				..
			} => "SORT_007",
		}
	}
}

/// Structured, user facing description of an [`Error`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if let Some(help) = &self.help {
			write!(f, "\n  help: {}", help)?;
		}
		for note in &self.notes {
			write!(f, "\n  note: {}", note)?;
		}
		Ok(())
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Error {
	fn into_diagnostic(self) -> Diagnostic {
		let code = self.code().to_string();
		let message = self.to_string();

		let (help, notes) = match &self {
			Error::Incomparable {
				..
			} => (
				Some("all values of one sort must share a type that defines a total order".to_string()),
				vec!["floating point NaN and values of different types cannot be compared".to_string()],
			),
			Error::MissingCount {
				..
			} => (
				Some("reconstruct and replay with the outputs of a single encode run".to_string()),
				vec![],
			),
			Error::UniqueCountMismatch {
				..
			} => (
				Some("the extreme lists contain values the count table never observed".to_string()),
				vec!["min-list, max-list and count table must come from the same encode run".to_string()],
			),
			Error::LengthMismatch {
				..
			}
			| Error::OutOfOrder {
				..
			} => (Some("this indicates an internal bug in the commit-log sort".to_string()), vec![]),
			Error::InvalidDirection {
				..
			} => (Some("use `ascending` (`asc`) or `descending` (`desc`)".to_string()), vec![]),
			Error::InvalidValue {
				..
			} => (Some("NaN cannot be sorted".to_string()), vec![]),
		};

		Diagnostic {
			code,
			message,
			help,
			notes,
		}
	}
}
