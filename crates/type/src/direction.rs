// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Order in which distinct values are emitted during replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	#[default]
	Ascending,
	Descending,
}

impl Direction {
	pub fn reverse(self) -> Self {
		match self {
			Direction::Ascending => Direction::Descending,
			Direction::Descending => Direction::Ascending,
		}
	}

	pub fn is_ascending(self) -> bool {
		matches!(self, Direction::Ascending)
	}
}

impl Display for Direction {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Direction::Ascending => f.write_str("ascending"),
			Direction::Descending => f.write_str("descending"),
		}
	}
}

impl FromStr for Direction {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Direction::Ascending),
			"desc" | "descending" => Ok(Direction::Descending),
			_ => Err(Error::InvalidDirection {
				value: s.to_string(),
			}),
		}
	}
}
