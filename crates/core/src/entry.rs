// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// The kind of change a [`LogEntry`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
	Count,
	Min,
	Max,
}

impl Display for EntryKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			EntryKind::Count => f.write_str("COUNT"),
			EntryKind::Min => f.write_str("MIN"),
			EntryKind::Max => f.write_str("MAX"),
		}
	}
}

/// A single change observed while scanning the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LogEntry<T> {
	/// The occurrence count of the element just scanned.
	Count(usize),
	/// A new running minimum.
	Min(T),
	/// A new running maximum.
	Max(T),
}

impl<T> LogEntry<T> {
	pub fn kind(&self) -> EntryKind {
		match self {
			LogEntry::Count(_) => EntryKind::Count,
			LogEntry::Min(_) => EntryKind::Min,
			LogEntry::Max(_) => EntryKind::Max,
		}
	}

	pub fn count(&self) -> Option<usize> {
		match self {
			LogEntry::Count(count) => Some(*count),
			_ => None,
		}
	}

	pub fn extreme(&self) -> Option<&T> {
		match self {
			LogEntry::Min(value) | LogEntry::Max(value) => Some(value),
			LogEntry::Count(_) => None,
		}
	}

	pub fn is_extreme(&self) -> bool {
		!matches!(self, LogEntry::Count(_))
	}
}

impl<T: Display> Display for LogEntry<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			LogEntry::Count(count) => write!(f, "{}: {}", self.kind(), count),
			LogEntry::Min(value) | LogEntry::Max(value) => write!(f, "{}: {}", self.kind(), value),
		}
	}
}
