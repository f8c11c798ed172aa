// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The commit log: an ordered record of every min, max and count change
//! observed during one scan.
//!
//! Entries are append-only with one exception: the most recent `Count`
//! entry may be overwritten in place while no `Min`/`Max` entry has been
//! appended after it. The encoder tracks which entry is still open; the log
//! itself only offers [`CommitLog::overwrite_count`] to the crate.

use std::{
	fmt,
	fmt::{Display, Formatter},
	slice,
};

use serde::{Deserialize, Serialize};

use crate::entry::{EntryKind, LogEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitLog<T> {
	entries: Vec<LogEntry<T>>,
}

impl<T> CommitLog<T> {
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Appends `entry` and returns its index.
	pub(crate) fn append(&mut self, entry: LogEntry<T>) -> usize {
		self.entries.push(entry);
		self.entries.len() - 1
	}

	/// Rewrites the `Count` entry at `index`.
	pub(crate) fn overwrite_count(&mut self, index: usize, count: usize) {
		match self.entries.get_mut(index) {
			Some(LogEntry::Count(current)) => *current = count,
			other => debug_assert!(false, "open count entry {index} is {:?}", other.map(|entry| entry.kind())),
		}
	}

	pub fn entries(&self) -> &[LogEntry<T>] {
		&self.entries
	}

	pub fn get(&self, index: usize) -> Option<&LogEntry<T>> {
		self.entries.get(index)
	}

	pub fn last(&self) -> Option<&LogEntry<T>> {
		self.entries.last()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> slice::Iter<'_, LogEntry<T>> {
		self.entries.iter()
	}

	pub fn stats(&self) -> LogStats {
		let mut stats = LogStats::default();
		for entry in &self.entries {
			match entry.kind() {
				EntryKind::Count => stats.count_entries += 1,
				EntryKind::Min => stats.min_entries += 1,
				EntryKind::Max => stats.max_entries += 1,
			}
		}
		stats
	}
}

impl<T> Default for CommitLog<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a, T> IntoIterator for &'a CommitLog<T> {
	type Item = &'a LogEntry<T>;
	type IntoIter = slice::Iter<'a, LogEntry<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// Renders one numbered line per entry, starting at 1.
impl<T: Display> Display for CommitLog<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for (idx, entry) in self.entries.iter().enumerate() {
			writeln!(f, "{}. {}", idx + 1, entry)?;
		}
		Ok(())
	}
}

/// Number of entries per kind in a [`CommitLog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStats {
	pub count_entries: usize,
	pub min_entries: usize,
	pub max_entries: usize,
}

impl LogStats {
	pub fn total(&self) -> usize {
		self.count_entries + self.min_entries + self.max_entries
	}
}

impl Display for LogStats {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} entries ({} count, {} min, {} max)",
			self.total(),
			self.count_entries,
			self.min_entries,
			self.max_entries
		)
	}
}
