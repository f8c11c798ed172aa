// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Single pass encoder.
//!
//! For every element the encoder performs exactly one count update and at
//! most one extreme update:
//!
//! 1. The element's count is incremented. A first occurrence always appends
//!    `Count(1)`. A repeat overwrites the open `Count` entry when there is one,
//!    otherwise it appends a new `Count` entry which becomes the open one.
//! 2. If the element is below the running minimum (or none exists) a `Min`
//!    entry is appended. Only when the minimum did not move is the element
//!    checked against the running maximum, appending a `Max` entry when it is
//!    above it (or none exists). Either extreme entry closes the open count
//!    entry.

use std::{cmp::Ordering, fmt::Debug, hash::Hash};

use commitsort_type::Result;
use tracing::{debug, instrument, trace};

use crate::{
	count::CountTable,
	entry::{EntryKind, LogEntry},
	extreme::{MaxList, MinList},
	log::CommitLog,
	order::compare,
};

/// Everything one encode run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<T: Hash + Eq> {
	pub log: CommitLog<T>,
	pub counts: CountTable<T>,
	pub mins: MinList<T>,
	pub maxs: MaxList<T>,
}

/// What a single [`Encoder::push`] recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
	/// The element's count after this occurrence.
	pub count: usize,
	/// Whether the count went into a new entry or overwrote the open one.
	pub appended: bool,
	/// The extreme entry appended for this element, if any.
	pub extreme: Option<EntryKind>,
}

/// Encoder state for one scan.
///
/// The running minimum and maximum are the last values of the extreme lists.
#[derive(Debug)]
pub struct Encoder<T: Hash + Eq> {
	log: CommitLog<T>,
	counts: CountTable<T>,
	mins: MinList<T>,
	maxs: MaxList<T>,
	open_count: Option<usize>,
}

impl<T> Encoder<T>
where
	T: Clone + Hash + Eq + PartialOrd + Debug,
{
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	/// Pre-sizes the count table for `capacity` distinct values.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			log: CommitLog::new(),
			counts: CountTable::with_capacity(capacity),
			mins: MinList::new(),
			maxs: MaxList::new(),
			open_count: None,
		}
	}

	/// Records `element`.
	///
	/// On a comparison failure the count step has already happened; the
	/// encoder must then be discarded.
	pub fn push(&mut self, element: T) -> Result<Observation> {
		let count = self.counts.increment(&element);

		let appended = match self.open_count {
			Some(index) if count > 1 => {
				self.log.overwrite_count(index, count);
				false
			}
			_ => {
				self.open_count = Some(self.log.append(LogEntry::Count(count)));
				true
			}
		};

		let extreme = if self.is_new_min(&element)? {
			trace!(value = ?element, "new minimum");
			self.mins.push(element.clone());
			self.log.append(LogEntry::Min(element));
			self.open_count = None;
			Some(EntryKind::Min)
		} else if self.is_new_max(&element)? {
			trace!(value = ?element, "new maximum");
			self.maxs.push(element.clone());
			self.log.append(LogEntry::Max(element));
			self.open_count = None;
			Some(EntryKind::Max)
		} else {
			None
		};

		Ok(Observation {
			count,
			appended,
			extreme,
		})
	}

	fn is_new_min(&self, element: &T) -> Result<bool> {
		match self.mins.current() {
			None => Ok(true),
			Some(min) => Ok(compare(element, min)? == Ordering::Less),
		}
	}

	fn is_new_max(&self, element: &T) -> Result<bool> {
		match self.maxs.current() {
			None => Ok(true),
			Some(max) => Ok(compare(element, max)? == Ordering::Greater),
		}
	}

	/// Index of the `Count` entry a repeat would overwrite.
	pub fn open_count(&self) -> Option<usize> {
		self.open_count
	}

	pub fn log(&self) -> &CommitLog<T> {
		&self.log
	}

	pub fn counts(&self) -> &CountTable<T> {
		&self.counts
	}

	pub fn finish(self) -> Encoded<T> {
		debug!(
			elements = self.counts.total(),
			distinct = self.counts.len(),
			log_len = self.log.len(),
			mins = self.mins.len(),
			maxs = self.maxs.len(),
			"encoded input"
		);

		Encoded {
			log: self.log,
			counts: self.counts,
			mins: self.mins,
			maxs: self.maxs,
		}
	}
}

impl<T> Default for Encoder<T>
where
	T: Clone + Hash + Eq + PartialOrd + Debug,
{
	fn default() -> Self {
		Self::new()
	}
}

/// Scans `input` once and returns the commit log, count table and extreme lists.
#[instrument(name = "encode", level = "trace", skip_all)]
pub fn encode<T, I>(input: I) -> Result<Encoded<T>>
where
	T: Clone + Hash + Eq + PartialOrd + Debug,
	I: IntoIterator<Item = T>,
{
	let input = input.into_iter();
	let mut encoder = Encoder::with_capacity(input.size_hint().0);
	for element in input {
		encoder.push(element)?;
	}
	Ok(encoder.finish())
}
