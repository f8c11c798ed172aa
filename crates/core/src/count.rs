// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::hash::Hash;

use indexmap::{IndexMap, map};
use serde::{Deserialize, Serialize};

/// Occurrence count per distinct value, in first-seen order.
///
/// Keys are never removed and counts only grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
	serialize = "T: Serialize + Hash + Eq",
	deserialize = "T: Deserialize<'de> + Hash + Eq"
))]
pub struct CountTable<T: Hash + Eq> {
	counts: IndexMap<T, usize>,
	total: usize,
}

impl<T: Hash + Eq> CountTable<T> {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			counts: IndexMap::with_capacity(capacity),
			total: 0,
		}
	}

	/// Counts one more occurrence of `value` and returns its new count.
	pub(crate) fn increment(&mut self, value: &T) -> usize
	where
		T: Clone,
	{
		self.total += 1;
		match self.counts.get_mut(value) {
			Some(count) => {
				*count += 1;
				*count
			}
			None => {
				self.counts.insert(value.clone(), 1);
				1
			}
		}
	}

	pub fn get(&self, value: &T) -> Option<usize> {
		self.counts.get(value).copied()
	}

	pub fn contains(&self, value: &T) -> bool {
		self.counts.contains_key(value)
	}

	/// Number of distinct values.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts, which is the number of scanned elements.
	pub fn total(&self) -> usize {
		self.total
	}

	pub fn keys(&self) -> map::Keys<'_, T, usize> {
		self.counts.keys()
	}

	pub fn iter(&self) -> map::Iter<'_, T, usize> {
		self.counts.iter()
	}
}

impl<T: Hash + Eq> Default for CountTable<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a, T: Hash + Eq> IntoIterator for &'a CountTable<T> {
	type Item = (&'a T, &'a usize);
	type IntoIter = map::Iter<'a, T, usize>;

	fn into_iter(self) -> Self::IntoIter {
		self.counts.iter()
	}
}
