// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{iter::Rev, slice};

use serde::{Deserialize, Serialize};

/// Every running minimum in the order it was discovered.
///
/// Strictly decreasing in append order, so reading it backwards is ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinList<T>(Vec<T>);

/// Every running maximum in the order it was discovered.
///
/// Strictly increasing in append order, which is already ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxList<T>(Vec<T>);

impl<T> MinList<T> {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub(crate) fn push(&mut self, value: T) {
		self.0.push(value);
	}

	/// The current minimum.
	pub fn current(&self) -> Option<&T> {
		self.0.last()
	}

	/// Values in append order.
	pub fn as_slice(&self) -> &[T] {
		&self.0
	}

	pub fn ascending(&self) -> Rev<slice::Iter<'_, T>> {
		self.0.iter().rev()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<T> MaxList<T> {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub(crate) fn push(&mut self, value: T) {
		self.0.push(value);
	}

	/// The current maximum.
	pub fn current(&self) -> Option<&T> {
		self.0.last()
	}

	/// Values in append order.
	pub fn as_slice(&self) -> &[T] {
		&self.0
	}

	pub fn ascending(&self) -> slice::Iter<'_, T> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<T> Default for MinList<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Default for MaxList<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> From<Vec<T>> for MinList<T> {
	fn from(values: Vec<T>) -> Self {
		Self(values)
	}
}

impl<T> From<Vec<T>> for MaxList<T> {
	fn from(values: Vec<T>) -> Self {
		Self(values)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_min_list_reads_ascending_backwards() {
		let mut mins = MinList::new();
		for value in [5, 3, 1] {
			mins.push(value);
		}

		assert_eq!(mins.current(), Some(&1));
		assert_eq!(mins.as_slice(), &[5, 3, 1]);
		assert_eq!(mins.ascending().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
	}

	#[test]
	fn test_max_list_reads_ascending_forwards() {
		let mut maxs = MaxList::new();
		for value in [8, 9] {
			maxs.push(value);
		}

		assert_eq!(maxs.current(), Some(&9));
		assert_eq!(maxs.ascending().copied().collect::<Vec<_>>(), vec![8, 9]);
	}

	#[test]
	fn test_empty_lists_have_no_current() {
		assert_eq!(MinList::<i64>::default().current(), None);
		assert_eq!(MaxList::<i64>::default().current(), None);
		assert!(MaxList::<i64>::new().is_empty());
	}
}
