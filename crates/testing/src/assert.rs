// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use commitsort_type::Direction;

/// Panics unless every adjacent pair of `values` respects `direction`.
pub fn assert_sorted<T: PartialOrd + Debug>(values: &[T], direction: Direction) {
	for (idx, pair) in values.windows(2).enumerate() {
		let ok = match direction {
			Direction::Ascending => pair[0] <= pair[1],
			Direction::Descending => pair[0] >= pair[1],
		};
		assert!(ok, "not {direction} at position {}: {:?} then {:?}", idx + 1, pair[0], pair[1]);
	}
}

/// Panics unless each value is strictly below the next.
pub fn assert_strictly_increasing<T: PartialOrd + Debug>(values: &[T]) {
	for pair in values.windows(2) {
		assert!(pair[0] < pair[1], "{:?} is not below {:?} in {values:?}", pair[0], pair[1]);
	}
}

/// Panics unless each value is strictly above the next.
pub fn assert_strictly_decreasing<T: PartialOrd + Debug>(values: &[T]) {
	for pair in values.windows(2) {
		assert!(pair[0] > pair[1], "{:?} is not above {:?} in {values:?}", pair[0], pair[1]);
	}
}

/// Panics unless `left` and `right` hold the same values with the same multiplicities.
pub fn assert_permutation<T: Hash + Eq + Debug>(left: &[T], right: &[T]) {
	assert_eq!(left.len(), right.len(), "lengths differ");
	assert_eq!(multiplicities(left), multiplicities(right), "multisets differ");
}

/// Occurrence count per distinct value.
pub fn multiplicities<T: Hash + Eq>(values: &[T]) -> HashMap<&T, usize> {
	let mut counts = HashMap::new();
	for value in values {
		*counts.entry(value).or_insert(0) += 1;
	}
	counts
}
