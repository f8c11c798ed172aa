// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, fmt::Debug, hash::Hash};

use commitsort_type::{Error, Result};
use tracing::{debug, instrument};

use crate::{
	count::CountTable,
	extreme::{MaxList, MinList},
	order::sort_ascending,
};

/// Rebuilds the distinct input values in ascending order.
///
/// Only values that never became an extreme are sorted by comparison. The
/// extremes are read in order from the min-list (backwards) and the max-list
/// (forwards); the three ascending runs are then merged and de-duplicated so
/// a value that was both a minimum and a maximum appears once.
#[instrument(name = "reconstruct", level = "trace", skip_all)]
pub fn reconstruct<T>(mins: &MinList<T>, maxs: &MaxList<T>, counts: &CountTable<T>) -> Result<Vec<T>>
where
	T: Clone + Hash + Eq + PartialOrd + Debug,
{
	let extremes: HashSet<&T> = mins.ascending().chain(maxs.ascending()).collect();

	let mut non_extremes: Vec<&T> = counts.keys().filter(|value| !extremes.contains(value)).collect();
	sort_ascending(&mut non_extremes)?;

	let mut ascending_mins: Vec<&T> = mins.ascending().collect();
	ascending_mins.dedup();
	let mut ascending_maxs: Vec<&T> = maxs.ascending().collect();
	ascending_maxs.dedup();

	let mut unique: Vec<&T> = Vec::with_capacity(non_extremes.len() + ascending_mins.len() + ascending_maxs.len());
	unique.extend(&non_extremes);
	unique.extend(ascending_mins);
	unique.extend(ascending_maxs);

	// three ascending runs; the stable sort merges them in linear time
	sort_ascending(&mut unique)?;
	unique.dedup();

	if unique.len() != counts.len() {
		return Err(Error::UniqueCountMismatch {
			expected: counts.len(),
			actual: unique.len(),
		});
	}

	debug!(
		distinct = unique.len(),
		extremes = extremes.len(),
		sorted = non_extremes.len(),
		"reconstructed unique values"
	);

	Ok(unique.into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::encode::encode;

	#[test]
	fn test_worked_example() {
		let encoded = encode([5, 3, 8, 3, 9, 1, 5]).unwrap();
		let unique = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();
		assert_eq!(unique, vec![1, 3, 5, 8, 9]);
	}

	#[test]
	fn test_value_both_minimum_and_maximum() {
		let encoded = encode([5, 5, 5]).unwrap();
		let unique = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();
		assert_eq!(unique, vec![5]);
	}

	#[test]
	fn test_non_extremes_interleave_with_extremes() {
		let encoded = encode([50, 10, 90, 40, 60, 20, 80, 30, 70]).unwrap();
		assert_eq!(encoded.mins.as_slice(), &[50, 10]);
		assert_eq!(encoded.maxs.as_slice(), &[90]);

		let unique = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();
		assert_eq!(unique, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
	}

	#[test]
	fn test_empty() {
		let encoded = encode(Vec::<i64>::new()).unwrap();
		let unique = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();
		assert!(unique.is_empty());
	}

	#[test]
	fn test_is_idempotent() {
		let encoded = encode([4, 4, 2, 7, 1, 9, 3, 3]).unwrap();
		let first = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();
		let second = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_extreme_missing_from_count_table() {
		let encoded = encode([2, 1]).unwrap();
		let foreign = MaxList::from(vec![2, 100]);

		let err = reconstruct(&encoded.mins, &foreign, &encoded.counts).unwrap_err();
		assert_eq!(
			err,
			Error::UniqueCountMismatch {
				expected: 2,
				actual: 3,
			}
		);
	}
}
