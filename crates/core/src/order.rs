// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{cmp::Ordering, fmt::Debug};

use commitsort_type::{Direction, Error, Result};

pub(crate) fn compare<T: PartialOrd + Debug>(left: &T, right: &T) -> Result<Ordering> {
	left.partial_cmp(right).ok_or_else(|| Error::incomparable(left, right))
}

/// Stable ascending sort that fails on the first pair without an order.
pub(crate) fn sort_ascending<T: PartialOrd + Debug>(values: &mut [&T]) -> Result<()> {
	let mut failure = None;
	values.sort_by(|left, right| {
		left.partial_cmp(right).unwrap_or_else(|| {
			if failure.is_none() {
				failure = Some(Error::incomparable(left, right));
			}
			Ordering::Equal
		})
	});

	match failure {
		Some(err) => Err(err),
		None => Ok(()),
	}
}

/// Returns an error naming the first position that breaks `direction`.
pub(crate) fn check_sorted<T: PartialOrd + Debug>(values: &[T], direction: Direction) -> Result<()> {
	for (position, pair) in values.windows(2).enumerate() {
		let ordering = compare(&pair[0], &pair[1])?;
		let in_order = match direction {
			Direction::Ascending => ordering != Ordering::Greater,
			Direction::Descending => ordering != Ordering::Less,
		};
		if !in_order {
			return Err(Error::OutOfOrder {
				position: position + 1,
				direction,
			});
		}
	}
	Ok(())
}
