// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt::Debug, hash::Hash, iter};

use commitsort_type::{Direction, Error, Result};
use tracing::{instrument, trace};

use crate::count::CountTable;

/// Expands the ascending distinct values into the full sorted sequence.
///
/// Each value is repeated by its count; `direction` decides whether the
/// distinct values are walked forwards or backwards. A value without a count
/// table entry means the inputs come from different encode runs and fails
/// the replay.
#[instrument(name = "replay", level = "trace", skip(unique, counts))]
pub fn replay<T>(unique: &[T], counts: &CountTable<T>, direction: Direction) -> Result<Vec<T>>
where
	T: Clone + Hash + Eq + Debug,
{
	let mut sorted = Vec::with_capacity(counts.total());
	match direction {
		Direction::Ascending => expand(unique.iter(), counts, &mut sorted)?,
		Direction::Descending => expand(unique.iter().rev(), counts, &mut sorted)?,
	}

	trace!(len = sorted.len(), "replayed");
	Ok(sorted)
}

fn expand<'a, T, I>(values: I, counts: &CountTable<T>, out: &mut Vec<T>) -> Result<()>
where
	T: Clone + Hash + Eq + Debug + 'a,
	I: Iterator<Item = &'a T>,
{
	for value in values {
		let count = counts.get(value).ok_or_else(|| Error::missing_count(value))?;
		out.extend(iter::repeat_n(value.clone(), count));
	}
	Ok(())
}
