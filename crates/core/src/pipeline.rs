// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Encode, reconstruct and replay wired together.

use std::{
	fmt::Debug,
	hash::Hash,
	time::{Duration, Instant},
};

use commitsort_type::{Direction, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
	encode::{Encoded, Encoder},
	log::LogStats,
	order::check_sorted,
	reconstruct::reconstruct,
	replay::replay,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
	/// Order of the replayed sequence.
	pub direction: Direction,
	/// Check the replayed sequence for order and length before returning it.
	pub verify: bool,
	/// Expected number of distinct values, used to pre-size the count table.
	pub capacity_hint: usize,
}

impl Default for SortConfig {
	fn default() -> Self {
		Self {
			direction: Direction::Ascending,
			verify: false,
			capacity_hint: 0,
		}
	}
}

/// Builder for [`SortConfig`].
pub struct SortConfigBuilder {
	direction: Direction,
	verify: bool,
	capacity_hint: usize,
}

impl SortConfigBuilder {
	pub fn new() -> Self {
		let defaults = SortConfig::default();
		Self {
			direction: defaults.direction,
			verify: defaults.verify,
			capacity_hint: defaults.capacity_hint,
		}
	}

	pub fn direction(mut self, direction: Direction) -> Self {
		self.direction = direction;
		self
	}

	pub fn ascending(self) -> Self {
		self.direction(Direction::Ascending)
	}

	pub fn descending(self) -> Self {
		self.direction(Direction::Descending)
	}

	pub fn verify(mut self, verify: bool) -> Self {
		self.verify = verify;
		self
	}

	pub fn capacity_hint(mut self, capacity: usize) -> Self {
		self.capacity_hint = capacity;
		self
	}

	pub fn build(self) -> SortConfig {
		SortConfig {
			direction: self.direction,
			verify: self.verify,
			capacity_hint: self.capacity_hint,
		}
	}
}

impl Default for SortConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Timings and sizes of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortReport {
	pub elements: usize,
	pub distinct: usize,
	pub log: LogStats,
	pub encode: Duration,
	pub reconstruct: Duration,
	pub replay: Duration,
	/// Replay in the opposite direction, when [`CommitLogSorter::run_both`] asked for one.
	pub reverse_replay: Option<Duration>,
}

impl SortReport {
	pub fn total(&self) -> Duration {
		self.encode + self.reconstruct + self.replay + self.reverse_replay.unwrap_or_default()
	}
}

/// Result of [`CommitLogSorter::run`], keeping every intermediate structure.
#[derive(Debug, Clone)]
pub struct SortOutcome<T: Hash + Eq> {
	pub encoded: Encoded<T>,
	pub unique: Vec<T>,
	/// Replay in the configured direction.
	pub sorted: Vec<T>,
	/// Replay in the opposite direction, only filled by [`CommitLogSorter::run_both`].
	pub reversed: Option<Vec<T>>,
	pub report: SortReport,
}

impl<T: Hash + Eq> SortOutcome<T> {
	pub fn into_sorted(self) -> Vec<T> {
		self.sorted
	}
}

/// Sorts by encoding the input into a commit log and replaying it.
#[derive(Debug, Clone, Default)]
pub struct CommitLogSorter {
	config: SortConfig,
}

impl CommitLogSorter {
	pub fn new(config: SortConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn ascending() -> Self {
		Self::new(SortConfigBuilder::new().ascending().build())
	}

	pub fn descending() -> Self {
		Self::new(SortConfigBuilder::new().descending().build())
	}

	pub fn config(&self) -> &SortConfig {
		&self.config
	}

	pub fn sort<T, I>(&self, input: I) -> Result<Vec<T>>
	where
		T: Clone + Hash + Eq + PartialOrd + Debug,
		I: IntoIterator<Item = T>,
	{
		Ok(self.run(input)?.into_sorted())
	}

	/// Runs all three phases in the configured direction.
	pub fn run<T, I>(&self, input: I) -> Result<SortOutcome<T>>
	where
		T: Clone + Hash + Eq + PartialOrd + Debug,
		I: IntoIterator<Item = T>,
	{
		self.execute(input, false)
	}

	/// Like [`run`](Self::run), then replays the same encoding once more in
	/// the opposite direction.
	pub fn run_both<T, I>(&self, input: I) -> Result<SortOutcome<T>>
	where
		T: Clone + Hash + Eq + PartialOrd + Debug,
		I: IntoIterator<Item = T>,
	{
		self.execute(input, true)
	}

	/// Encodes once and replays in both directions, ascending first.
	pub fn sort_both<T, I>(&self, input: I) -> Result<(Vec<T>, Vec<T>)>
	where
		T: Clone + Hash + Eq + PartialOrd + Debug,
		I: IntoIterator<Item = T>,
	{
		let outcome = self.run_both(input)?;
		let reversed = outcome.reversed.unwrap_or_default();
		if self.config.direction.is_ascending() {
			Ok((outcome.sorted, reversed))
		} else {
			Ok((reversed, outcome.sorted))
		}
	}

	#[instrument(name = "sort", level = "debug", skip_all, fields(direction = %self.config.direction, both = both))]
	fn execute<T, I>(&self, input: I, both: bool) -> Result<SortOutcome<T>>
	where
		T: Clone + Hash + Eq + PartialOrd + Debug,
		I: IntoIterator<Item = T>,
	{
		let direction = self.config.direction;

		let start = Instant::now();
		let encoded = self.encode(input)?;
		let encode_time = start.elapsed();

		let start = Instant::now();
		let unique = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts)?;
		let reconstruct_time = start.elapsed();

		let start = Instant::now();
		let sorted = self.replay(&unique, &encoded, direction)?;
		let replay_time = start.elapsed();

		let (reversed, reverse_time) = if both {
			let start = Instant::now();
			let reversed = self.replay(&unique, &encoded, direction.reverse())?;
			(Some(reversed), Some(start.elapsed()))
		} else {
			(None, None)
		};

		let report = SortReport {
			elements: encoded.counts.total(),
			distinct: encoded.counts.len(),
			log: encoded.log.stats(),
			encode: encode_time,
			reconstruct: reconstruct_time,
			replay: replay_time,
			reverse_replay: reverse_time,
		};

		debug!(
			elements = report.elements,
			distinct = report.distinct,
			log_entries = report.log.total(),
			encode_us = report.encode.as_micros() as u64,
			reconstruct_us = report.reconstruct.as_micros() as u64,
			replay_us = report.replay.as_micros() as u64,
			reverse_replay_us = report.reverse_replay.map(|elapsed| elapsed.as_micros() as u64),
			"commit log sort completed"
		);

		Ok(SortOutcome {
			encoded,
			unique,
			sorted,
			reversed,
			report,
		})
	}

	fn encode<T, I>(&self, input: I) -> Result<Encoded<T>>
	where
		T: Clone + Hash + Eq + PartialOrd + Debug,
		I: IntoIterator<Item = T>,
	{
		let input = input.into_iter();
		let capacity = self.config.capacity_hint.max(input.size_hint().0);
		let mut encoder = Encoder::with_capacity(capacity);
		for element in input {
			encoder.push(element)?;
		}
		Ok(encoder.finish())
	}

	fn replay<T>(&self, unique: &[T], encoded: &Encoded<T>, direction: Direction) -> Result<Vec<T>>
	where
		T: Clone + Hash + Eq + PartialOrd + Debug,
	{
		let sorted = replay(unique, &encoded.counts, direction)?;
		if self.config.verify {
			verify(&sorted, encoded.counts.total(), direction)?;
		}
		Ok(sorted)
	}
}

fn verify<T: PartialOrd + Debug>(sorted: &[T], expected: usize, direction: Direction) -> Result<()> {
	if sorted.len() != expected {
		return Err(Error::LengthMismatch {
			expected,
			actual: sorted.len(),
		});
	}
	check_sorted(sorted, direction)
}

#[cfg(test)]
mod tests {
	use commitsort_type::Value;

	use super::*;

	#[test]
	fn test_builder_defaults() {
		let config = SortConfigBuilder::default().build();
		assert_eq!(config, SortConfig::default());
		assert_eq!(config.direction, Direction::Ascending);
		assert!(!config.verify);
	}

	#[test]
	fn test_builder_overrides() {
		let config = SortConfigBuilder::new().descending().verify(true).capacity_hint(64).build();
		assert_eq!(
			config,
			SortConfig {
				direction: Direction::Descending,
				verify: true,
				capacity_hint: 64,
			}
		);
	}

	#[test]
	fn test_sort_ascending_and_descending() {
		let input = [5, 3, 8, 3, 9, 1, 5];
		assert_eq!(CommitLogSorter::ascending().sort(input).unwrap(), vec![1, 3, 3, 5, 5, 8, 9]);
		assert_eq!(CommitLogSorter::descending().sort(input).unwrap(), vec![9, 8, 5, 5, 3, 3, 1]);
	}

	#[test]
	fn test_sort_both() {
		let sorter = CommitLogSorter::new(SortConfigBuilder::new().verify(true).build());
		let (ascending, descending) = sorter.sort_both(["pear", "apple", "fig", "apple"]).unwrap();
		assert_eq!(ascending, vec!["apple", "apple", "fig", "pear"]);
		assert_eq!(descending, vec!["pear", "fig", "apple", "apple"]);
	}

	#[test]
	fn test_run_both_replays_reverse_direction() {
		let outcome = CommitLogSorter::descending().run_both([5, 3, 8, 3, 9, 1, 5]).unwrap();

		assert_eq!(outcome.sorted, vec![9, 8, 5, 5, 3, 3, 1]);
		assert_eq!(outcome.reversed, Some(vec![1, 3, 3, 5, 5, 8, 9]));
		assert!(outcome.report.reverse_replay.is_some());
		assert!(outcome.report.total() >= outcome.report.reverse_replay.unwrap());
	}

	#[test]
	fn test_sort_both_orders_pair_for_descending_config() {
		let (ascending, descending) = CommitLogSorter::descending().sort_both([2, 1, 2]).unwrap();
		assert_eq!(ascending, vec![1, 2, 2]);
		assert_eq!(descending, vec![2, 2, 1]);
	}

	#[test]
	fn test_run_reports_sizes() {
		let outcome = CommitLogSorter::default().run([5, 3, 8, 3, 9, 1, 5]).unwrap();

		assert_eq!(outcome.unique, vec![1, 3, 5, 8, 9]);
		assert_eq!(outcome.report.elements, 7);
		assert_eq!(outcome.report.distinct, 5);
		assert_eq!(outcome.report.log.total(), outcome.encoded.log.len());
		assert_eq!(outcome.report.log.min_entries, 3);
		assert_eq!(outcome.report.log.max_entries, 2);
		assert!(outcome.report.total() >= outcome.report.encode);
		assert_eq!(outcome.reversed, None);
		assert_eq!(outcome.report.reverse_replay, None);
	}

	#[test]
	fn test_verify_passes_on_dynamic_values() {
		let sorter = CommitLogSorter::new(SortConfigBuilder::new().verify(true).descending().build());
		let input: Vec<Value> = ["3", "-1", "10", "3"].iter().map(|token| token.parse().unwrap()).collect();

		let sorted = sorter.sort(input).unwrap();
		assert_eq!(sorted, vec![Value::int8(10), Value::int8(3), Value::int8(3), Value::int8(-1)]);
	}

	#[test]
	fn test_verify_rejects_short_output() {
		let err = verify(&[1, 2], 3, Direction::Ascending).unwrap_err();
		assert_eq!(
			err,
			Error::LengthMismatch {
				expected: 3,
				actual: 2,
			}
		);
	}

	#[test]
	fn test_mixed_types_fail() {
		let input = vec![Value::int8(2), Value::bool(true)];
		let err = CommitLogSorter::default().sort(input).unwrap_err();
		assert_eq!(err.code(), "SORT_001");
	}

	#[test]
	fn test_empty_input() {
		let outcome = CommitLogSorter::default().run(Vec::<i64>::new()).unwrap();
		assert!(outcome.sorted.is_empty());
		assert!(outcome.unique.is_empty());
		assert_eq!(outcome.report.log.total(), 0);
	}
}
