// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use commitsort_core::{CommitLogSorter, Direction, EntryKind, Encoder, LogEntry, SortConfigBuilder, encode, reconstruct, replay};
use commitsort_testing::{
	assert::{assert_permutation, assert_sorted, assert_strictly_decreasing, assert_strictly_increasing},
	generate,
};

const SEEDS: [u64; 6] = [0, 1, 7, 42, 1337, 9001];

fn inputs(seed: u64) -> Vec<Vec<i64>> {
	let mut rng = generate::seeded(seed);
	vec![
		generate::random(&mut rng, 200, -1_000..=1_000),
		generate::random(&mut rng, 64, i64::MIN..=i64::MAX),
		generate::few_distinct(&mut rng, 300, 5),
		generate::few_distinct(&mut rng, 50, 1),
		generate::ascending(100),
		generate::descending(100),
		generate::valley(101),
		generate::sawtooth(120, 7),
		Vec::new(),
	]
}

#[test]
fn test_matches_std_sort() {
	for seed in SEEDS {
		for input in inputs(seed) {
			let mut expected = input.clone();
			expected.sort();

			let encoded = encode(input.iter().copied()).unwrap();
			let unique = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();

			let ascending = replay(&unique, &encoded.counts, Direction::Ascending).unwrap();
			assert_eq!(ascending, expected, "seed {seed}");

			let descending = replay(&unique, &encoded.counts, Direction::Descending).unwrap();
			expected.reverse();
			assert_eq!(descending, expected, "seed {seed}");
		}
	}
}

#[test]
fn test_counts_sum_to_input_length() {
	for seed in SEEDS {
		for input in inputs(seed) {
			let encoded = encode(input.iter().copied()).unwrap();
			assert_eq!(encoded.counts.total(), input.len());
			assert_eq!(encoded.counts.iter().map(|(_, count)| count).sum::<usize>(), input.len());
			assert!(encoded.counts.iter().all(|(_, count)| *count >= 1));

			let distinct: HashSet<&i64> = input.iter().collect();
			assert_eq!(encoded.counts.len(), distinct.len());
		}
	}
}

#[test]
fn test_extreme_lists_are_monotonic() {
	for seed in SEEDS {
		for input in inputs(seed) {
			let encoded = encode(input.iter().copied()).unwrap();
			assert_strictly_decreasing(encoded.mins.as_slice());
			assert_strictly_increasing(encoded.maxs.as_slice());

			if let Some(first) = input.first() {
				assert_eq!(encoded.mins.as_slice().first(), Some(first));
				assert_eq!(encoded.mins.current(), input.iter().min());
			}
		}
	}
}

#[test]
fn test_log_mirrors_extreme_lists() {
	for seed in SEEDS {
		for input in inputs(seed) {
			let encoded = encode(input.iter().copied()).unwrap();
			let stats = encoded.log.stats();

			let logged_mins: Vec<i64> = encoded
				.log
				.iter()
				.filter(|entry| entry.kind() == EntryKind::Min)
				.filter_map(|entry| entry.extreme().copied())
				.collect();
			let logged_maxs: Vec<i64> = encoded
				.log
				.iter()
				.filter(|entry| entry.kind() == EntryKind::Max)
				.filter_map(|entry| entry.extreme().copied())
				.collect();

			assert_eq!(logged_mins, encoded.mins.as_slice());
			assert_eq!(logged_maxs, encoded.maxs.as_slice());
			assert_eq!(stats.total(), encoded.log.len());
			assert!(stats.min_entries + stats.max_entries <= input.len());
			assert!(stats.count_entries <= input.len());

			let distinct = encoded.counts.len();
			assert!(stats.min_entries <= distinct);
			assert!(stats.max_entries <= distinct);
			assert!(encoded.log.len() <= input.len() + 2 * distinct, "log of {} entries", encoded.log.len());
		}
	}
}

#[test]
fn test_each_push_writes_current_count() {
	for seed in SEEDS {
		for input in inputs(seed) {
			let mut encoder = Encoder::new();

			for element in input {
				let open_before = encoder.open_count();
				let len_before = encoder.log().len();
				let observation = encoder.push(element).unwrap();
				let len = encoder.log().len();
				let appended = usize::from(observation.appended) + usize::from(observation.extreme.is_some());
				assert_eq!(len, len_before + appended);

				let written = if observation.appended {
					if observation.extreme.is_some() { len - 2 } else { len - 1 }
				} else {
					open_before.expect("an overwrite needs an open count entry")
				};

				assert_eq!(encoder.log().get(written), Some(&LogEntry::Count(observation.count)));
				assert_eq!(encoder.counts().get(&element), Some(observation.count));

				if observation.extreme.is_some() {
					assert_eq!(encoder.open_count(), None);
				}
			}
		}
	}
}

#[test]
fn test_reconstruct_is_idempotent() {
	for seed in SEEDS {
		for input in inputs(seed) {
			let encoded = encode(input).unwrap();
			let first = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();
			let second = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();
			assert_eq!(first, second);
			assert_strictly_increasing(&first);
			assert_eq!(first.len(), encoded.counts.len());
		}
	}
}

#[test]
fn test_sort_both_with_verification() {
	let sorter = CommitLogSorter::new(SortConfigBuilder::new().verify(true).build());

	for seed in SEEDS {
		for input in inputs(seed) {
			let (ascending, descending) = sorter.sort_both(input.clone()).unwrap();

			assert_permutation(&ascending, &input);
			assert_permutation(&descending, &input);
			assert_sorted(&ascending, Direction::Ascending);
			assert_sorted(&descending, Direction::Descending);
		}
	}
}
