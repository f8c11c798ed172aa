// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Input generators for property tests and benchmarks.
//!
//! Every generator is deterministic for a given rng, so failures can be
//! reproduced from the seed passed to [`seeded`].

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng, rngs::StdRng};

pub fn seeded(seed: u64) -> StdRng {
	StdRng::seed_from_u64(seed)
}

/// Uniformly random values drawn from `range`.
pub fn random(rng: &mut impl Rng, len: usize, range: RangeInclusive<i64>) -> Vec<i64> {
	(0..len).map(|_| rng.random_range(range.clone())).collect()
}

/// Random values with at most `distinct` different values.
pub fn few_distinct(rng: &mut impl Rng, len: usize, distinct: usize) -> Vec<i64> {
	let upper = distinct.max(1) as i64 - 1;
	random(rng, len, 0..=upper)
}

pub fn ascending(len: usize) -> Vec<i64> {
	(0..len as i64).collect()
}

pub fn descending(len: usize) -> Vec<i64> {
	(0..len as i64).rev().collect()
}

/// Strictly decreasing down to zero, then strictly increasing.
pub fn valley(len: usize) -> Vec<i64> {
	let half = (len / 2) as i64;
	(0..len as i64).map(|idx| (idx - half).abs() * 2 + i64::from(idx > half)).collect()
}

/// Repeats `0..period` until `len` values are produced.
pub fn sawtooth(len: usize, period: usize) -> Vec<i64> {
	let period = period.max(1) as i64;
	(0..len as i64).map(|idx| idx % period).collect()
}
