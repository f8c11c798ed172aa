// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Benchmark workloads for the commit-log sort.
//!
//! Run benchmarks with: `cargo bench -p commitsort-bench`

use commitsort_testing::generate;

pub const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

const SEED: u64 = 0x5eed;

/// Input shapes the sorter is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
	Random,
	FewDistinct,
	Ascending,
	Descending,
}

impl Workload {
	pub const ALL: [Workload; 4] = [Workload::Random, Workload::FewDistinct, Workload::Ascending, Workload::Descending];

	pub fn name(self) -> &'static str {
		match self {
			Workload::Random => "random",
			Workload::FewDistinct => "few_distinct",
			Workload::Ascending => "ascending",
			Workload::Descending => "descending",
		}
	}

	pub fn generate(self, len: usize) -> Vec<i64> {
		let mut rng = generate::seeded(SEED);
		match self {
			Workload::Random => generate::random(&mut rng, len, i64::MIN..=i64::MAX),
			Workload::FewDistinct => generate::few_distinct(&mut rng, len, 16),
			Workload::Ascending => generate::ascending(len),
			Workload::Descending => generate::descending(len),
		}
	}
}
