// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Single-pass commit-log sort.
//!
//! The input is scanned once by the [`Encoder`], which records only changes:
//! a new running minimum, a new running maximum, or a new occurrence count.
//! [`reconstruct`] turns the recorded extremes and the count table back into
//! the ascending list of distinct values, and [`replay`] expands that list
//! into the sorted sequence in either direction.
//!
//! ```
//! use commitsort_core::{Direction, encode, reconstruct, replay};
//!
//! let encoded = encode([5, 3, 8, 3, 9, 1, 5]).unwrap();
//! let unique = reconstruct(&encoded.mins, &encoded.maxs, &encoded.counts).unwrap();
//!
//! assert_eq!(replay(&unique, &encoded.counts, Direction::Ascending).unwrap(), vec![1, 3, 3, 5, 5, 8, 9]);
//! assert_eq!(replay(&unique, &encoded.counts, Direction::Descending).unwrap(), vec![9, 8, 5, 5, 3, 3, 1]);
//! ```

pub mod count;
pub mod encode;
pub mod entry;
pub mod extreme;
pub mod log;
mod order;
pub mod pipeline;
pub mod reconstruct;
pub mod replay;

pub use commitsort_type::{Diagnostic, Direction, Error, IntoDiagnostic, OrderedF64, Result, Value};
pub use count::CountTable;
pub use encode::{Encoded, Encoder, Observation, encode};
pub use entry::{EntryKind, LogEntry};
pub use extreme::{MaxList, MinList};
pub use log::{CommitLog, LogStats};
pub use pipeline::{CommitLogSorter, SortConfig, SortConfigBuilder, SortOutcome, SortReport};
pub use reconstruct::reconstruct;
pub use replay::replay;
