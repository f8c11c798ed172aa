// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Write},
	time::Duration,
};

use commitsort_core::{CommitLog, CommitLogSorter, Direction, Result, SortConfigBuilder, SortReport, Value};
use serde_json::{Map, json};

use crate::options::{Options, Order};

/// Everything the command prints for one run.
#[derive(Debug)]
pub struct Output {
	pub unique: Vec<Value>,
	pub ascending: Option<Vec<Value>>,
	pub descending: Option<Vec<Value>>,
	pub log: CommitLog<Value>,
	pub report: SortReport,
}

/// Sorts `input` in the order the options ask for.
///
/// With `Order::Both` the input is encoded once and replayed twice.
pub fn execute(options: &Options, input: Vec<Value>) -> Result<Output> {
	let direction = match options.order {
		Order::Single(direction) => direction,
		Order::Both => Direction::Ascending,
	};

	let sorter = CommitLogSorter::new(SortConfigBuilder::new().direction(direction).verify(true).build());
	let outcome = match options.order {
		Order::Single(_) => sorter.run(input)?,
		Order::Both => sorter.run_both(input)?,
	};

	let (ascending, descending) = match options.order {
		Order::Single(Direction::Ascending) => (Some(outcome.sorted), None),
		Order::Single(Direction::Descending) => (None, Some(outcome.sorted)),
		Order::Both => (Some(outcome.sorted), outcome.reversed),
	};

	Ok(Output {
		unique: outcome.unique,
		ascending,
		descending,
		log: outcome.encoded.log,
		report: outcome.report,
	})
}

pub fn text(output: &Output, with_log: bool) -> String {
	let mut out = String::new();

	if with_log {
		out.push_str("Commit Log:\n");
		out.push_str(&output.log.to_string());
		out.push('\n');
	}

	let _ = writeln!(out, "Sorted Unique: {}", list(&output.unique));
	if let Some(ascending) = &output.ascending {
		let _ = writeln!(out, "Ascending: {}", list(ascending));
	}
	if let Some(descending) = &output.descending {
		let _ = writeln!(out, "Descending: {}", list(descending));
	}

	let report = &output.report;
	let _ = writeln!(out, "Log: {}", report.log);
	let _ = write!(
		out,
		"Timing: encode {}, reconstruct {}, replay {}",
		seconds(report.encode),
		seconds(report.reconstruct),
		seconds(report.replay)
	);
	if let Some(reverse) = report.reverse_replay {
		let _ = write!(out, ", reverse replay {}", seconds(reverse));
	}
	out.push('\n');

	out
}

pub fn json(output: &Output, with_log: bool) -> serde_json::Value {
	let report = &output.report;
	let mut object = Map::new();

	object.insert("unique".into(), json!(output.unique));
	if let Some(ascending) = &output.ascending {
		object.insert("ascending".into(), json!(ascending));
	}
	if let Some(descending) = &output.descending {
		object.insert("descending".into(), json!(descending));
	}
	if with_log {
		object.insert("log".into(), json!(output.log));
	}
	object.insert(
		"stats".into(),
		json!({
			"elements": report.elements,
			"distinct": report.distinct,
			"count_entries": report.log.count_entries,
			"min_entries": report.log.min_entries,
			"max_entries": report.log.max_entries,
		}),
	);
	let mut timing = json!({
		"encode": report.encode.as_micros() as u64,
		"reconstruct": report.reconstruct.as_micros() as u64,
		"replay": report.replay.as_micros() as u64,
	});
	if let Some(reverse) = report.reverse_replay {
		timing["reverse_replay"] = json!(reverse.as_micros() as u64);
	}
	object.insert("timing_us".into(), timing);

	serde_json::Value::Object(object)
}

fn list<T: Display>(values: &[T]) -> String {
	let mut out = String::from("[");
	for (idx, value) in values.iter().enumerate() {
		if idx > 0 {
			out.push_str(", ");
		}
		let _ = write!(out, "{value}");
	}
	out.push(']');
	out
}

fn seconds(duration: Duration) -> String {
	format!("{:.4}s", duration.as_secs_f64())
}
