// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod options;
mod render;

use std::{
	env,
	io::{self, Read},
	process::ExitCode,
};

use commitsort_core::{IntoDiagnostic, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::options::{Options, USAGE};

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn main() -> ExitCode {
	init_tracing();

	let options = match Options::parse(env::args().skip(1)) {
		Ok(options) => options,
		Err(err) => {
			eprintln!("error: {err}");
			eprintln!("{USAGE}");
			return ExitCode::FAILURE;
		}
	};

	if options.help {
		println!("{USAGE}");
		return ExitCode::SUCCESS;
	}

	let tokens = if options.values.is_empty() {
		let mut buffer = String::new();
		if let Err(err) = io::stdin().read_to_string(&mut buffer) {
			eprintln!("error: failed to read stdin: {err}");
			return ExitCode::FAILURE;
		}
		buffer.split_whitespace().map(str::to_string).collect()
	} else {
		options.values.clone()
	};
	debug!(values = tokens.len(), "parsed input");

	let result = Value::parse_all(&tokens).and_then(|input| render::execute(&options, input));

	match result {
		Ok(output) => {
			if options.json {
				println!("{}", render::json(&output, options.log));
			} else {
				print!("{}", render::text(&output, options.log));
			}
			ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("{}", err.into_diagnostic());
			ExitCode::FAILURE
		}
	}
}
