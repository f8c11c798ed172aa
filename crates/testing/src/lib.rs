// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod assert;
pub mod generate;
pub mod scenario;

pub use scenario::{Scenario, ScenarioError};
