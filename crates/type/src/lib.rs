// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod direction;
pub mod error;
pub mod value;

pub use direction::Direction;
pub use error::{Diagnostic, Error, IntoDiagnostic, Result};
pub use value::{OrderedF64, Value};
