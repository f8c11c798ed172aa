// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

mod ordered_f64;

pub use ordered_f64::OrderedF64;

/// A dynamically typed value, as read from text input.
///
/// Values of the same variant are totally ordered. Values of different
/// variants are incomparable: `partial_cmp` returns `None`, which the sort
/// pipeline reports as a comparison failure instead of guessing an order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point, never NaN
	Float8(OrderedF64),
	/// A UTF-8 encoded text.
	Utf8(String),
}

impl Value {
	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Result<Self> {
		OrderedF64::try_from(v.into()).map(Value::Float8)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	/// Parses every token of a list.
	///
	/// When every token is numeric and at least one is not an integer, the
	/// integers are read as floats so the whole list shares one type.
	pub fn parse_all<I, S>(tokens: I) -> Result<Vec<Value>>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let values = tokens.into_iter().map(|token| token.as_ref().parse()).collect::<Result<Vec<Value>>>()?;

		let numeric = values.iter().all(|value| matches!(value, Value::Int8(_) | Value::Float8(_)));
		let fractional = values.iter().any(|value| matches!(value, Value::Float8(_)));
		if !(numeric && fractional) {
			return Ok(values);
		}

		values.into_iter()
			.map(|value| match value {
				Value::Int8(v) => Value::float8(v as f64),
				other => Ok(other),
			})
			.collect()
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Boolean(l), Value::Boolean(r)) => l.partial_cmp(r),
			(Value::Int8(l), Value::Int8(r)) => l.partial_cmp(r),
			(Value::Float8(l), Value::Float8(r)) => l.partial_cmp(r),
			(Value::Utf8(l), Value::Utf8(r)) => l.partial_cmp(r),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
		}
	}
}

/// Parses a token as integer, then float, then boolean, falling back to text.
impl FromStr for Value {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		if let Ok(v) = s.parse::<i64>() {
			return Ok(Value::Int8(v));
		}
		if let Ok(v) = s.parse::<f64>() {
			return Value::float8(v).map_err(|_| Error::InvalidValue {
				value: s.to_string(),
			});
		}
		match s {
			"true" => Ok(Value::Boolean(true)),
			"false" => Ok(Value::Boolean(false)),
			_ => Ok(Value::Utf8(s.to_string())),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<OrderedF64> for Value {
	fn from(v: OrderedF64) -> Self {
		Value::Float8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}
