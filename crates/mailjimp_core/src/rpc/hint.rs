use std::fmt;

use crate::rpc::{Parsable, StructValue, Value};

/// Fallback lookup path into nested structs of a record.
///
/// Every step except the last must name a struct member; the last step names the
/// value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
	steps: &'static [&'static str],
}

impl Hint {
	/// Build a hint from its steps.
	pub const fn new(steps: &'static [&'static str]) -> Self {
		assert!(!steps.is_empty(), "hint needs at least one step");
		Self { steps }
	}

	/// Ordered lookup steps.
	pub fn steps(&self) -> &'static [&'static str] {
		self.steps
	}

	/// Follow the steps through `record`.
	///
	/// A missing member, a non-struct intermediate, or a null leaf all resolve to `None`.
	pub fn resolve<'r>(&self, record: &'r StructValue) -> Option<&'r Value> {
		let (last, parents) = self.steps.split_last()?;
		let mut current = record;
		for step in parents {
			current = current.get(step)?.as_struct()?;
		}
		current.get(last).filter(|value| !value.is_null())
	}
}

impl fmt::Display for Hint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.steps.join("."))
	}
}

/// Per-type table of hints keyed by logical field name.
#[derive(Debug, Clone, Copy)]
pub struct HintTable {
	entries: &'static [(&'static str, &'static [&'static str])],
}

impl HintTable {
	/// Table without hints.
	pub const EMPTY: Self = Self { entries: &[] };

	/// Build a table from `(logical field, steps)` pairs.
	pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
		let mut idx = 0;
		while idx < entries.len() {
			assert!(!entries[idx].1.is_empty(), "hint needs at least one step");
			idx += 1;
		}
		Self { entries }
	}

	/// Hint registered for a logical field name.
	pub fn lookup(&self, field: &str) -> Option<Hint> {
		self.entries.iter().find(|(name, _)| *name == field).map(|(_, steps)| Hint { steps })
	}

	/// Number of registered hints.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no hints are registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Hint registered by target type `T` for `field`.
pub fn hint_for<T: Parsable>(field: &str) -> Option<Hint> {
	T::HINTS.lookup(field)
}
