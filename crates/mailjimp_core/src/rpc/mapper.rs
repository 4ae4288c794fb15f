use tracing::{debug, trace};

use crate::rpc::{Field, MappingError, Parsable, Result, StructValue, Value};

/// Runtime limits and behavior switches for record mapping.
#[derive(Debug, Clone)]
pub struct MapOptions {
	/// Maximum nested-object depth below the top-level record.
	pub max_depth: u32,
	/// Accept a single struct where a sequence is declared, as a one-record sequence.
	pub singular_record_as_sequence: bool,
}

impl Default for MapOptions {
	fn default() -> Self {
		Self {
			max_depth: 16,
			singular_record_as_sequence: false,
		}
	}
}

impl MapOptions {
	/// Only array values populate sequence fields.
	pub fn strict() -> Self {
		Self::default()
	}

	/// Preset for older recordings that send one-element lists as bare structs.
	pub fn lenient() -> Self {
		Self {
			singular_record_as_sequence: true,
			..Self::default()
		}
	}
}

/// Mutable state threaded through one mapping pass.
#[derive(Debug)]
pub struct MapContext<'a> {
	options: &'a MapOptions,
	depth: u32,
}

impl<'a> MapContext<'a> {
	/// Fresh context at the top-level record.
	pub fn new(options: &'a MapOptions) -> Self {
		Self { options, depth: 0 }
	}

	/// Options in effect.
	pub fn options(&self) -> &MapOptions {
		self.options
	}

	/// Current nested-object depth.
	pub fn depth(&self) -> u32 {
		self.depth
	}

	pub(crate) fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
		if self.depth >= self.options.max_depth {
			return Err(MappingError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}

		self.depth += 1;
		let out = f(self);
		self.depth -= 1;
		out
	}
}

/// Populate `target` from `record` with default options.
pub fn map_into<T: Parsable>(record: &StructValue, target: &mut T) -> Result<()> {
	map_into_with(record, target, &MapOptions::default())
}

/// Populate `target` from `record`.
///
/// Fields are visited in declaration order and the first failure aborts the pass.
/// Fields set before the failure stay set, so callers must discard `target` on error.
pub fn map_into_with<T: Parsable>(record: &StructValue, target: &mut T, options: &MapOptions) -> Result<()> {
	let mut cx = MapContext::new(options);
	map_fields(record, target, &mut cx)
}

/// Map `record` onto a fresh `T`.
pub fn map_record<T: Parsable>(record: &StructValue, options: &MapOptions) -> Result<T> {
	let mut target = T::default();
	map_into_with(record, &mut target, options)?;
	Ok(target)
}

pub(crate) fn map_fields<T: Parsable>(record: &StructValue, target: &mut T, cx: &mut MapContext<'_>) -> Result<()> {
	for field in T::FIELDS {
		let value = find_value(record, field);
		if value.is_none() {
			trace!(target_type = T::TYPE_NAME, field = field.name, "no source value");
		}
		(field.assign)(target, value, cx).map_err(|err| with_field(field.name, err))?;
	}
	Ok(())
}

fn find_value<'r, T: Parsable>(record: &'r StructValue, field: &Field<T>) -> Option<&'r Value> {
	let key = field.key();
	if let Some(value) = record.get(&key).filter(|value| !value.is_null()) {
		return Some(value);
	}

	let hint = T::HINTS.lookup(field.name)?;
	let value = hint.resolve(record);
	if value.is_some() {
		debug!(target_type = T::TYPE_NAME, field = field.name, key = %key, path = %hint, "resolved field through hint");
	}
	value
}

fn with_field(field: &'static str, err: MappingError) -> MappingError {
	match err {
		MappingError::Field { .. } | MappingError::NestedMapping { .. } => MappingError::NestedMapping {
			field,
			source: Box::new(err),
		},
		leaf => MappingError::Field {
			field,
			source: Box::new(leaf),
		},
	}
}
