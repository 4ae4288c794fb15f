use tracing::{debug, warn};

use crate::rpc::{MappingError, Result, Value};

const EXPECTED_SHAPE: &str = "array or {total, data} struct";

/// Record list of a listing response in either API version.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope<'a> {
	/// API 1.2: the root array is the record list.
	Legacy(&'a [Value]),
	/// API 1.3: `{total, data}` wrapper around the record list.
	Versioned {
		/// Server-side total, which may exceed `records.len()` when paging.
		total: i64,
		/// Records of this page.
		records: &'a [Value],
	},
}

impl<'a> Envelope<'a> {
	/// Classify a response root.
	pub fn detect(root: &'a Value) -> Result<Self> {
		let envelope = match root {
			Value::Array(items) => Self::Legacy(items),
			Value::Struct(item) => {
				let total = match item.get("total") {
					Some(Value::Int(total)) => *total,
					_ => return Err(MappingError::unexpected_shape(EXPECTED_SHAPE, root)),
				};
				let records = item
					.get("data")
					.and_then(Value::as_array)
					.ok_or_else(|| MappingError::unexpected_shape(EXPECTED_SHAPE, root))?;
				if usize::try_from(total).ok() != Some(records.len()) {
					warn!(total, records = records.len(), "envelope total differs from data length");
				}
				Self::Versioned { total, records }
			}
			other => return Err(MappingError::unexpected_shape(EXPECTED_SHAPE, other)),
		};

		debug!(api_version = envelope.api_version(), records = envelope.records().len(), "detected response envelope");
		Ok(envelope)
	}

	/// Unwrapped records.
	pub fn records(&self) -> &'a [Value] {
		match *self {
			Self::Legacy(records) | Self::Versioned { records, .. } => records,
		}
	}

	/// API version label of the envelope shape.
	pub fn api_version(&self) -> &'static str {
		match self {
			Self::Legacy(_) => "1.2",
			Self::Versioned { .. } => "1.3",
		}
	}
}

#[cfg(test)]
mod tests;
