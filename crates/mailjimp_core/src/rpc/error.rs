use thiserror::Error;

use crate::rpc::DeclaredType;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MappingError>;

/// Root-cause classification of a [`MappingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Response root, envelope, or pass-through scalar had the wrong shape.
	UnexpectedResponseShape,
	/// String matched no enumeration member.
	EnumValueNotFound,
	/// Non-empty timestamp did not match the fixed format.
	DateParse,
	/// Numeric conversion from a string or double failed.
	TypeCoercion,
	/// No coercion rule exists between the observed and declared types.
	UnsupportedConversion,
	/// Nested objects went deeper than the configured limit.
	DepthExceeded,
}

/// Errors produced while mapping decoded responses onto typed objects.
#[derive(Debug, Error)]
pub enum MappingError {
	/// Root, envelope, or pass-through value was not one of the recognized shapes.
	#[error("unexpected response shape: expected {expected}, got {got}")]
	UnexpectedResponseShape {
		/// Shape the parser accepts.
		expected: &'static str,
		/// Runtime kind that was observed.
		got: &'static str,
	},
	/// String value has no case-insensitive match among the enum members.
	#[error("no member of {enum_name} matches {value:?}")]
	EnumValueNotFound {
		/// Offending wire value.
		value: String,
		/// Declared enumeration name.
		enum_name: &'static str,
	},
	/// Timestamp string did not match the fixed format.
	#[error("could not parse timestamp {value:?}")]
	DateParse {
		/// Offending wire value.
		value: String,
		/// Parser failure.
		#[source]
		source: chrono::ParseError,
	},
	/// Value could not be converted numerically.
	#[error("cannot convert {value:?} to {to}")]
	TypeCoercion {
		/// Offending wire value rendered as text.
		value: String,
		/// Declared field type.
		to: DeclaredType,
	},
	/// No conversion rule applies.
	#[error("unsupported conversion from {from} to {to}")]
	UnsupportedConversion {
		/// Runtime kind that was observed.
		from: &'static str,
		/// Declared field type.
		to: DeclaredType,
	},
	/// Leaf failure tagged with the field that failed.
	#[error("field {field}: {source}")]
	Field {
		/// Logical field name.
		field: &'static str,
		/// Underlying failure.
		#[source]
		source: Box<MappingError>,
	},
	/// Failure inside a nested object or sequence element of `field`.
	#[error("nested mapping failed in {field}: {source}")]
	NestedMapping {
		/// Logical name of the outer field.
		field: &'static str,
		/// Failure raised by the nested mapping.
		#[source]
		source: Box<MappingError>,
	},
	/// Nested objects exceeded [`crate::rpc::MapOptions::max_depth`].
	#[error("mapping depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
}

impl MappingError {
	/// Innermost error after unwrapping field and nesting context.
	pub fn root_cause(&self) -> &MappingError {
		match self {
			Self::Field { source, .. } | Self::NestedMapping { source, .. } => source.root_cause(),
			other => other,
		}
	}

	/// Classification of [`Self::root_cause`].
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::UnexpectedResponseShape { .. } => ErrorKind::UnexpectedResponseShape,
			Self::EnumValueNotFound { .. } => ErrorKind::EnumValueNotFound,
			Self::DateParse { .. } => ErrorKind::DateParse,
			Self::TypeCoercion { .. } => ErrorKind::TypeCoercion,
			Self::UnsupportedConversion { .. } => ErrorKind::UnsupportedConversion,
			Self::DepthExceeded { .. } => ErrorKind::DepthExceeded,
			Self::Field { source, .. } | Self::NestedMapping { source, .. } => source.kind(),
		}
	}

	/// Dotted path of logical field names leading to the failure, outermost first.
	pub fn field_path(&self) -> Option<String> {
		let mut parts = Vec::new();
		let mut current = self;
		while let Self::Field { field, source } | Self::NestedMapping { field, source } = current {
			parts.push(*field);
			current = source.as_ref();
		}
		if parts.is_empty() { None } else { Some(parts.join(".")) }
	}

	pub(crate) fn unexpected_shape(expected: &'static str, got: &crate::rpc::Value) -> Self {
		Self::UnexpectedResponseShape { expected, got: got.kind() }
	}
}
