use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDateTime;

use crate::rpc::mapper::map_fields;
use crate::rpc::{HintTable, MapContext, MappingError, Result, Value, normalize_key, parse_timestamp};

/// Declared type of a target field, as reported in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
	/// Boolean scalar.
	Bool,
	/// Integer scalar.
	Int,
	/// Floating-point scalar.
	Double,
	/// Text scalar.
	String,
	/// Timestamp.
	Date,
	/// Enumeration with the given name.
	Enum(&'static str),
	/// Nested [`Parsable`] object with the given type name.
	Object(&'static str),
	/// Homogeneous sequence.
	List(Box<DeclaredType>),
}

impl fmt::Display for DeclaredType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool => f.write_str("boolean"),
			Self::Int => f.write_str("int"),
			Self::Double => f.write_str("double"),
			Self::String => f.write_str("string"),
			Self::Date => f.write_str("date"),
			Self::Enum(name) => write!(f, "enum {name}"),
			Self::Object(name) => f.write_str(name),
			Self::List(inner) => write!(f, "list<{inner}>"),
		}
	}
}

/// Type-directed coercion from a dynamic value.
pub trait FromRpcValue: Sized {
	/// Declared type tag of `Self`.
	fn declared() -> DeclaredType;

	/// Coerce `value` into `Self`.
	fn from_rpc(value: &Value, cx: &mut MapContext<'_>) -> Result<Self>;

	/// Coerce `value` into an optional slot; `Ok(None)` means the value denotes "no value".
	fn from_rpc_opt(value: &Value, cx: &mut MapContext<'_>) -> Result<Option<Self>> {
		Self::from_rpc(value, cx).map(Some)
	}
}

fn unsupported<T: FromRpcValue>(value: &Value) -> MappingError {
	MappingError::UnsupportedConversion {
		from: value.kind(),
		to: T::declared(),
	}
}

fn coercion<T: FromRpcValue>(value: impl fmt::Display) -> MappingError {
	MappingError::TypeCoercion {
		value: value.to_string(),
		to: T::declared(),
	}
}

impl FromRpcValue for bool {
	fn declared() -> DeclaredType {
		DeclaredType::Bool
	}

	fn from_rpc(value: &Value, _cx: &mut MapContext<'_>) -> Result<Self> {
		match value {
			Value::Bool(v) => Ok(*v),
			other => Err(unsupported::<Self>(other)),
		}
	}
}

impl FromRpcValue for i64 {
	fn declared() -> DeclaredType {
		DeclaredType::Int
	}

	fn from_rpc(value: &Value, _cx: &mut MapContext<'_>) -> Result<Self> {
		match value {
			Value::Int(v) => Ok(*v),
			// Doubles truncate toward zero.
			Value::Double(v) if v.is_finite() => Ok(v.trunc() as i64),
			Value::Double(v) => Err(coercion::<Self>(v)),
			Value::String(text) => text.trim().parse::<i64>().map_err(|_| coercion::<Self>(text)),
			other => Err(unsupported::<Self>(other)),
		}
	}
}

impl FromRpcValue for f64 {
	fn declared() -> DeclaredType {
		DeclaredType::Double
	}

	fn from_rpc(value: &Value, _cx: &mut MapContext<'_>) -> Result<Self> {
		match value {
			Value::Double(v) => Ok(*v),
			Value::Int(v) => Ok(*v as f64),
			Value::String(text) => text.trim().parse::<f64>().map_err(|_| coercion::<Self>(text)),
			other => Err(unsupported::<Self>(other)),
		}
	}
}

impl FromRpcValue for String {
	fn declared() -> DeclaredType {
		DeclaredType::String
	}

	fn from_rpc(value: &Value, _cx: &mut MapContext<'_>) -> Result<Self> {
		match value {
			Value::String(text) => Ok(text.to_string()),
			other => Err(unsupported::<Self>(other)),
		}
	}
}

impl FromRpcValue for NaiveDateTime {
	fn declared() -> DeclaredType {
		DeclaredType::Date
	}

	fn from_rpc(value: &Value, cx: &mut MapContext<'_>) -> Result<Self> {
		Self::from_rpc_opt(value, cx)?.ok_or_else(|| coercion::<Self>(""))
	}

	fn from_rpc_opt(value: &Value, _cx: &mut MapContext<'_>) -> Result<Option<Self>> {
		match value {
			Value::DateTime(v) => Ok(Some(*v)),
			Value::String(text) => parse_timestamp(text),
			other => Err(unsupported::<Self>(other)),
		}
	}
}

impl<T: FromRpcValue> FromRpcValue for Vec<T> {
	fn declared() -> DeclaredType {
		DeclaredType::List(Box::new(T::declared()))
	}

	fn from_rpc(value: &Value, cx: &mut MapContext<'_>) -> Result<Self> {
		match value {
			Value::Array(items) => items.iter().map(|item| T::from_rpc(item, cx)).collect(),
			Value::Struct(_) if cx.options().singular_record_as_sequence => Ok(vec![T::from_rpc(value, cx)?]),
			other => Err(unsupported::<Self>(other)),
		}
	}
}

impl<T: Parsable> FromRpcValue for T {
	fn declared() -> DeclaredType {
		DeclaredType::Object(T::TYPE_NAME)
	}

	fn from_rpc(value: &Value, cx: &mut MapContext<'_>) -> Result<Self> {
		object_from_value(value, cx)
	}
}

/// Construct a fresh `T` and map the struct `value` onto it.
pub fn object_from_value<T: Parsable>(value: &Value, cx: &mut MapContext<'_>) -> Result<T> {
	let Value::Struct(record) = value else {
		return Err(MappingError::UnsupportedConversion {
			from: value.kind(),
			to: DeclaredType::Object(T::TYPE_NAME),
		});
	};

	cx.nested(|cx| {
		let mut target = T::default();
		map_fields(record, &mut target, cx)?;
		Ok(target)
	})
}

/// Enumeration resolved from its member names.
pub trait RpcEnum: Copy + PartialEq + 'static {
	/// Enumeration name used in diagnostics.
	const NAME: &'static str;
	/// `(wire name, member)` pairs; matching ignores ASCII case.
	const MEMBERS: &'static [(&'static str, Self)];

	/// Canonical wire name of a member.
	fn wire_name(self) -> &'static str {
		Self::MEMBERS
			.iter()
			.find(|(_, member)| *member == self)
			.map(|(name, _)| *name)
			.unwrap_or_default()
	}
}

/// Resolve a string value against the members of `E`.
pub fn enum_from_value<E: RpcEnum>(value: &Value) -> Result<E> {
	let Value::String(raw) = value else {
		return Err(MappingError::UnsupportedConversion {
			from: value.kind(),
			to: DeclaredType::Enum(E::NAME),
		});
	};

	E::MEMBERS
		.iter()
		.find(|(name, _)| name.eq_ignore_ascii_case(raw))
		.map(|(_, member)| *member)
		.ok_or_else(|| MappingError::EnumValueNotFound {
			value: raw.to_string(),
			enum_name: E::NAME,
		})
}

/// Static descriptor of one settable field on `T`.
///
/// Usually built with [`crate::rpc_field!`].
pub struct Field<T> {
	/// Logical field name; also the hint-table key.
	pub name: &'static str,
	/// Wire key used instead of [`normalize_key`] of `name`.
	pub wire_key: Option<&'static str>,
	/// Declared type tag.
	pub declared: fn() -> DeclaredType,
	/// Coerce an optional source value and store it on the target.
	pub assign: fn(&mut T, Option<&Value>, &mut MapContext<'_>) -> Result<()>,
}

impl<T> Field<T> {
	/// Wire key looked up directly in a record.
	pub fn key(&self) -> Cow<'static, str> {
		match self.wire_key {
			Some(key) => Cow::Borrowed(key),
			None => Cow::Owned(normalize_key(self.name)),
		}
	}

	/// Declared type tag.
	pub fn declared_type(&self) -> DeclaredType {
		(self.declared)()
	}
}

impl<T> fmt::Debug for Field<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("wire_key", &self.wire_key)
			.field("declared", &self.declared_type())
			.finish()
	}
}

/// Object populated field-by-field from a response record.
pub trait Parsable: Default + 'static {
	/// Type name used in diagnostics.
	const TYPE_NAME: &'static str;
	/// Every settable field, in mapping order.
	const FIELDS: &'static [Field<Self>];
	/// Fallback lookup paths for fields whose wire key may be missing.
	const HINTS: HintTable = HintTable::EMPTY;
}

/// Store `value` into an optional slot; an absent value clears the slot.
pub fn assign<V: FromRpcValue>(slot: &mut Option<V>, value: Option<&Value>, cx: &mut MapContext<'_>) -> Result<()> {
	*slot = match value {
		Some(value) => V::from_rpc_opt(value, cx)?,
		None => None,
	};
	Ok(())
}

/// Build a [`Field`] descriptor for an `Option<_>` member of the target.
///
/// ```ignore
/// const FIELDS: &'static [Field<Self>] = &[
/// 	rpc_field!(Self, api_key: String, wire = "apikey"),
/// 	rpc_field!(Self, created_at: NaiveDateTime),
/// ];
/// ```
#[macro_export]
macro_rules! rpc_field {
	(@build $target:ty, $name:ident, $ty:ty, $wire:expr) => {
		$crate::rpc::Field::<$target> {
			name: stringify!($name),
			wire_key: $wire,
			declared: <$ty as $crate::rpc::FromRpcValue>::declared,
			assign: |target, value, cx| $crate::rpc::assign::<$ty>(&mut target.$name, value, cx),
		}
	};
	($target:ty, $name:ident: $ty:ty, wire = $wire:literal) => {
		$crate::rpc_field!(@build $target, $name, $ty, Some($wire))
	};
	($target:ty, $name:ident: $ty:ty) => {
		$crate::rpc_field!(@build $target, $name, $ty, None)
	};
}
