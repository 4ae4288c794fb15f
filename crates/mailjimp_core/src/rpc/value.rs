use chrono::NaiveDateTime;

/// Decoded XML-RPC value handed over by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker (`<nil/>` or a JSON `null` in recordings).
	Null,
	/// `<boolean>` scalar.
	Bool(bool),
	/// `<int>` / `<i4>` scalar.
	Int(i64),
	/// `<double>` scalar.
	Double(f64),
	/// `<string>` scalar.
	String(Box<str>),
	/// `<dateTime.iso8601>` scalar.
	DateTime(NaiveDateTime),
	/// `<array>` of arbitrary values.
	Array(Vec<Value>),
	/// `<struct>` with named members.
	Struct(StructValue),
}

impl Value {
	/// Stable lowercase label of the runtime type, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "boolean",
			Self::Int(_) => "int",
			Self::Double(_) => "double",
			Self::String(_) => "string",
			Self::DateTime(_) => "dateTime",
			Self::Array(_) => "array",
			Self::Struct(_) => "struct",
		}
	}

	/// True for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Borrow the struct payload, if any.
	pub fn as_struct(&self) -> Option<&StructValue> {
		match self {
			Self::Struct(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow the array payload, if any.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow the string payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}
}

/// Decoded struct value with member order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructValue {
	/// Members in wire order.
	pub fields: Vec<FieldValue>,
}

/// Named struct member.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Member name as sent on the wire.
	pub name: Box<str>,
	/// Member payload.
	pub value: Value,
}

impl StructValue {
	/// Empty struct.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.insert(name, value);
		self
	}

	/// Builder-style insert that skips `None`.
	pub fn with_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
		match value {
			Some(value) => self.with(name, value),
			None => self,
		}
	}

	/// Insert or replace a member.
	pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
		let value = value.into();
		match self.fields.iter_mut().find(|field| field.name.as_ref() == name) {
			Some(field) => field.value = value,
			None => self.fields.push(FieldValue {
				name: name.into(),
				value,
			}),
		}
	}

	/// Look up a member by exact name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}

	/// Whether a member with `name` exists (null-valued members included).
	pub fn contains_key(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the struct has no members.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for StructValue {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut out = Self::new();
		for (name, value) in iter {
			out.insert(name.as_ref(), value);
		}
		out
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Double(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<NaiveDateTime> for Value {
	fn from(value: NaiveDateTime) -> Self {
		Self::DateTime(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Array(value)
	}
}

impl From<StructValue> for Value {
	fn from(value: StructValue) -> Self {
		Self::Struct(value)
	}
}

/// Recorded responses are stored as JSON; numbers become `Int` when integral.
impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value as JsonValue;

		match value {
			JsonValue::Null => Self::Null,
			JsonValue::Bool(v) => Self::Bool(v),
			JsonValue::Number(n) => match n.as_i64() {
				Some(v) => Self::Int(v),
				None => Self::Double(n.as_f64().unwrap_or(f64::NAN)),
			},
			JsonValue::String(v) => Self::String(v.into_boxed_str()),
			JsonValue::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			JsonValue::Object(map) => Self::Struct(StructValue {
				fields: map
					.into_iter()
					.map(|(name, value)| FieldValue {
						name: name.into_boxed_str(),
						value: Self::from(value),
					})
					.collect(),
			}),
		}
	}
}
