use serde::Serialize;

use crate::rpc::{Field, Parsable};
use crate::rpc_field;

/// Outcome of `listBatchSubscribe` / `listBatchUnsubscribe`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
	/// Addresses newly added (subscribe only).
	pub add_count: Option<i64>,
	/// Existing addresses updated (subscribe only).
	pub update_count: Option<i64>,
	/// Addresses removed (unsubscribe only).
	pub success_count: Option<i64>,
	/// Addresses that failed.
	pub error_count: Option<i64>,
	/// Per-address failures.
	pub errors: Option<Vec<BatchError>>,
}

impl Parsable for BatchResult {
	const TYPE_NAME: &'static str = "BatchResult";
	const FIELDS: &'static [Field<Self>] = &[
		rpc_field!(Self, add_count: i64),
		rpc_field!(Self, update_count: i64),
		rpc_field!(Self, success_count: i64),
		rpc_field!(Self, error_count: i64),
		rpc_field!(Self, errors: Vec<BatchError>),
	];
}

/// Failure for one address in a batch operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchError {
	/// API error code.
	pub code: Option<i64>,
	/// Human-readable message.
	pub message: Option<String>,
	/// Address the failure applies to.
	pub email: Option<String>,
}

impl Parsable for BatchError {
	const TYPE_NAME: &'static str = "BatchError";
	const FIELDS: &'static [Field<Self>] = &[
		rpc_field!(Self, code: i64),
		rpc_field!(Self, message: String),
		rpc_field!(Self, email: String),
	];
}
