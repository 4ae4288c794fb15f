use serde_json::json;

use super::Envelope;
use crate::rpc::{ErrorKind, Value};

fn value(json: serde_json::Value) -> Value {
	Value::from(json)
}

#[test]
fn bare_array_and_versioned_wrapper_yield_same_records() {
	let legacy_root = value(json!(["a", "b"]));
	let versioned_root = value(json!({"total": 2, "data": ["a", "b"]}));

	let legacy = Envelope::detect(&legacy_root).expect("legacy detects");
	let versioned = Envelope::detect(&versioned_root).expect("versioned detects");

	assert_eq!(legacy.api_version(), "1.2");
	assert_eq!(versioned.api_version(), "1.3");
	assert_eq!(legacy.records(), versioned.records());
	assert_eq!(legacy.records().len(), 2);
}

#[test]
fn versioned_total_is_kept() {
	let root = value(json!({"total": 40, "data": [{"id": "a"}]}));
	let envelope = Envelope::detect(&root).expect("paged page detects");

	assert!(matches!(envelope, Envelope::Versioned { total: 40, .. }));
	assert_eq!(envelope.records().len(), 1);
}

#[test]
fn struct_without_envelope_members_is_rejected() {
	let root = value(json!({"foo": 1}));
	let err = Envelope::detect(&root).expect_err("neither shape");
	assert_eq!(err.kind(), ErrorKind::UnexpectedResponseShape);
}

#[test]
fn data_that_is_not_an_array_is_rejected() {
	let root = value(json!({"total": 1, "data": {"id": "a"}}));
	let err = Envelope::detect(&root).expect_err("data must be an array");
	assert_eq!(err.kind(), ErrorKind::UnexpectedResponseShape);
}

#[test]
fn scalar_root_is_rejected() {
	let err = Envelope::detect(&Value::Bool(true)).expect_err("scalar root");
	assert!(err.to_string().contains("got boolean"));
}

#[test]
fn empty_versioned_page() {
	let root = value(json!({"total": 0, "data": []}));
	let envelope = Envelope::detect(&root).expect("empty page detects");
	assert!(envelope.records().is_empty());
}
