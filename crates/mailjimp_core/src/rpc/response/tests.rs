use chrono::NaiveDate;
use serde_json::json;

use super::ResponseParser;
use crate::rpc::{EmailType, ErrorKind, MapOptions, MemberStatus, Value};

fn value(json: serde_json::Value) -> Value {
	Value::from(json)
}

fn parser() -> ResponseParser {
	ResponseParser::default()
}

#[test]
fn list_members_versioned_scenario() {
	let results = value(json!({"total": 1, "data": [{"email": "x@y.com", "timestamp": "2011-05-01 12:00:00"}]}));

	let members = parser().parse_list_members(&results).expect("members parse");
	let expected = NaiveDate::from_ymd_opt(2011, 5, 1)
		.and_then(|day| day.and_hms_opt(12, 0, 0))
		.expect("valid instant");

	assert_eq!(members.len(), 1);
	assert_eq!(members.get("x@y.com"), Some(&expected));
}

#[test]
fn list_members_legacy_array() {
	let results = value(json!([
		{"email": "a@y.com", "timestamp": "2011-05-01 12:00:00"},
		{"email": "b@y.com", "timestamp": "2011-05-02 12:00:00"},
	]));

	let members = parser().parse_list_members(&results).expect("members parse");
	let emails: Vec<_> = members.keys().map(String::as_str).collect();
	assert_eq!(emails, ["a@y.com", "b@y.com"]);
}

#[test]
fn list_member_without_timestamp_is_rejected() {
	let results = value(json!([{"email": "a@y.com"}]));

	let err = parser().parse_list_members(&results).expect_err("timestamp required");
	assert_eq!(err.kind(), ErrorKind::UnexpectedResponseShape);
}

#[test]
fn list_member_bad_timestamp_fails_whole_parse() {
	let results = value(json!([
		{"email": "a@y.com", "timestamp": "2011-05-01 12:00:00"},
		{"email": "b@y.com", "timestamp": "soon"},
	]));

	let err = parser().parse_list_members(&results).expect_err("no partial result");
	assert_eq!(err.kind(), ErrorKind::DateParse);
}

#[test]
fn lists_parse_from_both_envelopes() {
	let legacy = value(json!([{"id": "a1", "name": "News", "member_count": 3}]));
	let versioned = value(json!({"total": 1, "data": [{"id": "a1", "name": "News", "stats": {"member_count": 3}}]}));

	let from_legacy = parser().parse_lists(&legacy).expect("1.2 lists");
	let from_versioned = parser().parse_lists(&versioned).expect("1.3 lists");

	assert_eq!(from_legacy, from_versioned);
	assert_eq!(from_legacy[0].member_count, Some(3));
}

#[test]
fn lists_reject_unknown_root() {
	let err = parser().parse_lists(&value(json!({"foo": 1}))).expect_err("unknown shape");
	assert_eq!(err.kind(), ErrorKind::UnexpectedResponseShape);
}

#[test]
fn lists_reject_scalar_records() {
	let err = parser().parse_lists(&value(json!(["a", "b"]))).expect_err("records must be structs");
	assert_eq!(err.to_string(), "unexpected response shape: expected record struct, got string");
}

#[test]
fn api_keys_parse_records() {
	let results = value(json!([
		{"apikey": "k1", "created_at": "2011-01-01 00:00:00", "expired_at": ""},
		{"apikey": "k2", "created_at": "2010-01-01 00:00:00", "expired_at": "2010-06-01 00:00:00"},
	]));

	let keys = parser().parse_api_keys(&results).expect("keys parse");
	assert_eq!(keys.len(), 2);
	assert_eq!(keys[0].expired_at, None);
	assert!(keys[1].expired_at.is_some());
}

#[test]
fn create_api_key_passes_string_through() {
	assert_eq!(parser().parse_create_api_key(&value(json!("new-key"))).expect("string"), "new-key");
	let err = parser().parse_create_api_key(&value(json!(12))).expect_err("int is not a key");
	assert_eq!(err.kind(), ErrorKind::UnexpectedResponseShape);
}

#[test]
fn boolean_results_pass_through_exactly() {
	let parser = parser();
	assert!(parser.parse_list_subscribe(&Value::Bool(true)).expect("true"));
	assert!(!parser.parse_list_unsubscribe(&Value::Bool(false)).expect("false"));
	assert!(parser.parse_list_update_member(&Value::Bool(true)).expect("true"));
	assert!(parser.parse_expire_api_key(&Value::Bool(true)).expect("true"));

	let err = parser.parse_list_subscribe(&value(json!("true"))).expect_err("string is not a boolean");
	assert_eq!(err.kind(), ErrorKind::UnexpectedResponseShape);
	assert_eq!(err.to_string(), "unexpected response shape: expected boolean, got string");
}

#[test]
fn member_info_legacy_struct() {
	let results = value(json!({
		"id": "m1",
		"email": "x@y.com",
		"email_type": "text",
		"status": "subscribed",
		"timestamp": "2011-05-01 12:00:00",
	}));

	let info = parser().parse_list_member_info(&results).expect("parses").expect("found");
	assert_eq!(info.email_type, Some(EmailType::Text));
	assert_eq!(info.status, Some(MemberStatus::Subscribed));
}

#[test]
fn member_info_versioned_uses_first_record_only() {
	let results = value(json!({
		"success": 2,
		"errors": 0,
		"data": [
			{"id": "m1", "email": "first@y.com"},
			{"id": "m2", "email": "second@y.com"},
		],
	}));

	let info = parser().parse_list_member_info(&results).expect("parses").expect("found");
	assert_eq!(info.email.as_deref(), Some("first@y.com"));
}

#[test]
fn member_info_unknown_address_is_not_found() {
	let results = value(json!({
		"success": 0,
		"errors": 1,
		"data": [{"email": "nobody@y.com", "error": "The email address passed does not exist on this list"}],
	}));

	assert_eq!(parser().parse_list_member_info(&results).expect("parses"), None);
}

#[test]
fn member_info_empty_data_is_not_found() {
	let results = value(json!({"success": 0, "errors": 0, "data": []}));
	assert_eq!(parser().parse_list_member_info(&results).expect("parses"), None);
}

#[test]
fn member_info_rejects_array_root() {
	let err = parser().parse_list_member_info(&value(json!([]))).expect_err("array root");
	assert_eq!(err.kind(), ErrorKind::UnexpectedResponseShape);
}

#[test]
fn member_info_mapping_error_propagates() {
	let results = value(json!({"data": [{"email_type": "fax"}]}));

	let err = parser().parse_list_member_info(&results).expect_err("bad enum");
	assert_eq!(err.kind(), ErrorKind::EnumValueNotFound);
}

#[test]
fn batch_subscribe_result_with_errors() {
	let results = value(json!({
		"add_count": 2,
		"update_count": 0,
		"error_count": 1,
		"errors": [{"code": 502, "message": "Invalid Email Address", "email": "bad"}],
	}));

	let batch = parser().parse_list_batch_subscribe(&results).expect("batch parses");
	assert_eq!(batch.add_count, Some(2));
	assert_eq!(batch.error_count, Some(1));

	let errors = batch.errors.expect("errors present");
	assert_eq!(errors[0].code, Some(502));
	assert_eq!(errors[0].email.as_deref(), Some("bad"));
}

#[test]
fn batch_unsubscribe_result() {
	let results = value(json!({"success_count": 3, "error_count": 0, "errors": []}));

	let batch = parser().parse_list_batch_unsubscribe(&results).expect("batch parses");
	assert_eq!(batch.success_count, Some(3));
	assert_eq!(batch.errors, Some(Vec::new()));
}

#[test]
fn batch_result_requires_struct_root() {
	let err = parser().parse_list_batch_subscribe(&Value::Bool(true)).expect_err("boolean root");
	assert_eq!(err.kind(), ErrorKind::UnexpectedResponseShape);
}

#[test]
fn lenient_parser_accepts_singular_error_record() {
	let results = value(json!({"add_count": 0, "error_count": 1, "errors": {"code": 214, "email": "dup@y.com"}}));

	let strict = parser().parse_list_batch_subscribe(&results).expect_err("strict rejects");
	assert_eq!(strict.kind(), ErrorKind::UnsupportedConversion);

	let lenient = ResponseParser::new(MapOptions::lenient());
	let batch = lenient.parse_list_batch_subscribe(&results).expect("lenient accepts");
	assert_eq!(batch.errors.map(|errors| errors.len()), Some(1));
}
