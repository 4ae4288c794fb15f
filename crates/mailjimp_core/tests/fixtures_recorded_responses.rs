#![allow(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use mailjimp::rpc::{EmailType, ErrorKind, Field, MapOptions, MemberStatus, Parsable, ResponseParser, Value, map_record};
use mailjimp_testkit::load_fixture_json;

fn fixture(name: &str) -> Value {
	Value::from(load_fixture_json(name))
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
	NaiveDate::from_ymd_opt(y, m, d)
		.and_then(|day| day.and_hms_opt(h, min, s))
		.expect("valid instant")
}

#[test]
fn lists_agree_across_api_versions() {
	let parser = ResponseParser::default();
	let legacy = parser.parse_lists(&fixture("lists_v1_2.json")).expect("1.2 lists parse");
	let versioned = parser.parse_lists(&fixture("lists_v1_3.json")).expect("1.3 lists parse");

	assert_eq!(legacy.len(), 2);
	assert_eq!(versioned.len(), 2);
	for (old, new) in legacy.iter().zip(&versioned) {
		assert_eq!(old.id, new.id);
		assert_eq!(old.name, new.name);
		assert_eq!(old.date_created, new.date_created);
		assert_eq!(old.member_count, new.member_count);
		assert_eq!(old.unsubscribe_count, new.unsubscribe_count);
		assert_eq!(old.cleaned_count_since_send, new.cleaned_count_since_send);
	}

	assert_eq!(versioned[0].date_created, Some(at(2010, 11, 4, 14, 32, 10)));
	assert_eq!(versioned[0].avg_sub_rate, Some(14.0));
	assert_eq!(versioned[1].open_rate, None);
	assert_eq!(versioned[1].modules.as_deref(), Some(&["social".to_owned()][..]));
	assert_eq!(legacy[1].list_rating, Some(0.0));
}

#[test]
fn list_members_map_address_to_timestamp() {
	let members = ResponseParser::default()
		.parse_list_members(&fixture("list_members_v1_3.json"))
		.expect("members parse");

	assert_eq!(members.len(), 3);
	assert_eq!(members.get("grace@example.com"), Some(&at(2011, 3, 4, 5, 6, 7)));
}

#[test]
fn member_info_recorded_lookup() {
	let info = ResponseParser::default()
		.parse_list_member_info(&fixture("member_info_v1_3.json"))
		.expect("member info parses")
		.expect("member found");

	assert_eq!(info.email.as_deref(), Some("ada@example.com"));
	assert_eq!(info.email_type, Some(EmailType::Html));
	assert_eq!(info.status, Some(MemberStatus::Subscribed));
	assert_eq!(info.member_rating, Some(4));
	assert_eq!(info.info_changed, Some(at(2011, 3, 1, 18, 0, 0)));

	let geo = info.geo.expect("geo present");
	assert_eq!(geo.latitude, Some(51.5072));
	assert_eq!(geo.dstoff, Some(1.0));
	assert_eq!(geo.cc.as_deref(), Some("GB"));

	let segments = info.static_segments.expect("segments present");
	assert_eq!(segments.len(), 1);
	assert_eq!(segments[0].added, Some(at(2011, 2, 10, 8, 0, 0)));
}

#[test]
fn member_info_legacy_reads_email_through_merges() {
	let info = ResponseParser::default()
		.parse_list_member_info(&fixture("member_info_v1_2.json"))
		.expect("member info parses")
		.expect("member found");

	assert_eq!(info.email.as_deref(), Some("ada@example.com"));
	assert_eq!(info.info_changed, None);
	assert_eq!(info.geo, None);
}

#[test]
fn member_info_unknown_address() {
	let info = ResponseParser::default()
		.parse_list_member_info(&fixture("member_info_not_found.json"))
		.expect("lookup miss is not an error");
	assert!(info.is_none());
}

#[test]
fn batch_subscribe_recorded_result() {
	let batch = ResponseParser::default()
		.parse_list_batch_subscribe(&fixture("batch_subscribe.json"))
		.expect("batch parses");

	assert_eq!(batch.add_count, Some(2));
	assert_eq!(batch.update_count, Some(1));
	let errors = batch.errors.expect("errors present");
	assert_eq!(errors[0].code, Some(502));
}

#[test]
fn api_keys_recorded_listing() {
	let keys = ResponseParser::default().parse_api_keys(&fixture("api_keys.json")).expect("keys parse");

	assert_eq!(keys.len(), 2);
	assert_eq!(keys[0].expired_at, None);
	assert_eq!(keys[1].expired_at, Some(at(2010, 9, 14, 12, 0, 0)));
}

#[test]
fn recorded_lists_do_not_parse_as_member_info() {
	let err = ResponseParser::default()
		.parse_list_member_info(&fixture("lists_v1_2.json"))
		.expect_err("array root");
	assert_eq!(err.kind(), ErrorKind::UnexpectedResponseShape);
}

#[derive(Debug, Default)]
struct Campaign {
	id: Option<String>,
	emails_sent: Option<i64>,
	send_time: Option<NaiveDateTime>,
}

impl Parsable for Campaign {
	const TYPE_NAME: &'static str = "Campaign";
	const FIELDS: &'static [Field<Self>] = &[
		mailjimp::rpc_field!(Self, id: String),
		mailjimp::rpc_field!(Self, emails_sent: i64),
		mailjimp::rpc_field!(Self, send_time: NaiveDateTime),
	];
}

#[test]
fn downstream_types_declare_their_own_schema() {
	let record = Value::from(serde_json::json!({"id": "c1", "emails_sent": "250", "send_time": "2011-05-01 12:00:00"}));
	let record = record.as_struct().expect("record struct");

	let campaign: Campaign = map_record(record, &MapOptions::default()).expect("campaign maps");
	assert_eq!(campaign.id.as_deref(), Some("c1"));
	assert_eq!(campaign.emails_sent, Some(250));
	assert_eq!(campaign.send_time, Some(at(2011, 5, 1, 12, 0, 0)));
}
