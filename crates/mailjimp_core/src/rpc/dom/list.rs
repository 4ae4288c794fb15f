use chrono::NaiveDateTime;
use serde::Serialize;

use crate::rpc::{Field, HintTable, Parsable};
use crate::rpc_field;

/// Mailing list summary from `lists`.
///
/// API 1.2 sends the counters flat on the record; API 1.3 moves them under `stats`,
/// which the hint table covers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MailingList {
	/// List id used by every list call.
	pub id: Option<String>,
	/// Id used in the web application URLs.
	pub web_id: Option<i64>,
	/// Display name.
	pub name: Option<String>,
	/// Creation time.
	pub date_created: Option<NaiveDateTime>,
	/// Whether subscribers may pick their email format.
	pub email_type_option: Option<bool>,
	/// Whether the list uses the AwesomeBar.
	pub use_awesomebar: Option<bool>,
	/// Default sender name.
	pub default_from_name: Option<String>,
	/// Default sender address.
	pub default_from_email: Option<String>,
	/// Default campaign subject.
	pub default_subject: Option<String>,
	/// Default language code.
	pub default_language: Option<String>,
	/// List rating, 0 to 5.
	pub list_rating: Option<f64>,
	/// Short subscribe form URL.
	pub subscribe_url_short: Option<String>,
	/// Full subscribe form URL.
	pub subscribe_url_long: Option<String>,
	/// Active subscribers.
	pub member_count: Option<i64>,
	/// Unsubscribed members.
	pub unsubscribe_count: Option<i64>,
	/// Cleaned members.
	pub cleaned_count: Option<i64>,
	/// Subscribers since the last campaign.
	pub member_count_since_send: Option<i64>,
	/// Unsubscribes since the last campaign.
	pub unsubscribe_count_since_send: Option<i64>,
	/// Cleaned members since the last campaign.
	pub cleaned_count_since_send: Option<i64>,
	/// Average subscribes per month.
	pub avg_sub_rate: Option<f64>,
	/// Average unsubscribes per month.
	pub avg_unsub_rate: Option<f64>,
	/// Campaign open rate.
	pub open_rate: Option<f64>,
	/// Campaign click rate.
	pub click_rate: Option<f64>,
	/// Enabled list modules.
	pub modules: Option<Vec<String>>,
}

impl Parsable for MailingList {
	const TYPE_NAME: &'static str = "MailingList";
	const FIELDS: &'static [Field<Self>] = &[
		rpc_field!(Self, id: String),
		rpc_field!(Self, web_id: i64),
		rpc_field!(Self, name: String),
		rpc_field!(Self, date_created: NaiveDateTime),
		rpc_field!(Self, email_type_option: bool),
		rpc_field!(Self, use_awesomebar: bool),
		rpc_field!(Self, default_from_name: String),
		rpc_field!(Self, default_from_email: String),
		rpc_field!(Self, default_subject: String),
		rpc_field!(Self, default_language: String),
		rpc_field!(Self, list_rating: f64),
		rpc_field!(Self, subscribe_url_short: String),
		rpc_field!(Self, subscribe_url_long: String),
		rpc_field!(Self, member_count: i64),
		rpc_field!(Self, unsubscribe_count: i64),
		rpc_field!(Self, cleaned_count: i64),
		rpc_field!(Self, member_count_since_send: i64),
		rpc_field!(Self, unsubscribe_count_since_send: i64),
		rpc_field!(Self, cleaned_count_since_send: i64),
		rpc_field!(Self, avg_sub_rate: f64),
		rpc_field!(Self, avg_unsub_rate: f64),
		rpc_field!(Self, open_rate: f64),
		rpc_field!(Self, click_rate: f64),
		rpc_field!(Self, modules: Vec<String>),
	];
	const HINTS: HintTable = HintTable::new(&[
		("member_count", &["stats", "member_count"]),
		("unsubscribe_count", &["stats", "unsubscribe_count"]),
		("cleaned_count", &["stats", "cleaned_count"]),
		("member_count_since_send", &["stats", "member_count_since_send"]),
		("unsubscribe_count_since_send", &["stats", "unsubscribe_count_since_send"]),
		("cleaned_count_since_send", &["stats", "cleaned_count_since_send"]),
		("avg_sub_rate", &["stats", "avg_sub_rate"]),
		("avg_unsub_rate", &["stats", "avg_unsub_rate"]),
		("open_rate", &["stats", "open_rate"]),
		("click_rate", &["stats", "click_rate"]),
	]);
}

/// One row of `listMembers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListMember {
	/// Member address.
	pub email: Option<String>,
	/// Time of the status change being listed.
	pub timestamp: Option<NaiveDateTime>,
}

impl Parsable for ListMember {
	const TYPE_NAME: &'static str = "ListMember";
	const FIELDS: &'static [Field<Self>] = &[rpc_field!(Self, email: String), rpc_field!(Self, timestamp: NaiveDateTime)];
}
