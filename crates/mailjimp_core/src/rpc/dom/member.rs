use chrono::NaiveDateTime;
use serde::Serialize;

use crate::rpc::{DeclaredType, Field, FromRpcValue, HintTable, MapContext, Parsable, Result, RpcEnum, StructValue, Value, enum_from_value};
use crate::rpc_field;

/// Preferred email format of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
	/// HTML mail.
	Html,
	/// Plain text mail.
	Text,
	/// Mobile-formatted mail.
	Mobile,
}

impl RpcEnum for EmailType {
	const NAME: &'static str = "EmailType";
	const MEMBERS: &'static [(&'static str, Self)] = &[("html", Self::Html), ("text", Self::Text), ("mobile", Self::Mobile)];
}

impl FromRpcValue for EmailType {
	fn declared() -> DeclaredType {
		DeclaredType::Enum(Self::NAME)
	}

	fn from_rpc(value: &Value, _cx: &mut MapContext<'_>) -> Result<Self> {
		enum_from_value(value)
	}
}

/// Subscription status of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
	/// Receiving campaigns.
	Subscribed,
	/// Opted out.
	Unsubscribed,
	/// Removed after bounces.
	Cleaned,
	/// Awaiting double opt-in confirmation.
	Pending,
	/// Changed profile details (listing filter only).
	Updated,
}

impl RpcEnum for MemberStatus {
	const NAME: &'static str = "MemberStatus";
	const MEMBERS: &'static [(&'static str, Self)] = &[
		("subscribed", Self::Subscribed),
		("unsubscribed", Self::Unsubscribed),
		("cleaned", Self::Cleaned),
		("pending", Self::Pending),
		("updated", Self::Updated),
	];
}

impl FromRpcValue for MemberStatus {
	fn declared() -> DeclaredType {
		DeclaredType::Enum(Self::NAME)
	}

	fn from_rpc(value: &Value, _cx: &mut MapContext<'_>) -> Result<Self> {
		enum_from_value(value)
	}
}

/// Full member record from `listMemberInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemberInfo {
	/// Unique member id.
	pub id: Option<String>,
	/// Member address.
	pub email: Option<String>,
	/// Preferred format.
	pub email_type: Option<EmailType>,
	/// Merge variables.
	pub merges: Option<MergeVars>,
	/// Subscription status.
	pub status: Option<MemberStatus>,
	/// Address used to confirm the opt-in.
	pub ip_opt: Option<String>,
	/// Address used to sign up.
	pub ip_signup: Option<String>,
	/// Engagement rating, 1 to 5.
	pub member_rating: Option<i64>,
	/// Campaign the member was added from.
	pub campaign_id: Option<String>,
	/// Time of the last status change.
	pub timestamp: Option<NaiveDateTime>,
	/// Time of the last profile change.
	pub info_changed: Option<NaiveDateTime>,
	/// Id used in the web application URLs.
	pub web_id: Option<i64>,
	/// Owning list id.
	pub list_id: Option<String>,
	/// Owning list name.
	pub list_name: Option<String>,
	/// Language code.
	pub language: Option<String>,
	/// Whether the member is a Golden Monkey.
	pub is_gmonkey: Option<bool>,
	/// Geolocation, when known.
	pub geo: Option<MemberGeo>,
	/// Mail client, when known.
	pub clients: Option<MemberClient>,
	/// Static segments the member belongs to.
	pub static_segments: Option<Vec<StaticSegment>>,
}

impl Parsable for MemberInfo {
	const TYPE_NAME: &'static str = "MemberInfo";
	const FIELDS: &'static [Field<Self>] = &[
		rpc_field!(Self, id: String),
		rpc_field!(Self, email: String),
		rpc_field!(Self, email_type: EmailType),
		rpc_field!(Self, merges: MergeVars),
		rpc_field!(Self, status: MemberStatus),
		rpc_field!(Self, ip_opt: String),
		rpc_field!(Self, ip_signup: String),
		rpc_field!(Self, member_rating: i64),
		rpc_field!(Self, campaign_id: String),
		rpc_field!(Self, timestamp: NaiveDateTime),
		rpc_field!(Self, info_changed: NaiveDateTime),
		rpc_field!(Self, web_id: i64),
		rpc_field!(Self, list_id: String),
		rpc_field!(Self, list_name: String),
		rpc_field!(Self, language: String),
		rpc_field!(Self, is_gmonkey: bool),
		rpc_field!(Self, geo: MemberGeo),
		rpc_field!(Self, clients: MemberClient),
		rpc_field!(Self, static_segments: Vec<StaticSegment>),
	];
	// API 1.2 member records only carry the address inside the merge variables.
	const HINTS: HintTable = HintTable::new(&[("email", &["merges", "EMAIL"])]);
}

/// Standard merge variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeVars {
	/// `EMAIL` merge tag.
	pub email: Option<String>,
	/// `FNAME` merge tag.
	pub first_name: Option<String>,
	/// `LNAME` merge tag.
	pub last_name: Option<String>,
}

impl Parsable for MergeVars {
	const TYPE_NAME: &'static str = "MergeVars";
	const FIELDS: &'static [Field<Self>] = &[
		rpc_field!(Self, email: String, wire = "EMAIL"),
		rpc_field!(Self, first_name: String, wire = "FNAME"),
		rpc_field!(Self, last_name: String, wire = "LNAME"),
	];
}

impl MergeVars {
	/// Wire form used in subscribe and update requests.
	pub fn to_value(&self) -> Value {
		StructValue::new()
			.with_opt("EMAIL", self.email.clone())
			.with_opt("FNAME", self.first_name.clone())
			.with_opt("LNAME", self.last_name.clone())
			.into()
	}
}

/// Geolocation of a member.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemberGeo {
	/// Latitude in degrees.
	pub latitude: Option<f64>,
	/// Longitude in degrees.
	pub longitude: Option<f64>,
	/// Offset from GMT in hours.
	pub gmtoff: Option<f64>,
	/// Daylight saving offset in hours.
	pub dstoff: Option<f64>,
	/// Timezone name.
	pub timezone: Option<String>,
	/// Two-letter country code.
	pub cc: Option<String>,
	/// Region name.
	pub region: Option<String>,
}

impl Parsable for MemberGeo {
	const TYPE_NAME: &'static str = "MemberGeo";
	const FIELDS: &'static [Field<Self>] = &[
		rpc_field!(Self, latitude: f64),
		rpc_field!(Self, longitude: f64),
		rpc_field!(Self, gmtoff: f64),
		rpc_field!(Self, dstoff: f64),
		rpc_field!(Self, timezone: String),
		rpc_field!(Self, cc: String),
		rpc_field!(Self, region: String),
	];
}

/// Mail client last used by a member.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemberClient {
	/// Client name.
	pub name: Option<String>,
	/// Client icon URL.
	pub icon_url: Option<String>,
}

impl Parsable for MemberClient {
	const TYPE_NAME: &'static str = "MemberClient";
	const FIELDS: &'static [Field<Self>] = &[rpc_field!(Self, name: String), rpc_field!(Self, icon_url: String)];
}

/// Static segment membership.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StaticSegment {
	/// Segment id.
	pub id: Option<i64>,
	/// Segment name.
	pub name: Option<String>,
	/// Time the member was added.
	pub added: Option<NaiveDateTime>,
}

impl Parsable for StaticSegment {
	const TYPE_NAME: &'static str = "StaticSegment";
	const FIELDS: &'static [Field<Self>] = &[
		rpc_field!(Self, id: i64),
		rpc_field!(Self, name: String),
		rpc_field!(Self, added: NaiveDateTime),
	];
}
