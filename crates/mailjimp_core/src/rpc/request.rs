use chrono::NaiveDateTime;

use crate::rpc::{EmailType, MemberStatus, MergeVars, RpcEnum, StructValue, Value, format_timestamp};

/// Outbound call: remote method name plus named arguments in wire form.
pub trait RpcRequest {
	/// Remote method name.
	fn method(&self) -> &'static str;

	/// Arguments keyed by wire name; unset optional arguments are omitted.
	fn params(&self) -> StructValue;
}

fn strings(values: &[String]) -> Value {
	Value::Array(values.iter().map(|value| Value::from(value.as_str())).collect())
}

fn timestamp(value: Option<&NaiveDateTime>) -> Option<Value> {
	value.map(|value| Value::from(format_timestamp(value)))
}

fn enum_name<E: RpcEnum>(value: Option<E>) -> Option<Value> {
	value.map(|value| Value::from(value.wire_name()))
}

/// `apikeys`: list the account's keys.
#[derive(Debug, Clone, Default)]
pub struct ApiKeysRequest {
	/// Account user name.
	pub username: String,
	/// Account password.
	pub password: String,
	/// Include expired keys.
	pub expired: bool,
}

impl RpcRequest for ApiKeysRequest {
	fn method(&self) -> &'static str {
		"apikeys"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("username", self.username.as_str())
			.with("password", self.password.as_str())
			.with("expired", self.expired)
	}
}

/// `apikeyAdd`: create a key.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyAddRequest {
	/// Account user name.
	pub username: String,
	/// Account password.
	pub password: String,
	/// Existing key authorizing the call.
	pub apikey: String,
}

impl RpcRequest for ApiKeyAddRequest {
	fn method(&self) -> &'static str {
		"apikeyAdd"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("username", self.username.as_str())
			.with("password", self.password.as_str())
			.with("apikey", self.apikey.as_str())
	}
}

/// `apikeyExpire`: expire the authorizing key.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyExpireRequest {
	/// Account user name.
	pub username: String,
	/// Account password.
	pub password: String,
	/// Key to expire.
	pub apikey: String,
}

impl RpcRequest for ApiKeyExpireRequest {
	fn method(&self) -> &'static str {
		"apikeyExpire"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("username", self.username.as_str())
			.with("password", self.password.as_str())
			.with("apikey", self.apikey.as_str())
	}
}

/// `lists`: page through the account's lists.
#[derive(Debug, Clone, Default)]
pub struct ListsRequest {
	/// Authorizing key.
	pub apikey: String,
	/// Page number.
	pub start: Option<i64>,
	/// Page size.
	pub limit: Option<i64>,
}

impl RpcRequest for ListsRequest {
	fn method(&self) -> &'static str {
		"lists"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("apikey", self.apikey.as_str())
			.with_opt("start", self.start)
			.with_opt("limit", self.limit)
	}
}

/// `listMembers`: members with a given status.
#[derive(Debug, Clone)]
pub struct ListMembersRequest {
	/// Authorizing key.
	pub apikey: String,
	/// List id.
	pub id: String,
	/// Status to list.
	pub status: MemberStatus,
	/// Only changes after this time.
	pub since: Option<NaiveDateTime>,
	/// Page number.
	pub start: Option<i64>,
	/// Page size.
	pub limit: Option<i64>,
}

impl RpcRequest for ListMembersRequest {
	fn method(&self) -> &'static str {
		"listMembers"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("apikey", self.apikey.as_str())
			.with("id", self.id.as_str())
			.with("status", self.status.wire_name())
			.with_opt("since", timestamp(self.since.as_ref()))
			.with_opt("start", self.start)
			.with_opt("limit", self.limit)
	}
}

/// `listMemberInfo`: look up members by address or id.
#[derive(Debug, Clone, Default)]
pub struct ListMemberInfoRequest {
	/// Authorizing key.
	pub apikey: String,
	/// List id.
	pub id: String,
	/// Addresses or member ids.
	pub email_address: Vec<String>,
}

impl RpcRequest for ListMemberInfoRequest {
	fn method(&self) -> &'static str {
		"listMemberInfo"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("apikey", self.apikey.as_str())
			.with("id", self.id.as_str())
			.with("email_address", strings(&self.email_address))
	}
}

/// `listSubscribe`: subscribe one address.
#[derive(Debug, Clone, Default)]
pub struct ListSubscribeRequest {
	/// Authorizing key.
	pub apikey: String,
	/// List id.
	pub id: String,
	/// Address to subscribe.
	pub email_address: String,
	/// Merge variables for the new member.
	pub merge_vars: Option<MergeVars>,
	/// Preferred format.
	pub email_type: Option<EmailType>,
	/// Send a confirmation mail first.
	pub double_optin: bool,
	/// Update instead of failing when the address exists.
	pub update_existing: bool,
	/// Replace interest groups instead of adding to them.
	pub replace_interests: bool,
	/// Send the welcome mail (single opt-in only).
	pub send_welcome: bool,
}

impl RpcRequest for ListSubscribeRequest {
	fn method(&self) -> &'static str {
		"listSubscribe"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("apikey", self.apikey.as_str())
			.with("id", self.id.as_str())
			.with("email_address", self.email_address.as_str())
			.with_opt("merge_vars", self.merge_vars.as_ref().map(MergeVars::to_value))
			.with_opt("email_type", enum_name(self.email_type))
			.with("double_optin", self.double_optin)
			.with("update_existing", self.update_existing)
			.with("replace_interests", self.replace_interests)
			.with("send_welcome", self.send_welcome)
	}
}

/// `listUnsubscribe`: unsubscribe one address.
#[derive(Debug, Clone, Default)]
pub struct ListUnsubscribeRequest {
	/// Authorizing key.
	pub apikey: String,
	/// List id.
	pub id: String,
	/// Address to unsubscribe.
	pub email_address: String,
	/// Delete the member instead of marking it unsubscribed.
	pub delete_member: bool,
	/// Send the goodbye mail.
	pub send_goodbye: bool,
	/// Notify the list owner.
	pub send_notify: bool,
}

impl RpcRequest for ListUnsubscribeRequest {
	fn method(&self) -> &'static str {
		"listUnsubscribe"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("apikey", self.apikey.as_str())
			.with("id", self.id.as_str())
			.with("email_address", self.email_address.as_str())
			.with("delete_member", self.delete_member)
			.with("send_goodbye", self.send_goodbye)
			.with("send_notify", self.send_notify)
	}
}

/// `listUpdateMember`: change a member's details.
#[derive(Debug, Clone, Default)]
pub struct ListUpdateMemberRequest {
	/// Authorizing key.
	pub apikey: String,
	/// List id.
	pub id: String,
	/// Address or member id.
	pub email_address: String,
	/// New merge variables.
	pub merge_vars: MergeVars,
	/// New preferred format.
	pub email_type: Option<EmailType>,
	/// Replace interest groups instead of adding to them.
	pub replace_interests: bool,
}

impl RpcRequest for ListUpdateMemberRequest {
	fn method(&self) -> &'static str {
		"listUpdateMember"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("apikey", self.apikey.as_str())
			.with("id", self.id.as_str())
			.with("email_address", self.email_address.as_str())
			.with("merge_vars", self.merge_vars.to_value())
			.with_opt("email_type", enum_name(self.email_type))
			.with("replace_interests", self.replace_interests)
	}
}

/// `listBatchSubscribe`: subscribe many addresses.
#[derive(Debug, Clone, Default)]
pub struct ListBatchSubscribeRequest {
	/// Authorizing key.
	pub apikey: String,
	/// List id.
	pub id: String,
	/// One merge-variable set per address; `EMAIL` is required.
	pub batch: Vec<MergeVars>,
	/// Send confirmation mails first.
	pub double_optin: bool,
	/// Update instead of failing when an address exists.
	pub update_existing: bool,
	/// Replace interest groups instead of adding to them.
	pub replace_interests: bool,
}

impl RpcRequest for ListBatchSubscribeRequest {
	fn method(&self) -> &'static str {
		"listBatchSubscribe"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("apikey", self.apikey.as_str())
			.with("id", self.id.as_str())
			.with("batch", Value::Array(self.batch.iter().map(MergeVars::to_value).collect()))
			.with("double_optin", self.double_optin)
			.with("update_existing", self.update_existing)
			.with("replace_interests", self.replace_interests)
	}
}

/// `listBatchUnsubscribe`: unsubscribe many addresses.
#[derive(Debug, Clone, Default)]
pub struct ListBatchUnsubscribeRequest {
	/// Authorizing key.
	pub apikey: String,
	/// List id.
	pub id: String,
	/// Addresses to unsubscribe.
	pub emails: Vec<String>,
	/// Delete the members instead of marking them unsubscribed.
	pub delete_member: bool,
	/// Send goodbye mails.
	pub send_goodbye: bool,
	/// Notify the list owner.
	pub send_notify: bool,
}

impl RpcRequest for ListBatchUnsubscribeRequest {
	fn method(&self) -> &'static str {
		"listBatchUnsubscribe"
	}

	fn params(&self) -> StructValue {
		StructValue::new()
			.with("apikey", self.apikey.as_str())
			.with("id", self.id.as_str())
			.with("emails", strings(&self.emails))
			.with("delete_member", self.delete_member)
			.with("send_goodbye", self.send_goodbye)
			.with("send_notify", self.send_notify)
	}
}

/// `listInterestGroupingDel`: delete an interest grouping.
#[derive(Debug, Clone, Default)]
pub struct ListInterestGroupingDelRequest {
	/// Authorizing key.
	pub apikey: String,
	/// Grouping to delete.
	pub grouping_id: i64,
}

impl RpcRequest for ListInterestGroupingDelRequest {
	fn method(&self) -> &'static str {
		"listInterestGroupingDel"
	}

	fn params(&self) -> StructValue {
		StructValue::new().with("apikey", self.apikey.as_str()).with("grouping_id", self.grouping_id)
	}
}
