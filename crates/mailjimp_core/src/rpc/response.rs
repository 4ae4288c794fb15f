use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::rpc::{ApiKey, BatchResult, Envelope, ListMember, MailingList, MapOptions, MappingError, MemberInfo, Parsable, Result, StructValue, Value, map_record};

/// Per-operation parsers turning decoded responses into domain objects.
///
/// Stateless apart from its [`MapOptions`]; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ResponseParser {
	options: MapOptions,
}

impl ResponseParser {
	/// Parser using `options` for every record mapping.
	pub fn new(options: MapOptions) -> Self {
		Self { options }
	}

	/// Options in effect.
	pub fn options(&self) -> &MapOptions {
		&self.options
	}

	/// `apikeys`: every key of the account.
	pub fn parse_api_keys(&self, results: &Value) -> Result<Vec<ApiKey>> {
		self.map_records(results)
	}

	/// `apikeyAdd`: the new key.
	pub fn parse_create_api_key(&self, results: &Value) -> Result<String> {
		expect_string(results)
	}

	/// `apikeyExpire`: whether the key was expired.
	pub fn parse_expire_api_key(&self, results: &Value) -> Result<bool> {
		expect_bool(results)
	}

	/// `lists`: every mailing list of the account.
	pub fn parse_lists(&self, results: &Value) -> Result<Vec<MailingList>> {
		self.map_records(results)
	}

	/// `listMembers`: member address to the timestamp of the listed status change.
	pub fn parse_list_members(&self, results: &Value) -> Result<BTreeMap<String, NaiveDateTime>> {
		let members: Vec<ListMember> = self.map_records(results)?;
		members
			.into_iter()
			.map(|member| match (member.email, member.timestamp) {
				(Some(email), Some(timestamp)) => Ok((email, timestamp)),
				(None, _) => Err(MappingError::UnexpectedResponseShape {
					expected: "member record with email",
					got: "struct",
				}),
				(Some(_), None) => Err(MappingError::UnexpectedResponseShape {
					expected: "member record with timestamp",
					got: "struct",
				}),
			})
			.collect()
	}

	/// `listMemberInfo` for a single address.
	///
	/// API 1.3 answers with `{success, errors, data}` and only the first record of
	/// `data` is consulted. An empty `data` or a record carrying `error` means the
	/// address is unknown to the list and yields `None`.
	pub fn parse_list_member_info(&self, results: &Value) -> Result<Option<MemberInfo>> {
		let Value::Struct(root) = results else {
			return Err(MappingError::unexpected_shape("member info struct", results));
		};

		let record = match root.get("data") {
			None => root,
			Some(Value::Array(records)) => match records.first() {
				None => {
					debug!("member info lookup returned no records");
					return Ok(None);
				}
				Some(Value::Struct(record)) => record,
				Some(other) => return Err(MappingError::unexpected_shape("member info record struct", other)),
			},
			Some(other) => return Err(MappingError::unexpected_shape("member info data array", other)),
		};

		if let Some(error) = record.get("error") {
			debug!(error = ?error, "member info lookup did not match");
			return Ok(None);
		}

		map_record(record, &self.options).map(Some)
	}

	/// `listSubscribe`: whether the address was subscribed.
	pub fn parse_list_subscribe(&self, results: &Value) -> Result<bool> {
		expect_bool(results)
	}

	/// `listUnsubscribe`: whether the address was unsubscribed.
	pub fn parse_list_unsubscribe(&self, results: &Value) -> Result<bool> {
		expect_bool(results)
	}

	/// `listUpdateMember`: whether the member was updated.
	pub fn parse_list_update_member(&self, results: &Value) -> Result<bool> {
		expect_bool(results)
	}

	/// `listBatchSubscribe`: counts and per-address errors.
	pub fn parse_list_batch_subscribe(&self, results: &Value) -> Result<BatchResult> {
		self.map_single(results)
	}

	/// `listBatchUnsubscribe`: counts and per-address errors.
	pub fn parse_list_batch_unsubscribe(&self, results: &Value) -> Result<BatchResult> {
		self.map_single(results)
	}

	fn map_records<T: Parsable>(&self, results: &Value) -> Result<Vec<T>> {
		let envelope = Envelope::detect(results)?;
		envelope
			.records()
			.iter()
			.map(|record| map_record(expect_record(record)?, &self.options))
			.collect()
	}

	fn map_single<T: Parsable>(&self, results: &Value) -> Result<T> {
		map_record(expect_record(results)?, &self.options)
	}
}

fn expect_record(value: &Value) -> Result<&StructValue> {
	value.as_struct().ok_or_else(|| MappingError::unexpected_shape("record struct", value))
}

fn expect_bool(value: &Value) -> Result<bool> {
	match value {
		Value::Bool(v) => Ok(*v),
		other => Err(MappingError::unexpected_shape("boolean", other)),
	}
}

fn expect_string(value: &Value) -> Result<String> {
	match value {
		Value::String(v) => Ok(v.to_string()),
		other => Err(MappingError::unexpected_shape("string", other)),
	}
}

#[cfg(test)]
mod tests;
