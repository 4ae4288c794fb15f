use std::path::PathBuf;

use clap::ValueEnum;
use mailjimp::rpc::{MapOptions, ResponseParser, Value};
use serde::Serialize;
use tracing::info;

use super::load::load_response;

/// Response parser selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
	/// `apikeys` listing.
	ApiKeys,
	/// `apikeyAdd` result.
	CreateApiKey,
	/// `apikeyExpire` result.
	ExpireApiKey,
	/// `lists` listing.
	Lists,
	/// `listMembers` listing.
	ListMembers,
	/// `listMemberInfo` lookup.
	ListMemberInfo,
	/// `listSubscribe` result.
	ListSubscribe,
	/// `listUnsubscribe` result.
	ListUnsubscribe,
	/// `listUpdateMember` result.
	ListUpdateMember,
	/// `listBatchSubscribe` result.
	ListBatchSubscribe,
	/// `listBatchUnsubscribe` result.
	ListBatchUnsubscribe,
}

/// Parse one recorded response and print the typed result as pretty JSON.
pub fn run(op: Operation, path: PathBuf, lenient: bool) -> super::Result<()> {
	let root = load_response(&path)?;
	let options = if lenient { MapOptions::lenient() } else { MapOptions::strict() };
	let parser = ResponseParser::new(options);

	info!(?op, path = %path.display(), lenient, "parsing recorded response");
	let json = parse_to_json(&parser, op, &root)?;
	println!("{}", serde_json::to_string_pretty(&json)?);
	Ok(())
}

pub(crate) fn parse_to_json(parser: &ResponseParser, op: Operation, root: &Value) -> super::Result<serde_json::Value> {
	match op {
		Operation::ApiKeys => to_json(parser.parse_api_keys(root)?),
		Operation::CreateApiKey => to_json(parser.parse_create_api_key(root)?),
		Operation::ExpireApiKey => to_json(parser.parse_expire_api_key(root)?),
		Operation::Lists => to_json(parser.parse_lists(root)?),
		Operation::ListMembers => to_json(parser.parse_list_members(root)?),
		Operation::ListMemberInfo => to_json(parser.parse_list_member_info(root)?),
		Operation::ListSubscribe => to_json(parser.parse_list_subscribe(root)?),
		Operation::ListUnsubscribe => to_json(parser.parse_list_unsubscribe(root)?),
		Operation::ListUpdateMember => to_json(parser.parse_list_update_member(root)?),
		Operation::ListBatchSubscribe => to_json(parser.parse_list_batch_subscribe(root)?),
		Operation::ListBatchUnsubscribe => to_json(parser.parse_list_batch_unsubscribe(root)?),
	}
}

fn to_json(value: impl Serialize) -> super::Result<serde_json::Value> {
	Ok(serde_json::to_value(value)?)
}
