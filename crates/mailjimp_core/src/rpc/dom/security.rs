use chrono::NaiveDateTime;
use serde::Serialize;

use crate::rpc::{Field, Parsable};
use crate::rpc_field;

/// One API key of the account, as returned by `apikeys`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiKey {
	/// The key itself.
	pub api_key: Option<String>,
	/// Creation time.
	pub created_at: Option<NaiveDateTime>,
	/// Expiry time; `None` for active keys.
	pub expired_at: Option<NaiveDateTime>,
}

impl Parsable for ApiKey {
	const TYPE_NAME: &'static str = "ApiKey";
	const FIELDS: &'static [Field<Self>] = &[
		rpc_field!(Self, api_key: String, wire = "apikey"),
		rpc_field!(Self, created_at: NaiveDateTime),
		rpc_field!(Self, expired_at: NaiveDateTime),
	];
}
