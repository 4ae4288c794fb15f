use chrono::NaiveDateTime;

use crate::rpc::{MappingError, Result};

/// Timestamp layout used by the API for every inbound and outbound date.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse an API timestamp; the empty string denotes "no date".
pub fn parse_timestamp(input: &str) -> Result<Option<NaiveDateTime>> {
	if input.is_empty() {
		return Ok(None);
	}

	NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
		.map(Some)
		.map_err(|source| MappingError::DateParse {
			value: input.to_owned(),
			source,
		})
}

/// Render a timestamp in the API layout.
pub fn format_timestamp(value: &NaiveDateTime) -> String {
	value.format(TIMESTAMP_FORMAT).to_string()
}
