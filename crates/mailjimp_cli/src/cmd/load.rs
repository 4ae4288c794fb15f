use std::path::Path;

use mailjimp::rpc::Value;
use tracing::debug;

/// Read a recorded response stored as JSON.
pub(crate) fn load_response(path: &Path) -> super::Result<Value> {
	let bytes = std::fs::read(path).map_err(|err| format!("{}: {err}", path.display()))?;
	let json: serde_json::Value = serde_json::from_slice(&bytes).map_err(|err| format!("{}: {err}", path.display()))?;
	debug!(path = %path.display(), bytes = bytes.len(), "loaded recorded response");
	Ok(Value::from(json))
}
