use std::path::PathBuf;

use mailjimp::rpc::Envelope;

use super::load::load_response;

/// Detect and print the envelope shape of a recorded listing response.
pub fn run(path: PathBuf) -> super::Result<()> {
	let root = load_response(&path)?;
	let envelope = Envelope::detect(&root)?;

	println!("path: {}", path.display());
	println!("api_version: {}", envelope.api_version());
	println!("records: {}", envelope.records().len());
	if let Envelope::Versioned { total, .. } = envelope {
		println!("total: {total}");
	}

	Ok(())
}
