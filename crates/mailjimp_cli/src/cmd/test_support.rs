use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use mailjimp_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static MAILJIMP_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_mailjimp(args: &[&str]) -> Output {
	Command::new(mailjimp_bin()).args(args).output().expect("mailjimp command executes")
}

pub(crate) fn run_mailjimp_json(args: &[&str]) -> serde_json::Value {
	let output = run_mailjimp(args);
	assert!(
		output.status.success(),
		"mailjimp command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn mailjimp_bin() -> &'static PathBuf {
	MAILJIMP_BIN.get_or_init(resolve_mailjimp_bin)
}

fn resolve_mailjimp_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_mailjimp") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = workspace_target_dir().join("debug");
	bin.push(if cfg!(windows) { "mailjimp.exe" } else { "mailjimp" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "mailjimp"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build mailjimp binary at {}", bin.display());

	bin
}
