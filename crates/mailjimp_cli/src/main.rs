#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "mailjimp", about = "Inspect recorded MailChimp responses")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Run one response parser over a recorded response and print the result as JSON.
	Parse {
		#[arg(value_enum)]
		op: cmd::parse::Operation,
		path: PathBuf,
		/// Accept single structs where lists are declared.
		#[arg(long)]
		lenient: bool,
	},
	/// Report which API version envelope a recorded listing uses.
	Envelope {
		path: PathBuf,
	},
	/// Print the field descriptors and hints of a domain type.
	Schema {
		#[arg(value_enum)]
		target: cmd::schema::Target,
	},
}

fn main() {
	setup_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

/// Log to stderr, filtered by `RUST_LOG`, so stdout stays machine-readable.
fn setup_tracing() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Parse { op, path, lenient } => cmd::parse::run(op, path, lenient),
		Commands::Envelope { path } => cmd::envelope::run(path),
		Commands::Schema { target } => cmd::schema::run(target),
	}
}
