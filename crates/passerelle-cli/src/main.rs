//! Universal Link checks for Xcode projects, from the command line.
//!
//! Two subcommands: `validate` runs the full AASA domain validation against a
//! settings snapshot, `setting` resolves one build setting with every macro
//! expanded. Both read the project through a TOML settings snapshot (see
//! `passerelle-xcode`'s `SettingsSnapshot` for the format).

use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(
	name = "passerelle",
	version,
	about = "Universal Link integration checks for Xcode projects"
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Validate AASA manifests for the project's Universal Link domains
	Validate(commands::validate::ValidateArgs),
	/// Resolve one build setting, macros expanded
	Setting(commands::setting::SettingArgs),
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();

	let result = match cli.command {
		Commands::Validate(args) => commands::validate::execute(args).await,
		Commands::Setting(args) => commands::setting::execute(args).await,
	};

	if let Err(error) = result {
		output::error(&format!("{error:#}"));
		std::process::exit(1);
	}
}
