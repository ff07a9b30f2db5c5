//! Setting command

use std::path::PathBuf;

use clap::Args;
use passerelle_xcode::{SettingResolver, SettingsSnapshot};

#[derive(Args)]
pub(crate) struct SettingArgs {
	/// Settings snapshot of the project
	#[arg(value_name = "SNAPSHOT")]
	pub snapshot: PathBuf,

	/// Setting name to resolve
	#[arg(value_name = "NAME")]
	pub name: String,

	/// Build configuration to resolve against
	#[arg(short, long, default_value = "Release")]
	pub configuration: String,
}

/// Resolve one build setting with every macro expanded
pub(crate) async fn execute(args: SettingArgs) -> anyhow::Result<()> {
	let settings = SettingsSnapshot::load(&args.snapshot)?;
	let resolver = SettingResolver::new(&settings);

	match resolver.resolve(&args.name, &args.configuration)? {
		Some(value) => {
			println!("{value}");
			Ok(())
		}
		None => anyhow::bail!(
			"'{}' has no value for configuration '{}'",
			args.name,
			args.configuration
		),
	}
}
