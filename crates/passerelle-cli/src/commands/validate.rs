//! Validate command

use std::path::PathBuf;

use clap::Args;
use passerelle_aasa::{CmsVerifier, DomainPolicy, DomainValidator, HttpFetcher};
use passerelle_xcode::{BuildSettings, SettingsSnapshot};

use crate::output;

#[derive(Args)]
pub(crate) struct ValidateArgs {
	/// Settings snapshot of the project to validate
	#[arg(value_name = "SNAPSHOT")]
	pub snapshot: PathBuf,

	/// Domain to validate, repeatable; merged with the applinks entitlement
	#[arg(short, long = "domain", value_name = "DOMAIN")]
	pub domains: Vec<String>,

	/// Build configuration to resolve settings against
	#[arg(short, long, default_value = "Release")]
	pub configuration: String,

	/// Treat an empty domain set as success (associations are being removed)
	#[arg(long)]
	pub allow_removal: bool,
}

/// Validate every Universal Link domain the project claims
pub(crate) async fn execute(args: ValidateArgs) -> anyhow::Result<()> {
	let settings = SettingsSnapshot::load(&args.snapshot)?;
	output::info(&format!(
		"Validating '{}' ({})",
		settings.target_name(),
		args.configuration
	));

	let policy = if args.allow_removal {
		DomainPolicy::AllowRemoval
	} else {
		DomainPolicy::Require
	};
	let validator = DomainValidator::new(HttpFetcher::new()?, CmsVerifier);
	let report = validator
		.validate(&settings, &args.configuration, &args.domains, policy)
		.await?;

	for error in &report.errors {
		output::error(&error.to_string());
	}
	if !report.valid {
		anyhow::bail!("universal link validation failed");
	}
	output::success("Every domain serves a matching apple-app-site-association manifest");
	Ok(())
}
