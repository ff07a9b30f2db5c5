//! Error types for build-setting lookup and resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Failures signalled by a [`BuildSettings`](crate::provider::BuildSettings)
/// provider.
///
/// A setting that simply has no value is `Ok(None)`, never one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// The xcconfig override layer itself is unavailable.
	///
	/// Distinct from "the setting has no value": on this failure the
	/// resolver retries the lookup with the layer skipped.
	#[error("xcconfig layer is not available for configuration '{0}'")]
	XcconfigMissing(String),

	/// The provider is not bound to the requested target.
	#[error("no target named '{0}' in the project")]
	UnknownTarget(String),

	/// The requested build configuration does not exist.
	#[error("no build configuration named '{0}'")]
	UnknownConfiguration(String),
}

/// Errors raised while loading a build-settings snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
	/// The snapshot file could not be read.
	#[error("cannot read settings snapshot {path:?}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The snapshot is not valid TOML.
	#[error("invalid settings snapshot: {0}")]
	Parse(#[from] toml::de::Error),

	/// The snapshot does not name a target.
	#[error("settings snapshot does not name a target")]
	MissingTarget,
}

/// Errors that can occur during build-setting resolution.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings provider rejected a lookup.
	#[error(transparent)]
	Lookup(#[from] LookupError),

	/// A settings snapshot could not be loaded.
	#[error(transparent)]
	Snapshot(#[from] SnapshotError),
}
