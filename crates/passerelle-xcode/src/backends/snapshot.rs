//! Build settings loaded from a TOML snapshot file.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::SettingsResult;
use crate::error::{LookupError, SnapshotError};
use crate::provider::{BuildSettings, XcconfigLayer, entitlement_domains};

/// A [`BuildSettings`] provider read from a settings snapshot.
///
/// A snapshot is a TOML document that captures the target name, the
/// associated-domains entitlement, and the raw (unexpanded) build settings
/// per configuration, with xcconfig-level overrides in their own tables:
///
/// ```toml
/// target = "MyApp"
/// domains = ["applinks:example.com", "webcredentials:example.com"]
///
/// [settings.Release]
/// DEVELOPMENT_TEAM = "ABCDE12345"
/// PRODUCT_BUNDLE_IDENTIFIER = "com.example.$(TARGET_NAME)"
///
/// [xcconfig.Release]
/// PRODUCT_BUNDLE_IDENTIFIER = "com.example.live"
/// ```
///
/// Configurations are explicit here: looking up a configuration that appears
/// in neither `settings` nor `xcconfig` is a [`LookupError::UnknownConfiguration`].
/// A snapshot with no `xcconfig` tables at all models a project without an
/// xcconfig file, and lookups that include that layer report it missing.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsSnapshot {
	target: String,
	#[serde(default)]
	domains: Vec<String>,
	#[serde(default)]
	settings: HashMap<String, HashMap<String, String>>,
	#[serde(default)]
	xcconfig: Option<HashMap<String, HashMap<String, String>>>,
}

impl SettingsSnapshot {
	/// Load a snapshot from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(Self::from_toml(&text)?)
	}

	/// Parse a snapshot from TOML text.
	pub fn from_toml(text: &str) -> Result<Self, SnapshotError> {
		let snapshot: Self = toml::from_str(text)?;
		if snapshot.target.is_empty() {
			return Err(SnapshotError::MissingTarget);
		}
		Ok(snapshot)
	}

	fn knows_configuration(&self, configuration: &str) -> bool {
		self.settings.contains_key(configuration)
			|| self
				.xcconfig
				.as_ref()
				.is_some_and(|layer| layer.contains_key(configuration))
	}
}

impl BuildSettings for SettingsSnapshot {
	fn target_name(&self) -> &str {
		&self.target
	}

	fn raw_setting(
		&self,
		name: &str,
		configuration: &str,
		layer: XcconfigLayer,
	) -> Result<Option<String>, LookupError> {
		if !self.knows_configuration(configuration) {
			return Err(LookupError::UnknownConfiguration(configuration.to_string()));
		}

		if layer == XcconfigLayer::Include {
			let xcconfig = self
				.xcconfig
				.as_ref()
				.ok_or_else(|| LookupError::XcconfigMissing(configuration.to_string()))?;
			if let Some(value) = xcconfig.get(configuration).and_then(|c| c.get(name)) {
				return Ok(Some(value.clone()));
			}
		}

		Ok(self
			.settings
			.get(configuration)
			.and_then(|c| c.get(name))
			.cloned())
	}

	fn applink_domains(&self, _configuration: &str) -> Vec<String> {
		entitlement_domains(&self.domains)
	}
}
