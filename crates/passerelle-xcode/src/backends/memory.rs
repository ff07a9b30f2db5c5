//! In-memory build-setting provider.

use std::collections::HashMap;

use crate::error::LookupError;
use crate::provider::{BuildSettings, XcconfigLayer, entitlement_domains};

/// A [`BuildSettings`] provider backed by in-memory maps.
///
/// Settings are keyed by configuration name and then by setting name, with a
/// separate map for xcconfig-level values. Configurations are implicit: a
/// configuration with no entries simply has no values, it is not an error.
///
/// The builder methods consume and return `self`, so a provider is assembled
/// in one expression:
///
/// ```
/// use passerelle_xcode::InMemorySettings;
///
/// let settings = InMemorySettings::new("MyApp")
/// 	.with_setting("Release", "PRODUCT_BUNDLE_IDENTIFIER", "com.example.MyApp")
/// 	.with_domain("example.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
	target: String,
	settings: HashMap<String, HashMap<String, String>>,
	xcconfig: Option<HashMap<String, HashMap<String, String>>>,
	domains: Vec<String>,
}

impl InMemorySettings {
	/// Create an empty provider for the named target.
	///
	/// The xcconfig layer starts present but empty; use
	/// [`without_xcconfig`](Self::without_xcconfig) to model a project with
	/// no xcconfig file at all.
	pub fn new(target: impl Into<String>) -> Self {
		Self {
			target: target.into(),
			settings: HashMap::new(),
			xcconfig: Some(HashMap::new()),
			domains: Vec::new(),
		}
	}

	/// Set a project-level setting for a configuration.
	pub fn with_setting(
		mut self,
		configuration: impl Into<String>,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		self.settings
			.entry(configuration.into())
			.or_default()
			.insert(name.into(), value.into());
		self
	}

	/// Set an xcconfig-level setting for a configuration.
	///
	/// Re-creates the xcconfig layer if it was removed.
	pub fn with_xcconfig_setting(
		mut self,
		configuration: impl Into<String>,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		self.xcconfig
			.get_or_insert_with(HashMap::new)
			.entry(configuration.into())
			.or_default()
			.insert(name.into(), value.into());
		self
	}

	/// Remove the xcconfig layer entirely.
	///
	/// Lookups that include the layer will fail with
	/// [`LookupError::XcconfigMissing`].
	pub fn without_xcconfig(mut self) -> Self {
		self.xcconfig = None;
		self
	}

	/// Add an entry to the associated-domains entitlement.
	///
	/// Accepts either a bare domain or a service-prefixed entry such as
	/// `applinks:example.com`; prefixes for other services are filtered out
	/// of [`applink_domains`](BuildSettings::applink_domains).
	pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
		self.domains.push(domain.into());
		self
	}
}

impl BuildSettings for InMemorySettings {
	fn target_name(&self) -> &str {
		&self.target
	}

	fn raw_setting(
		&self,
		name: &str,
		configuration: &str,
		layer: XcconfigLayer,
	) -> Result<Option<String>, LookupError> {
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
