//! The build-settings provider seam.

use crate::error::LookupError;

/// Whether a lookup consults the xcconfig override layer.
///
/// Xcode layers configuration-file (`.xcconfig`) values over a target's own
/// build settings. Providers that cannot materialize that layer signal
/// [`LookupError::XcconfigMissing`] for [`XcconfigLayer::Include`] lookups,
/// and the resolver retries with [`XcconfigLayer::Skip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XcconfigLayer {
	/// Consult the xcconfig layer before the target's own settings.
	Include,
	/// Read the target's own settings only.
	Skip,
}

/// Read access to one target's build settings.
///
/// Implementations are bound to a single target. Lookups are keyed by setting
/// name and build configuration and return the raw, unexpanded value; a
/// setting with no value is `Ok(None)`, never an error.
pub trait BuildSettings {
	/// The name of the target these settings belong to.
	fn target_name(&self) -> &str;

	/// Fetch the raw (unexpanded) value of a setting.
	fn raw_setting(
		&self,
		name: &str,
		configuration: &str,
		layer: XcconfigLayer,
	) -> Result<Option<String>, LookupError>;

	/// Universal Link domains already configured for this target.
	///
	/// Sourced from the associated-domains entitlement; `applinks:` service
	/// prefixes are stripped, entries for other services are dropped.
	fn applink_domains(&self, configuration: &str) -> Vec<String> {
		let _ = configuration;
		Vec::new()
	}
}

/// Extract Universal Link domains from associated-domains entitlement entries.
///
/// Entitlement entries carry a service prefix (`applinks:example.com`).
/// `applinks:` entries are kept with the prefix stripped, bare domains are
/// kept as-is, and entries for other services (`webcredentials:`, ...) are
/// dropped.
pub fn entitlement_domains(entries: &[String]) -> Vec<String> {
	entries
		.iter()
		.filter_map(|entry| match entry.split_once(':') {
			None => Some(entry.clone()),
			Some(("applinks", domain)) => Some(domain.to_string()),
			Some(_) => None,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(&["applinks:example.com"], &["example.com"])]
	#[case(&["example.com"], &["example.com"])]
	#[case(&["webcredentials:example.com"], &[])]
	#[case(
		&["applinks:a.example.com", "webcredentials:a.example.com", "b.example.com"],
		&["a.example.com", "b.example.com"]
	)]
	#[case(&[], &[])]
	fn entitlement_domains_filters_service_prefixes(
		#[case] entries: &[&str],
		#[case] expected: &[&str],
	) {
		let entries: Vec<String> = entries.iter().map(|e| e.to_string()).collect();

		let domains = entitlement_domains(&entries);

		assert_eq!(domains, expected);
	}
}
