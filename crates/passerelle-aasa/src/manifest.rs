//! The apple-app-site-association document shape.
//!
//! Only the `applinks.details[].appID` path matters for validation; every
//! other section (`webcredentials`, `appclips`, path patterns) is carried by
//! real-world manifests and deliberately ignored here. All levels are
//! optional so that shape deviations surface as validation findings, never
//! as parse panics.

use serde::Deserialize;

/// A parsed apple-app-site-association document.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteAssociation {
	pub applinks: Option<AppLinks>,
}

/// The `applinks` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AppLinks {
	pub details: Option<Vec<AppLinkDetail>>,
}

/// One entry of `applinks.details`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppLinkDetail {
	#[serde(rename = "appID")]
	pub app_id: Option<String>,
}

impl SiteAssociation {
	/// Parse a manifest body.
	pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
		serde_json::from_slice(body)
	}
}

/// Collect the distinct appIDs named by `details`, in manifest order.
pub fn distinct_app_ids(details: &[AppLinkDetail]) -> Vec<String> {
	let mut ids = Vec::new();
	for detail in details {
		if let Some(app_id) = &detail.app_id
			&& !ids.contains(app_id)
		{
			ids.push(app_id.clone());
		}
	}
	ids
}
