//! Error types for manifest retrieval, verification, and validation.
//!
//! Two families live here. [`FetchError`] and [`VerifyError`] are returned by
//! the pluggable collaborators and [`ValidateError`] is the validator's fatal
//! error; everything else a validation run finds wrong is recorded as a
//! [`ValidationError`] in the report instead of being raised.

use std::fmt;

use thiserror::Error;

/// Transport-level failure while fetching a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
	/// The HTTP client itself could not be constructed.
	#[error("cannot build HTTP client: {0}")]
	Client(String),

	/// The request failed below the HTTP layer (DNS, connect, timeout, read).
	#[error("request to {url} failed: {reason}")]
	Network { url: String, reason: String },
}

/// Failure while verifying a CMS-signed manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
	/// The payload is not a parseable CMS structure.
	#[error("malformed CMS structure: {0}")]
	Malformed(String),

	/// A signer's signature did not verify against the signed content.
	#[error("signature verification failed: {0}")]
	Signature(String),

	/// The structure parsed but carries no signers at all.
	#[error("signed manifest has no signers")]
	NoSigners,

	/// Verification succeeded but the structure embeds no content.
	#[error("signed manifest has no embedded content")]
	MissingContent,
}

/// Fatal validation failure.
///
/// Everything that is wrong with a *domain* is recorded in the report;
/// this error aborts the whole run instead. It currently only arises when
/// the build-settings provider breaks its contract while the expected
/// identity is resolved.
#[derive(Debug, Error)]
pub enum ValidateError {
	#[error(transparent)]
	Settings(#[from] passerelle_xcode::SettingsError),
}

/// What a validation run found wrong with one domain (or with the run).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
	/// No candidate URL yielded a usable manifest.
	#[error("no AASA manifest could be retrieved")]
	Unretrievable,

	/// The fetch failed below the HTTP layer.
	#[error("network failure: {0}")]
	Network(String),

	/// The domain cannot be turned into candidate URLs.
	#[error("not a usable domain name: {0}")]
	InvalidDomain(String),

	/// The manifest response carries no `Content-Type` header.
	#[error("manifest response has no Content-Type header")]
	MissingContentType,

	/// An unsigned manifest was served over an insecure transport.
	#[error("plain manifest served over an insecure transport")]
	InsecureTransport,

	/// The manifest is CMS-signed but the signature does not verify.
	#[error("signature verification failed: {0}")]
	BadSignature(String),

	/// The manifest body is not valid JSON.
	#[error("manifest is not valid JSON: {0}")]
	Parse(String),

	/// The manifest has no `applinks` section.
	#[error("manifest has no applinks section")]
	MissingApplinks,

	/// The `applinks` section has no `details` array.
	#[error("applinks section has no details")]
	MissingDetails,

	/// The `details` entries name no appIDs at all.
	#[error("no appIDs found in the manifest details")]
	NoAppIds,

	/// The manifest names appIDs, but not the one the project builds.
	#[error("appID '{expected}' is not served by this domain (found: {})", .found.join(", "))]
	Mismatch { expected: String, found: Vec<String> },

	/// Nothing to validate: no expected domains and an empty entitlement.
	#[error("no domains to validate: pass at least one domain or add an applinks entitlement")]
	NoDomains,
}

/// One recorded validation finding, scoped to a domain or to the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
	domain: Option<String>,
	kind: ValidationErrorKind,
}

impl ValidationError {
	/// A finding scoped to one domain.
	pub fn for_domain(domain: impl Into<String>, kind: ValidationErrorKind) -> Self {
		Self {
			domain: Some(domain.into()),
			kind,
		}
	}

	/// A finding about the run as a whole.
	pub fn global(kind: ValidationErrorKind) -> Self {
		Self { domain: None, kind }
	}

	/// The domain this finding concerns, if it is domain-scoped.
	pub fn domain(&self) -> Option<&str> {
		self.domain.as_deref()
	}

	/// What was found.
	pub fn kind(&self) -> &ValidationErrorKind {
		&self.kind
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.domain {
			Some(domain) => write!(f, "[{domain}] {}", self.kind),
			None => write!(f, "{}", self.kind),
		}
	}
}

impl std::error::Error for ValidationError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.kind)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	fn domain_scoped_findings_name_the_domain() {
		let error = ValidationError::for_domain("example.com", ValidationErrorKind::Unretrievable);

		assert_eq!(
			error.to_string(),
			"[example.com] no AASA manifest could be retrieved"
		);
		assert_eq!(error.domain(), Some("example.com"));
	}

	#[rstest]
	fn global_findings_do_not() {
		let error = ValidationError::global(ValidationErrorKind::NoDomains);

		assert!(error.to_string().starts_with("no domains to validate"));
		assert_eq!(error.domain(), None);
	}

	#[rstest]
	fn mismatch_lists_every_found_app_id() {
		let kind = ValidationErrorKind::Mismatch {
			expected: "TEAM.com.example.app".to_string(),
			found: vec!["A.b".to_string(), "C.d".to_string()],
		};

		assert_eq!(
			kind.to_string(),
			"appID 'TEAM.com.example.app' is not served by this domain (found: A.b, C.d)"
		);
	}
}
