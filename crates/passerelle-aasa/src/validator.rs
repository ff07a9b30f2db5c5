//! Universal Link domain validation.
//!
//! For every domain in the union of the caller's expected domains and the
//! project's applinks entitlement, [`DomainValidator`] retrieves the
//! apple-app-site-association manifest, verifies it when signed, and checks
//! that the project's `{team}.{bundle}` identity is among the appIDs the
//! domain serves. Everything found wrong is collected into a
//! [`ValidationReport`]; a run only fails fatally when the build-settings
//! provider itself breaks its contract.

use passerelle_xcode::{BuildSettings, SettingResolver};
use url::Url;

use crate::AasaResult;
use crate::error::{ValidationError, ValidationErrorKind};
use crate::fetch::{ManifestBody, ManifestFetcher, Rejection};
use crate::manifest::{SiteAssociation, distinct_app_ids};
use crate::verify::SignatureVerifier;

/// First candidate location, per Apple's documentation.
pub const WELL_KNOWN_PATH: &str = ".well-known/apple-app-site-association";

/// Legacy fallback location at the site root.
pub const ROOT_PATH: &str = "apple-app-site-association";

/// How an empty domain set is judged.
///
/// Nothing to check is normally a failure: a project that ships Universal
/// Links has domains somewhere. While associations are being removed on
/// purpose, an empty set is the expected state instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
	/// An empty domain set fails validation.
	#[default]
	Require,
	/// An empty domain set passes; domains are being removed on purpose.
	AllowRemoval,
}

/// The outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
	/// Whether every checked domain passed.
	pub valid: bool,
	/// Every finding, in domain order. Empty exactly when `valid` is true.
	pub errors: Vec<ValidationError>,
}

/// Validates domains against a project's resolved identity.
pub struct DomainValidator<F, V> {
	fetcher: F,
	verifier: V,
}

impl<F, V> DomainValidator<F, V>
where
	F: ManifestFetcher,
	V: SignatureVerifier,
{
	pub fn new(fetcher: F, verifier: V) -> Self {
		Self { fetcher, verifier }
	}

	/// Validate every domain in the union of `expected_domains` and the
	/// provider's applinks entitlement.
	///
	/// The report is fresh per call; nothing is carried across runs. Domains
	/// are checked sequentially in union order (expected first, entitlement
	/// after, duplicates dropped), and every failure is recorded rather than
	/// raised, so one bad domain never hides findings about the rest. The
	/// only fatal outcome is a provider lookup failure while the expected
	/// identity is resolved.
	pub async fn validate<S>(
		&self,
		settings: &S,
		configuration: &str,
		expected_domains: &[String],
		policy: DomainPolicy,
	) -> AasaResult<ValidationReport>
	where
		S: BuildSettings + ?Sized,
	{
		let domains = combined_domains(expected_domains, &settings.applink_domains(configuration));
		if domains.is_empty() {
			return Ok(match policy {
				DomainPolicy::Require => ValidationReport {
					valid: false,
					errors: vec![ValidationError::global(ValidationErrorKind::NoDomains)],
				},
				DomainPolicy::AllowRemoval => ValidationReport {
					valid: true,
					errors: Vec::new(),
				},
			});
		}

		let identity = expected_identity(settings, configuration)?;
		tracing::debug!(
			"validating {} domain(s) against appID '{}'",
			domains.len(),
			identity
		);

		let mut errors = Vec::new();
		for domain in &domains {
			self.validate_domain(domain, &identity, &mut errors).await;
		}

		Ok(ValidationReport {
			valid: errors.is_empty(),
			errors,
		})
	}

	/// Check one domain, appending every finding to `errors`.
	async fn validate_domain(
		&self,
		domain: &str,
		identity: &str,
		errors: &mut Vec<ValidationError>,
	) {
		let Some(body) = self.retrieve_manifest(domain, errors).await else {
			return;
		};

		let manifest = match SiteAssociation::parse(&body) {
			Ok(manifest) => manifest,
			Err(error) => {
				errors.push(ValidationError::for_domain(
					domain,
					ValidationErrorKind::Parse(error.to_string()),
				));
				return;
			}
		};

		let Some(applinks) = manifest.applinks else {
			errors.push(ValidationError::for_domain(
				domain,
				ValidationErrorKind::MissingApplinks,
			));
			return;
		};
		let Some(details) = applinks.details else {
			errors.push(ValidationError::for_domain(
				domain,
				ValidationErrorKind::MissingDetails,
			));
			return;
		};

		let app_ids = distinct_app_ids(&details);
		if app_ids.is_empty() {
			errors.push(ValidationError::for_domain(
				domain,
				ValidationErrorKind::NoAppIds,
			));
			return;
		}

		if !app_ids.iter().any(|id| id == identity) {
			errors.push(ValidationError::for_domain(
				domain,
				ValidationErrorKind::Mismatch {
					expected: identity.to_string(),
					found: app_ids,
				},
			));
		}
	}

	/// Fetch and, when signed, verify one domain's manifest.
	///
	/// Candidates are tried in order and the first usable response wins.
	/// Rejected candidates (redirects, non-200 answers) only produce debug
	/// logs; the domain-scoped error for them is the final one recorded when
	/// every candidate is exhausted. A response without a content type, a
	/// failed signature, or a network failure abandons the domain outright.
	async fn retrieve_manifest(
		&self,
		domain: &str,
		errors: &mut Vec<ValidationError>,
	) -> Option<Vec<u8>> {
		let candidates = match candidate_urls(domain) {
			Ok(candidates) => candidates,
			Err(reason) => {
				errors.push(ValidationError::for_domain(
					domain,
					ValidationErrorKind::InvalidDomain(reason),
				));
				return None;
			}
		};

		for url in &candidates {
			let response = match self.fetcher.fetch(url).await {
				Ok(response) => response,
				Err(error) => {
					errors.push(ValidationError::for_domain(
						domain,
						ValidationErrorKind::Network(error.to_string()),
					));
					return None;
				}
			};

			match ManifestBody::classify(url, response) {
				ManifestBody::Plain(body) => return Some(body),
				ManifestBody::Signed(signed) => {
					return match self.verifier.verify(&signed) {
						Ok(content) => Some(content),
						Err(error) => {
							errors.push(ValidationError::for_domain(
								domain,
								ValidationErrorKind::BadSignature(error.to_string()),
							));
							None
						}
					};
				}
				ManifestBody::Rejected(Rejection::Redirect { status }) => {
					tracing::debug!("'{}' answered {} at {}, not following", domain, status, url);
				}
				ManifestBody::Rejected(Rejection::Status { status }) => {
					tracing::debug!("'{}' answered {} at {}", domain, status, url);
				}
				ManifestBody::Rejected(Rejection::MissingContentType) => {
					errors.push(ValidationError::for_domain(
						domain,
						ValidationErrorKind::MissingContentType,
					));
					return None;
				}
				ManifestBody::Rejected(Rejection::InsecureTransport) => {
					errors.push(ValidationError::for_domain(
						domain,
						ValidationErrorKind::InsecureTransport,
					));
				}
			}
		}

		errors.push(ValidationError::for_domain(
			domain,
			ValidationErrorKind::Unretrievable,
		));
		None
	}
}

/// Resolve the appID the project is expected to serve.
///
/// A missing team or bundle component is tolerated (the comparison then runs
/// against a partial identity and fails with a mismatch that shows exactly
/// that); a lookup failure is not.
fn expected_identity<S>(settings: &S, configuration: &str) -> AasaResult<String>
where
	S: BuildSettings + ?Sized,
{
	let resolver = SettingResolver::new(settings);

	let team = resolver.resolve("DEVELOPMENT_TEAM", configuration)?;
	if team.is_none() {
		tracing::warn!(
			"DEVELOPMENT_TEAM is not set for configuration '{}'",
			configuration
		);
	}

	let bundle = resolver.resolve("PRODUCT_BUNDLE_IDENTIFIER", configuration)?;
	if bundle.is_none() {
		tracing::warn!(
			"PRODUCT_BUNDLE_IDENTIFIER is not set for configuration '{}'",
			configuration
		);
	}

	Ok(format!(
		"{}.{}",
		team.unwrap_or_default(),
		bundle.unwrap_or_default()
	))
}

/// The ordered union of expected and entitlement domains, duplicates dropped.
pub fn combined_domains(expected: &[String], entitlement: &[String]) -> Vec<String> {
	let mut domains = Vec::new();
	for domain in expected.iter().chain(entitlement) {
		if !domains.contains(domain) {
			domains.push(domain.clone());
		}
	}
	domains
}

/// The candidate manifest URLs for a domain, in retrieval order.
fn candidate_urls(domain: &str) -> Result<Vec<Url>, String> {
	let well_known = Url::parse(&format!("https://{domain}/{WELL_KNOWN_PATH}"))
		.map_err(|error| error.to_string())?;
	let root =
		Url::parse(&format!("https://{domain}/{ROOT_PATH}")).map_err(|error| error.to_string())?;
	Ok(vec![well_known, root])
}
