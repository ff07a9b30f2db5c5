//! # passerelle-aasa
//!
//! Apple App Site Association (AASA) manifest retrieval, verification, and
//! domain validation.
//!
//! A Universal Link only works when the domain serves an AASA manifest whose
//! `applinks.details` name the app's `{team}.{bundle}` appID. This crate
//! checks that end to end: candidate URL retrieval with redirect rejection,
//! CMS signature verification for signed manifests, defensive JSON parsing,
//! and appID comparison against the identity resolved from the project's
//! build settings.
//!
//! ## Quick Start
//!
//! ```no_run
//! use passerelle_aasa::{CmsVerifier, DomainPolicy, DomainValidator, HttpFetcher};
//! use passerelle_xcode::InMemorySettings;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = InMemorySettings::new("MyApp")
//! 	.with_setting("Release", "DEVELOPMENT_TEAM", "ABCDE12345")
//! 	.with_setting("Release", "PRODUCT_BUNDLE_IDENTIFIER", "com.example.MyApp")
//! 	.with_domain("applinks:example.com");
//!
//! let validator = DomainValidator::new(HttpFetcher::new()?, CmsVerifier);
//! let report = validator
//! 	.validate(&settings, "Release", &[], DomainPolicy::Require)
//! 	.await?;
//!
//! for error in &report.errors {
//! 	eprintln!("{error}");
//! }
//! assert!(report.valid);
//! # Ok(())
//! # }
//! ```
//!
//! The transport and the signature check sit behind the [`ManifestFetcher`]
//! and [`SignatureVerifier`] traits, so tests drive the validator with
//! scripted implementations and never touch the network.

pub mod error;
pub mod fetch;
pub mod manifest;
pub mod validator;
pub mod verify;

pub use error::{
	FetchError, ValidateError, ValidationError, ValidationErrorKind, VerifyError,
};
pub use fetch::{
	FetchedResponse, HttpFetcher, ManifestBody, ManifestFetcher, Rejection, SIGNED_CONTENT_TYPE,
};
pub use manifest::{AppLinkDetail, AppLinks, SiteAssociation, distinct_app_ids};
pub use validator::{
	DomainPolicy, DomainValidator, ROOT_PATH, ValidationReport, WELL_KNOWN_PATH, combined_domains,
};
pub use verify::{CmsVerifier, SignatureVerifier};

/// Convenience alias for validation results.
pub type AasaResult<T> = Result<T, ValidateError>;
