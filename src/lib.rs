//! # Passerelle
//!
//! Universal Link integration tooling for iOS projects.
//!
//! Passerelle covers the two load-bearing pieces of wiring deep links into an
//! Xcode project: resolving build settings the way Xcode does (recursive macro
//! expansion, built-in variables, xcconfig fallback) and validating that the
//! Universal Link domains a target claims are actually backed by matching
//! `apple-app-site-association` files.
//!
//! ## Components
//!
//! - [`xcode`] - Build-setting resolution: the [`BuildSettings`] provider
//!   trait, the recursive [`SettingResolver`], and in-memory / TOML-snapshot
//!   providers.
//! - [`aasa`] - Domain validation: manifest retrieval over HTTPS with
//!   redirect rejection, CMS signature verification for signed manifests,
//!   appID extraction, and comparison against the target's resolved
//!   `{team}.{bundle}` identity, collected into a [`ValidationReport`].
//!
//! ## Feature Flags
//!
//! - `xcode` - Build-setting resolution
//! - `aasa` - Domain validation (enables `xcode`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use passerelle::prelude::*;
//!
//! let settings = InMemorySettings::new("MyApp")
//!     .with_setting("Release", "DEVELOPMENT_TEAM", "ABCDE12345")
//!     .with_setting(
//!         "Release",
//!         "PRODUCT_BUNDLE_IDENTIFIER",
//!         "com.example.$(TARGET_NAME:rfc1034identifier)",
//!     )
//!     .with_domain("applinks:example.com");
//!
//! let validator = DomainValidator::new(HttpFetcher::new()?, CmsVerifier);
//! let report = validator
//!     .validate(&settings, "Release", &[], DomainPolicy::Require)
//!     .await?;
//!
//! for error in &report.errors {
//!     eprintln!("{error}");
//! }
//! assert!(report.valid);
//! ```

// Module re-exports
#[cfg(feature = "aasa")]
pub mod aasa;
#[cfg(feature = "xcode")]
pub mod xcode;

// Re-export the resolver surface
#[cfg(feature = "xcode")]
pub use passerelle_xcode::{
	BuildSettings, InMemorySettings, LookupError, MacroReference, SettingResolver, SettingsError,
	SettingsResult, SettingsSnapshot, XcconfigLayer,
};

// Re-export the validator surface
#[cfg(feature = "aasa")]
pub use passerelle_aasa::{
	AasaResult, CmsVerifier, DomainPolicy, DomainValidator, FetchError, FetchedResponse,
	HttpFetcher, ManifestBody, ManifestFetcher, Rejection, SignatureVerifier, SiteAssociation,
	ValidateError, ValidationError, ValidationErrorKind, ValidationReport, VerifyError,
};

// Re-export common external dependencies
pub use async_trait::async_trait;

pub mod prelude {
	// Resolver - trait, engine, providers
	#[cfg(feature = "xcode")]
	pub use crate::{BuildSettings, InMemorySettings, SettingResolver, SettingsSnapshot};

	// Validator - engine, collaborators, report
	#[cfg(feature = "aasa")]
	pub use crate::{
		CmsVerifier, DomainPolicy, DomainValidator, HttpFetcher, ManifestFetcher,
		SignatureVerifier, ValidationReport,
	};

	// External
	pub use async_trait::async_trait;
}
