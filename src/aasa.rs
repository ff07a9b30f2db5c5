//! Domain validation module.
//!
//! This module provides access to the Apple App Site Association validator:
//! manifest retrieval, signed-manifest verification, and per-domain appID
//! comparison against a target's resolved identity.
//!
//! # Examples
//!
//! ```rust,ignore
//! use passerelle::aasa::{CmsVerifier, DomainPolicy, DomainValidator, HttpFetcher};
//!
//! let validator = DomainValidator::new(HttpFetcher::new()?, CmsVerifier);
//! let report = validator
//!     .validate(&settings, "Release", &domains, DomainPolicy::Require)
//!     .await?;
//! ```

pub use passerelle_aasa::*;
