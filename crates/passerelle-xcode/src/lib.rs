//! Xcode build-setting resolution for Passerelle.
//!
//! Build settings in an Xcode project are rarely literal: a value like
//! `com.example.$(PRODUCT_NAME:rfc1034identifier)` references other settings,
//! which may reference further settings in turn. This crate resolves a
//! setting to its final string the way Xcode does:
//!
//! - **Built-ins**: `SRCROOT` and `TARGET_NAME` answer without a lookup.
//! - **Recursive expansion**: `$(NAME)`, `${NAME}`, and bare `NAME` references
//!   are substituted left to right, each referenced setting fully resolved
//!   before it is spliced in.
//! - **Modifiers**: `$(NAME:rfc1034identifier)` sanitizes the resolved value
//!   to letters, digits, and hyphens.
//! - **xcconfig fallback**: lookups consult the xcconfig override layer first
//!   and retry without it when a provider reports the layer missing.
//! - **Cycle protection**: self-referential or mutually referential settings
//!   are treated as unresolvable instead of recursing forever.
//!
//! # Quick Start
//!
//! ```rust
//! use passerelle_xcode::{InMemorySettings, SettingResolver};
//!
//! let settings = InMemorySettings::new("MyApp")
//!     .with_setting("Release", "PRODUCT_NAME", "$(TARGET_NAME)")
//!     .with_setting("Release", "PRODUCT_BUNDLE_IDENTIFIER", "com.example.$(PRODUCT_NAME)");
//!
//! let resolver = SettingResolver::new(&settings);
//! let bundle = resolver.resolve("PRODUCT_BUNDLE_IDENTIFIER", "Release").unwrap();
//! assert_eq!(bundle.as_deref(), Some("com.example.MyApp"));
//! ```

pub mod backends;
pub mod error;
pub mod provider;
pub mod resolver;

// Re-export main types for convenience
pub use backends::{InMemorySettings, SettingsSnapshot};
pub use error::{LookupError, SettingsError, SnapshotError};
pub use provider::{BuildSettings, XcconfigLayer, entitlement_domains};
pub use resolver::{MacroReference, SettingResolver, rfc1034_identifier};

/// Result type for build-setting operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
