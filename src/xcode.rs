//! Build-setting resolution module.
//!
//! This module provides access to the Xcode build-setting resolver: the
//! [`BuildSettings`](crate::BuildSettings) provider trait, the recursive
//! macro-expansion engine, and the bundled providers.
//!
//! # Examples
//!
//! ```rust,ignore
//! use passerelle::xcode::{InMemorySettings, SettingResolver};
//!
//! let settings = InMemorySettings::new("MyApp")
//!     .with_setting("Release", "PRODUCT_NAME", "$(TARGET_NAME)");
//! let resolver = SettingResolver::new(&settings);
//! let name = resolver.resolve("PRODUCT_NAME", "Release")?;
//! ```

pub use passerelle_xcode::*;
