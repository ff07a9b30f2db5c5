//! Build-setting providers.
//!
//! Two [`BuildSettings`](crate::BuildSettings) implementations ship with the
//! crate: [`InMemorySettings`] for tests and programmatic construction, and
//! [`SettingsSnapshot`] for settings exported to a TOML file.

pub mod memory;
pub mod snapshot;

pub use memory::InMemorySettings;
pub use snapshot::SettingsSnapshot;
