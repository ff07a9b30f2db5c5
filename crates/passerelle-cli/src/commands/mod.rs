//! CLI subcommands

pub(crate) mod setting;
pub(crate) mod validate;
