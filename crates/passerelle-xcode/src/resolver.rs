//! Recursive build-setting macro expansion.
//!
//! A raw setting value may reference other settings in three forms:
//! delimited `$(NAME)` or `${NAME}`, and a bare `NAME` token occupying the
//! start of the remaining text, optionally followed by a `/path` suffix.
//! References may carry a modifier after a colon, as in
//! `$(PRODUCT_NAME:rfc1034identifier)`.
//!
//! [`SettingResolver`] resolves a setting through a [`BuildSettings`]
//! provider and expands every reference in its value left to right, resolving
//! referenced settings recursively. Unresolvable references (no value, or a
//! reference cycle) are left in the output verbatim, delimiters included.

use std::collections::HashSet;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::SettingsResult;
use crate::error::LookupError;
use crate::provider::{BuildSettings, XcconfigLayer};

/// Upper bound on reference-chain depth, a backstop behind cycle detection.
const MAX_EXPANSION_DEPTH: usize = 64;

/// The modifier that maps a resolved value onto the RFC 1034 identifier
/// character set.
const RFC1034_MODIFIER: &str = "rfc1034identifier";

/// `$(NAME)` or `${NAME}`. The inner text excludes every delimiter
/// character, so swapped pairs like `$(NAME}` never match.
static DELIMITED_MACRO: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\$\(([^(){}]*)\)|\$\{([^(){}]*)\}").expect("invalid macro pattern"));

/// A bare `NAME` or `NAME/path` occupying the whole remaining text.
static BARE_MACRO: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^([A-Z0-9_]+)(?:/.*)?$").expect("invalid macro pattern"));

/// One macro reference located in a raw setting value.
///
/// The span covers the full reference text: delimiters and modifier for the
/// delimited forms, the leading token only for the bare form (a `/path`
/// suffix is not part of the reference).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroReference {
	start: usize,
	end: usize,
	name: String,
	modifier: Option<String>,
}

impl MacroReference {
	/// Find the next reference in `value` at or after byte offset `from`.
	///
	/// The bare form only counts when it occupies the entire remaining text;
	/// delimited forms are searched for anywhere in it.
	pub fn next_in(value: &str, from: usize) -> Option<Self> {
		if let Some(caps) = BARE_MACRO.captures(&value[from..]) {
			let token = caps.get(1)?;
			return Some(Self::parse(
				from + token.start()..from + token.end(),
				token.as_str(),
			));
		}

		let caps = DELIMITED_MACRO.captures_at(value, from)?;
		let full = caps.get(0)?;
		let inner = caps.get(1).or_else(|| caps.get(2))?;
		Some(Self::parse(full.start()..full.end(), inner.as_str()))
	}

	fn parse(span: Range<usize>, inner: &str) -> Self {
		let (name, modifier) = match inner.split_once(':') {
			Some((name, modifier)) => (name.to_string(), Some(modifier.to_string())),
			None => (inner.to_string(), None),
		};
		Self {
			start: span.start,
			end: span.end,
			name,
			modifier,
		}
	}

	/// The referenced setting name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The modifier, if the reference carries one.
	pub fn modifier(&self) -> Option<&str> {
		self.modifier.as_deref()
	}

	/// Byte offset of the start of the reference text.
	pub fn start(&self) -> usize {
		self.start
	}

	/// Byte offset one past the end of the reference text.
	pub fn end(&self) -> usize {
		self.end
	}

	/// Apply this reference's modifier to a resolved value.
	///
	/// Unknown modifiers leave the value untouched.
	pub fn apply_modifier(&self, value: String) -> String {
		match self.modifier.as_deref() {
			Some(RFC1034_MODIFIER) => rfc1034_identifier(&value),
			_ => value,
		}
	}

	fn span(&self) -> Range<usize> {
		self.start..self.end
	}
}

/// Map a value onto the RFC 1034 identifier character set.
///
/// Every character that is not an ASCII letter, digit, or hyphen becomes a
/// single hyphen.
pub fn rfc1034_identifier(value: &str) -> String {
	value
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
		.collect()
}

/// Resolves build settings against a [`BuildSettings`] provider.
///
/// The resolver is pure string work; it performs no I/O of its own and holds
/// no state across calls beyond the borrowed provider.
pub struct SettingResolver<'a, S: BuildSettings + ?Sized> {
	settings: &'a S,
}

impl<'a, S: BuildSettings + ?Sized> SettingResolver<'a, S> {
	/// Create a resolver over a settings provider.
	pub fn new(settings: &'a S) -> Self {
		Self { settings }
	}

	/// Resolve a setting to its fully expanded value.
	///
	/// Built-ins are answered without consulting the provider: `SRCROOT` is
	/// always `"."` and `TARGET_NAME` is the provider's target name, neither
	/// subject to further expansion. Any other name is looked up with the
	/// xcconfig layer included, retried without it when the provider reports
	/// the layer missing, and the raw value is expanded before it is
	/// returned. A setting with no value under either strategy is `Ok(None)`.
	pub fn resolve(&self, name: &str, configuration: &str) -> SettingsResult<Option<String>> {
		let mut in_progress = HashSet::new();
		self.resolve_guarded(name, configuration, &mut in_progress, 0)
	}

	/// Expand every macro reference in `raw` for the given configuration.
	///
	/// References are substituted left to right in a single pass; substituted
	/// text is never rescanned. A referenced value that itself contains
	/// references is fully resolved before it is spliced in. Unresolvable
	/// references stay verbatim and the scan moves past them.
	pub fn expand(&self, raw: &str, configuration: &str) -> SettingsResult<String> {
		let mut in_progress = HashSet::new();
		self.expand_guarded(raw, configuration, &mut in_progress, 0)
	}

	fn resolve_guarded(
		&self,
		name: &str,
		configuration: &str,
		in_progress: &mut HashSet<(String, String)>,
		depth: usize,
	) -> SettingsResult<Option<String>> {
		match name {
			"SRCROOT" => return Ok(Some(".".to_string())),
			"TARGET_NAME" => return Ok(Some(self.settings.target_name().to_string())),
			_ => {}
		}

		if depth >= MAX_EXPANSION_DEPTH {
			tracing::warn!(
				"expansion of '{}' ({}) exceeded {} levels, treating as unresolvable",
				name,
				configuration,
				MAX_EXPANSION_DEPTH
			);
			return Ok(None);
		}

		let key = (name.to_string(), configuration.to_string());
		if !in_progress.insert(key.clone()) {
			tracing::warn!(
				"reference cycle while resolving '{}' ({}), treating as unresolvable",
				name,
				configuration
			);
			return Ok(None);
		}

		let resolved = match self.raw_with_fallback(name, configuration) {
			Ok(Some(raw)) => self
				.expand_guarded(&raw, configuration, in_progress, depth + 1)
				.map(Some),
			Ok(None) => Ok(None),
			Err(error) => Err(error),
		};
		in_progress.remove(&key);
		resolved
	}

	/// Look up a raw value with the xcconfig layer, retrying without the
	/// layer only when the provider reports the layer itself missing.
	fn raw_with_fallback(&self, name: &str, configuration: &str) -> SettingsResult<Option<String>> {
		match self
			.settings
			.raw_setting(name, configuration, XcconfigLayer::Include)
		{
			Err(LookupError::XcconfigMissing(_)) => {
				tracing::debug!(
					"xcconfig layer missing for '{}' ({}), retrying without it",
					name,
					configuration
				);
				Ok(self
					.settings
					.raw_setting(name, configuration, XcconfigLayer::Skip)?)
			}
			other => Ok(other?),
		}
	}

	fn expand_guarded(
		&self,
		raw: &str,
		configuration: &str,
		in_progress: &mut HashSet<(String, String)>,
		depth: usize,
	) -> SettingsResult<String> {
		let mut value = raw.to_string();
		let mut position = 0;

		while position < value.len() {
			let Some(reference) = MacroReference::next_in(&value, position) else {
				break;
			};

			match self.resolve_guarded(reference.name(), configuration, in_progress, depth)? {
				None => {
					// Unresolvable: keep the reference text and scan past it.
					position = reference.end();
				}
				Some(resolved) => {
					let substituted = reference.apply_modifier(resolved);
					value.replace_range(reference.span(), &substituted);
					position = reference.start() + substituted.len();
				}
			}
		}

		Ok(value)
	}
}
