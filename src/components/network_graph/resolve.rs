//! Merges caller attributes over the built-in defaults.
//!
//! Nothing here fails: an invalid value is replaced by its default and the
//! caller never learns about it.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::defaults::{
	BACKGROUND_ATTR, COLOR_ROLES, DEFAULT_BACKGROUND, DEFAULT_HEIGHT, DEFAULT_PATH, DEFAULT_WIDTH,
	HEIGHT_ATTR, PATH_ATTR, RoleKind, WIDTH_ATTR,
};
use super::types::{DisplayConfig, RoleColor};

static HEX_COLOR: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap());

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:"];

/// Caller-supplied embed attributes.
///
/// Names are matched case-insensitively. Later duplicates replace earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedAttributes {
	values: HashMap<String, String>,
}

impl EmbedAttributes {
	/// An empty attribute set; resolves to the built-in defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `name` to `value`, replacing any earlier value.
	pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
		self.values
			.insert(name.as_ref().to_ascii_lowercase(), value.into());
	}

	/// Looks up `name` regardless of case.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.values
			.get(&name.to_ascii_lowercase())
			.map(String::as_str)
	}

	/// Whether no attribute was supplied.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for EmbedAttributes {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Self::new();
		for (name, value) in iter {
			attrs.insert(name, value);
		}
		attrs
	}
}

/// Returns the value if it is `#` followed by exactly 3 or 6 hex digits.
pub fn sanitize_color(value: &str) -> Option<&str> {
	HEX_COLOR.is_match(value).then_some(value)
}

pub fn color_or_default(value: Option<&str>, default: &str) -> String {
	value
		.and_then(sanitize_color)
		.unwrap_or(default)
		.to_string()
}

/// Leading-integer coercion: `"450"`, `"450px"` and `" 450"` all give 450.
/// No digits or a negative value gives 0; overflow saturates.
pub fn coerce_height(raw: &str) -> u32 {
	let s = raw.trim_start();
	let (negative, rest) = match s.as_bytes().first() {
		Some(b'-') => (true, &s[1..]),
		Some(b'+') => (false, &s[1..]),
		_ => (false, s),
	};
	if negative {
		return 0;
	}
	rest.bytes()
		.take_while(u8::is_ascii_digit)
		.fold(0u32, |acc, d| {
			acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
		})
}

/// Cleans a frame locator. Script-bearing schemes and empty results fall
/// back to the default document; existence is not checked.
pub fn sanitize_path(raw: &str) -> String {
	let cleaned: String = raw
		.trim()
		.chars()
		.filter(|c| !c.is_control())
		.map(|c| if c == ' ' { "%20".to_string() } else { c.to_string() })
		.collect();
	let lower = cleaned.to_ascii_lowercase();
	if cleaned.is_empty() || BLOCKED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
		return DEFAULT_PATH.to_string();
	}
	cleaned
}

/// Resolves caller attributes into a complete [`DisplayConfig`]. Never fails.
pub fn resolve(attrs: &EmbedAttributes) -> DisplayConfig {
	let mut node_colors = Vec::new();
	let mut edge_colors = Vec::new();
	for role in COLOR_ROLES {
		let resolved = RoleColor {
			label: role.label,
			color: color_or_default(attrs.get(role.attribute), role.default),
		};
		match role.kind {
			RoleKind::Node => node_colors.push(resolved),
			RoleKind::Edge => edge_colors.push(resolved),
		}
	}

	DisplayConfig {
		node_colors,
		edge_colors,
		background_color: color_or_default(attrs.get(BACKGROUND_ATTR), DEFAULT_BACKGROUND),
		width: attrs.get(WIDTH_ATTR).unwrap_or(DEFAULT_WIDTH).to_string(),
		height: coerce_height(attrs.get(HEIGHT_ATTR).unwrap_or(DEFAULT_HEIGHT)),
		path: sanitize_path(attrs.get(PATH_ATTR).unwrap_or(DEFAULT_PATH)),
	}
}
