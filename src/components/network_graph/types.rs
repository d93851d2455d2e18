use std::collections::BTreeMap;

use serde::Serialize;

/// Fully resolved display options for one embed.
///
/// Every color field holds either a validated `#RGB`/`#RRGGBB` value or the
/// role's built-in default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
	/// Colors per node type, in table order.
	pub node_colors: Vec<RoleColor>,
	/// Colors per relationship type, in table order.
	pub edge_colors: Vec<RoleColor>,
	/// Canvas background of the embedded document.
	pub background_color: String,
	/// CSS width of the frame, carried verbatim.
	pub width: String,
	/// Frame height in pixels.
	pub height: u32,
	/// Locator of the embedded document.
	pub path: String,
}

/// A graph type label paired with its resolved color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleColor {
	/// Type label as the embedded document names it, e.g. `"WORKS WITH"`.
	pub label: &'static str,
	/// Resolved color for the label.
	pub color: String,
}

impl DisplayConfig {
	/// Color assigned to the node or edge type `label`, if it is a known role.
	pub fn color_for(&self, label: &str) -> Option<&str> {
		self.node_colors
			.iter()
			.chain(&self.edge_colors)
			.find(|r| r.label == label)
			.map(|r| r.color.as_str())
	}

	/// Builds the wire payload for this configuration.
	pub fn message(&self) -> EmbedMessage {
		let collect = |roles: &[RoleColor]| -> BTreeMap<String, String> {
			roles
				.iter()
				.map(|r| (r.label.to_string(), r.color.clone()))
				.collect()
		};
		EmbedMessage {
			node_type_colors: collect(&self.node_colors),
			edge_type_colors: collect(&self.edge_colors),
			background_color: self.background_color.clone(),
		}
	}
}

/// Payload posted into the embedded document.
///
/// Serializes as
/// `{"type":"updateColors","nodeTypeColors":{..},"edgeTypeColors":{..},"backgroundColor":".."}`.
/// It may be delivered more than once; receivers are expected to apply it
/// idempotently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "updateColors", rename_all = "camelCase")]
pub struct EmbedMessage {
	/// Node type label to color.
	pub node_type_colors: BTreeMap<String, String>,
	/// Relationship type label to color.
	pub edge_type_colors: BTreeMap<String, String>,
	/// Background color.
	pub background_color: String,
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use crate::components::network_graph::resolve::{EmbedAttributes, resolve};

	#[test]
	fn message_has_exactly_four_keys() {
		for attrs in [
			EmbedAttributes::new(),
			[("org_color", "#zzz"), ("background_color", "")]
				.into_iter()
				.collect(),
		] {
			let value = serde_json::to_value(resolve(&attrs).message()).unwrap();
			let Value::Object(map) = value else {
				panic!("message is not an object");
			};
			let mut keys: Vec<_> = map.keys().map(String::as_str).collect();
			keys.sort_unstable();
			assert_eq!(
				keys,
				["backgroundColor", "edgeTypeColors", "nodeTypeColors", "type"]
			);
			assert_eq!(map["type"], "updateColors");
		}
	}

	#[test]
	fn default_wire_payload() {
		let value = serde_json::to_value(resolve(&EmbedAttributes::new()).message()).unwrap();
		assert_eq!(
			value,
			json!({
				"type": "updateColors",
				"nodeTypeColors": {
					"Organization": "#D8E9D9",
					"Tool": "#C5D8E5",
					"Service": "#FAE4C6",
				},
				"edgeTypeColors": {
					"SHARED SERVICE": "#bcaad6ff",
					"WORKS WITH": "#b889a0ff",
				},
				"backgroundColor": "#ffffff",
			})
		);
	}
}
