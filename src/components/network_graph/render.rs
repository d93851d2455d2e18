use std::sync::atomic::{AtomicU64, Ordering};

use super::types::DisplayConfig;

pub const WRAPPER_CLASS: &str = "network-embed-wrapper";
pub const WRAPPER_STYLE: &str = "max-width:100%; display:flex;";

static NEXT_FRAME: AtomicU64 = AtomicU64::new(0);

/// Page-unique id for a new embed frame.
pub fn next_frame_id() -> String {
	format!(
		"network_graph_iframe_{}",
		NEXT_FRAME.fetch_add(1, Ordering::Relaxed)
	)
}

/// Inline style of the frame element. Width is carried verbatim; the markup
/// layer escapes it as an attribute value.
pub fn frame_style(config: &DisplayConfig) -> String {
	format!(
		"width:{}; height:{}px; border:0; justify-content:center;",
		config.width, config.height
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::resolve::{EmbedAttributes, resolve};

	#[test]
	fn height_renders_in_pixels() {
		let attrs: EmbedAttributes = [("height", "450")].into_iter().collect();
		let style = frame_style(&resolve(&attrs));
		assert!(style.contains("height:450px;"), "{style}");
	}

	#[test]
	fn default_style() {
		let style = frame_style(&resolve(&EmbedAttributes::new()));
		assert_eq!(
			style,
			"width:80%; height:600px; border:0; justify-content:center;"
		);
	}

	#[test]
	fn frame_ids_are_unique() {
		let (a, b) = (next_frame_id(), next_frame_id());
		assert_ne!(a, b);
		assert!(a.starts_with("network_graph_iframe_"));
	}
}
