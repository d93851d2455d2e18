//! Built-in embed defaults.

/// Which side of the graph a color role styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleKind {
	Node,
	Edge,
}

/// One color-bearing attribute and the graph type it maps to.
#[derive(Clone, Copy, Debug)]
pub struct ColorRole {
	pub attribute: &'static str,
	pub label: &'static str,
	pub kind: RoleKind,
	pub default: &'static str,
}

// The two edge defaults carry an alpha channel that `sanitize_color` would
// reject. They are emitted as fallbacks without being re-validated.
pub const COLOR_ROLES: &[ColorRole] = &[
	ColorRole {
		attribute: "org_color",
		label: "Organization",
		kind: RoleKind::Node,
		default: "#D8E9D9",
	},
	ColorRole {
		attribute: "tool_color",
		label: "Tool",
		kind: RoleKind::Node,
		default: "#C5D8E5",
	},
	ColorRole {
		attribute: "service_color",
		label: "Service",
		kind: RoleKind::Node,
		default: "#FAE4C6",
	},
	ColorRole {
		attribute: "sharedservice_color",
		label: "SHARED SERVICE",
		kind: RoleKind::Edge,
		default: "#bcaad6ff",
	},
	ColorRole {
		attribute: "workswith_color",
		label: "WORKS WITH",
		kind: RoleKind::Edge,
		default: "#b889a0ff",
	},
];

pub const BACKGROUND_ATTR: &str = "background_color";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

pub const WIDTH_ATTR: &str = "width";
pub const DEFAULT_WIDTH: &str = "80%";

pub const HEIGHT_ATTR: &str = "height";
pub const DEFAULT_HEIGHT: &str = "600";

pub const PATH_ATTR: &str = "path";
pub const DEFAULT_PATH: &str = "/wp-content/uploads/network-graph/my-graph.html";

/// Delay before the fallback delivery, in milliseconds.
pub const FALLBACK_DELAY_MS: i32 = 800;

pub const DEFAULT_TITLE: &str = "Interactive network graph";
