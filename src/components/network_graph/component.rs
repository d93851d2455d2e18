use leptos::prelude::*;
use web_sys::HtmlIFrameElement;

use super::defaults::DEFAULT_TITLE;
use super::dispatch;
use super::render::{WRAPPER_CLASS, WRAPPER_STYLE, frame_style, next_frame_id};
use super::resolve::{EmbedAttributes, resolve};

/// Embeds the network graph document and pushes the resolved colors into it
/// once the frame is mounted.
#[component]
pub fn NetworkGraphEmbed(
	/// Caller overrides; anything missing or invalid takes its default.
	attributes: EmbedAttributes,
	/// Accessible title of the frame.
	#[prop(into, default = DEFAULT_TITLE.to_string())] title: String,
) -> impl IntoView {
	let config = resolve(&attributes);
	let message = config.message();
	let style = frame_style(&config);
	let frame_id = next_frame_id();
	let frame_ref = NodeRef::<leptos::html::Iframe>::new();

	// NodeRef is reactive: re-runs once the frame mounts, then stays armed.
	Effect::new(move |armed: Option<bool>| {
		if armed == Some(true) {
			return true;
		}
		let frame: Option<HtmlIFrameElement> = frame_ref.get();
		dispatch::arm(frame, message.clone()).is_some()
	});

	view! {
		<div class=WRAPPER_CLASS style=WRAPPER_STYLE>
			<iframe
				node_ref=frame_ref
				id=frame_id
				src=config.path
				style=style
				prop:loading="lazy"
				title=title
			></iframe>
		</div>
	}
}
