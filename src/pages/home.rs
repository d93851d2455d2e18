use leptos::prelude::*;
use leptos_router::hooks::use_location;
use web_sys::UrlSearchParams;

use crate::components::network_graph::{EmbedAttributes, NetworkGraphEmbed};

/// Every pair of a query string such as `?org_color=%23ff0000&height=450`.
/// Name matching and unknown names are left to [`EmbedAttributes`].
pub(crate) fn query_attributes(search: &str) -> EmbedAttributes {
	let Ok(params) = UrlSearchParams::new_with_str(search) else {
		return EmbedAttributes::new();
	};
	let Ok(Some(entries)) = js_sys::try_iter(&params) else {
		return EmbedAttributes::new();
	};
	entries
		.flatten()
		.filter_map(|entry| {
			let pair = js_sys::Array::from(&entry);
			Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
		})
		.collect()
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let location = use_location();
	let attributes = Memo::new(move |_| location.search.with(|search| query_attributes(search)));

	view! {
		<main class="network-graph-page">
			<h1>"Network Graph"</h1>
			{move || view! { <NetworkGraphEmbed attributes=attributes.get() /> }}
		</main>
	}
}
