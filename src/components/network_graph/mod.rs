mod component;
mod defaults;
mod dispatch;
mod error;
mod render;
mod resolve;
mod types;

pub use component::NetworkGraphEmbed;
pub use dispatch::{
	Delivery, DispatchState, Dispatcher, FrameTarget, IframeTarget, Trigger, arm, arm_by_id,
};
pub use error::DispatchError;
pub use resolve::{EmbedAttributes, resolve, sanitize_color};
pub use types::{DisplayConfig, EmbedMessage, RoleColor};
