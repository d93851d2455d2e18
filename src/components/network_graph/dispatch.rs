//! Delivery of the resolved colors into the embedded document.
//!
//! The frame's load sequence cannot be observed from outside, so two
//! independent triggers send the message: the frame's `load` event and a
//! fallback timer. Neither cancels the other. Delivery is at-least-once and
//! unordered; the receiver applies the message idempotently.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlIFrameElement};

use super::defaults::FALLBACK_DELAY_MS;
use super::error::DispatchError;
use super::types::EmbedMessage;

/// Something that can receive an [`EmbedMessage`].
pub trait FrameTarget {
	/// Delivers one copy of `message`.
	fn post_message(&self, message: &EmbedMessage) -> Result<(), DispatchError>;
}

/// Posts into an iframe's content window with an unrestricted target origin.
pub struct IframeTarget {
	frame: HtmlIFrameElement,
}

impl IframeTarget {
	/// Targets `frame`'s content window.
	pub fn new(frame: HtmlIFrameElement) -> Self {
		Self { frame }
	}
}

impl FrameTarget for IframeTarget {
	fn post_message(&self, message: &EmbedMessage) -> Result<(), DispatchError> {
		let window = self
			.frame
			.content_window()
			.ok_or(DispatchError::NoContentWindow)?;
		let json = serde_json::to_string(message)?;
		let value =
			js_sys::JSON::parse(&json).map_err(|e| DispatchError::Encode(format!("{e:?}")))?;
		window
			.post_message(&value, "*")
			.map_err(|e| DispatchError::PostMessage(format!("{e:?}")))
	}
}

/// What caused a delivery attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
	/// The frame's `load` event.
	Load,
	/// The fallback timer expired.
	Timeout,
}

/// Per-embed dispatch state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchState {
	/// Nothing delivered yet.
	Idle,
	/// At least one delivery succeeded.
	Sent {
		/// Successful deliveries so far.
		deliveries: u32,
	},
}

/// Outcome of a single trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
	/// The message was posted.
	Sent,
	/// Posting failed; the error was logged.
	Failed,
	/// There was no frame to post to.
	Skipped,
}

/// Sends one [`EmbedMessage`] to a frame on each trigger.
pub struct Dispatcher<T> {
	target: Option<T>,
	message: EmbedMessage,
	state: DispatchState,
}

impl<T: FrameTarget> Dispatcher<T> {
	/// A dispatcher in [`DispatchState::Idle`]. `None` makes every trigger a no-op.
	pub fn new(target: Option<T>, message: EmbedMessage) -> Self {
		Self {
			target,
			message,
			state: DispatchState::Idle,
		}
	}

	/// Current state.
	pub fn state(&self) -> DispatchState {
		self.state
	}

	/// The payload sent on every trigger.
	pub fn message(&self) -> &EmbedMessage {
		&self.message
	}

	/// Sends the message for `trigger`. Every trigger sends; a failed send is
	/// logged and leaves the state untouched.
	pub fn fire(&mut self, trigger: Trigger) -> Delivery {
		let Some(target) = &self.target else {
			debug!("{trigger:?}: no frame to deliver colors to");
			return Delivery::Skipped;
		};
		match target.post_message(&self.message) {
			Ok(()) => {
				let deliveries = match self.state {
					DispatchState::Idle => 1,
					DispatchState::Sent { deliveries } => deliveries.saturating_add(1),
				};
				self.state = DispatchState::Sent { deliveries };
				debug!("{trigger:?}: delivered colors to frame ({deliveries} total)");
				Delivery::Sent
			}
			// Frames detached by a re-render have no window left to post into.
			Err(DispatchError::NoContentWindow) => {
				debug!("{trigger:?}: network iframe has no content window");
				Delivery::Failed
			}
			Err(e) => {
				error!("Failed to postMessage to network iframe: {e}");
				Delivery::Failed
			}
		}
	}
}

/// Attaches the `load` listener and the fallback timer to `frame`.
///
/// A missing frame is a quiet no-op. Listener and timer live as long as the
/// page; there is no teardown.
pub fn arm(
	frame: Option<HtmlIFrameElement>,
	message: EmbedMessage,
) -> Option<Rc<RefCell<Dispatcher<IframeTarget>>>> {
	let Some(frame) = frame else {
		debug!("no network iframe present, color dispatch skipped");
		return None;
	};
	let Some(window) = web_sys::window() else {
		debug!("no window, color dispatch skipped");
		return None;
	};

	let dispatcher = Rc::new(RefCell::new(Dispatcher::new(
		Some(IframeTarget::new(frame.clone())),
		message,
	)));

	let dispatcher_load = dispatcher.clone();
	let on_load = Closure::<dyn FnMut()>::new(move || {
		dispatcher_load.borrow_mut().fire(Trigger::Load);
	});
	if let Err(e) =
		frame.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
	{
		error!("Failed to attach load listener to network iframe: {e:?}");
	}
	on_load.forget();

	let dispatcher_timeout = dispatcher.clone();
	let on_timeout = Closure::<dyn FnMut()>::new(move || {
		dispatcher_timeout.borrow_mut().fire(Trigger::Timeout);
	});
	if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		on_timeout.as_ref().unchecked_ref(),
		FALLBACK_DELAY_MS,
	) {
		error!("Failed to arm fallback timer for network iframe: {e:?}");
	}
	on_timeout.forget();

	Some(dispatcher)
}

/// Like [`arm`], for hosts that only know the frame's element id.
pub fn arm_by_id(
	document: &Document,
	frame_id: &str,
	message: EmbedMessage,
) -> Option<Rc<RefCell<Dispatcher<IframeTarget>>>> {
	let frame = document
		.get_element_by_id(frame_id)
		.and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok());
	arm(frame, message)
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};
	use std::rc::Rc;

	use super::*;
	use crate::components::network_graph::resolve::{EmbedAttributes, resolve};

	#[derive(Clone, Default)]
	struct Recorder {
		sent: Rc<RefCell<Vec<EmbedMessage>>>,
	}

	impl FrameTarget for Recorder {
		fn post_message(&self, message: &EmbedMessage) -> Result<(), DispatchError> {
			self.sent.borrow_mut().push(message.clone());
			Ok(())
		}
	}

	struct Unreachable {
		attempts: Rc<Cell<u32>>,
	}

	impl FrameTarget for Unreachable {
		fn post_message(&self, _: &EmbedMessage) -> Result<(), DispatchError> {
			self.attempts.set(self.attempts.get() + 1);
			Err(DispatchError::PostMessage("SecurityError".into()))
		}
	}

	struct Detached;

	impl FrameTarget for Detached {
		fn post_message(&self, _: &EmbedMessage) -> Result<(), DispatchError> {
			Err(DispatchError::NoContentWindow)
		}
	}

	fn message() -> EmbedMessage {
		resolve(&EmbedAttributes::new()).message()
	}

	#[test]
	fn load_then_timeout_delivers_twice() {
		let recorder = Recorder::default();
		let mut dispatcher = Dispatcher::new(Some(recorder.clone()), message());
		assert_eq!(dispatcher.state(), DispatchState::Idle);

		assert_eq!(dispatcher.fire(Trigger::Load), Delivery::Sent);
		assert_eq!(dispatcher.state(), DispatchState::Sent { deliveries: 1 });

		assert_eq!(dispatcher.fire(Trigger::Timeout), Delivery::Sent);
		assert_eq!(dispatcher.state(), DispatchState::Sent { deliveries: 2 });

		let sent = recorder.sent.borrow();
		assert_eq!(sent.len(), 2);
		assert_eq!(sent[0], sent[1]);
		assert_eq!(sent[0], message());
	}

	#[test]
	fn timeout_alone_still_delivers() {
		let recorder = Recorder::default();
		let mut dispatcher = Dispatcher::new(Some(recorder.clone()), message());
		assert_eq!(dispatcher.fire(Trigger::Timeout), Delivery::Sent);
		assert_eq!(recorder.sent.borrow().len(), 1);
	}

	#[test]
	fn missing_frame_skips_quietly() {
		let mut dispatcher = Dispatcher::<Recorder>::new(None, message());
		assert_eq!(dispatcher.fire(Trigger::Load), Delivery::Skipped);
		assert_eq!(dispatcher.fire(Trigger::Timeout), Delivery::Skipped);
		assert_eq!(dispatcher.state(), DispatchState::Idle);
	}

	#[test]
	fn failures_are_contained_and_not_retried() {
		let attempts = Rc::new(Cell::new(0));
		let mut dispatcher = Dispatcher::new(
			Some(Unreachable {
				attempts: attempts.clone(),
			}),
			message(),
		);
		assert_eq!(dispatcher.fire(Trigger::Load), Delivery::Failed);
		assert_eq!(dispatcher.fire(Trigger::Timeout), Delivery::Failed);
		assert_eq!(attempts.get(), 2);
		assert_eq!(dispatcher.state(), DispatchState::Idle);
	}

	#[test]
	fn detached_frame_fails_without_delivering() {
		let mut dispatcher = Dispatcher::new(Some(Detached), message());
		assert_eq!(dispatcher.fire(Trigger::Load), Delivery::Failed);
		assert_eq!(dispatcher.fire(Trigger::Timeout), Delivery::Failed);
		assert_eq!(dispatcher.state(), DispatchState::Idle);
	}
}
