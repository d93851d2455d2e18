use thiserror::Error;

/// Why a single delivery to the embedded document failed.
///
/// These never reach the host page; the dispatcher logs and drops them.
#[derive(Debug, Error)]
pub enum DispatchError {
	/// The frame is detached or not yet attached.
	#[error("frame has no content window")]
	NoContentWindow,
	/// The message could not be turned into JSON.
	#[error("failed to serialize embed message: {0}")]
	Serialize(#[from] serde_json::Error),
	/// `JSON.parse` rejected the serialized message.
	#[error("failed to encode embed message: {0}")]
	Encode(String),
	/// The browser threw from `postMessage`.
	#[error("postMessage rejected: {0}")]
	PostMessage(String),
}
