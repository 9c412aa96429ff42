//! Error type for navbar operations.
//!
//! Lookups that find nothing (no navbar rendered yet, no menu to toggle) are not
//! errors: they are silent no-ops. [`NavbarError`] only covers an unusable
//! environment, a JavaScript exception from a DOM call, or an unparsable
//! configuration document.

use thiserror::Error;

/// Errors raised while mounting or mutating the navbar.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum NavbarError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,
	/// The document has no `<head>` to receive style elements.
	#[error("Document has no <head> element")]
	NoHead,
	/// The document has no `<body>` yet; mount after the ready signal.
	#[error("Document has no <body> element")]
	NoBody,
	/// A DOM call threw a JavaScript exception.
	#[error("DOM operation failed: {0}")]
	Dom(String),
	/// A configuration document could not be parsed.
	#[error("Invalid navbar configuration: {0}")]
	Config(#[from] serde_json::Error),
}

impl NavbarError {
	/// Creates a DOM error from a message.
	pub fn dom(msg: impl Into<String>) -> Self {
		Self::Dom(msg.into())
	}
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for NavbarError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		let message = value
			.as_string()
			.or_else(|| {
				js_sys::Reflect::get(&value, &"message".into())
					.ok()
					.and_then(|m| m.as_string())
			})
			.unwrap_or_else(|| format!("{:?}", value));
		Self::Dom(message)
	}
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NavbarError>;
