//! Delegated event handling.
//!
//! Listeners are bound once on the document rather than on each rendered node, so
//! rebuilding the navbar never requires re-attaching anything. Each incoming
//! browser event is reduced to a [`UiEvent`] by inspecting where it landed, and
//! [`classify`] maps that to the [`MenuEvent`] (if any) the menu should see.
//!
//! Listeners a consumer attaches directly to rendered nodes are lost on every
//! rebuild; attach them to the document instead.

use crate::menu::MenuEvent;

/// Where a click landed relative to the rendered navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickRegion {
	/// On (or inside) the toggle control.
	Toggle,
	/// On (or inside) a link in the nav list.
	NavLink,
	/// Inside the nav list but not on a link.
	Menu,
	/// Anywhere else in the document.
	Outside,
}

/// A user interaction already located against the rendered navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
	/// A click.
	Click(ClickRegion),
	/// A key press, with the DOM `KeyboardEvent.key` value.
	KeyDown(String),
}

impl UiEvent {
	/// Shorthand for a key press.
	pub fn key(key: impl Into<String>) -> Self {
		UiEvent::KeyDown(key.into())
	}
}

/// DOM `KeyboardEvent.key` value that closes the menu.
pub const ESCAPE_KEY: &str = "Escape";

/// Maps an interaction to the menu event it implies.
///
/// Clicks inside the list that miss every link, and keys other than Escape,
/// imply nothing.
pub fn classify(event: &UiEvent) -> Option<MenuEvent> {
	match event {
		UiEvent::Click(ClickRegion::Toggle) => Some(MenuEvent::ToggleActivated),
		UiEvent::Click(ClickRegion::NavLink) => Some(MenuEvent::LinkActivated),
		UiEvent::Click(ClickRegion::Menu) => None,
		UiEvent::Click(ClickRegion::Outside) => Some(MenuEvent::OutsideClick),
		UiEvent::KeyDown(key) if key == ESCAPE_KEY => Some(MenuEvent::EscapePressed),
		UiEvent::KeyDown(_) => None,
	}
}

/// A DOM event listener that is removed when dropped.
///
/// The closure is stored alongside the target instead of being leaked with
/// `Closure::forget()`.
#[cfg(target_arch = "wasm32")]
pub struct EventListener {
	target: web_sys::EventTarget,
	event_type: &'static str,
	closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl EventListener {
	/// Attaches `handler` to `target` for `event_type`.
	pub fn new<F>(
		target: &web_sys::EventTarget,
		event_type: &'static str,
		handler: F,
	) -> crate::Result<Self>
	where
		F: FnMut(web_sys::Event) + 'static,
	{
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
		target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event_type,
			closure,
		})
	}

	/// The event type this listener is bound to.
	pub fn event_type(&self) -> &'static str {
		self.event_type
	}
}

#[cfg(target_arch = "wasm32")]
impl Drop for EventListener {
	fn drop(&mut self) {
		use wasm_bindgen::JsCast;

		let _ = self.target.remove_event_listener_with_callback(
			self.event_type,
			self.closure.as_ref().unchecked_ref(),
		);
	}
}

#[cfg(target_arch = "wasm32")]
impl std::fmt::Debug for EventListener {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventListener")
			.field("event_type", &self.event_type)
			.finish()
	}
}
