//! Document abstraction layer.
//!
//! [`DocumentHost`] is the boundary between the navbar and the page it lives in.
//! Two implementations exist:
//!
//! - [`MemoryDocument`]: an in-memory head/body pair, available on every target.
//!   Used for native tests and for rendering the navbar without a browser.
//! - [`BrowserDocument`]: the live DOM through `web-sys` (WASM only).
//!
//! Every method that looks something up treats "not found" as a no-op and
//! reports it through its return value, never as an error.

mod memory;
pub use memory::MemoryDocument;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDocument;

use crate::error::Result;
use crate::menu::MenuState;
use crate::node::ElementNode;

/// Operations the navbar needs from its hosting document.
pub trait DocumentHost {
	/// Returns whether an element with `id` exists anywhere in the document.
	fn has_element_id(&self, id: &str) -> bool;

	/// Appends `<style id="{id}">{css}</style>` to the head.
	fn append_style(&mut self, id: &str, css: &str) -> Result<()>;

	/// Removes the element with `id`. Returns whether one was found.
	fn remove_element_by_id(&mut self, id: &str) -> bool;

	/// Removes every element carrying `class`. Returns how many were removed.
	fn remove_by_class(&mut self, class: &str) -> usize;

	/// Inserts `tree` as the first child of body.
	fn prepend_to_body(&mut self, tree: &ElementNode) -> Result<()>;

	/// Sets the active class on rendered nav links whose `href` equals
	/// `current_page` and clears it on all others, in place. Returns how many links
	/// are active afterwards.
	fn sync_active_links(&mut self, current_page: &str) -> usize;

	/// Projects `state` onto the rendered list class and toggle glyph, in place.
	/// Returns false when no navbar is rendered.
	fn apply_menu_state(&mut self, state: MenuState) -> bool;

	/// Reads the menu state back from the rendered list. `None` when the list or
	/// the toggle is missing.
	fn rendered_menu_state(&self) -> Option<MenuState>;
}

/// Flips the rendered menu by reading its state back from the document.
///
/// This serves markup that calls a global toggle directly instead of going
/// through a [`Navbar`](crate::Navbar) handle. Returns the new state, or `None`
/// when no navbar is rendered.
pub fn toggle_rendered_menu<H: DocumentHost + ?Sized>(host: &mut H) -> Option<MenuState> {
	let next = host.rendered_menu_state()?.toggled();
	host.apply_menu_state(next);
	debug_log!("legacy toggle -> {}", next);
	Some(next)
}
