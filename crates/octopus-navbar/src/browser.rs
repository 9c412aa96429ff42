//! Browser entry points (WASM only).
//!
//! The hosting application calls [`mount`] (or [`mount_when_ready`]) once at
//! startup and keeps the returned [`NavbarHandle`]. Nothing is registered on the
//! global scope except the legacy [`toggle_navbar`] export.
//!
//! ```ignore
//! use octopus_navbar::browser;
//! use octopus_navbar::{NavConfig, NavbarOptions};
//!
//! browser::mount_when_ready(NavConfig::default(), NavbarOptions::default(), |result| {
//!     match result {
//!         Ok(handle) => APP.with(|app| app.set_navbar(handle)),
//!         Err(e) => web_sys::console::error_1(&e.to_string().into()),
//!     }
//! })?;
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, KeyboardEvent, Node};

use crate::config::{NavConfig, NavConfigPatch, NavItem, NavbarOptions};
use crate::dom::{BrowserDocument, toggle_rendered_menu};
use crate::error::Result;
use crate::events::{ClickRegion, EventListener, UiEvent};
use crate::location;
use crate::menu::MenuState;
use crate::navbar::{Navbar, Teardown};

type Shared = Rc<RefCell<Navbar<BrowserDocument>>>;

/// Owner of a mounted navbar and its document-level listeners.
///
/// Dropping the handle removes the listeners but leaves the rendered navbar;
/// call [`destroy`](Self::destroy) to remove both.
#[derive(Debug)]
pub struct NavbarHandle {
	navbar: Shared,
	listeners: Vec<EventListener>,
}

impl NavbarHandle {
	/// See [`Navbar::update_config`].
	pub fn update_config(&self, patch: NavConfigPatch) -> Result<()> {
		self.navbar.borrow_mut().update_config(patch)
	}

	/// See [`Navbar::add_nav_item`].
	pub fn add_nav_item(&self, item: NavItem, index: Option<usize>) -> Result<()> {
		self.navbar.borrow_mut().add_nav_item(item, index)
	}

	/// See [`Navbar::remove_nav_item`].
	pub fn remove_nav_item(&self, id: &str) -> Result<usize> {
		self.navbar.borrow_mut().remove_nav_item(id)
	}

	/// See [`Navbar::set_active_page`].
	pub fn set_active_page(&self, href: impl Into<String>) -> usize {
		self.navbar.borrow_mut().set_active_page(href)
	}

	/// See [`Navbar::toggle_menu`].
	pub fn toggle_menu(&self) -> MenuState {
		self.navbar.borrow_mut().toggle_menu()
	}

	/// Current menu state.
	pub fn menu_state(&self) -> MenuState {
		self.navbar.borrow().menu_state()
	}

	/// Snapshot of the current configuration.
	pub fn config(&self) -> NavConfig {
		self.navbar.borrow().config().clone()
	}

	/// Current page compared against item links.
	pub fn current_page(&self) -> String {
		self.navbar.borrow().current_page().to_string()
	}

	/// Runs `f` with the underlying navbar.
	pub fn with<R>(&self, f: impl FnOnce(&Navbar<BrowserDocument>) -> R) -> R {
		f(&self.navbar.borrow())
	}

	/// Removes the navbar, both styles and the document listeners.
	pub fn destroy(self) -> Teardown {
		let teardown = self.navbar.borrow_mut().destroy();
		drop(self.listeners);
		teardown
	}
}

/// Mounts the navbar into the current document and binds the delegated listeners.
///
/// The document must already have a body; see [`mount_when_ready`].
pub fn mount(config: NavConfig, options: NavbarOptions) -> Result<NavbarHandle> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let host = BrowserDocument::current()?;
	let current_page = location::current_page(&options.landing_page)?;
	let navbar = Rc::new(RefCell::new(Navbar::mount(host, config, options, current_page)?));
	let listeners = bind_listeners(&navbar)?;
	Ok(NavbarHandle { navbar, listeners })
}

/// Mounts once the document is ready and passes the outcome to `on_mounted`.
///
/// Runs synchronously when the document has finished loading, otherwise on
/// `DOMContentLoaded`.
pub fn mount_when_ready<F>(config: NavConfig, options: NavbarOptions, on_mounted: F) -> Result<()>
where
	F: FnOnce(Result<NavbarHandle>) + 'static,
{
	on_ready(move || on_mounted(mount(config, options)))
}

/// Runs `f` now if the document is no longer loading, otherwise on `DOMContentLoaded`.
pub fn on_ready<F>(f: F) -> Result<()>
where
	F: FnOnce() + 'static,
{
	let document = BrowserDocument::current()?;
	let document = document.document();
	if document.ready_state() != "loading" {
		f();
		return Ok(());
	}
	let callback = Closure::once_into_js(f);
	document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
	debug_log!("document loading, deferring until DOMContentLoaded");
	Ok(())
}

/// Reads a configuration from `<script type="application/json" id="{id}">`.
///
/// Returns `Ok(None)` when no such element exists.
pub fn config_from_script(id: &str) -> Result<Option<NavConfig>> {
	let document = BrowserDocument::current()?;
	let Some(script) = document.document().get_element_by_id(id) else {
		return Ok(None);
	};
	let json = script.text_content().unwrap_or_default();
	NavConfig::from_json(&json).map(Some)
}

/// Flips the rendered menu found by class, without a handle.
///
/// For markup such as `<button onclick="toggleNavbar()">`. Does nothing when no
/// navbar is rendered. A handle mounted on the same page adopts the flipped state
/// on its next event.
#[wasm_bindgen(js_name = toggleNavbar)]
pub fn toggle_navbar() {
	match BrowserDocument::current() {
		Ok(mut document) => {
			toggle_rendered_menu(&mut document);
		}
		Err(e) => warn_log!("toggleNavbar: {}", e),
	}
}

fn bind_listeners(navbar: &Shared) -> Result<Vec<EventListener>> {
	let document = navbar.borrow().host().document().clone();
	let target: &web_sys::EventTarget = document.as_ref();

	let click = {
		let navbar = Rc::clone(navbar);
		EventListener::new(target, "click", move |event: Event| {
			let region = {
				let Ok(nav) = navbar.try_borrow() else {
					return;
				};
				locate_click(nav.host(), &event)
			};
			if let Some(region) = region {
				dispatch(&navbar, UiEvent::Click(region));
			}
		})?
	};

	let keydown = {
		let navbar = Rc::clone(navbar);
		EventListener::new(target, "keydown", move |event: Event| {
			if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
				dispatch(&navbar, UiEvent::KeyDown(key));
			}
		})?
	};

	Ok(vec![click, keydown])
}

fn dispatch(navbar: &Shared, event: UiEvent) {
	match navbar.try_borrow_mut() {
		Ok(mut navbar) => {
			navbar.handle_event(&event);
		}
		Err(_) => warn_log!("navbar busy, dropping {:?}", event),
	}
}

/// Locates a click against the rendered navbar. `None` when no navbar is rendered.
fn locate_click(document: &BrowserDocument, event: &Event) -> Option<ClickRegion> {
	let list = document.nav_list()?;
	let toggle = document.toggle()?;
	let target = event.target()?;
	let node = target.dyn_ref::<Node>()?;

	if toggle.contains(Some(node)) {
		return Some(ClickRegion::Toggle);
	}
	if list.contains(Some(node)) {
		let element = match node.dyn_ref::<Element>() {
			Some(el) => Some(el.clone()),
			None => node.parent_element(),
		};
		let on_link = element
			.and_then(|el| el.closest("a").ok().flatten())
			.is_some_and(|link| {
				let link: &Node = &link;
				list.contains(Some(link))
			});
		return Some(if on_link {
			ClickRegion::NavLink
		} else {
			ClickRegion::Menu
		});
	}
	Some(ClickRegion::Outside)
}
