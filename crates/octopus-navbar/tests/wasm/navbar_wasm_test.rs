//! Navbar WASM Tests
//!
//! Mounts the navbar into the live test page and drives it through real DOM
//! events dispatched on the document.
//!
//! **Run with**: `wasm-pack test --chrome --headless crates/octopus-navbar`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

use octopus_navbar::browser::{self, NavbarHandle};
use octopus_navbar::menu::{CLOSE_GLYPH, OPEN_GLYPH};
use octopus_navbar::styles::{BODY_OFFSET_STYLE_ID, NAVBAR_STYLE_ID};
use octopus_navbar::view::{ACTIVE_CLASS, NAV_LIST_CLASS, NAVBAR_CLASS, TOGGLE_CLASS};
use octopus_navbar::{MenuState, NavConfig, NavConfigPatch, NavItem, NavbarOptions};

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Helpers
// ============================================================================

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn mount_default() -> NavbarHandle {
	browser::mount(NavConfig::default(), NavbarOptions::default()).unwrap()
}

fn query(selector: &str) -> Option<Element> {
	document().query_selector(selector).unwrap()
}

fn count(selector: &str) -> u32 {
	document().query_selector_all(selector).unwrap().length()
}

fn click(selector: &str) {
	query(selector)
		.unwrap()
		.dyn_into::<HtmlElement>()
		.unwrap()
		.click();
}

fn press(key: &str) {
	let init = KeyboardEventInit::new();
	init.set_key(key);
	init.set_bubbles(true);
	let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
	document().dispatch_event(&event).unwrap();
}

fn toggle_text() -> String {
	query(&format!(".{}", TOGGLE_CLASS))
		.and_then(|toggle| toggle.text_content())
		.unwrap_or_default()
}

// ============================================================================
// Mounting
// ============================================================================

/// Test mount renders one navbar as the first child of body
#[wasm_bindgen_test]
fn test_mount_renders_navbar_first_in_body() {
	let handle = mount_default();

	let first = document().body().unwrap().first_element_child().unwrap();
	assert!(first.class_list().contains(NAVBAR_CLASS));
	assert_eq!(count(&format!(".{} a", NAV_LIST_CLASS)), 6);
	assert!(document().get_element_by_id(NAVBAR_STYLE_ID).is_some());
	assert!(document().get_element_by_id(BODY_OFFSET_STYLE_ID).is_some());

	handle.destroy();
}

/// Test on_ready runs the callback immediately once the document has loaded
#[wasm_bindgen_test]
fn test_on_ready_runs_immediately_after_load() {
	assert_ne!(document().ready_state(), "loading");

	let ran = Rc::new(Cell::new(false));
	let flag = Rc::clone(&ran);
	browser::on_ready(move || flag.set(true)).unwrap();
	assert!(ran.get());
}

/// Test mount_when_ready hands a mounted handle to the callback
#[wasm_bindgen_test]
fn test_mount_when_ready_delivers_handle() {
	let mounted = Rc::new(Cell::new(None));
	let slot = Rc::clone(&mounted);
	browser::mount_when_ready(NavConfig::default(), NavbarOptions::default(), move |result| {
		slot.set(Some(result.unwrap()));
	})
	.unwrap();

	let handle = mounted.take().unwrap();
	assert_eq!(count(&format!(".{}", NAVBAR_CLASS)), 1);
	handle.destroy();
}

/// Test mounting twice replaces instead of stacking
#[wasm_bindgen_test]
fn test_second_mount_replaces_first() {
	let first = mount_default();
	let second = mount_default();

	assert_eq!(count(&format!(".{}", NAVBAR_CLASS)), 1);
	assert_eq!(count(&format!("#{}", NAVBAR_STYLE_ID)), 1);

	drop(first);
	second.destroy();
}

/// Test the active link follows the detected current page
#[wasm_bindgen_test]
fn test_active_link_matches_current_page() {
	let handle = mount_default();
	let page = handle.current_page();

	let active = document()
		.query_selector_all(&format!(".{} a.{}", NAV_LIST_CLASS, ACTIVE_CLASS))
		.unwrap();
	for i in 0..active.length() {
		let link = active.item(i).unwrap().dyn_into::<Element>().unwrap();
		assert_eq!(link.get_attribute("href").as_deref(), Some(page.as_str()));
	}

	handle.set_active_page("index-4.html");
	let active = query(&format!(".{} a.{}", NAV_LIST_CLASS, ACTIVE_CLASS)).unwrap();
	assert_eq!(active.get_attribute("href").as_deref(), Some("index-4.html"));

	handle.destroy();
}

// ============================================================================
// Delegated events
// ============================================================================

/// Test clicking the toggle opens and closes the menu
#[wasm_bindgen_test]
fn test_toggle_click_flips_menu() {
	let handle = mount_default();
	let toggle = format!(".{}", TOGGLE_CLASS);

	click(&toggle);
	assert_eq!(handle.menu_state(), MenuState::Open);
	assert_eq!(toggle_text(), CLOSE_GLYPH);
	assert_eq!(count(&format!(".{}.{}", NAV_LIST_CLASS, ACTIVE_CLASS)), 1);

	click(&toggle);
	assert_eq!(handle.menu_state(), MenuState::Closed);
	assert_eq!(toggle_text(), OPEN_GLYPH);

	handle.destroy();
}

/// Test a click outside the navbar closes an open menu
#[wasm_bindgen_test]
fn test_outside_click_closes_menu() {
	let handle = mount_default();
	handle.toggle_menu();

	document().body().unwrap().click();
	assert_eq!(handle.menu_state(), MenuState::Closed);
	assert_eq!(count(&format!(".{}.{}", NAV_LIST_CLASS, ACTIVE_CLASS)), 0);

	handle.destroy();
}

/// Test Escape closes the menu and other keys do not
#[wasm_bindgen_test]
fn test_escape_closes_menu() {
	let handle = mount_default();
	handle.toggle_menu();

	press("Enter");
	assert_eq!(handle.menu_state(), MenuState::Open);

	press("Escape");
	assert_eq!(handle.menu_state(), MenuState::Closed);
	assert_eq!(toggle_text(), OPEN_GLYPH);

	handle.destroy();
}

/// Test listeners survive a rebuild
#[wasm_bindgen_test]
fn test_listeners_work_after_rebuild() {
	let handle = mount_default();
	handle
		.add_nav_item(NavItem::new("index-6.html", "📊 图表", "charts"), None)
		.unwrap();
	assert_eq!(count(&format!(".{} a", NAV_LIST_CLASS)), 7);

	click(&format!(".{}", TOGGLE_CLASS));
	assert_eq!(handle.menu_state(), MenuState::Open);

	handle.destroy();
}

// ============================================================================
// Teardown
// ============================================================================

/// Test destroy removes everything and silences the listeners
#[wasm_bindgen_test]
fn test_destroy_removes_navbar_and_styles() {
	let handle = mount_default();
	let teardown = handle.destroy();

	assert!(teardown.navbar_removed);
	assert_eq!(teardown.styles_removed, 2);
	assert_eq!(count(&format!(".{}", NAVBAR_CLASS)), 0);
	assert!(document().get_element_by_id(NAVBAR_STYLE_ID).is_none());
	assert!(document().get_element_by_id(BODY_OFFSET_STYLE_ID).is_none());

	press("Escape");
	document().body().unwrap().click();
}

/// Test the legacy global toggle flips the rendered menu
#[wasm_bindgen_test]
fn test_legacy_toggle_export() {
	let handle = mount_default();

	browser::toggle_navbar();
	assert_eq!(count(&format!(".{}.{}", NAV_LIST_CLASS, ACTIVE_CLASS)), 1);
	assert_eq!(toggle_text(), CLOSE_GLYPH);

	browser::toggle_navbar();
	assert_eq!(count(&format!(".{}.{}", NAV_LIST_CLASS, ACTIVE_CLASS)), 0);

	handle.destroy();
	browser::toggle_navbar();
}

/// Test the legacy toggle and the handle's listeners agree on the menu state
#[wasm_bindgen_test]
fn test_legacy_toggle_then_handle_events() {
	let handle = mount_default();
	let open_list = format!(".{}.{}", NAV_LIST_CLASS, ACTIVE_CLASS);

	browser::toggle_navbar();
	press("Escape");
	assert_eq!(count(&open_list), 0);
	assert_eq!(handle.menu_state(), MenuState::Closed);

	browser::toggle_navbar();
	document().body().unwrap().click();
	assert_eq!(count(&open_list), 0);
	assert_eq!(handle.menu_state(), MenuState::Closed);

	browser::toggle_navbar();
	click(&format!(".{}", TOGGLE_CLASS));
	assert_eq!(count(&open_list), 0);
	assert_eq!(toggle_text(), OPEN_GLYPH);

	handle.destroy();
}

/// Test a brand patch rebuilds with the new brand
#[wasm_bindgen_test]
fn test_update_config_rebuilds_brand() {
	let handle = mount_default();
	handle
		.update_config(NavConfigPatch::new().brand(octopus_navbar::Brand::new("Tools", "home.html")))
		.unwrap();

	let brand = query(".octopus-navbar-brand").unwrap();
	assert_eq!(brand.text_content().as_deref(), Some("Tools"));
	assert_eq!(brand.get_attribute("href").as_deref(), Some("home.html"));
	assert_eq!(count(&format!(".{}", NAVBAR_CLASS)), 1);

	handle.destroy();
}
