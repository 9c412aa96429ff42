//! Live DOM implementation through `web-sys`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use super::DocumentHost;
use crate::error::{NavbarError, Result};
use crate::menu::MenuState;
use crate::node::{self, ElementNode};
use crate::view::{ACTIVE_CLASS, NAV_LIST_CLASS, TOGGLE_CLASS};

/// The page's document.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
	document: Document,
}

impl BrowserDocument {
	/// Wraps `window.document`.
	pub fn current() -> Result<Self> {
		let window = web_sys::window().ok_or(NavbarError::NoWindow)?;
		let document = window.document().ok_or(NavbarError::NoDocument)?;
		Ok(Self { document })
	}

	/// Wraps an existing document.
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	/// Returns the wrapped document.
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// The rendered link list, if any.
	pub fn nav_list(&self) -> Option<Element> {
		self.query(&format!(".{}", NAV_LIST_CLASS))
	}

	/// The rendered toggle control, if any.
	pub fn toggle(&self) -> Option<Element> {
		self.query(&format!(".{}", TOGGLE_CLASS))
	}

	fn query(&self, selector: &str) -> Option<Element> {
		self.document.query_selector(selector).ok().flatten()
	}

	fn query_all(&self, selector: &str) -> Vec<Element> {
		let Ok(list) = self.document.query_selector_all(selector) else {
			return Vec::new();
		};
		(0..list.length())
			.filter_map(|i| list.item(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect()
	}

	fn build(&self, tree: &ElementNode) -> Result<Element> {
		let element = self.document.create_element(tree.tag_name())?;
		for (name, value) in tree.attrs() {
			element.set_attribute(name, value)?;
		}
		for child in tree.child_nodes() {
			let child: Node = match child {
				node::Node::Element(el) => self.build(el)?.into(),
				node::Node::Text(text) => self.document.create_text_node(text).into(),
			};
			element.append_child(&child)?;
		}
		Ok(element)
	}
}

impl DocumentHost for BrowserDocument {
	fn has_element_id(&self, id: &str) -> bool {
		self.document.get_element_by_id(id).is_some()
	}

	fn append_style(&mut self, id: &str, css: &str) -> Result<()> {
		let head = self.document.head().ok_or(NavbarError::NoHead)?;
		let style = self.document.create_element("style")?;
		style.set_id(id);
		style.set_text_content(Some(css));
		head.append_child(&style)?;
		Ok(())
	}

	fn remove_element_by_id(&mut self, id: &str) -> bool {
		match self.document.get_element_by_id(id) {
			Some(element) => {
				element.remove();
				true
			}
			None => false,
		}
	}

	fn remove_by_class(&mut self, class: &str) -> usize {
		let elements = self.query_all(&format!(".{}", class));
		for element in &elements {
			element.remove();
		}
		elements.len()
	}

	fn prepend_to_body(&mut self, tree: &ElementNode) -> Result<()> {
		let body = self.document.body().ok_or(NavbarError::NoBody)?;
		let element = self.build(tree)?;
		body.insert_before(&element, body.first_child().as_ref())?;
		Ok(())
	}

	fn sync_active_links(&mut self, current_page: &str) -> usize {
		let mut active = 0;
		for link in self.query_all(&format!(".{} a", NAV_LIST_CLASS)) {
			let is_active = link.get_attribute("href").as_deref() == Some(current_page);
			let _ = link.class_list().toggle_with_force(ACTIVE_CLASS, is_active);
			active += usize::from(is_active);
		}
		active
	}

	fn apply_menu_state(&mut self, state: MenuState) -> bool {
		let Some(list) = self.nav_list() else {
			debug_log!("no rendered menu to update");
			return false;
		};
		let _ = list
			.class_list()
			.toggle_with_force(ACTIVE_CLASS, state.is_open());
		if let Some(toggle) = self.toggle() {
			toggle.set_text_content(Some(state.glyph()));
			let _ = toggle.set_attribute("aria-expanded", state.aria_expanded());
		}
		true
	}

	fn rendered_menu_state(&self) -> Option<MenuState> {
		let list = self.nav_list()?;
		self.toggle()?;
		Some(if list.class_list().contains(ACTIVE_CLASS) {
			MenuState::Open
		} else {
			MenuState::Closed
		})
	}
}
