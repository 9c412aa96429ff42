//! In-memory document.

use super::DocumentHost;
use crate::error::{NavbarError, Result};
use crate::menu::MenuState;
use crate::node::{ElementNode, Node};
use crate::view::{ACTIVE_CLASS, TOGGLE_CLASS, is_nav_list};

#[derive(Debug, Clone, PartialEq, Eq)]
struct StyleElement {
	id: String,
	css: String,
}

/// A head (style elements only) and a body element tree.
///
/// Also counts how many times a tree was inserted into body, which lets tests
/// tell an in-place patch from a rebuild.
///
/// # Example
///
/// ```
/// use octopus_navbar::{MemoryDocument, Navbar, NavConfig, NavbarOptions};
///
/// let navbar = Navbar::mount(
///     MemoryDocument::new(),
///     NavConfig::default(),
///     NavbarOptions::default(),
///     "index-3.html",
/// ).unwrap();
///
/// assert_eq!(navbar.host().mount_count(), 1);
/// assert!(navbar.host().navbar().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
	head: Vec<StyleElement>,
	body: Option<ElementNode>,
	mounts: usize,
}

impl Default for MemoryDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryDocument {
	/// Creates a document with an empty body.
	pub fn new() -> Self {
		Self::with_body(ElementNode::new("body"))
	}

	/// Creates a document whose body is `body`.
	pub fn with_body(body: ElementNode) -> Self {
		Self {
			head: Vec::new(),
			body: Some(body),
			mounts: 0,
		}
	}

	/// Creates a document that is still loading: it has no body yet.
	pub fn without_body() -> Self {
		Self {
			head: Vec::new(),
			body: None,
			mounts: 0,
		}
	}

	/// Returns the body element.
	pub fn body(&self) -> Option<&ElementNode> {
		self.body.as_ref()
	}

	/// Returns the first element carrying the navbar marker class.
	pub fn navbar(&self) -> Option<&ElementNode> {
		self.body
			.as_ref()?
			.find(&|el| el.has_class(crate::view::NAVBAR_CLASS))
	}

	/// Rendered nav links in document order.
	pub fn nav_links(&self) -> Vec<&ElementNode> {
		self.navbar()
			.and_then(|nav| nav.find(&is_nav_list))
			.map(|list| list.find_all(&|el| el.tag_name() == "a"))
			.unwrap_or_default()
	}

	/// Counts body elements carrying `class`.
	pub fn count_class(&self, class: &str) -> usize {
		self.body
			.as_ref()
			.map(|body| body.find_all(&|el| el.has_class(class)).len())
			.unwrap_or(0)
	}

	/// CSS of the style element with `id`.
	pub fn style(&self, id: &str) -> Option<&str> {
		self.head
			.iter()
			.find(|style| style.id == id)
			.map(|style| style.css.as_str())
	}

	/// Ids of the head style elements in insertion order.
	pub fn style_ids(&self) -> Vec<&str> {
		self.head.iter().map(|style| style.id.as_str()).collect()
	}

	/// Number of trees inserted into body so far.
	pub fn mount_count(&self) -> usize {
		self.mounts
	}

	/// Serialises the document as `<head>…</head><body>…</body>`.
	pub fn to_html(&self) -> String {
		let head = self.head.iter().fold(ElementNode::new("head"), |head, style| {
			head.child(
				ElementNode::new("style")
					.attr("id", style.id.clone())
					.child(style.css.clone()),
			)
		});
		let mut html = head.render_to_string();
		if let Some(body) = &self.body {
			html.push_str(&body.render_to_string());
		}
		html
	}

	fn nav_list_mut(&mut self) -> Option<&mut ElementNode> {
		self.body.as_mut()?.find_mut(&is_nav_list)
	}
}

impl DocumentHost for MemoryDocument {
	fn has_element_id(&self, id: &str) -> bool {
		self.head.iter().any(|style| style.id == id)
			|| self
				.body
				.as_ref()
				.and_then(|body| body.find(&|el| el.get_attr("id") == Some(id)))
				.is_some()
	}

	fn append_style(&mut self, id: &str, css: &str) -> Result<()> {
		self.head.push(StyleElement {
			id: id.to_string(),
			css: css.to_string(),
		});
		Ok(())
	}

	fn remove_element_by_id(&mut self, id: &str) -> bool {
		if let Some(pos) = self.head.iter().position(|style| style.id == id) {
			self.head.remove(pos);
			return true;
		}
		self.body
			.as_mut()
			.is_some_and(|body| body.remove_descendants(&|el| el.get_attr("id") == Some(id)) > 0)
	}

	fn remove_by_class(&mut self, class: &str) -> usize {
		self.body
			.as_mut()
			.map(|body| body.remove_descendants(&|el| el.has_class(class)))
			.unwrap_or(0)
	}

	fn prepend_to_body(&mut self, tree: &ElementNode) -> Result<()> {
		let body = self.body.as_mut().ok_or(NavbarError::NoBody)?;
		body.prepend(Node::Element(tree.clone()));
		self.mounts += 1;
		Ok(())
	}

	fn sync_active_links(&mut self, current_page: &str) -> usize {
		let Some(list) = self.nav_list_mut() else {
			return 0;
		};
		let mut active = 0;
		list.for_each_mut(&|el| el.tag_name() == "a", &mut |link| {
			let is_active = link.get_attr("href") == Some(current_page);
			link.toggle_class(ACTIVE_CLASS, is_active);
			active += usize::from(is_active);
		});
		active
	}

	fn apply_menu_state(&mut self, state: MenuState) -> bool {
		let Some(list) = self.nav_list_mut() else {
			return false;
		};
		list.toggle_class(ACTIVE_CLASS, state.is_open());
		if let Some(toggle) = self
			.body
			.as_mut()
			.and_then(|body| body.find_mut(&|el| el.has_class(TOGGLE_CLASS)))
		{
			toggle.set_text(state.glyph());
			toggle.set_attr("aria-expanded", state.aria_expanded());
		}
		true
	}

	fn rendered_menu_state(&self) -> Option<MenuState> {
		let body = self.body.as_ref()?;
		let list = body.find(&is_nav_list)?;
		body.find(&|el| el.has_class(TOGGLE_CLASS))?;
		Some(if list.has_class(ACTIVE_CLASS) {
			MenuState::Open
		} else {
			MenuState::Closed
		})
	}
}
