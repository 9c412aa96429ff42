//! Element tree used as the render target.
//!
//! The renderer produces an [`ElementNode`] tree instead of touching the DOM
//! directly. A [`DocumentHost`](crate::dom::DocumentHost) then turns the tree into
//! real nodes, and [`ElementNode::render_to_string`] serialises it for tests and
//! server-side output.
//!
//! ## Example
//!
//! ```
//! use octopus_navbar::node::ElementNode;
//!
//! let link = ElementNode::new("a")
//!     .attr("href", "index.html")
//!     .class("active")
//!     .child("Home");
//!
//! assert_eq!(link.render_to_string(), r#"<a href="index.html" class="active">Home</a>"#);
//! ```

use std::borrow::Cow;

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// An element with attributes and children.
	Element(ElementNode),
	/// A text node.
	Text(Cow<'static, str>),
}

impl Node {
	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&ElementNode> {
		match self {
			Node::Element(el) => Some(el),
			Node::Text(_) => None,
		}
	}

	/// Returns the element mutably if this node is one.
	pub fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
		match self {
			Node::Element(el) => Some(el),
			Node::Text(_) => None,
		}
	}

	/// Concatenated text of this node and its descendants.
	pub fn text_content(&self) -> String {
		match self {
			Node::Element(el) => el.text_content(),
			Node::Text(text) => text.to_string(),
		}
	}

	fn render_into(&self, output: &mut String) {
		match self {
			Node::Element(el) => el.render_into(output),
			Node::Text(text) => output.push_str(&html_escape(text)),
		}
	}
}

impl From<ElementNode> for Node {
	fn from(el: ElementNode) -> Self {
		Node::Element(el)
	}
}

impl From<&'static str> for Node {
	fn from(text: &'static str) -> Self {
		Node::Text(Cow::Borrowed(text))
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Text(Cow::Owned(text))
	}
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Node>,
}

impl ElementNode {
	/// Creates an element with no attributes or children.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Sets an attribute, replacing an existing value with the same name.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.set_attr(name, value);
		self
	}

	/// Adds a class to the `class` attribute.
	pub fn class(mut self, class: &str) -> Self {
		self.add_class(class);
		self
	}

	/// Adds `class` only when `enabled` is true.
	pub fn class_if(self, class: &str, enabled: bool) -> Self {
		if enabled { self.class(class) } else { self }
	}

	/// Appends a child.
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Appends several children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Inserts a child before all existing children.
	pub fn prepend(&mut self, child: impl Into<Node>) {
		self.children.insert(0, child.into());
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns an attribute value.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Sets an attribute in place.
	pub fn set_attr(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Replaces all children with a single text node.
	pub fn set_text(&mut self, text: impl Into<Cow<'static, str>>) {
		self.children = vec![Node::Text(text.into())];
	}

	/// Concatenated text of all descendants.
	pub fn text_content(&self) -> String {
		self.children.iter().map(Node::text_content).collect()
	}

	/// Returns whether the `class` attribute contains `class`.
	pub fn has_class(&self, class: &str) -> bool {
		self.get_attr("class")
			.is_some_and(|list| list.split_whitespace().any(|c| c == class))
	}

	/// Adds a class if not already present.
	pub fn add_class(&mut self, class: &str) {
		if self.has_class(class) {
			return;
		}
		let list = match self.get_attr("class") {
			Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing, class),
			_ => class.to_string(),
		};
		self.set_attr("class", list);
	}

	/// Removes a class if present.
	pub fn remove_class(&mut self, class: &str) {
		if !self.has_class(class) {
			return;
		}
		let list = self
			.get_attr("class")
			.unwrap_or_default()
			.split_whitespace()
			.filter(|c| *c != class)
			.collect::<Vec<_>>()
			.join(" ");
		self.set_attr("class", list);
	}

	/// Adds or removes a class depending on `force`.
	pub fn toggle_class(&mut self, class: &str, force: bool) {
		if force {
			self.add_class(class);
		} else {
			self.remove_class(class);
		}
	}

	/// Depth-first search for the first descendant (or self) matching `pred`.
	pub fn find(&self, pred: &dyn Fn(&ElementNode) -> bool) -> Option<&ElementNode> {
		if pred(self) {
			return Some(self);
		}
		self.children
			.iter()
			.filter_map(Node::as_element)
			.find_map(|child| child.find(pred))
	}

	/// Mutable variant of [`find`](Self::find).
	pub fn find_mut(&mut self, pred: &dyn Fn(&ElementNode) -> bool) -> Option<&mut ElementNode> {
		if pred(self) {
			return Some(self);
		}
		self.children
			.iter_mut()
			.filter_map(Node::as_element_mut)
			.find_map(|child| child.find_mut(pred))
	}

	/// All descendants (and self) matching `pred`, in document order.
	pub fn find_all(&self, pred: &dyn Fn(&ElementNode) -> bool) -> Vec<&ElementNode> {
		let mut found = Vec::new();
		self.collect(pred, &mut found);
		found
	}

	fn collect<'a>(&'a self, pred: &dyn Fn(&ElementNode) -> bool, out: &mut Vec<&'a ElementNode>) {
		if pred(self) {
			out.push(self);
		}
		for child in self.children.iter().filter_map(Node::as_element) {
			child.collect(pred, out);
		}
	}

	/// Calls `f` on every descendant (and self) matching `pred`.
	pub fn for_each_mut(
		&mut self,
		pred: &dyn Fn(&ElementNode) -> bool,
		f: &mut dyn FnMut(&mut ElementNode),
	) {
		if pred(self) {
			f(self);
		}
		for child in self.children.iter_mut().filter_map(Node::as_element_mut) {
			child.for_each_mut(pred, f);
		}
	}

	/// Removes every descendant element matching `pred`; returns how many were removed.
	pub fn remove_descendants(&mut self, pred: &dyn Fn(&ElementNode) -> bool) -> usize {
		let before = self.children.len();
		self.children
			.retain(|child| !child.as_element().is_some_and(|el| pred(el)));
		let mut removed = before - self.children.len();
		for child in self.children.iter_mut().filter_map(Node::as_element_mut) {
			removed += child.remove_descendants(pred);
		}
		removed
	}

	/// Serialises the tree to HTML.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);
		for (name, value) in &self.attrs {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape(value));
			output.push('"');
		}
		output.push('>');
		for child in &self.children {
			child.render_into(output);
		}
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

/// Escapes `& < > " '`. Borrows when nothing needs escaping.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
