//! Navbar rendering.
//!
//! [`render_navbar`] is a pure function of the configuration, the current page
//! and the menu state. [`mount`] replaces whatever navbar the document holds with
//! a freshly rendered one, so repeated mounts never stack.
//!
//! Rendered structure:
//!
//! ```text
//! nav.octopus-navbar
//! └── div.octopus-navbar-container
//!     ├── a.octopus-navbar-brand[href]
//!     ├── ul.octopus-navbar-nav(.active when open)
//!     │   └── li > a[href][data-id](.active when href == current page)   × items
//!     └── button.octopus-navbar-toggle[aria-label][aria-expanded]  ☰ / ✕
//! ```

use crate::config::NavConfig;
use crate::dom::DocumentHost;
use crate::error::Result;
use crate::menu::MenuState;
use crate::node::ElementNode;

/// Marker class of the navbar root.
pub const NAVBAR_CLASS: &str = "octopus-navbar";
/// Class of the centring container.
pub const CONTAINER_CLASS: &str = "octopus-navbar-container";
/// Class of the brand link.
pub const BRAND_CLASS: &str = "octopus-navbar-brand";
/// Class of the link list.
pub const NAV_LIST_CLASS: &str = "octopus-navbar-nav";
/// Class of the mobile toggle.
pub const TOGGLE_CLASS: &str = "octopus-navbar-toggle";
/// State class for the active link and the open list.
pub const ACTIVE_CLASS: &str = "active";
/// Data attribute carrying the item id on each link.
pub const ITEM_ID_ATTR: &str = "data-id";
/// Accessible label of the toggle.
pub const TOGGLE_LABEL: &str = "切换导航菜单";

/// Builds the navbar tree.
pub fn render_navbar(config: &NavConfig, current_page: &str, menu: MenuState) -> ElementNode {
	let brand = ElementNode::new("a")
		.attr("href", config.brand.href.clone())
		.class(BRAND_CLASS)
		.child(config.brand.text.clone());

	let links = config.nav_items.iter().map(|item| {
		let link = ElementNode::new("a")
			.attr("href", item.href.clone())
			.attr(ITEM_ID_ATTR, item.id.clone())
			.class_if(ACTIVE_CLASS, item.href == current_page)
			.child(item.text.clone());
		ElementNode::new("li").child(link)
	});

	let list = ElementNode::new("ul")
		.class(NAV_LIST_CLASS)
		.class_if(ACTIVE_CLASS, menu.is_open())
		.children(links);

	let toggle = ElementNode::new("button")
		.class(TOGGLE_CLASS)
		.attr("type", "button")
		.attr("aria-label", TOGGLE_LABEL)
		.attr("aria-expanded", menu.aria_expanded())
		.child(menu.glyph());

	ElementNode::new("nav").class(NAVBAR_CLASS).child(
		ElementNode::new("div")
			.class(CONTAINER_CLASS)
			.child(brand)
			.child(list)
			.child(toggle),
	)
}

/// Replaces any rendered navbar with `tree`, inserted as the first child of body.
pub fn mount<H: DocumentHost + ?Sized>(host: &mut H, tree: &ElementNode) -> Result<()> {
	let removed = host.remove_by_class(NAVBAR_CLASS);
	if removed > 0 {
		debug_log!("removed {} existing navbar subtree(s)", removed);
	}
	host.prepend_to_body(tree)
}

/// Returns whether `el` is the rendered link list.
pub(crate) fn is_nav_list(el: &ElementNode) -> bool {
	el.tag_name() == "ul" && el.has_class(NAV_LIST_CLASS)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{Brand, NavItem};
	use rstest::rstest;

	fn links(tree: &ElementNode) -> Vec<&ElementNode> {
		tree.find(&is_nav_list)
			.map(|list| list.find_all(&|el| el.tag_name() == "a"))
			.unwrap_or_default()
	}

	#[rstest]
	fn test_default_config_marks_teleprompter_active() {
		let tree = render_navbar(&NavConfig::default(), "index-3.html", MenuState::Closed);
		let links = links(&tree);

		assert_eq!(links.len(), 6);
		let active: Vec<_> = links.iter().filter(|a| a.has_class(ACTIVE_CLASS)).collect();
		assert_eq!(active.len(), 1);
		assert_eq!(active[0].text_content(), "📺 智能提词器");
	}

	#[rstest]
	#[case("index-9.html")]
	#[case("INDEX-3.HTML")]
	#[case("")]
	fn test_no_match_means_no_active_link(#[case] page: &str) {
		let tree = render_navbar(&NavConfig::default(), page, MenuState::Closed);
		assert!(links(&tree).iter().all(|a| !a.has_class(ACTIVE_CLASS)));
	}

	#[rstest]
	fn test_links_carry_href_text_and_id_in_order() {
		let config = NavConfig::new(Brand::new("B", "b.html"))
			.item(NavItem::new("z.html", "Zed", "z"))
			.item(NavItem::new("a.html", "Ay", "a"));
		let tree = render_navbar(&config, "none", MenuState::Closed);

		let rendered: Vec<_> = links(&tree)
			.iter()
			.map(|a| {
				(
					a.get_attr("href").unwrap().to_string(),
					a.text_content(),
					a.get_attr(ITEM_ID_ATTR).unwrap().to_string(),
				)
			})
			.collect();
		assert_eq!(
			rendered,
			[
				("z.html".to_string(), "Zed".to_string(), "z".to_string()),
				("a.html".to_string(), "Ay".to_string(), "a".to_string()),
			]
		);
	}

	#[rstest]
	fn test_structure_order_brand_list_toggle() {
		let tree = render_navbar(&NavConfig::default(), "index.html", MenuState::Closed);
		assert!(tree.has_class(NAVBAR_CLASS));

		let container = tree.child_nodes()[0].as_element().unwrap();
		assert!(container.has_class(CONTAINER_CLASS));
		let classes: Vec<_> = container
			.child_nodes()
			.iter()
			.filter_map(|n| n.as_element())
			.filter_map(|el| el.get_attr("class"))
			.collect();
		assert_eq!(classes, [BRAND_CLASS, NAV_LIST_CLASS, TOGGLE_CLASS]);
	}

	#[rstest]
	#[case(MenuState::Closed, "☰", "false", false)]
	#[case(MenuState::Open, "✕", "true", true)]
	fn test_menu_state_projection(
		#[case] menu: MenuState,
		#[case] glyph: &str,
		#[case] expanded: &str,
		#[case] list_active: bool,
	) {
		let tree = render_navbar(&NavConfig::default(), "index.html", menu);
		let toggle = tree.find(&|el| el.has_class(TOGGLE_CLASS)).unwrap();
		let list = tree.find(&is_nav_list).unwrap();

		assert_eq!(toggle.text_content(), glyph);
		assert_eq!(toggle.get_attr("aria-expanded"), Some(expanded));
		assert_eq!(toggle.get_attr("aria-label"), Some(TOGGLE_LABEL));
		assert_eq!(list.has_class(ACTIVE_CLASS), list_active);
	}

	#[rstest]
	fn test_brand_text_is_escaped_in_html() {
		let config = NavConfig::new(Brand::new("<Tools & Co>", "index.html"));
		let html = render_navbar(&config, "index.html", MenuState::Closed).render_to_string();
		assert!(html.contains("&lt;Tools &amp; Co&gt;"));
		assert!(!html.contains("<Tools"));
	}

	#[rstest]
	fn test_empty_item_list_renders_empty_list() {
		let config = NavConfig::new(Brand::new("B", "b.html"));
		let html = render_navbar(&config, "b.html", MenuState::Closed).render_to_string();
		assert!(html.contains(r#"<ul class="octopus-navbar-nav"></ul>"#));
	}
}
