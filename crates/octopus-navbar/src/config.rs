//! Navbar configuration.
//!
//! [`NavConfig`] holds the brand link and the ordered navigation items.
//! [`NavConfigPatch`] is a top-level partial that
//! [`Navbar::update_config`](crate::Navbar::update_config) merges shallowly.
//! [`NavbarOptions`] carries the layout constants used by the style sheets and the
//! landing-page fallback used when deriving the current page.
//!
//! All three types deserialize from JSON, so a host page can embed its
//! configuration:
//!
//! ```
//! use octopus_navbar::NavConfig;
//!
//! let config = NavConfig::from_json(r#"{
//!     "brand": { "text": "Tools", "href": "index.html" },
//!     "navItems": [{ "href": "a.html", "text": "A", "id": "a" }]
//! }"#).unwrap();
//! assert_eq!(config.nav_items.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Brand link shown at the left of the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
	/// Display text.
	pub text: String,
	/// Link target.
	pub href: String,
}

impl Brand {
	/// Creates a brand link.
	pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			href: href.into(),
		}
	}
}

/// A single navigation entry.
///
/// `id` is expected to be unique among the current items, but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
	/// Link target, compared verbatim against the current page.
	pub href: String,
	/// Display text.
	pub text: String,
	/// Identifier used by [`Navbar::remove_nav_item`](crate::Navbar::remove_nav_item).
	pub id: String,
}

impl NavItem {
	/// Creates a navigation entry.
	pub fn new(href: impl Into<String>, text: impl Into<String>, id: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			text: text.into(),
			id: id.into(),
		}
	}
}

/// Brand metadata plus the ordered item list. Insertion order is render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
	/// Brand link.
	pub brand: Brand,
	/// Navigation items in render order.
	pub nav_items: Vec<NavItem>,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			brand: Brand::new("🐙 章鱼工具集", "index.html"),
			nav_items: vec![
				NavItem::new("index.html", "🏠 首页", "home"),
				NavItem::new("index-1.html", "📝 文本分割器", "text-splitter"),
				NavItem::new("index-2.html", "🔢 字数统计器", "word-counter"),
				NavItem::new("index-3.html", "📺 智能提词器", "teleprompter"),
				NavItem::new("index-4.html", "💰 ROI计算器", "roi-calculator"),
				NavItem::new("index-5.html", "🎵 音频播放器", "audio-player"),
			],
		}
	}
}

impl NavConfig {
	/// Creates a configuration with the given brand and no items.
	pub fn new(brand: Brand) -> Self {
		Self {
			brand,
			nav_items: Vec::new(),
		}
	}

	/// Appends an item (builder form).
	pub fn item(mut self, item: NavItem) -> Self {
		self.nav_items.push(item);
		self
	}

	/// Parses a configuration from JSON. Missing top-level keys take the defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Merges `patch` over this configuration, top-level keys only.
	///
	/// A present `nav_items` replaces the whole list; entries are never merged
	/// one by one.
	pub fn merge(&mut self, patch: NavConfigPatch) {
		if let Some(brand) = patch.brand {
			self.brand = brand;
		}
		if let Some(nav_items) = patch.nav_items {
			self.nav_items = nav_items;
		}
	}
}

/// Top-level partial configuration for shallow merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavConfigPatch {
	/// Replacement brand.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub brand: Option<Brand>,
	/// Replacement item list.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nav_items: Option<Vec<NavItem>>,
}

impl NavConfigPatch {
	/// Creates an empty patch.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the replacement brand.
	pub fn brand(mut self, brand: Brand) -> Self {
		self.brand = Some(brand);
		self
	}

	/// Sets the replacement item list.
	pub fn nav_items(mut self, nav_items: Vec<NavItem>) -> Self {
		self.nav_items = Some(nav_items);
		self
	}

	/// Parses a patch from JSON.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}
}

/// Layout constants and page-detection fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavbarOptions {
	/// Viewport width (CSS px) at or below which the list becomes an off-canvas panel.
	pub breakpoint_px: u32,
	/// Body top padding above the breakpoint.
	pub desktop_offset_px: u32,
	/// Body top padding at or below the breakpoint; also the panel's top edge.
	pub mobile_offset_px: u32,
	/// Page name used when the location path has no trailing segment.
	pub landing_page: String,
}

impl Default for NavbarOptions {
	fn default() -> Self {
		Self {
			breakpoint_px: 768,
			desktop_offset_px: 80,
			mobile_offset_px: 70,
			landing_page: "index.html".to_string(),
		}
	}
}

impl NavbarOptions {
	/// Creates the default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the responsive breakpoint.
	pub fn breakpoint(mut self, px: u32) -> Self {
		self.breakpoint_px = px;
		self
	}

	/// Sets the desktop and mobile body offsets.
	pub fn offsets(mut self, desktop_px: u32, mobile_px: u32) -> Self {
		self.desktop_offset_px = desktop_px;
		self.mobile_offset_px = mobile_px;
		self
	}

	/// Sets the landing page name.
	pub fn landing_page(mut self, page: impl Into<String>) -> Self {
		self.landing_page = page.into();
		self
	}

	/// Parses options from JSON. Missing keys take the defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}
}
