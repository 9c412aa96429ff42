//! The navbar handle.
//!
//! [`Navbar`] owns the configuration, the current page and the menu state, plus
//! the [`DocumentHost`] it renders into. Every mutation goes through it:
//!
//! | Operation | Effect on the document |
//! |-----------|------------------------|
//! | [`mount`](Navbar::mount) | inject styles, render, inject body offset |
//! | [`update_config`](Navbar::update_config) | shallow merge, full rebuild |
//! | [`add_nav_item`](Navbar::add_nav_item) | insert or append, full rebuild |
//! | [`remove_nav_item`](Navbar::remove_nav_item) | filter by id, full rebuild |
//! | [`set_active_page`](Navbar::set_active_page) | patch link classes in place |
//! | [`handle_event`](Navbar::handle_event) | menu transition, patch in place |
//! | [`destroy`](Navbar::destroy) | remove subtree and both styles |
//!
//! Rebuilds render from the handle's state, so an open menu stays open across
//! them.

use crate::config::{NavConfig, NavConfigPatch, NavItem, NavbarOptions};
use crate::dom::DocumentHost;
use crate::error::Result;
use crate::events::{UiEvent, classify};
use crate::menu::{MenuEvent, MenuState};
use crate::styles;
use crate::view::{self, NAVBAR_CLASS};

/// What [`Navbar::destroy`] found and removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Teardown {
	/// Whether a navbar subtree was present.
	pub navbar_removed: bool,
	/// Number of style elements removed (0 to 2).
	pub styles_removed: usize,
}

impl Teardown {
	/// Returns true when nothing was left to remove.
	pub fn is_empty(&self) -> bool {
		!self.navbar_removed && self.styles_removed == 0
	}
}

/// A mounted navigation bar.
#[derive(Debug)]
pub struct Navbar<H: DocumentHost> {
	host: H,
	config: NavConfig,
	options: NavbarOptions,
	current_page: String,
	menu: MenuState,
}

impl<H: DocumentHost> Navbar<H> {
	/// Mounts a navbar into `host`.
	///
	/// Styles are injected first, then any existing navbar is replaced, then the
	/// body offset is injected. Fails with
	/// [`NavbarError::NoBody`](crate::NavbarError::NoBody) when the document has no
	/// body yet; wait for the ready signal before mounting.
	pub fn mount(
		host: H,
		config: NavConfig,
		options: NavbarOptions,
		current_page: impl Into<String>,
	) -> Result<Self> {
		let mut navbar = Self {
			host,
			config,
			options,
			current_page: current_page.into(),
			menu: MenuState::Closed,
		};
		styles::ensure_styles(&mut navbar.host, &navbar.options)
			.and_then(|_| navbar.rebuild())
			.and_then(|()| styles::ensure_body_offset(&mut navbar.host, &navbar.options))
			.inspect_err(|e| error_log!("navbar mount failed: {}", e))?;
		info_log!(
			"navbar mounted: {} items, current page {:?}",
			navbar.config.nav_items.len(),
			navbar.current_page
		);
		Ok(navbar)
	}

	/// Shallow-merges `patch` over the configuration and rebuilds.
	///
	/// A patch carrying `nav_items` replaces the whole list.
	pub fn update_config(&mut self, patch: NavConfigPatch) -> Result<()> {
		self.config.merge(patch);
		self.rebuild()
	}

	/// Inserts `item` at `index`, or appends it when `index` is `None` or past
	/// the end. Ids are not checked for uniqueness.
	pub fn add_nav_item(&mut self, item: NavItem, index: Option<usize>) -> Result<()> {
		let len = self.config.nav_items.len();
		let at = index.map_or(len, |i| i.min(len));
		self.config.nav_items.insert(at, item);
		self.rebuild()
	}

	/// Removes every item whose id equals `id` and rebuilds. Returns how many were
	/// removed; zero still rebuilds.
	pub fn remove_nav_item(&mut self, id: &str) -> Result<usize> {
		let before = self.config.nav_items.len();
		self.config.nav_items.retain(|item| item.id != id);
		let removed = before - self.config.nav_items.len();
		self.rebuild()?;
		Ok(removed)
	}

	/// Makes `href` the current page and patches the rendered links in place,
	/// without a rebuild. Returns how many links are now active.
	pub fn set_active_page(&mut self, href: impl Into<String>) -> usize {
		self.current_page = href.into();
		let active = self.host.sync_active_links(&self.current_page);
		debug_log!("active page {:?}: {} link(s)", self.current_page, active);
		active
	}

	/// Feeds a located user interaction to the menu. Returns the resulting state.
	pub fn handle_event(&mut self, event: &UiEvent) -> MenuState {
		match classify(event) {
			Some(menu_event) => self.dispatch(menu_event),
			None => {
				self.adopt_rendered_menu();
				self.menu
			}
		}
	}

	/// Applies a menu event and projects the new state. Returns the resulting state.
	///
	/// The transition starts from the rendered menu, so a flip made through
	/// [`toggle_rendered_menu`](crate::dom::toggle_rendered_menu) is adopted first.
	/// Without a rendered navbar the event is dropped and the state is unchanged.
	pub fn dispatch(&mut self, event: MenuEvent) -> MenuState {
		if !self.adopt_rendered_menu() {
			debug_log!("no rendered menu, dropping {:?}", event);
			return self.menu;
		}
		let next = self.menu.transition(event);
		if next != self.menu && self.host.apply_menu_state(next) {
			debug_log!("menu {} -> {} on {:?}", self.menu, next, event);
			self.menu = next;
		}
		self.menu
	}

	/// Same as activating the toggle control.
	pub fn toggle_menu(&mut self) -> MenuState {
		self.dispatch(MenuEvent::ToggleActivated)
	}

	/// Removes the navbar subtree and both style elements. Safe to call repeatedly.
	///
	/// The menu resets to closed. A later mutation renders the subtree again
	/// without styles; mount a new handle to restore the full output.
	pub fn destroy(&mut self) -> Teardown {
		let teardown = Teardown {
			navbar_removed: self.host.remove_by_class(NAVBAR_CLASS) > 0,
			styles_removed: styles::remove_styles(&mut self.host),
		};
		self.menu = MenuState::Closed;
		if teardown.is_empty() {
			debug_log!("destroy: nothing to remove");
		} else {
			info_log!("navbar destroyed: {:?}", teardown);
		}
		teardown
	}

	/// Current configuration.
	pub fn config(&self) -> &NavConfig {
		&self.config
	}

	/// Layout options.
	pub fn options(&self) -> &NavbarOptions {
		&self.options
	}

	/// Page compared against item links.
	pub fn current_page(&self) -> &str {
		&self.current_page
	}

	/// Menu state.
	pub fn menu_state(&self) -> MenuState {
		self.menu
	}

	/// The hosting document.
	pub fn host(&self) -> &H {
		&self.host
	}

	/// The hosting document, mutably.
	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	/// Gives the hosting document back, leaving whatever is rendered in place.
	pub fn into_host(self) -> H {
		self.host
	}

	/// Takes the menu state from the document. False when no menu is rendered.
	fn adopt_rendered_menu(&mut self) -> bool {
		let Some(rendered) = self.host.rendered_menu_state() else {
			return false;
		};
		if rendered != self.menu {
			debug_log!("adopting rendered menu state {}", rendered);
			self.menu = rendered;
		}
		true
	}

	fn rebuild(&mut self) -> Result<()> {
		let tree = view::render_navbar(&self.config, &self.current_page, self.menu);
		view::mount(&mut self.host, &tree)?;
		debug_log!("navbar rendered with {} items", self.config.nav_items.len());
		Ok(())
	}
}
