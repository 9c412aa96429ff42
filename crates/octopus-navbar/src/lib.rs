//! Octopus Navbar - fixed-position navigation bar for WASM pages
//!
//! Injects a navigation bar at the top of a page, highlights the link for the
//! current page, and manages a mobile off-canvas menu behind a toggle button.
//!
//! ## Architecture
//!
//! - [`config`]: brand, items, shallow-merge patches and layout options
//! - [`node`]: element tree produced by the renderer
//! - [`view`]: pure navbar rendering and replace-on-rebuild mounting
//! - [`styles`]: component and body-offset style sheets, injected once per id
//! - [`menu`]: open/closed state machine for the mobile menu
//! - [`events`]: delegated event classification
//! - [`dom`]: document abstraction ([`MemoryDocument`], and `BrowserDocument` on WASM)
//! - [`navbar`]: the [`Navbar`] handle that owns state and exposes every mutation
//! - `browser`: WASM entry points (`mount`, `mount_when_ready`, `toggleNavbar`)
//!
//! Rendering is a pure function of the handle's state. Structural changes
//! (config, items) rebuild the subtree; the active link and the menu state are
//! patched in place. Listeners are delegated to the document, so rebuilds never
//! re-attach anything.
//!
//! ## Example
//!
//! ```
//! use octopus_navbar::{MemoryDocument, Navbar, NavConfig, NavItem, NavbarOptions};
//!
//! let mut navbar = Navbar::mount(
//!     MemoryDocument::new(),
//!     NavConfig::default(),
//!     NavbarOptions::default(),
//!     "index-3.html",
//! )?;
//!
//! navbar.add_nav_item(NavItem::new("index-6.html", "📊 图表", "charts"), None)?;
//! navbar.set_active_page("index-6.html");
//! assert_eq!(navbar.host().nav_links().len(), 7);
//! # Ok::<(), octopus_navbar::NavbarError>(())
//! ```
//!
//! In the browser, use `browser::mount_when_ready` instead of constructing a
//! [`Navbar`] directly.

#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod location;
pub mod menu;
pub mod navbar;
pub mod node;
pub mod styles;
pub mod view;

// Browser entry points
#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use config::{Brand, NavConfig, NavConfigPatch, NavItem, NavbarOptions};
#[cfg(target_arch = "wasm32")]
pub use dom::BrowserDocument;
pub use dom::{DocumentHost, MemoryDocument, toggle_rendered_menu};
pub use error::{NavbarError, Result};
pub use events::{ClickRegion, UiEvent};
pub use menu::{MenuEvent, MenuState};
pub use navbar::{Navbar, Teardown};
pub use view::render_navbar;
