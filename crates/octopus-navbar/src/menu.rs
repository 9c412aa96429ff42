//! Mobile menu state machine.
//!
//! The off-canvas menu has two states. [`MenuState`] is owned by the
//! [`Navbar`](crate::Navbar) handle; the rendered list and toggle glyph are a
//! projection of it, never the other way round.
//!
//! ```text
//!            ToggleActivated
//!   Closed ──────────────────▶ Open
//!     ▲                         │
//!     └─────────────────────────┘
//!   ToggleActivated | OutsideClick | EscapePressed | LinkActivated
//! ```

use std::fmt;

/// Glyph shown on the toggle while the menu is closed.
pub const OPEN_GLYPH: &str = "☰";
/// Glyph shown on the toggle while the menu is open.
pub const CLOSE_GLYPH: &str = "✕";

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
	/// Panel hidden off-canvas.
	#[default]
	Closed,
	/// Panel slid in.
	Open,
}

/// Inputs that drive [`MenuState`] transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEvent {
	/// The toggle control was activated.
	ToggleActivated,
	/// A click landed outside both the menu and the toggle.
	OutsideClick,
	/// Escape was pressed.
	EscapePressed,
	/// A link inside the menu was activated.
	LinkActivated,
}

impl MenuState {
	/// Applies `event` and returns the next state.
	pub fn transition(self, event: MenuEvent) -> MenuState {
		match (self, event) {
			(MenuState::Closed, MenuEvent::ToggleActivated) => MenuState::Open,
			(MenuState::Open, MenuEvent::ToggleActivated) => MenuState::Closed,
			(
				MenuState::Open,
				MenuEvent::OutsideClick | MenuEvent::EscapePressed | MenuEvent::LinkActivated,
			) => MenuState::Closed,
			(MenuState::Closed, _) => MenuState::Closed,
		}
	}

	/// The opposite state.
	pub fn toggled(self) -> MenuState {
		self.transition(MenuEvent::ToggleActivated)
	}

	/// Returns true when the panel is shown.
	pub fn is_open(self) -> bool {
		self == MenuState::Open
	}

	/// Toggle glyph for this state.
	pub fn glyph(self) -> &'static str {
		match self {
			MenuState::Closed => OPEN_GLYPH,
			MenuState::Open => CLOSE_GLYPH,
		}
	}

	/// Value for the toggle's `aria-expanded` attribute.
	pub fn aria_expanded(self) -> &'static str {
		if self.is_open() { "true" } else { "false" }
	}
}

impl fmt::Display for MenuState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MenuState::Closed => write!(f, "closed"),
			MenuState::Open => write!(f, "open"),
		}
	}
}
