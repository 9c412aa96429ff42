//! Logging macros shared by the navbar modules.
//!
//! The same call sites work on both targets:
//!
//! | Macro | WASM | Non-WASM |
//! |-------|------|----------|
//! | `debug_log!` | `console.debug` (`debug-log` feature) | `tracing::debug!` (`debug-log` feature) |
//! | `info_log!` | `console.info` (debug builds) | `tracing::info!` |
//! | `warn_log!` | `console.warn` (debug builds) | `tracing::warn!` |
//! | `error_log!` | `console.error` | `tracing::error!` |
//!
//! Browser console output is prefixed with `[octopus-navbar]`. Native output is
//! emitted under the `octopus_navbar` tracing target, so a subscriber can filter it
//! with `RUST_LOG=octopus_navbar=debug`.
//!
//! ## Example
//!
//! ```ignore
//! info_log!("navbar mounted with {} items", config.nav_items.len());
//! debug_log!("menu {:?} -> {:?}", before, after);
//! ```

/// Console prefix for browser output.
#[cfg(target_arch = "wasm32")]
pub(crate) const CONSOLE_PREFIX: &str = "[octopus-navbar]";

#[cfg(all(feature = "debug-log", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		web_sys::console::debug_1(
			&format!("{} {}", $crate::logging::CONSOLE_PREFIX, format_args!($($arg)*)).into(),
		);
	}};
}

#[cfg(all(feature = "debug-log", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		tracing::debug!(target: "octopus_navbar", $($arg)*);
	}};
}

#[cfg(not(feature = "debug-log"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

#[cfg(target_arch = "wasm32")]
macro_rules! info_log {
	($($arg:tt)*) => {{
		if cfg!(debug_assertions) {
			web_sys::console::info_1(
				&format!("{} {}", $crate::logging::CONSOLE_PREFIX, format_args!($($arg)*)).into(),
			);
		}
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		tracing::info!(target: "octopus_navbar", $($arg)*);
	}};
}

#[cfg(target_arch = "wasm32")]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		if cfg!(debug_assertions) {
			web_sys::console::warn_1(
				&format!("{} {}", $crate::logging::CONSOLE_PREFIX, format_args!($($arg)*)).into(),
			);
		}
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		tracing::warn!(target: "octopus_navbar", $($arg)*);
	}};
}

// Not gated on debug_assertions.
#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
	($($arg:tt)*) => {{
		web_sys::console::error_1(
			&format!("{} {}", $crate::logging::CONSOLE_PREFIX, format_args!($($arg)*)).into(),
		);
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		tracing::error!(target: "octopus_navbar", $($arg)*);
	}};
}
