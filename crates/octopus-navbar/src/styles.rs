//! Style injection.
//!
//! Two `<style>` elements are injected into `<head>`, each identified by a fixed
//! id and added at most once: the component styles ([`NAVBAR_STYLE_ID`]) and the
//! body offset that keeps page content clear of the fixed bar
//! ([`BODY_OFFSET_STYLE_ID`]). An element already present under either id is left
//! untouched, whoever inserted it.

use crate::config::NavbarOptions;
use crate::dom::DocumentHost;
use crate::error::Result;

/// Id of the component style element.
pub const NAVBAR_STYLE_ID: &str = "octopus-navbar-styles";
/// Id of the body offset style element.
pub const BODY_OFFSET_STYLE_ID: &str = "octopus-body-padding";

/// Breakpoint-independent component styles.
const BASE_CSS: &str = r#"
.octopus-navbar {
	position: fixed;
	top: 0;
	left: 0;
	width: 100%;
	background: rgba(10, 10, 10, 0.95);
	backdrop-filter: blur(20px);
	border-bottom: 1px solid rgba(255, 255, 255, 0.1);
	z-index: 1000;
	padding: 15px 0;
	animation: slideDown 0.6s ease-out;
	box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
}

@keyframes slideDown {
	from { transform: translateY(-100%); opacity: 0; }
	to { transform: translateY(0); opacity: 1; }
}

.octopus-navbar-container {
	max-width: 1200px;
	margin: 0 auto;
	display: flex;
	justify-content: space-between;
	align-items: center;
	padding: 0 20px;
}

.octopus-navbar-brand {
	font-size: 1.2rem;
	font-weight: 700;
	color: #00f5ff;
	text-decoration: none;
	display: flex;
	align-items: center;
	gap: 8px;
	transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
	position: relative;
	animation: brandGlow 3s ease-in-out infinite;
}

@keyframes brandGlow {
	0%, 100% { text-shadow: 0 0 10px rgba(0, 245, 255, 0.3); }
	50% { text-shadow: 0 0 20px rgba(0, 245, 255, 0.8), 0 0 30px rgba(255, 0, 255, 0.3); }
}

.octopus-navbar-brand:hover {
	transform: scale(1.1) rotate(5deg);
	text-shadow: 0 0 25px rgba(0, 245, 255, 1), 0 0 35px rgba(255, 0, 255, 0.5);
	animation: brandBounce 0.6s ease;
}

@keyframes brandBounce {
	0%, 20%, 50%, 80%, 100% { transform: scale(1.1) rotate(5deg) translateY(0); }
	40% { transform: scale(1.15) rotate(5deg) translateY(-5px); }
	60% { transform: scale(1.05) rotate(5deg) translateY(-2px); }
}

.octopus-navbar-nav {
	display: flex;
	list-style: none;
	gap: 30px;
	margin: 0;
	padding: 0;
}

.octopus-navbar-nav a {
	color: #a0a0a0;
	text-decoration: none;
	font-weight: 500;
	font-size: 0.9rem;
	transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
	padding: 8px 16px;
	border-radius: 8px;
	position: relative;
	overflow: hidden;
}

.octopus-navbar-nav a::before {
	content: '';
	position: absolute;
	top: 0;
	left: -100%;
	width: 100%;
	height: 100%;
	background: linear-gradient(90deg, transparent, rgba(0, 245, 255, 0.2), transparent);
	transition: left 0.6s ease;
	pointer-events: none;
}

.octopus-navbar-nav a:hover::before {
	left: 100%;
}

.octopus-navbar-nav a:hover {
	color: #00f5ff;
	background: rgba(0, 245, 255, 0.1);
	transform: translateY(-3px) scale(1.05);
	box-shadow: 0 8px 25px rgba(0, 245, 255, 0.3);
	text-shadow: 0 0 10px rgba(0, 245, 255, 0.5);
}

.octopus-navbar-nav a.active {
	color: #00f5ff;
	background: rgba(0, 245, 255, 0.15);
	box-shadow: 0 0 15px rgba(0, 245, 255, 0.3);
	animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
	0%, 100% { box-shadow: 0 0 15px rgba(0, 245, 255, 0.3); }
	50% { box-shadow: 0 0 25px rgba(0, 245, 255, 0.6); }
}

.octopus-navbar-toggle {
	display: none;
	background: none;
	border: none;
	color: #ffffff;
	font-size: 1.5rem;
	cursor: pointer;
	transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
	border-radius: 50%;
	width: 40px;
	height: 40px;
	align-items: center;
	justify-content: center;
}

.octopus-navbar-toggle:hover {
	color: #00f5ff;
	transform: scale(1.2) rotate(180deg);
	background: rgba(0, 245, 255, 0.1);
	box-shadow: 0 0 15px rgba(0, 245, 255, 0.3);
}

.octopus-navbar-toggle.active {
	transform: rotate(90deg);
	color: #ff00ff;
}
"#;

/// Full component style sheet for `options`.
pub fn navbar_css(options: &NavbarOptions) -> String {
	format!(
		"{base}
@media (max-width: {breakpoint}px) {{
	.octopus-navbar-nav {{
		position: fixed;
		top: {top}px;
		left: 0;
		width: 100%;
		background: rgba(10, 10, 10, 0.98);
		backdrop-filter: blur(20px);
		flex-direction: column;
		padding: 20px;
		gap: 15px;
		transform: translateX(-100%);
		transition: transform 0.3s ease;
		border-bottom: 1px solid rgba(255, 255, 255, 0.1);
		box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
	}}

	.octopus-navbar-nav.active {{
		transform: translateX(0);
	}}

	.octopus-navbar-toggle {{
		display: flex;
	}}

	.octopus-navbar-nav a {{
		width: 100%;
		text-align: center;
		padding: 12px 20px;
		border-radius: 12px;
	}}
}}
",
		base = BASE_CSS,
		breakpoint = options.breakpoint_px,
		top = options.mobile_offset_px,
	)
}

/// Body padding that keeps content below the bar.
pub fn body_offset_css(options: &NavbarOptions) -> String {
	format!(
		"
body {{
	padding-top: {desktop}px !important;
}}

@media (max-width: {breakpoint}px) {{
	body {{
		padding-top: {mobile}px !important;
	}}
}}
",
		desktop = options.desktop_offset_px,
		mobile = options.mobile_offset_px,
		breakpoint = options.breakpoint_px,
	)
}

/// Injects the component styles unless already present. Returns whether it injected.
pub fn ensure_styles<H: DocumentHost + ?Sized>(host: &mut H, options: &NavbarOptions) -> Result<bool> {
	ensure_style(host, NAVBAR_STYLE_ID, &navbar_css(options))
}

/// Injects the body offset unless already present. Returns whether it injected.
pub fn ensure_body_offset<H: DocumentHost + ?Sized>(
	host: &mut H,
	options: &NavbarOptions,
) -> Result<bool> {
	ensure_style(host, BODY_OFFSET_STYLE_ID, &body_offset_css(options))
}

/// Removes both style elements. Returns how many were present.
pub fn remove_styles<H: DocumentHost + ?Sized>(host: &mut H) -> usize {
	[NAVBAR_STYLE_ID, BODY_OFFSET_STYLE_ID]
		.into_iter()
		.filter(|id| host.remove_element_by_id(id))
		.count()
}

fn ensure_style<H: DocumentHost + ?Sized>(host: &mut H, id: &str, css: &str) -> Result<bool> {
	if host.has_element_id(id) {
		debug_log!("style #{} already present, skipping", id);
		return Ok(false);
	}
	host.append_style(id, css)?;
	debug_log!("injected style #{}", id);
	Ok(true)
}
