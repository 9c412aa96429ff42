//! Current page detection.

/// Trailing segment of `path`, or `landing_page` when the path ends in `/` or is empty.
///
/// No decoding or case folding is applied; the result is compared verbatim
/// against item links.
pub fn page_from_path(path: &str, landing_page: &str) -> String {
	path.rsplit('/')
		.next()
		.filter(|segment| !segment.is_empty())
		.unwrap_or(landing_page)
		.to_string()
}

/// Page name of the browser's current location.
#[cfg(target_arch = "wasm32")]
pub fn current_page(landing_page: &str) -> crate::Result<String> {
	let window = web_sys::window().ok_or(crate::NavbarError::NoWindow)?;
	let path = window.location().pathname()?;
	Ok(page_from_path(&path, landing_page))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/tools/index-3.html", "index-3.html")]
	#[case("index-2.html", "index-2.html")]
	#[case("/", "index.html")]
	#[case("/tools/", "index.html")]
	#[case("", "index.html")]
	#[case("/a/b/Index-1.HTML", "Index-1.HTML")]
	fn test_page_from_path(#[case] path: &str, #[case] expected: &str) {
		assert_eq!(page_from_path(path, "index.html"), expected);
	}

	#[rstest]
	fn test_custom_landing_page() {
		assert_eq!(page_from_path("/docs/", "home.html"), "home.html");
	}
}
