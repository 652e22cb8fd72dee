//! Browser viewport side effects

/// Reset the document scroll offset to the top.
///
/// Only the WASM client has a viewport; prerendering and tests skip it.
#[cfg(feature = "web")]
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(not(feature = "web"))]
pub fn scroll_to_top() {}

/// Drop the static markup the host prerendered into the mount root.
///
/// The served document is plain markup, not hydration data, so the client
/// has to start from an empty root or the live app lands next to the
/// static copy.
#[cfg(feature = "web")]
pub fn clear_mount_root() {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(crate::MOUNT_ROOT_ID));

    if let Some(root) = root {
        root.set_inner_html("");
    }
}

#[cfg(not(feature = "web"))]
pub fn clear_mount_root() {}
