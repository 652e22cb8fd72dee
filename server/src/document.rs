//! Prerendered HTML document

use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use dioxus_ssr::Renderer;
use ggjc_site::{App, MOUNT_ROOT_ID};

use crate::config::Config;

/// Render the site's initial state (home, menu closed) into a full HTML
/// document.
///
/// The markup inside the mount root is a static snapshot for first paint and
/// for clients without WASM. It carries no hydration data: the client bundle
/// empties the root and mounts a fresh app in its place.
pub fn render_document(config: &Config) -> String {
    let mut vdom = VirtualDom::new(App);
    vdom.rebuild_in_place();

    // Plain markup; hydration ids would promise state the client never reads
    let mut renderer = Renderer::new();
    renderer.pre_render = false;

    let html_body = renderer.render(&vdom);
    let title = &config.title;
    let bundle = &config.bundle_name;

    tracing::debug!(bytes = html_body.len(), "Prerendered page shell");

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" href="/assets/LogoGGJC.svg">
    <link rel="preload" href="/pkg/{bundle}.js" as="script" crossorigin="anonymous">
</head>
<body>
    <div id="{MOUNT_ROOT_ID}" data-prerendered>
        {html_body}
    </div>
    <script type="module">
        import init from "/pkg/{bundle}.js";
        init("/pkg/{bundle}_bg.wasm");
    </script>
</body>
</html>"#
    )
}

/// Write the prerendered document as `index.html` under `dir`
pub fn export(dir: &Path, document: &str) -> ggjc_core::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join("index.html");
    std::fs::write(&path, document)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_contains_home_shell() {
        let html = render_document(&Config::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Global Game Jam Cochabamba 2026</title>"));
        assert!(html.contains("GLOBAL GAME JAM"));
        assert!(html.contains("data-view=\"home\""));
    }

    #[test]
    fn test_prerender_is_static_markup_inside_mount_root() {
        let html = render_document(&Config::default());

        let root = format!("<div id=\"{MOUNT_ROOT_ID}\" data-prerendered>");
        assert_eq!(html.matches(&root).count(), 1);
        let root_at = html.find(&root).unwrap();
        assert!(html[root_at..].contains("class=\"navbar\""));

        // One copy of the shell, and nothing the client could mistake for
        // hydration state
        assert_eq!(html.matches("class=\"navbar\"").count(), 1);
        assert!(!html.contains("data-node-hydration"));
        assert!(!html.contains("initial_dioxus_hydration_data"));
    }

    #[test]
    fn test_document_references_configured_bundle() {
        let config = Config {
            bundle_name: "client".to_string(),
            ..Config::default()
        };
        let html = render_document(&config);
        assert!(html.contains("import init from \"/pkg/client.js\";"));
        assert!(html.contains("init(\"/pkg/client_bg.wasm\");"));
    }

    #[test]
    fn test_export_writes_index() {
        let dir = std::env::temp_dir().join(format!("ggjc-export-{}", std::process::id()));
        let path = export(&dir, "<!DOCTYPE html>").unwrap();

        assert_eq!(path, dir.join("index.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!DOCTYPE html>");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
