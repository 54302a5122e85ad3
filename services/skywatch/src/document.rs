//! HTML document the single-page application boots from

use skywatch_app::shell::{mount_selector_for, MOUNT_META_NAME};

use crate::config::Config;

/// Render the shell document: an empty mount element plus the module loader.
///
/// Bundle names follow the cargo-leptos `output-name`: `{package}.js` and
/// `{package}.wasm` under `/pkg`.
pub fn render(config: &Config) -> String {
    let title = html_escape::encode_text(&config.server.title);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="{meta_name}" content="{mount_id}">
    <title>{title}</title>
    <link rel="modulepreload" href="/pkg/{package}.js">
</head>
<body style="margin: 0;">
    <div id="{mount_id}"></div>
    <noscript>{title} needs JavaScript and WebAssembly to run.</noscript>
    <script type="module">
        import init from '/pkg/{package}.js';
        init('/pkg/{package}.wasm');
    </script>
</body>
</html>"#,
        meta_name = MOUNT_META_NAME,
        title = title,
        package = config.shell.package,
        mount_id = config.shell.mount_id,
    )
}

/// Selector the frontend derives from the rendered document
pub fn mount_selector(config: &Config) -> String {
    mount_selector_for(Some(&config.shell.mount_id))
}
