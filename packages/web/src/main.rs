use dioxus::prelude::*;

use feed::{FeedConfig, SetupError};
use ui::FeedPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../feed.toml");

fn main() {
    dioxus::logger::initialize_default();

    // Without its mount point the page stays inert.
    if let Err(e) = check_mount_point() {
        tracing::error!("Initialization failed: {e}");
        return;
    }

    dioxus::launch(App);
}

fn load_config() -> FeedConfig {
    FeedConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("{e}; falling back to default {}", FeedConfig::filename());
        FeedConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn check_mount_point() -> Result<(), SetupError> {
    /// Element id the app is mounted into.
    const MOUNT_POINT: &str = "main";

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(SetupError::NoDocument)?;
    document
        .get_element_by_id(MOUNT_POINT)
        .map(|_| ())
        .ok_or_else(|| SetupError::MissingMountPoint(MOUNT_POINT.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn check_mount_point() -> Result<(), SetupError> {
    Ok(())
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        FeedPage {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = FeedConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config, load_config());
    }
}
