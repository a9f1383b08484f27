use dioxus::prelude::*;

mod config;
mod format_helpers;
mod routes;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    let loaded = config::load_config();
    let level = config::log_level();

    if let Err(err) = dioxus::logger::init(level.unwrap_or(tracing::Level::INFO)) {
        eprintln!("[logger] already initialised: {err}");
    }
    if let Err(err) = loaded {
        tracing::warn!(%err, "config.toml rejected, running with defaults");
    }
    if level.is_none() {
        tracing::warn!(
            level = %config::config().logging.level,
            "unknown log level, using info"
        );
    }
    tracing::info!(
        platform = client_platform(),
        flags = ?config::feature_flags(),
        "starting Food for All"
    );

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| config::feature_flags().clone());

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
