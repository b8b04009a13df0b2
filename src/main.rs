mod config;
mod labels;
mod loader;
mod progress;
mod source;
mod ui;
mod view;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::loader::{LoadOutcome, LoadRequest};
use crate::source::ProgressClient;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("progressboard=info".parse().unwrap()),
        )
        .init();

    tracing::info!("progressboard starting...");

    // Load configuration
    let config = Config::load(Config::default_path());
    tracing::info!("Config: {:?}", config);

    let client = ProgressClient::new(&config.source).expect("Failed to build HTTP client");
    tracing::info!("Progress source: {}", config.source.url);

    // UI → Loader channel
    let (request_tx, request_rx) = mpsc::unbounded_channel::<LoadRequest>();

    // Loader → UI channel
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<LoadOutcome>();

    // The first fetch is issued before the window opens
    if request_tx.send(LoadRequest::Fetch).is_err() {
        tracing::error!("Loader request channel closed before start");
    }

    // Store channel ends and config in globals so the Dioxus app can grab them
    UI_REQUEST_TX.set(std::sync::Mutex::new(Some(request_tx))).ok();
    UI_OUTCOME_RX.set(std::sync::Mutex::new(Some(outcome_rx))).ok();
    UI_CONFIG.set(config.clone()).ok();

    // Start loader in a tokio runtime on a separate thread
    let labels = config.ui.language.labels();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(loader::run_loader(request_rx, outcome_tx, client, labels));
    });
    tracing::info!("Loader thread started");

    // Launch Dioxus desktop app (blocks)
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::tao::window::WindowBuilder::new()
                    .with_title(config.ui.fallback_title())
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(
                        config.ui.window_width,
                        config.ui.window_height,
                    )),
            ),
        )
        .launch(ui::App);
}

/// One-shot global to pass the loader request sender into the Dioxus app.
static UI_REQUEST_TX: std::sync::OnceLock<std::sync::Mutex<Option<mpsc::UnboundedSender<LoadRequest>>>> =
    std::sync::OnceLock::new();

/// One-shot global to pass the loader outcome receiver into the Dioxus app.
static UI_OUTCOME_RX: std::sync::OnceLock<std::sync::Mutex<Option<mpsc::UnboundedReceiver<LoadOutcome>>>> =
    std::sync::OnceLock::new();

/// Global config for UI access.
static UI_CONFIG: std::sync::OnceLock<Config> = std::sync::OnceLock::new();

/// Take the loader request sender (can only be called once).
pub fn take_request_tx() -> Option<mpsc::UnboundedSender<LoadRequest>> {
    UI_REQUEST_TX.get()?.lock().ok()?.take()
}

/// Take the loader outcome receiver (can only be called once).
pub fn take_outcome_rx() -> Option<mpsc::UnboundedReceiver<LoadOutcome>> {
    UI_OUTCOME_RX.get()?.lock().ok()?.take()
}

/// Get the global config.
pub fn get_config() -> &'static Config {
    UI_CONFIG.get().expect("Config not initialized")
}
