mod app;
mod config;
mod effects;
mod logging;
mod summary;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use catalog_core::Msg;
use catalog_engine::EngineHandle;
use catalog_logging::{catalog_info, catalog_warn};

use app::HeadlessSession;
use config::{AppConfig, API_KEY_ENV, CONFIG_FILENAME};

/// Upper bound on waiting for the mounted page to finish loading.
const IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Mounts the configured address (or the first argument), waits for its data and
/// prints what the page shows.
pub fn run_app() -> anyhow::Result<()> {
    let mut config = AppConfig::load(Path::new(CONFIG_FILENAME))?
        .with_api_key_override(std::env::var(API_KEY_ENV).ok());
    if let Some(start_url) = std::env::args().nth(1) {
        config.start_url = start_url;
    }

    logging::initialize(
        config.log_destination,
        catalog_logging::parse_level(&config.log_level),
    );
    catalog_info!("Using service {}", config.base_url);
    if config.api_key.is_empty() {
        catalog_warn!("No API key configured; set {} or api_key in {}", API_KEY_ENV, CONFIG_FILENAME);
    }

    let engine = EngineHandle::new(&config.api_settings()).context("starting engine")?;
    let mut session = HeadlessSession::new(engine);
    session.dispatch(Msg::Mounted {
        href: config.start_url.clone(),
    });
    if !session.run_until_idle(IDLE_TIMEOUT) {
        catalog_warn!("Page did not settle within {:?}", IDLE_TIMEOUT);
    }

    for line in summary::summarize(&session.view()) {
        println!("{line}");
    }
    for path in session.history() {
        catalog_info!("Visited {}", path);
    }
    for notice in session.notices() {
        println!("notice: {notice}");
    }
    if let Some(text) = session.clipboard() {
        println!("clipboard: {text}");
    }
    Ok(())
}
