//! Binary entry point: read settings, start logging, load the static content
//! and drive the Ratatui event loop until the user exits.
use std::sync::Arc;

use anyhow::Context;
use health_hub::state::UiChromeState;
use health_hub::{run_app, seed_catalog, App, AppShell, Settings, SiteContent};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    let _log_guard = health_hub::logging::init(&settings)?;

    let catalog = Arc::new(seed_catalog().context("invalid tip catalog")?);
    info!(
        categories = catalog.categories().len(),
        tips = catalog.tip_count(),
        theme = %settings.theme,
        "starting health hub"
    );

    let shell = AppShell::with_chrome(catalog, UiChromeState::with_theme(settings.theme));
    let mut app = App::new(shell, SiteContent::seed(), settings.compact_width);
    run_app(&mut app)
}
