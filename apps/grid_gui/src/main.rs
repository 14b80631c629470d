use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, bail, Context, Result};
use catalog_client::{
    config::{load_settings, normalize_base_url},
    CatalogClient, RecordFetcher,
};
use clap::Parser;
use crossbeam_channel::bounded;
use shared::domain::PageNumber;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::GridApp;

/// Desktop grid over the artwork catalog.
#[derive(Parser, Debug)]
struct Args {
    /// Page shown on startup
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Overrides the configured catalog base url
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings().context("failed to load settings")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let Some(start_page) = PageNumber::new(args.page) else {
        bail!("--page must be 1 or greater");
    };
    let base_url = match args.base_url {
        Some(url) => normalize_base_url(&url)?,
        None => settings.catalog_base_url,
    };
    tracing::info!(%base_url, page = start_page.get(), "starting artwork grid");

    let fetcher: Arc<dyn RecordFetcher> = Arc::new(CatalogClient::new(base_url.clone()));
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Artwork Grid")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Artwork Grid",
        options,
        Box::new(move |cc| {
            runtime::launch(cmd_rx, ui_tx, fetcher, cc.egui_ctx.clone());
            Ok(Box::new(GridApp::new(cmd_tx, ui_rx, start_page, base_url)))
        }),
    )
    .map_err(|err| anyhow!("artwork grid exited with an error: {err}"))
}
