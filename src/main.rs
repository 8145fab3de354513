//! Wiring & DI. Entry point: load config, pick adapters, dispatch the command line.
//! No business logic here; sessions and rendering live in the library.

use clap::Parser;
use naborly::adapters::catalog::{BuiltinCatalog, JsonFileCatalog};
use naborly::adapters::clock::SystemClock;
use naborly::adapters::ui::cli::{
    Cli, Command, ShowOptions, render_section, resolve_feed_limit,
};
use naborly::adapters::ui::tui::TuiInputPort;
use naborly::ports::{CatalogPort, ClockPort, InputPort};
use naborly::shared::config::AppConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = AppConfig::load();
    let cfg = loaded.as_ref().map_or_else(|_| AppConfig::default(), AppConfig::clone);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.log_level_or_default())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = &loaded {
        warn!(error = %e, "ignoring invalid configuration");
    }

    // --- Community data: --data flag, then NABORLY_DATA_FILE, then built-in tables ---
    let data_file = cli
        .data
        .clone()
        .or_else(|| cfg.data_file.as_deref().map(PathBuf::from));
    let catalog: Box<dyn CatalogPort> = match &data_file {
        Some(path) => {
            info!(path = %path.display(), "using community data file");
            Box::new(JsonFileCatalog::new(path))
        }
        None => Box::new(BuiltinCatalog),
    };
    let mut community = catalog
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("failed to load community data: {}", e))?;
    if let Some(region) = cfg.region_name.as_deref().filter(|r| !r.trim().is_empty()) {
        community.region_name = region.trim().to_string();
    }
    if community.locations.is_empty() {
        warn!("community data has no map locations");
    }

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    match cli.command {
        Some(Command::Show {
            section,
            types,
            limit,
        }) => {
            let opts = ShowOptions {
                types,
                feed_limit: resolve_feed_limit(limit, cfg.feed_limit_or_default()),
            };
            let text = render_section(section, &community, clock, &opts)
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            print!("{}", text);
        }
        Some(Command::Run) | None => {
            naborly::adapters::ui::init_ui(
                &community.region_name,
                cfg.show_banner_or_default() && !cli.no_banner,
            );
            let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
                community,
                clock,
                cfg.feed_limit_or_default(),
                cfg.default_user_or_default(),
            ));
            input_port
                .run()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
        }
    }

    Ok(())
}
