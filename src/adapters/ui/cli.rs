//! Command-line surface. `naborly` starts the interactive board; `naborly show <section>`
//! prints one section and exits.

use super::render;
use crate::domain::{Community, DomainError};
use crate::ports::ClockPort;
use crate::usecases::{Session, location_filter};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "naborly")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Neighbourhood board: local map, news, directory, utilities and a community feed")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON data file to use instead of the built-in tables
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive session (default)
    Run,

    /// Print one section and exit
    Show {
        section: Section,
        /// Location types to put on the map (comma-separated, e.g. shop,key-point)
        #[arg(long, value_delimiter = ',')]
        types: Option<Vec<String>>,
        /// Number of feed messages to print
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Map,
    Directory,
    News,
    Feed,
    Utilities,
    Notifications,
    Raw,
    All,
}

/// Options for a non-interactive `show`.
pub struct ShowOptions {
    pub types: Option<Vec<String>>,
    pub feed_limit: usize,
}

/// `--limit` wins over the configured length; zero counts as unset, same as in config.
pub fn resolve_feed_limit(flag: Option<usize>, configured: usize) -> usize {
    flag.filter(|n| *n > 0).unwrap_or(configured)
}

/// Render one section the way a fresh session would see it.
pub fn render_section(
    section: Section,
    community: &Community,
    clock: Arc<dyn ClockPort>,
    opts: &ShowOptions,
) -> Result<String, DomainError> {
    let mut session = Session::start(community, Arc::clone(&clock));
    if let Some(labels) = &opts.types {
        session.set_selected_types(location_filter::parse_types(labels)?);
    }

    let text = match section {
        Section::Map => render::map(
            &session.visible_locations(&community.locations),
            render::MAP_WIDTH,
            render::MAP_HEIGHT,
        ),
        Section::Directory => render::directory(&community.directory),
        Section::News => render::news(&community.news),
        Section::Feed => render::feed(&session.feed.view(opts.feed_limit)),
        Section::Utilities => render::utilities(&community.utilities),
        Section::Notifications => render::notifications(&community.notifications),
        Section::Raw => render::raw(community)?,
        Section::All => {
            let mut out = format!("{}\n\n", render::header(&community.region_name));
            for (title, s) in [
                ("Notifications", Section::Notifications),
                ("Local Map", Section::Map),
                ("Directory — Shops & Services", Section::Directory),
                ("Local News & Bulletins", Section::News),
                ("Community Feed", Section::Feed),
                ("Utility Tracker", Section::Utilities),
            ] {
                out.push_str(&format!("== {} ==\n", title));
                out.push_str(&render_section(s, community, Arc::clone(&clock), opts)?);
                out.push('\n');
            }
            out
        }
    };
    Ok(text)
}
