//! Terminal adapters: banner, text rendering, inquire TUI and the clap command line.

pub mod banner;
pub mod cli;
pub mod render;
pub mod tui;

/// Prints the welcome banner and applies the theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui(region_name: &str, show_banner: bool) {
    if show_banner {
        banner::print_welcome(region_name);
    }
    tui::apply_theme();
}
