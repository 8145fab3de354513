//! Implements InputPort. Inquire-based interactive board.
//!
//! One `run` is one session: the feed and filter selection live in a `Session` owned by
//! the run loop and handed to each screen.

use super::render;
use crate::domain::{Community, DomainError, Notification, NotificationLevel};
use crate::ports::{ClockPort, InputPort};
use crate::usecases::{Session, location_filter};
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::ui::{Attributes, Color as PromptColor, RenderConfig, StyleSheet, Styled};
use inquire::{Editor, InquireError, MultiSelect, Select, Text};
use std::fmt;
use std::io::stdout;
use std::sync::Arc;
use tracing::{debug, info};

/// Applies the board's colours to every inquire prompt. Call once at startup.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(PromptColor::LightGreen))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(PromptColor::LightYellow))
        .with_selected_checkbox(Styled::new("[x]").with_fg(PromptColor::LightGreen))
        .with_unselected_checkbox(Styled::new("[ ]"))
        .with_answer(
            StyleSheet::new()
                .with_fg(PromptColor::LightYellow)
                .with_attr(Attributes::BOLD),
        )
        .with_help_message(StyleSheet::new().with_fg(PromptColor::DarkGrey));
    inquire::set_global_render_config(config);
}

/// `Ok(None)` when the user backs out with Esc / Ctrl-C.
fn cancellable<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Map,
    Directory,
    News,
    Feed,
    Utilities,
    Notifications,
    Raw,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 8] = [
        MenuItem::Map,
        MenuItem::Directory,
        MenuItem::News,
        MenuItem::Feed,
        MenuItem::Utilities,
        MenuItem::Notifications,
        MenuItem::Raw,
        MenuItem::Quit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItem::Map => "Local map",
            MenuItem::Directory => "Directory — shops & services",
            MenuItem::News => "Local news & bulletins",
            MenuItem::Feed => "Community feed",
            MenuItem::Utilities => "Utility tracker",
            MenuItem::Notifications => "Notifications",
            MenuItem::Raw => "Show raw data",
            MenuItem::Quit => "Quit",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedAction {
    Post,
    Back,
}

impl fmt::Display for FeedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FeedAction::Post => "Post a message",
            FeedAction::Back => "Back",
        })
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    community: Community,
    clock: Arc<dyn ClockPort>,
    feed_limit: usize,
    default_user: String,
}

impl TuiInputPort {
    pub fn new(
        community: Community,
        clock: Arc<dyn ClockPort>,
        feed_limit: usize,
        default_user: impl Into<String>,
    ) -> Self {
        Self {
            community,
            clock,
            feed_limit,
            default_user: default_user.into(),
        }
    }

    fn print_notifications(&self) {
        let mut out = stdout();
        for n in &self.community.notifications {
            print_notification(&mut out, n);
        }
    }

    fn map_screen(&self, session: &mut Session) -> Result<(), DomainError> {
        let options = location_filter::available_types(&self.community.locations);
        let selected = session.selected_types();
        let defaults: Vec<usize> = options
            .iter()
            .enumerate()
            .filter(|(_, t)| selected.contains(*t))
            .map(|(i, _)| i)
            .collect();

        let Some(chosen) = cancellable(
            MultiSelect::new("Show types", options)
                .with_default(&defaults)
                .prompt(),
        )?
        else {
            return Ok(());
        };
        debug!(types = ?chosen, "map filter changed");
        session.set_selected_types(chosen);

        let visible = session.visible_locations(&self.community.locations);
        println!("\nLocal Map");
        print!(
            "{}",
            render::map(&visible, render::MAP_WIDTH, render::MAP_HEIGHT)
        );
        Ok(())
    }

    fn feed_screen(&self, session: &mut Session) -> Result<(), DomainError> {
        loop {
            println!("\nCommunity Feed");
            print!("{}", render::feed(&session.feed.view(self.feed_limit)));

            let Some(action) = cancellable(
                Select::new("Feed", vec![FeedAction::Post, FeedAction::Back]).prompt(),
            )?
            else {
                return Ok(());
            };
            match action {
                FeedAction::Post => self.post_form(session)?,
                FeedAction::Back => return Ok(()),
            }
        }
    }

    /// Name + multi-line message form (opens $EDITOR). An empty message keeps the form open
    /// for correction.
    fn post_form(&self, session: &mut Session) -> Result<(), DomainError> {
        let Some(user) = cancellable(
            Text::new("Your name")
                .with_default(&self.default_user)
                .prompt(),
        )?
        else {
            return Ok(());
        };

        loop {
            let Some(message) = cancellable(
                Editor::new("Post a message")
                    .with_help_message("Share something with your neighbours...")
                    .prompt(),
            )?
            else {
                return Ok(());
            };
            match session.feed.post(&user, &message) {
                Ok(()) => return Ok(()),
                Err(e) => println!("Nothing posted: {}. Type a message or press Esc.", e),
            }
        }
    }
}

fn print_notification(out: &mut std::io::Stdout, n: &Notification) {
    let color = match n.level {
        NotificationLevel::Info => Color::Cyan,
        NotificationLevel::Warning => Color::Yellow,
        NotificationLevel::Error => Color::Red,
    };
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(format!(
        "{} {}\r\n",
        render::notification_tag(n.level),
        n.text
    )));
    let _ = out.execute(ResetColor);
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut session = Session::start(&self.community, Arc::clone(&self.clock));
        info!(
            region = %self.community.region_name,
            locations = self.community.locations.len(),
            seeded = session.feed.len(),
            "session started"
        );

        println!("{}\n", render::header(&self.community.region_name));
        self.print_notifications();

        loop {
            println!();
            let Some(choice) = cancellable(
                Select::new("What would you like to see?", MenuItem::ALL.to_vec()).prompt(),
            )?
            else {
                break;
            };

            match choice {
                MenuItem::Map => self.map_screen(&mut session)?,
                MenuItem::Directory => {
                    println!("\nDirectory — Shops & Services");
                    print!("{}", render::directory(&self.community.directory));
                }
                MenuItem::News => {
                    println!("\nLocal News & Bulletins");
                    print!("{}", render::news(&self.community.news));
                }
                MenuItem::Feed => self.feed_screen(&mut session)?,
                MenuItem::Utilities => {
                    println!("\nUtility Tracker");
                    print!("{}", render::utilities(&self.community.utilities));
                }
                MenuItem::Notifications => self.print_notifications(),
                MenuItem::Raw => {
                    println!("\nRaw data");
                    println!("{}", render::raw(&self.community)?);
                }
                MenuItem::Quit => break,
            }
        }

        info!(messages = session.feed.len(), "session ended");
        Ok(())
    }
}
