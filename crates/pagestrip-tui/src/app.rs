use std::sync::Arc;
use std::time::Duration;

use pagestrip_core::AppConfig;
use tracing::info;

use crate::cards::{sample_pages, CardDelegate, TabPage};
use crate::input::Action;
use crate::keymap::Keymap;
use crate::strip::{IndexChanged, PagedTabStrip};
use crate::theme::Theme;

pub type CardStrip = PagedTabStrip<TabPage, CardDelegate>;

/// Demo host: owns a strip and drives its current index from key actions
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub keymap: Keymap,
    pub strip: CardStrip,
    /// Page count used when the model is reloaded
    pub page_count: usize,
    /// Bumped on every model reload
    pub generation: u32,
    pub show_help: bool,
    pub pending_g: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, page_count: usize, start_index: usize) -> Self {
        let theme = Theme::default();
        let keymap = Keymap::from_config(&config.keymap);
        let strip = PagedTabStrip::new(
            sample_pages(page_count, 0),
            CardDelegate::new(theme.clone()),
            config.ui.strip.clone(),
            start_index,
        )
        .with_placeholder("No pages");

        Self {
            config,
            theme,
            keymap,
            strip,
            page_count,
            generation: 0,
            show_help: false,
            pending_g: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Titles for the tab bar
    pub fn titles(&self) -> Vec<String> {
        self.strip.pages().iter().map(|page| page.title.clone()).collect()
    }

    pub fn apply(&mut self, action: Action) {
        if action != Action::PendingG {
            self.pending_g = false;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPage => {
                if let Some(index) = self.strip.current_index() {
                    self.request_page(index + 1);
                }
            }
            Action::PrevPage => {
                if let Some(index) = self.strip.current_index().and_then(|i| i.checked_sub(1)) {
                    self.request_page(index);
                }
            }
            Action::FirstPage => self.request_page(0),
            Action::LastPage => {
                if let Some(last) = self.strip.len().checked_sub(1) {
                    self.request_page(last);
                }
            }
            Action::Reload => {
                self.generation += 1;
                self.replace_model(sample_pages(self.page_count, self.generation));
            }
            Action::Shrink => {
                self.generation += 1;
                self.replace_model(sample_pages(1, self.generation));
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::PendingG => self.pending_g = true,
            Action::None => {}
        }
    }

    /// Advance the strip by one frame and surface settle notifications
    pub fn on_tick(&mut self, dt: Duration) -> Vec<IndexChanged> {
        self.strip.advance(dt);
        self.collect_notifications()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Help entries as (keys, description)
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keymap
            .labels()
            .iter()
            .map(|(action, keys)| (keys.clone(), describe(*action)))
            .collect()
    }

    fn request_page(&mut self, index: usize) {
        // Out-of-range requests are dropped by the strip itself
        if self.strip.set_current_index(index) {
            self.clear_status();
        }
        self.collect_notifications();
    }

    fn replace_model(&mut self, pages: Vec<TabPage>) {
        info!(
            "host replacing model with {} pages (generation {})",
            pages.len(),
            self.generation
        );
        self.strip.set_page_model(pages);
        self.collect_notifications();
    }

    fn collect_notifications(&mut self) -> Vec<IndexChanged> {
        let notifications = self.strip.take_notifications();
        if let Some(last) = notifications.last() {
            match last.index {
                Some(index) => {
                    info!("page {} settled", index);
                    self.set_status(format!("Settled on page {}", index + 1));
                }
                None => self.set_status("Model is empty"),
            }
        }
        notifications
    }
}

fn describe(action: Action) -> &'static str {
    match action {
        Action::Quit => "Quit",
        Action::NextPage => "Next page",
        Action::PrevPage => "Previous page",
        Action::FirstPage => "First page",
        Action::LastPage => "Last page",
        Action::Reload => "Reload pages",
        Action::Shrink => "Replace with one page",
        Action::ToggleHelp => "Toggle help",
        Action::PendingG | Action::None => "",
    }
}
