//! Tab pages used by the demo host and their delegate

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::strip::{PageDelegate, PageView};
use crate::theme::Theme;

/// Page descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPage {
    pub title: String,
    pub body: String,
}

impl TabPage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

const SECTIONS: [&str; 6] = [
    "Overview",
    "Collect",
    "Validate",
    "Extract",
    "Integrate",
    "Report",
];

/// Build `count` pages; `generation` distinguishes successive reloads
pub fn sample_pages(count: usize, generation: u32) -> Vec<TabPage> {
    (0..count)
        .map(|i| {
            let section = SECTIONS[i % SECTIONS.len()];
            let title = if i < SECTIONS.len() {
                section.to_string()
            } else {
                format!("{} {}", section, i / SECTIONS.len() + 1)
            };
            let body = format!(
                "{} is page {} of {} (model generation {}).\n\n\
                 This view only moves when the host asks it to.",
                title,
                i + 1,
                count,
                generation
            );
            TabPage::new(title, body)
        })
        .collect()
}

/// Rendered card for one page
#[derive(Debug, Clone)]
pub struct PageCard {
    title: String,
    body: String,
    index: usize,
    /// Sequence number of this instance within the delegate
    instance: usize,
    theme: Theme,
}

impl PageView for PageCard {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(vec![Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(self.theme.yellow)
                    .add_modifier(Modifier::BOLD),
            )]))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" page {} · view #{} ", self.index + 1, self.instance),
                    Style::default().fg(self.theme.grey1),
                ))
                .alignment(Alignment::Right),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.blue))
            .style(Style::default().bg(self.theme.bg0));

        let paragraph = Paragraph::new(self.body.as_str())
            .style(Style::default().fg(self.theme.fg0))
            .wrap(Wrap { trim: false })
            .block(block);
        Widget::render(paragraph, area, buf);
    }
}

/// Builds `PageCard`s and counts live instances
#[derive(Debug, Clone, Default)]
pub struct CardDelegate {
    theme: Theme,
    created: usize,
    released: usize,
}

impl CardDelegate {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            created: 0,
            released: 0,
        }
    }

    /// Instances currently alive
    pub fn live(&self) -> usize {
        self.created - self.released
    }

    pub fn created(&self) -> usize {
        self.created
    }
}

impl PageDelegate<TabPage> for CardDelegate {
    type View = PageCard;

    fn instantiate(&mut self, index: usize, page: &TabPage) -> PageCard {
        self.created += 1;
        tracing::trace!("instantiating view #{} for page {}", self.created, index);
        PageCard {
            title: page.title.clone(),
            body: page.body.clone(),
            index,
            instance: self.created,
            theme: self.theme.clone(),
        }
    }

    fn release(&mut self, index: usize, _view: PageCard) {
        self.released += 1;
        tracing::trace!("released view for page {}", index);
    }
}
