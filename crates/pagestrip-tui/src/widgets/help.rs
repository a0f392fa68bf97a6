use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

pub struct HelpPopup;

impl HelpPopup {
    /// Render a centered list of `(keys, description)` pairs
    pub fn render(frame: &mut Frame, bindings: &[(String, &str)], theme: &Theme) {
        let area = frame.area();
        let key_width = bindings
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (bindings.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let lines: Vec<Line> = bindings
            .iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<width$}  ", keys, width = key_width),
                        Style::default()
                            .fg(theme.yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*description, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Center a rect of the given size inside `area`
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
