use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const LEFT_CHEVRON: &str = "≪";
const RIGHT_CHEVRON: &str = "≫";
/// Tabs pads each title with one space per side
const TAB_PADDING: usize = 2;
/// Room for a chevron and its spacing on both sides
const CHEVRON_RESERVE: usize = 4;

/// Tab titles synchronized with the strip's current index
pub struct TabBarWidget;

impl TabBarWidget {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        titles: &[String],
        selected: Option<usize>,
        theme: &Theme,
    ) {
        let block = Block::default()
            .title(" Pages ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0))
            .style(Style::default().bg(theme.bg0));

        let Some(selected) = selected.filter(|_| !titles.is_empty()) else {
            frame.render_widget(block, area);
            return;
        };
        let selected = selected.min(titles.len() - 1);

        let widths: Vec<usize> = titles
            .iter()
            .map(|title| title.width() + TAB_PADDING)
            .collect();
        let available = area.width.saturating_sub(2) as usize;
        let window = visible_window(&widths, selected, available);

        let chevron_style = Style::default().fg(theme.grey1);
        let lines: Vec<Line> = (window.start..window.end)
            .map(|index| {
                let mut spans = Vec::with_capacity(3);
                if window.left_overflow && index == window.start {
                    spans.push(Span::styled(format!("{LEFT_CHEVRON} "), chevron_style));
                }
                spans.push(Span::raw(titles[index].clone()));
                if window.right_overflow && index + 1 == window.end {
                    spans.push(Span::styled(format!(" {RIGHT_CHEVRON}"), chevron_style));
                }
                Line::from(spans)
            })
            .collect();

        let tabs = Tabs::new(lines)
            .block(block)
            .select(selected - window.start)
            .style(Style::default().fg(theme.fg0))
            .highlight_style(
                Style::default()
                    .fg(theme.yellow)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }
}

/// Contiguous run of tabs that fits the available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TabWindow {
    pub start: usize,
    pub end: usize,
    pub left_overflow: bool,
    pub right_overflow: bool,
}

/// Grow a window outward from `selected`, alternating right then left, until
/// the next tab no longer fits. Tabs are separated by a one-column divider.
pub(crate) fn visible_window(widths: &[usize], selected: usize, available: usize) -> TabWindow {
    let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    if total <= available {
        return TabWindow {
            start: 0,
            end: widths.len(),
            left_overflow: false,
            right_overflow: false,
        };
    }

    let budget = available.saturating_sub(CHEVRON_RESERVE);
    let mut start = selected;
    let mut end = selected + 1;
    let mut used = widths[selected];

    loop {
        let mut grew = false;
        if end < widths.len() && used + 1 + widths[end] <= budget {
            used += 1 + widths[end];
            end += 1;
            grew = true;
        }
        if start > 0 && used + 1 + widths[start - 1] <= budget {
            start -= 1;
            used += 1 + widths[start];
            grew = true;
        }
        if !grew {
            break;
        }
    }

    TabWindow {
        start,
        end,
        left_overflow: start > 0,
        right_overflow: end < widths.len(),
    }
}
