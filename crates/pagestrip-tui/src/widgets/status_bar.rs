use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::input::Action;
use crate::keymap::Keymap;
use crate::strip::StripState;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(" {} | {}", state_label(app.strip.state()), page_label(app))
        };

        let help_hint = key_hint(&app.keymap);
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Key hint built from the configured bindings
fn key_hint(keymap: &Keymap) -> String {
    let hints: Vec<String> = keymap
        .labels()
        .iter()
        .filter_map(|(action, keys)| hint_name(*action).map(|name| format!("{}:{}", keys, name)))
        .collect();
    format!(" {} ", hints.join(" "))
}

fn hint_name(action: Action) -> Option<&'static str> {
    match action {
        Action::Quit => Some("quit"),
        Action::NextPage => Some("next"),
        Action::PrevPage => Some("prev"),
        Action::FirstPage => Some("first"),
        Action::LastPage => Some("last"),
        Action::Reload => Some("reload"),
        Action::Shrink => Some("shrink"),
        Action::ToggleHelp => Some("help"),
        Action::PendingG | Action::None => None,
    }
}

fn state_label(state: StripState) -> &'static str {
    match state {
        StripState::Idle(_) => "IDLE",
        StripState::Transitioning { .. } => "SLIDE",
    }
}

fn page_label(app: &App) -> String {
    match app.strip.current_index() {
        Some(index) => format!("Page {}/{}", index + 1, app.strip.len()),
        None => "No pages".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagestrip_core::config::KeymapConfig;

    #[test]
    fn test_hint_follows_default_keymap() {
        let hint = key_hint(&Keymap::default());
        assert_eq!(
            hint,
            " q:quit l:next h:prev gg:first G:last r:reload x:shrink ?:help "
        );
    }

    #[test]
    fn test_hint_follows_remapped_keys() {
        let config = KeymapConfig {
            next_page: "<Right>".to_string(),
            quit: "<C-q>".to_string(),
            ..Default::default()
        };
        let hint = key_hint(&Keymap::from_config(&config));
        assert!(hint.contains("<Right>:next"));
        assert!(hint.contains("<C-q>:quit"));
        assert!(!hint.contains("l:next"));
    }
}
