use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use pagestrip_core::AppConfig;
use pagestrip_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    scroll::StripConfigExt,
    widgets::{HelpPopup, StatusBarWidget, TabBarWidget},
    App,
};

pub fn run(config: Arc<AppConfig>, pages: usize, start: usize) -> Result<()> {
    info!("starting demo host with {} pages at index {}", pages, start);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("pagestrip"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), pages, start);
    let event_handler = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.strip.animation_tick_duration(),
    );

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        app.on_tick(now - last_frame);
        last_frame = now;

        let titles = app.titles();
        let show_tab_bar = app.config.ui.show_tab_bar;

        terminal.draw(|frame| {
            let constraints = if show_tab_bar {
                vec![
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ]
            } else {
                vec![Constraint::Min(1), Constraint::Length(1)]
            };
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(frame.area());

            let (strip_area, status_area) = if show_tab_bar {
                TabBarWidget::render(
                    frame,
                    layout[0],
                    &titles,
                    app.strip.current_index(),
                    &app.theme,
                );
                (layout[1], layout[2])
            } else {
                (layout[0], layout[1])
            };

            app.strip.render_frame(frame, strip_area);
            StatusBarWidget::render(frame, status_area, app);

            if app.show_help {
                let entries = app.help_entries();
                HelpPopup::render(frame, &entries, &app.theme);
            }
        })?;

        // Fast polling only while a slide is in flight
        if let Some(event) = event_handler.next(app.strip.needs_update())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    app.apply(action);
                }
                AppEvent::Resize(width, height) => {
                    tracing::debug!("terminal resized to {}x{}", width, height);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!("quitting demo host");
            return Ok(());
        }
    }
}
