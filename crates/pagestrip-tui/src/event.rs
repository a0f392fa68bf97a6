use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

impl EventHandler {
    /// `animation_tick` is used instead of `tick_rate` while a page transition is in flight
    pub fn new(tick_rate_ms: u64, animation_tick: Duration) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick,
        }
    }

    /// Poll timeout for the next iteration
    pub fn poll_timeout(&self, animating: bool) -> Duration {
        if animating {
            self.animation_tick.min(self.tick_rate)
        } else {
            self.tick_rate
        }
    }

    /// Poll for the next event
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        if event::poll(self.poll_timeout(animating))? {
            match event::read()? {
                Event::Key(key) => {
                    // Ignore release/repeat reports
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout_switches_when_animating() {
        let handler = EventHandler::new(100, Duration::from_millis(20));
        assert_eq!(handler.poll_timeout(false), Duration::from_millis(100));
        assert_eq!(handler.poll_timeout(true), Duration::from_millis(20));
    }

    #[test]
    fn test_animation_tick_never_slower_than_idle() {
        let handler = EventHandler::new(10, Duration::from_millis(33));
        assert_eq!(handler.poll_timeout(true), Duration::from_millis(10));
    }
}
