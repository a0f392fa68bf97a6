//! Horizontally paged, snap-to-page view
//!
//! `PagedTabStrip` shows one page of an externally owned collection at a time
//! and slides to another page only when the host calls `set_current_index`.
//! It never reacts to input on its own.
//!
//! States:
//! - `Idle(i)`: page `i` exactly fills the viewport (`None` for an empty model)
//! - `Transitioning { from, to }`: sliding from position `from` toward page `to`
//!
//! A request made while transitioning retargets the slide from wherever it
//! currently is; it never queues a second slide. Replacing the model cancels any
//! slide and jumps straight to the clamped index.

mod delegate;
mod pool;
mod render;

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, info};

use crate::scroll::{PageAnimator, StripConfig};

pub use delegate::{FnDelegate, PageDelegate, PageView};
pub use pool::DelegatePool;

/// Observable state of the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripState {
    Idle(Option<usize>),
    Transitioning {
        /// Position in page units when the slide (re)started
        from: f64,
        to: usize,
    },
}

/// Emitted once a new index has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChanged {
    pub index: Option<usize>,
}

pub struct PagedTabStrip<P, D: PageDelegate<P>> {
    pages: Vec<P>,
    delegate: D,
    pool: DelegatePool<D::View>,
    animator: PageAnimator,
    /// Last settled index
    settled: Option<usize>,
    notifications: VecDeque<IndexChanged>,
    viewport_width: u16,
    viewport_height: u16,
    placeholder: Option<String>,
}

impl<P, D: PageDelegate<P>> PagedTabStrip<P, D> {
    /// Create a strip settled on `initial_index`, clamped into range
    pub fn new(pages: Vec<P>, delegate: D, config: StripConfig, initial_index: usize) -> Self {
        let settled = clamp_index(initial_index, pages.len());
        let mut animator = PageAnimator::new(config);
        animator.jump_to(settled.unwrap_or(0));

        Self {
            pages,
            delegate,
            pool: DelegatePool::new(),
            animator,
            settled,
            notifications: VecDeque::new(),
            viewport_width: 0,
            viewport_height: 0,
            placeholder: None,
        }
    }

    /// Text drawn when the model is empty
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn set_config(&mut self, config: StripConfig) {
        self.animator.set_config(config);
    }

    pub fn config(&self) -> &StripConfig {
        self.animator.config()
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Live delegate instances
    pub fn pool(&self) -> &DelegatePool<D::View> {
        &self.pool
    }

    /// Index the strip shows or is sliding toward
    pub fn current_index(&self) -> Option<usize> {
        self.animator.target().or(self.settled)
    }

    /// Index of the last page that settled
    pub fn settled_index(&self) -> Option<usize> {
        self.settled
    }

    pub fn state(&self) -> StripState {
        match (self.animator.origin(), self.animator.target()) {
            (Some(from), Some(to)) => StripState::Transitioning { from, to },
            _ => StripState::Idle(self.settled),
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        !self.animator.is_animating()
    }

    /// True while frames need to be fed through `advance`
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animator.is_animating()
    }

    /// Visual position in page units
    pub fn position(&self) -> f64 {
        self.animator.position()
    }

    /// Horizontal offset of the viewport in columns
    pub fn visual_offset(&self) -> u32 {
        (self.animator.position() * f64::from(self.viewport_width)).round() as u32
    }

    pub fn viewport(&self) -> (u16, u16) {
        (self.viewport_width, self.viewport_height)
    }

    /// Assign the viewport size; every page is one viewport wide
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Request that page `index` become the displayed page
    ///
    /// Out-of-range indices and requests for the current target are ignored.
    /// Returns whether a slide was started, retargeted or settled.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index >= self.pages.len() {
            debug!(
                "ignoring page index {} for a model of {} pages",
                index,
                self.pages.len()
            );
            return false;
        }
        if self.current_index() == Some(index) {
            debug!("page {} is already current", index);
            return false;
        }

        if self.animator.is_animating() {
            debug!("retargeting slide to page {}", index);
        }
        if let Some(page) = self.animator.animate_to(index) {
            self.settle(Some(page));
        }
        true
    }

    /// Feed elapsed frame time into the slide in flight
    ///
    /// Returns the page index on the step where a slide settles.
    pub fn advance(&mut self, dt: Duration) -> Option<usize> {
        let page = self.animator.advance(dt)?;
        self.settle(Some(page));
        Some(page)
    }

    /// Replace the page collection
    ///
    /// Any slide in flight is dropped and the strip jumps, without animation,
    /// to the previous target clamped into the new range.
    pub fn set_page_model(&mut self, pages: Vec<P>) {
        let was_animating = self.animator.is_animating();
        let previous = self.current_index();
        info!(
            "page model replaced: {} -> {} pages",
            self.pages.len(),
            pages.len()
        );

        let delegate = &mut self.delegate;
        self.pool.clear(|index, view| delegate.release(index, view));
        self.pages = pages;

        let next = clamp_index(previous.unwrap_or(0), self.pages.len());
        self.animator.jump_to(next.unwrap_or(0));

        if was_animating || next != self.settled {
            self.notify(next);
        }
    }

    /// Drain settle notifications in the order they happened
    pub fn take_notifications(&mut self) -> Vec<IndexChanged> {
        self.notifications.drain(..).collect()
    }

    fn settle(&mut self, index: Option<usize>) {
        if self.settled == index {
            debug!("settled back on page {:?}", index);
            return;
        }
        self.notify(index);
    }

    fn notify(&mut self, index: Option<usize>) {
        debug!("settled on page {:?}", index);
        self.settled = index;
        self.notifications.push_back(IndexChanged { index });
    }

    /// Pages that are visible or about to become visible
    fn live_window(&self) -> Vec<usize> {
        if self.pages.is_empty() {
            return Vec::new();
        }
        let last = self.pages.len() - 1;
        let position = self.animator.position().max(0.0);
        let mut window = vec![
            (position.floor() as usize).min(last),
            (position.ceil() as usize).min(last),
        ];
        if let Some(target) = self.animator.target() {
            window.push(target.min(last));
        }
        window.sort_unstable();
        window.dedup();
        window
    }
}

impl<P, D: PageDelegate<P>> std::fmt::Debug for PagedTabStrip<P, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedTabStrip")
            .field("pages", &self.pages.len())
            .field("state", &self.state())
            .field("viewport", &self.viewport())
            .field("live_views", &self.pool.len())
            .finish()
    }
}

fn clamp_index(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(index.min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::EasingType;
    use ratatui::widgets::Paragraph;

    type TestDelegate = FnDelegate<fn(usize, &&'static str) -> Paragraph<'static>>;

    fn view(_index: usize, page: &&'static str) -> Paragraph<'static> {
        Paragraph::new(*page)
    }

    fn strip(pages: &[&'static str], initial: usize) -> PagedTabStrip<&'static str, TestDelegate> {
        let config = StripConfig {
            easing: EasingType::Linear,
            ..Default::default()
        };
        let mut strip = PagedTabStrip::new(
            pages.to_vec(),
            FnDelegate::new(view as fn(usize, &&'static str) -> Paragraph<'static>),
            config,
            initial,
        );
        strip.set_viewport(10, 3);
        strip
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_initial_state_is_clamped() {
        assert_eq!(strip(&["a", "b", "c"], 1).state(), StripState::Idle(Some(1)));
        assert_eq!(strip(&["a", "b", "c"], 9).state(), StripState::Idle(Some(2)));
        assert_eq!(strip(&[], 0).state(), StripState::Idle(None));
        assert_eq!(strip(&[], 0).current_index(), None);
    }

    #[test]
    fn test_slide_settles_on_target_after_duration() {
        let mut strip = strip(&["A", "B", "C"], 0);

        assert!(strip.set_current_index(2));
        assert_eq!(strip.current_index(), Some(2));
        assert_eq!(strip.settled_index(), Some(0));
        assert!(matches!(strip.state(), StripState::Transitioning { to: 2, .. }));

        assert_eq!(strip.advance(ms(399)), None);
        assert!(strip.take_notifications().is_empty());

        assert_eq!(strip.advance(ms(1)), Some(2));
        assert_eq!(strip.state(), StripState::Idle(Some(2)));
        assert_eq!(strip.visual_offset(), 20);
        assert_eq!(
            strip.take_notifications(),
            vec![IndexChanged { index: Some(2) }]
        );
    }

    #[test]
    fn test_invalid_index_is_ignored() {
        let mut strip = strip(&["A", "B", "C"], 1);
        assert!(!strip.set_current_index(3));
        assert!(!strip.set_current_index(usize::MAX));
        assert_eq!(strip.state(), StripState::Idle(Some(1)));
        assert_eq!(strip.visual_offset(), 10);
        assert!(strip.take_notifications().is_empty());
    }

    #[test]
    fn test_same_index_is_noop() {
        let mut strip = strip(&["A", "B"], 1);
        assert!(!strip.set_current_index(1));
        assert!(strip.is_settled());
        strip.advance(ms(1000));
        assert!(strip.take_notifications().is_empty());

        // Same as the in-flight target
        strip.set_current_index(0);
        assert!(!strip.set_current_index(0));
    }

    #[test]
    fn test_retarget_settles_once_on_final_target() {
        let mut strip = strip(&["A", "B", "C", "D"], 0);
        strip.set_current_index(1);
        strip.advance(ms(100));
        strip.set_current_index(3);

        // Retarget starts from the current position, not from page 0
        match strip.state() {
            StripState::Transitioning { from, to } => {
                assert!((from - 0.25).abs() < 1e-9);
                assert_eq!(to, 3);
            }
            other => panic!("expected transition, got {:?}", other),
        }

        let mut settles = Vec::new();
        for _ in 0..50 {
            if let Some(page) = strip.advance(ms(16)) {
                settles.push(page);
            }
        }
        assert_eq!(settles, vec![3]);
        assert_eq!(
            strip.take_notifications(),
            vec![IndexChanged { index: Some(3) }]
        );
        assert_eq!(strip.position(), 3.0);
    }

    #[test]
    fn test_retarget_back_to_origin_does_not_notify() {
        let mut strip = strip(&["A", "B", "C"], 0);
        strip.set_current_index(2);
        strip.advance(ms(100));
        assert!(strip.set_current_index(0));
        strip.advance(ms(400));
        assert_eq!(strip.state(), StripState::Idle(Some(0)));
        assert_eq!(strip.visual_offset(), 0);
        assert!(strip.take_notifications().is_empty());
    }

    #[test]
    fn test_model_replacement_clamps_with_hard_jump() {
        let mut strip = strip(&["A", "B", "C"], 2);
        strip.set_page_model(vec!["X"]);

        assert_eq!(strip.state(), StripState::Idle(Some(0)));
        assert!(strip.is_settled());
        assert_eq!(strip.visual_offset(), 0);
        assert_eq!(
            strip.take_notifications(),
            vec![IndexChanged { index: Some(0) }]
        );
    }

    #[test]
    fn test_model_replacement_mid_slide_settles_immediately() {
        let mut strip = strip(&["A", "B", "C", "D"], 0);
        strip.set_current_index(3);
        strip.advance(ms(200));

        strip.set_page_model(vec!["X", "Y"]);
        assert_eq!(strip.state(), StripState::Idle(Some(1)));
        assert_eq!(strip.position(), 1.0);
        assert_eq!(
            strip.take_notifications(),
            vec![IndexChanged { index: Some(1) }]
        );

        // The dropped slide never reports
        assert_eq!(strip.advance(ms(400)), None);
        assert!(strip.take_notifications().is_empty());
    }

    #[test]
    fn test_model_replacement_mid_slide_keeps_target() {
        let mut strip = strip(&["A", "B", "C"], 0);
        strip.set_current_index(2);
        strip.advance(ms(100));

        strip.set_page_model(vec!["W", "X", "Y", "Z"]);
        assert_eq!(strip.state(), StripState::Idle(Some(2)));
        assert_eq!(strip.position(), 2.0);
        assert_eq!(
            strip.take_notifications(),
            vec![IndexChanged { index: Some(2) }]
        );
        assert_eq!(strip.advance(ms(400)), None);
        assert!(strip.take_notifications().is_empty());
    }

    #[test]
    fn test_retarget_onto_current_position_settles_at_once() {
        let mut strip = strip(&["A", "B", "C"], 0);
        strip.set_current_index(2);
        // Halfway through a linear 0 -> 2 slide sits exactly on page 1
        strip.advance(ms(200));
        assert_eq!(strip.position(), 1.0);

        assert!(strip.set_current_index(1));
        assert_eq!(strip.state(), StripState::Idle(Some(1)));
        assert_eq!(strip.visual_offset(), 10);
        assert_eq!(
            strip.take_notifications(),
            vec![IndexChanged { index: Some(1) }]
        );
        assert!(!strip.needs_update());
    }

    #[test]
    fn test_model_replacement_keeping_index_is_silent() {
        let mut strip = strip(&["A", "B", "C"], 1);
        strip.set_page_model(vec!["X", "Y", "Z", "W"]);
        assert_eq!(strip.state(), StripState::Idle(Some(1)));
        assert!(strip.take_notifications().is_empty());
    }

    #[test]
    fn test_empty_model_rejects_requests() {
        let mut strip = strip(&["A", "B"], 1);
        strip.set_page_model(Vec::new());
        assert_eq!(strip.state(), StripState::Idle(None));
        assert_eq!(
            strip.take_notifications(),
            vec![IndexChanged { index: None }]
        );

        assert!(!strip.set_current_index(0));
        assert_eq!(strip.state(), StripState::Idle(None));

        strip.set_page_model(vec!["A"]);
        assert_eq!(strip.state(), StripState::Idle(Some(0)));
        assert_eq!(
            strip.take_notifications(),
            vec![IndexChanged { index: Some(0) }]
        );
    }

    #[test]
    fn test_instant_transitions_when_smooth_disabled() {
        let mut strip = strip(&["A", "B", "C"], 0);
        strip.set_config(StripConfig {
            smooth_enabled: false,
            ..Default::default()
        });

        assert!(strip.set_current_index(2));
        assert_eq!(strip.state(), StripState::Idle(Some(2)));
        assert_eq!(
            strip.take_notifications(),
            vec![IndexChanged { index: Some(2) }]
        );
    }

    #[test]
    fn test_notifications_follow_settle_order() {
        let mut strip = strip(&["A", "B", "C"], 0);
        strip.set_current_index(1);
        strip.advance(ms(400));
        strip.set_current_index(2);
        strip.advance(ms(400));
        strip.set_current_index(0);
        strip.advance(ms(400));

        let order: Vec<_> = strip
            .take_notifications()
            .into_iter()
            .map(|n| n.index)
            .collect();
        assert_eq!(order, vec![Some(1), Some(2), Some(0)]);
    }

    #[test]
    fn test_offset_tracks_viewport_width_at_rest() {
        let mut strip = strip(&["A", "B", "C"], 2);
        assert_eq!(strip.visual_offset(), 20);
        strip.set_viewport(33, 5);
        assert_eq!(strip.visual_offset(), 66);
    }
}
