//! Page transition controller
//!
//! Combines easing and timing to move a continuous position, measured in
//! pages, toward a target page.

use std::time::Duration;

use super::config::{StripConfig, StripConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// In-flight transition
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Time fed to this animation so far
    elapsed: Duration,
    /// Position when the animation (re)started
    from: f64,
    /// Destination page
    to: usize,
    duration: Duration,
    easing: EasingType,
}

/// Page transition animator
///
/// The position is expressed in page units: page `k` is fully in view exactly
/// when the position equals `k`. Call `animate_to()` to start or retarget a
/// transition, then `advance()` with each frame's elapsed time.
#[derive(Debug, Clone)]
pub struct PageAnimator {
    animation: Option<ActiveAnimation>,
    config: StripConfig,
    position: f64,
}

impl Default for PageAnimator {
    fn default() -> Self {
        Self::new(StripConfig::default())
    }
}

impl PageAnimator {
    pub fn new(config: StripConfig) -> Self {
        Self {
            animation: None,
            config,
            position: 0.0,
        }
    }

    /// Replace the configuration; an in-flight transition keeps its own duration
    pub fn set_config(&mut self, config: StripConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current visual position in page units
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Destination of the in-flight transition
    pub fn target(&self) -> Option<usize> {
        self.animation.as_ref().map(|a| a.to)
    }

    /// Position the in-flight transition started (or was retargeted) from
    pub fn origin(&self) -> Option<f64> {
        self.animation.as_ref().map(|a| a.from)
    }

    /// Move to `page` immediately, dropping any in-flight transition
    pub fn jump_to(&mut self, page: usize) {
        self.animation = None;
        self.position = page as f64;
    }

    /// Start a transition to `page`, or retarget the one in flight
    ///
    /// A retarget starts from the current visual position and restarts the
    /// configured duration. Returns `Some(page)` when the move settled
    /// immediately: smooth transitions are disabled, or the position already
    /// sits exactly on `page`.
    pub fn animate_to(&mut self, page: usize) -> Option<usize> {
        let to = page as f64;

        if !self.config.is_smooth() || self.position == to {
            self.jump_to(page);
            return Some(page);
        }

        self.animation = Some(ActiveAnimation {
            elapsed: Duration::ZERO,
            from: self.position,
            to: page,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
        None
    }

    /// Feed `dt` of elapsed time into the transition
    ///
    /// Returns `Some(page)` on the call where the transition completes; the
    /// position is then exactly `page`.
    pub fn advance(&mut self, dt: Duration) -> Option<usize> {
        let anim = self.animation.as_mut()?;
        anim.elapsed = anim.elapsed.saturating_add(dt);

        if is_complete(anim.elapsed, anim.duration) {
            let to = anim.to;
            self.animation = None;
            self.position = to as f64;
            tracing::trace!("transition settled at page {}", to);
            return Some(to);
        }

        let t = progress(anim.elapsed, anim.duration);
        self.position = lerp(anim.from, anim.to as f64, anim.easing.apply(t));
        None
    }

    /// Time left until the in-flight transition settles
    pub fn remaining(&self) -> Option<Duration> {
        self.animation
            .as_ref()
            .map(|a| a.duration.saturating_sub(a.elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(duration_ms: u64) -> StripConfig {
        StripConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_when_disabled() {
        let config = StripConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = PageAnimator::new(config);

        assert_eq!(animator.animate_to(3), Some(3));
        assert_eq!(animator.position(), 3.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_interpolates_and_settles() {
        let mut animator = PageAnimator::new(linear(400));

        assert_eq!(animator.animate_to(2), None);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), Some(2));

        assert_eq!(animator.advance(Duration::from_millis(100)), None);
        assert!((animator.position() - 0.5).abs() < 1e-9);

        assert_eq!(animator.advance(Duration::from_millis(300)), Some(2));
        assert_eq!(animator.position(), 2.0);
        assert!(!animator.is_animating());

        // Nothing left to report
        assert_eq!(animator.advance(Duration::from_millis(100)), None);
    }

    #[test]
    fn test_retarget_starts_from_current_position() {
        let mut animator = PageAnimator::new(linear(400));
        animator.animate_to(4);
        animator.advance(Duration::from_millis(200));
        assert!((animator.position() - 2.0).abs() < 1e-9);

        animator.animate_to(1);
        assert_eq!(animator.origin(), Some(2.0));
        assert_eq!(animator.remaining(), Some(Duration::from_millis(400)));

        animator.advance(Duration::from_millis(200));
        assert!((animator.position() - 1.5).abs() < 1e-9);
        assert_eq!(animator.advance(Duration::from_millis(200)), Some(1));
        assert_eq!(animator.position(), 1.0);
    }

    #[test]
    fn test_jump_cancels_animation() {
        let mut animator = PageAnimator::new(linear(400));
        animator.animate_to(5);
        animator.advance(Duration::from_millis(50));
        animator.jump_to(0);
        assert!(!animator.is_animating());
        assert_eq!(animator.position(), 0.0);
        assert_eq!(animator.advance(Duration::from_millis(400)), None);
    }

    #[test]
    fn test_animate_to_current_position_settles() {
        let mut animator = PageAnimator::new(linear(400));
        animator.jump_to(2);
        assert_eq!(animator.animate_to(2), Some(2));
        assert!(!animator.is_animating());
    }
}
