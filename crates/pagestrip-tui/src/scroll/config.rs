//! Configuration helpers for page transitions

use std::time::Duration;

pub use pagestrip_core::{EasingType, StripConfig};

/// Extension trait for StripConfig with utility methods
pub trait StripConfigExt {
    /// Get transition duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if transitions are effectively animated
    fn is_smooth(&self) -> bool;
}

impl StripConfigExt for StripConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}
