//! Progress and interpolation helpers
//!
//! Time is always passed in as an elapsed `Duration` so animation state is a
//! pure function of how much time the host has fed it.

use std::time::Duration;

/// Progress (0.0 to 1.0) of an animation after `elapsed`
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(2.0, 0.0, 0.25) - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let duration = Duration::from_millis(400);
        assert_eq!(progress(Duration::ZERO, duration), 0.0);
        assert!((progress(Duration::from_millis(100), duration) - 0.25).abs() < 1e-9);
        assert_eq!(progress(Duration::from_millis(900), duration), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
        assert!(is_complete(Duration::ZERO, Duration::ZERO));
    }
}
