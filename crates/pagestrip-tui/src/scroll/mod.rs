//! Page transition animation
//!
//! ## Atoms
//! - `easing` - Pure easing functions
//! - `timing` - Progress and interpolation over explicit elapsed time
//! - `config` - Configuration helpers (types live in pagestrip-core)
//!
//! ## Controller
//! - `animation` - `PageAnimator`, a position in page units driven by `advance(dt)`
//!
//! # Usage
//!
//! ```ignore
//! use pagestrip_tui::scroll::{PageAnimator, StripConfig};
//!
//! let mut animator = PageAnimator::new(StripConfig::default());
//! animator.animate_to(2);
//!
//! // In the host loop, feed the elapsed frame time
//! if let Some(settled) = animator.advance(frame_dt) {
//!     // page `settled` now fills the viewport
//! }
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::PageAnimator;
pub use config::{StripConfig, StripConfigExt};
pub use easing::{EasingType, EasingTypeExt};
