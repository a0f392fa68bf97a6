pub mod config;
pub mod error;

pub use config::{AppConfig, EasingType, StripConfig};
pub use error::{Error, Result};
