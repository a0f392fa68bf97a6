use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Render the tab bar above the pages
    #[serde(default = "default_true")]
    pub show_tab_bar: bool,
    /// Page transition settings
    #[serde(default)]
    pub strip: StripConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_tab_bar: default_true(),
            strip: StripConfig::default(),
        }
    }
}

/// Easing curve applied to page transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Step at the end of the transition
    None,
    Linear,
    /// 1 - (1-t)^3
    #[default]
    Cubic,
    /// 1 - (1-t)^5
    Quintic,
    /// 1 - 2^(-10t)
    EaseOut,
    /// Symmetric quadratic in/out
    InOutQuad,
}

/// Page transition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripConfig {
    /// Animate page changes; when false every change settles immediately
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one transition in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate used while a transition is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-n>" (Ctrl+n), "<S-Tab>" (Shift+Tab), "<Right>", "gg"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_next_page")]
    pub next_page: String,
    #[serde(default = "default_key_prev_page")]
    pub prev_page: String,
    #[serde(default = "default_key_first_page")]
    pub first_page: String,
    #[serde(default = "default_key_last_page")]
    pub last_page: String,
    /// Replace the page model with a fresh one
    #[serde(default = "default_key_reload")]
    pub reload: String,
    /// Replace the page model with a single page
    #[serde(default = "default_key_shrink")]
    pub shrink: String,
    #[serde(default = "default_key_toggle_help")]
    pub toggle_help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_page: default_key_next_page(),
            prev_page: default_key_prev_page(),
            first_page: default_key_first_page(),
            last_page: default_key_last_page(),
            reload: default_key_reload(),
            shrink: default_key_shrink(),
            toggle_help: default_key_toggle_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_page() -> String { "l".to_string() }
fn default_key_prev_page() -> String { "h".to_string() }
fn default_key_first_page() -> String { "gg".to_string() }
fn default_key_last_page() -> String { "G".to_string() }
fn default_key_reload() -> String { "r".to_string() }
fn default_key_shrink() -> String { "x".to_string() }
fn default_key_toggle_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    400
}

fn default_animation_fps() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagestrip/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagestrip")
            .join("config.toml")
    }

    /// Directory for log files written while the terminal UI owns stdout
    pub fn log_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pagestrip")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.show_tab_bar);
        assert!(config.ui.strip.smooth_enabled);
        assert_eq!(config.ui.strip.animation_duration_ms, 400);
        assert_eq!(config.ui.strip.easing, EasingType::Cubic);
        assert_eq!(config.keymap.first_page, "gg");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [ui.strip]
            animation_duration_ms = 250
            easing = "in_out_quad"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.strip.animation_duration_ms, 250);
        assert_eq!(config.ui.strip.easing, EasingType::InOutQuad);
        assert_eq!(config.ui.strip.animation_fps, 60);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.keymap.next_page, "l");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui.strip]\neasing = \"bouncy\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip_preserves_keymap() {
        let mut config = AppConfig::default();
        config.keymap.next_page = "<Right>".to_string();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.keymap.next_page, "<Right>");
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("pagestrip-save-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.ui.strip.animation_duration_ms = 120;
        config.keymap.quit = "<C-q>".to_string();

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.ui.strip.animation_duration_ms, 120);
        assert_eq!(loaded.keymap.quit, "<C-q>");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("pagestrip-does-not-exist").join("config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.strip.animation_duration_ms, 400);
    }
}
