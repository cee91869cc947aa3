//! Page Interaction Configuration

use crate::ConfigError;
use serde::Deserialize;
use std::time::Duration;

/// Scroll offset past which the navbar turns opaque
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Scroll offset past which the back-to-top control appears
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Navbar background once scrolled
pub const NAVBAR_SCROLLED_BACKGROUND: &str = "#0F2229";

/// Navbar bottom border once scrolled
pub const NAVBAR_SCROLLED_BORDER: &str = "rgba(6, 182, 212, 0.2)";

/// Page interaction options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Navbar background toggle
    pub navbar: NavbarConfig,

    /// Offset (px) past which back-to-top becomes interactive
    pub back_to_top_threshold_px: f64,

    /// Toast exit and auto-close delays
    pub toast: ToastTimings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            navbar: NavbarConfig::default(),
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
            toast: ToastTimings::STANDARD,
        }
    }
}

impl Config {
    /// Load from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Same config with different toast timings
    pub fn with_toast_timings(mut self, timings: ToastTimings) -> Self {
        self.toast = timings;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("navbar.threshold_px", self.navbar.threshold_px),
            ("back_to_top_threshold_px", self.back_to_top_threshold_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { field, value });
            }
        }
        Ok(())
    }
}

/// Navbar background toggle options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Offsets strictly above this are "scrolled"
    pub threshold_px: f64,
    pub scrolled_background: String,
    pub scrolled_border: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            threshold_px: NAVBAR_SCROLL_THRESHOLD_PX,
            scrolled_background: NAVBAR_SCROLLED_BACKGROUND.to_string(),
            scrolled_border: NAVBAR_SCROLLED_BORDER.to_string(),
        }
    }
}

/// Toast delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    /// Time between `toast-exit` and removal, matching the CSS transition
    pub exit_delay_ms: u64,
    /// Time after load before a toast closes itself
    pub auto_close_delay_ms: u64,
}

impl ToastTimings {
    /// 300 ms exit, 1.5 s auto-close
    pub const STANDARD: Self = Self { exit_delay_ms: 300, auto_close_delay_ms: 1500 };

    /// 400 ms exit, 2 s auto-close
    pub const RELAXED: Self = Self { exit_delay_ms: 400, auto_close_delay_ms: 2000 };

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    pub fn auto_close_delay(&self) -> Duration {
        Duration::from_millis(self.auto_close_delay_ms)
    }
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self::STANDARD
    }
}
