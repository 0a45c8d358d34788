use std::env;

use valentine_core::{
    Rect, BANNER_CAP_DEFAULT, VIEWPORT_HEIGHT_DEFAULT, VIEWPORT_WIDTH_DEFAULT,
};

pub const BANNER_CAP_ENV: &str = "VALENTINE_BANNER_CAP";
pub const VIEWPORT_WIDTH_ENV: &str = "VALENTINE_VIEWPORT_WIDTH";
pub const VIEWPORT_HEIGHT_ENV: &str = "VALENTINE_VIEWPORT_HEIGHT";

/// Settings for the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptConfig {
    pub banner_cap: u32,
    /// Viewport the "No" button teleports inside on every refusal
    pub viewport: Rect,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            banner_cap: BANNER_CAP_DEFAULT,
            viewport: Rect::new(VIEWPORT_WIDTH_DEFAULT, VIEWPORT_HEIGHT_DEFAULT),
        }
    }
}

impl PromptConfig {
    pub fn from_env() -> Self {
        Self {
            banner_cap: read_env_u32(BANNER_CAP_ENV, BANNER_CAP_DEFAULT),
            viewport: Rect::new(
                read_env_f64(VIEWPORT_WIDTH_ENV, VIEWPORT_WIDTH_DEFAULT),
                read_env_f64(VIEWPORT_HEIGHT_ENV, VIEWPORT_HEIGHT_DEFAULT),
            ),
        }
    }
}

pub fn read_env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

pub fn read_env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(default)
}
