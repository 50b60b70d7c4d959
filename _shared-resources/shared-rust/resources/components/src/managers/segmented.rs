// Segmented Control Configuration
// YAML configuration structures and helpers that build a TabControl from them

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

use crate::core::{validate_labels, Platform, TabControlError, INDICATOR_ANIMATION_DURATION};
use crate::elements::TabControl;

/// Longest indicator animation accepted from config, in milliseconds
pub const MAX_ANIMATION_MS: u64 = 2_000;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Segmented control configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentedControlConfigYaml {
    /// Handle name the host looks the control up by
    pub hwnd: String,
    /// Tab labels, in display order
    pub tabs: Vec<String>,
    /// Draw separators between tabs (defaults to false)
    #[serde(default)]
    pub separators: bool,
    /// "ios" or "android" (defaults to the compile target)
    pub platform: Option<String>,
    /// Indicator slide duration (defaults to 250)
    pub animation_ms: Option<u64>,
}

/// Validated segmented control configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedControlConfig {
    pub hwnd: String,
    pub tabs: Vec<String>,
    pub separators: bool,
    pub platform: Platform,
    pub animation: Duration,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Validate a YAML control definition and fill in defaults
pub fn convert_segmented_config(
    config: &SegmentedControlConfigYaml,
) -> Result<SegmentedControlConfig, TabControlError> {
    validate_labels(&config.tabs)?;

    let platform = match &config.platform {
        Some(name) => name.parse()?,
        None => Platform::current(),
    };

    let animation = match config.animation_ms {
        Some(ms) if ms > MAX_ANIMATION_MS => {
            warn!(
                hwnd = %config.hwnd,
                animation_ms = ms,
                "animation_ms above {MAX_ANIMATION_MS}; clamping"
            );
            Duration::from_millis(MAX_ANIMATION_MS)
        }
        Some(ms) => Duration::from_millis(ms),
        None => INDICATOR_ANIMATION_DURATION,
    };

    if config.separators && config.tabs.len() < 3 {
        warn!(
            hwnd = %config.hwnd,
            "separators never render with fewer than three tabs"
        );
    }

    Ok(SegmentedControlConfig {
        hwnd: config.hwnd.clone(),
        tabs: config.tabs.clone(),
        separators: config.separators,
        platform,
        animation,
    })
}

/// Find a control definition by handle name
pub fn find_control_config<'a>(
    controls: &'a HashMap<String, SegmentedControlConfigYaml>,
    hwnd: &str,
) -> Result<&'a SegmentedControlConfigYaml, TabControlError> {
    controls
        .values()
        .find(|config| config.hwnd == hwnd)
        .ok_or_else(|| TabControlError::ControlNotFound(hwnd.to_string()))
}

/// Create a tab control from YAML configuration
pub fn create_tab_control_from_config<F>(
    config: &SegmentedControlConfigYaml,
    on_change: F,
) -> Result<TabControl, TabControlError>
where
    F: FnMut(&str) + 'static,
{
    let config = convert_segmented_config(config)?;
    Ok(TabControl::new(config.tabs, on_change)?
        .with_separators(config.separators)
        .with_platform(config.platform)
        .with_animation_duration(config.animation))
}
