// Host Platform
// Two-valued host flag that selects touch feedback, gestures and the style sheet

use std::fmt;
use std::str::FromStr;

use super::error::TabControlError;
use crate::styles::{android, ios, TabStyleSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Haptic feedback, drag-to-scrub, highlight-only active styling
    Ios,
    /// Plain feedback, active style layered onto the tab itself
    Android,
}

impl Platform {
    /// Platform of the compile target. Anything that is not an Apple target uses Android behavior.
    pub fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    pub fn supports_drag_gesture(&self) -> bool {
        matches!(self, Platform::Ios)
    }

    pub fn fires_haptics(&self) -> bool {
        matches!(self, Platform::Ios)
    }

    /// Whether the active tab style is layered onto the tab itself (not only the highlight)
    pub fn applies_active_tab_style(&self) -> bool {
        matches!(self, Platform::Android)
    }

    pub fn style_sheet(&self) -> TabStyleSheet {
        match self {
            Platform::Ios => ios::sheet(),
            Platform::Android => android::sheet(),
        }
    }
}

impl FromStr for Platform {
    type Err = TabControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(TabControlError::UnknownPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!(" Android ".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!(
            "web".parse::<Platform>(),
            Err(TabControlError::UnknownPlatform("web".to_string()))
        );
    }

    #[test]
    fn test_behavior_flags() {
        assert!(Platform::Ios.supports_drag_gesture());
        assert!(Platform::Ios.fires_haptics());
        assert!(!Platform::Ios.applies_active_tab_style());

        assert!(!Platform::Android.supports_drag_gesture());
        assert!(!Platform::Android.fires_haptics());
        assert!(Platform::Android.applies_active_tab_style());
    }
}
