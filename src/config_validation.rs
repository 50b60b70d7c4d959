// Configuration validation module

use anyhow::{Context, Result};
use std::path::PathBuf;
use segmented_components::{convert_segmented_config, find_control_config};

use crate::config::{default_config_path, load_config, AppConfig};
use crate::constants::HWND_MAIN_TABS;

/// Load configuration and check every segmented control in it
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);
    let config = load_config(&path)?;
    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(config)
}

pub fn validate_config(config: &AppConfig) -> Result<()> {
    find_control_config(&config.segmented_controls, HWND_MAIN_TABS).with_context(|| {
        format!(
            "Available segmented controls: {}",
            config
                .segmented_controls
                .values()
                .map(|c| c.hwnd.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    for (name, control) in &config.segmented_controls {
        convert_segmented_config(control)
            .with_context(|| format!("Segmented control '{}' is invalid", name))?;
    }
    Ok(())
}
