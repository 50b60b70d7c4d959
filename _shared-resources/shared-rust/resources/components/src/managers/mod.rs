// Managers module
// YAML configuration helpers that build widgets from config files

pub mod segmented;

pub use segmented::{
    convert_segmented_config, create_tab_control_from_config, find_control_config,
    SegmentedControlConfig, SegmentedControlConfigYaml, MAX_ANIMATION_MS,
};
