// Tab Control Errors
// Prop-shape validation failures; everything past construction clamps instead of failing

use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TabControlError {
    #[error("A tab control needs at least one tab")]
    NoTabs,

    #[error("Duplicate tab label '{0}'")]
    DuplicateLabel(String),

    #[error("Unknown platform '{0}' (expected 'ios' or 'android')")]
    UnknownPlatform(String),

    #[error("Segmented control '{0}' not found in config")]
    ControlNotFound(String),
}

/// Labels must be non-empty and unique
pub fn validate_labels<S: AsRef<str>>(labels: &[S]) -> Result<(), TabControlError> {
    if labels.is_empty() {
        return Err(TabControlError::NoTabs);
    }
    let mut seen = HashSet::new();
    for label in labels {
        let label = label.as_ref();
        if !seen.insert(label) {
            return Err(TabControlError::DuplicateLabel(label.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_labels() {
        assert_eq!(validate_labels(&["A", "B"]), Ok(()));
        assert_eq!(validate_labels::<&str>(&[]), Err(TabControlError::NoTabs));
        assert_eq!(
            validate_labels(&["A", "B", "A"]),
            Err(TabControlError::DuplicateLabel("A".to_string()))
        );
    }
}
