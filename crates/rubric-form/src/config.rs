//! Editor Configuration
//!
//! Bounds and defaults for the rubric editor, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::criterion::Feedback;
use crate::error::{FormError, FormResult};

/// Editor settings (missing keys fall back to defaults)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Lowest accepted option point value (inclusive)
    pub points_min: i64,
    /// Highest accepted option point value (inclusive)
    pub points_max: i64,
    /// Feedback mode for newly added criteria
    pub default_feedback: Feedback,
    /// Whether the AI example section is shown
    pub ai_examples_enabled: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            points_min: 0,
            points_max: 999,
            default_feedback: Feedback::Disabled,
            ai_examples_enabled: true,
        }
    }
}

impl EditorConfig {
    /// Parse and check a JSON configuration
    pub fn from_json(json: &str) -> FormResult<Self> {
        let config: EditorConfig =
            serde_json::from_str(json).map_err(|e| FormError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> FormResult<()> {
        if self.points_min > self.points_max {
            return Err(FormError::Config(format!(
                "points_min {} is greater than points_max {}",
                self.points_min, self.points_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.points_min, 0);
        assert_eq!(config.points_max, 999);
        assert_eq!(config.default_feedback, Feedback::Disabled);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{"points_max": 10, "default_feedback": "optional"}"#)
            .expect("valid config");
        assert_eq!(config.points_min, 0);
        assert_eq!(config.points_max, 10);
        assert_eq!(config.default_feedback, Feedback::Optional);
        assert!(config.ai_examples_enabled);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = EditorConfig::from_json(r#"{"points_min": 5, "points_max": 1}"#).unwrap_err();
        assert!(matches!(err, FormError::Config(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(EditorConfig::from_json("{points").is_err());
    }
}
