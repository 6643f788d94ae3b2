//! Quiz configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration.

use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Drink style used when question 1 is absent or skipped.
pub const DEFAULT_DRINK_STYLE: &str = "black";

/// Progress credit, in percent, for a fully answered quiz while navigating.
pub const DEFAULT_LOOKAHEAD_PERCENT: f64 = 5.0;

/// Tunable quiz behavior.
///
/// # Example
///
/// ```rust
/// use blend_quiz::QuizConfig;
///
/// let config = QuizConfig::from_json(r#"{ "default_drink_style": "smooth-nutty" }"#).unwrap();
/// assert_eq!(config.default_drink_style, "smooth-nutty");
/// assert_eq!(config.lookahead_percent, 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Drink style substituted for a missing answer to question 1.
    /// The landing-page variant of the quiz uses `smooth-nutty`.
    pub default_drink_style: String,

    /// Weight of the answered-question credit added to navigation progress.
    pub lookahead_percent: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_drink_style: DEFAULT_DRINK_STYLE.to_string(),
            lookahead_percent: DEFAULT_LOOKAHEAD_PERCENT,
        }
    }
}

impl QuizConfig {
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let config: Self = serde_json::from_str(json).map_err(QuizError::InvalidConfig)?;
        config.validate()?;
        debug!(
            target: "blend_quiz",
            default_drink_style = %config.default_drink_style,
            lookahead_percent = config.lookahead_percent,
            "Loaded quiz config"
        );
        Ok(config)
    }

    /// Check that the lookahead credit is a finite percentage.
    pub fn validate(&self) -> Result<(), QuizError> {
        if (0.0..=100.0).contains(&self.lookahead_percent) {
            Ok(())
        } else {
            Err(QuizError::InvalidLookahead(self.lookahead_percent))
        }
    }

    pub fn default_drink_style(mut self, style: impl Into<String>) -> Self {
        self.default_drink_style = style.into();
        self
    }

    /// Set the lookahead credit. Not validated here; navigation progress
    /// is clamped into 0..=100 regardless.
    pub fn lookahead_percent(mut self, percent: f64) -> Self {
        self.lookahead_percent = percent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(QuizConfig::from_json("{}").unwrap(), QuizConfig::default());
    }

    #[test]
    fn fluent_setters_override_defaults() {
        let config = QuizConfig::default()
            .default_drink_style("smooth-nutty")
            .lookahead_percent(0.0);

        assert_eq!(config.default_drink_style, "smooth-nutty");
        assert_eq!(config.lookahead_percent, 0.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = QuizConfig::from_json("{ default_drink_style: ");
        assert!(matches!(result, Err(QuizError::InvalidConfig(_))));
    }

    #[test]
    fn out_of_range_lookahead_is_rejected() {
        assert!(matches!(
            QuizConfig::from_json(r#"{ "lookahead_percent": -600.0 }"#),
            Err(QuizError::InvalidLookahead(v)) if v == -600.0
        ));
        assert!(matches!(
            QuizConfig::from_json(r#"{ "lookahead_percent": 100.5 }"#),
            Err(QuizError::InvalidLookahead(_))
        ));
        assert!(QuizConfig::from_json(r#"{ "lookahead_percent": 100 }"#).is_ok());
    }

    #[test]
    fn validate_rejects_non_finite_lookahead() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.5] {
            let config = QuizConfig::default().lookahead_percent(value);
            assert!(matches!(
                config.validate(),
                Err(QuizError::InvalidLookahead(_))
            ));
        }
        assert!(QuizConfig::default().lookahead_percent(0.0).validate().is_ok());
        assert!(QuizConfig::default().lookahead_percent(100.0).validate().is_ok());
    }

    #[test]
    fn wrong_field_type_is_an_error() {
        let result = QuizConfig::from_json(r#"{ "lookahead_percent": "lots" }"#);
        assert!(matches!(result, Err(QuizError::InvalidConfig(_))));
    }
}
