//! Engine tunables.

use crate::geometry::LINE_HIT_TOLERANCE;
use crate::selection::HANDLE_TOLERANCE;
use crate::shapes::MIN_DIM;
use crate::tools::MIN_CREATE_SIZE;
use serde::{Deserialize, Serialize};

/// Thresholds used by the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum width/height after a resize.
    pub min_dim: f64,
    /// Creation discard threshold, applied to both axes.
    pub min_create_size: f64,
    /// Distance (exclusive) within which a point hits a line.
    pub line_hit_tolerance: f64,
    /// Half-width of a handle's hit square.
    pub handle_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_dim: MIN_DIM,
            min_create_size: MIN_CREATE_SIZE,
            line_hit_tolerance: LINE_HIT_TOLERANCE,
            handle_tolerance: HANDLE_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.min_dim, 10.0);
        assert_eq!(config.min_create_size, 5.0);
        assert_eq!(config.line_hit_tolerance, 5.0);
        assert_eq!(config.handle_tolerance, 10.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"min_dim": 20.0}"#).unwrap();
        assert_eq!(config.min_dim, 20.0);
        assert_eq!(config.handle_tolerance, HANDLE_TOLERANCE);
    }
}
