//! Configuration for the calculation module.

use serde::Deserialize;

/// Result of `calculate()` when called without operands.
pub const DEFAULT_RESULT: i64 = 5;

/// Configuration for the calculation module.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculationConfig {
    /// Value produced for a call without operands.
    /// Default: `5`
    pub default_result: i64,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            default_result: DEFAULT_RESULT,
        }
    }
}
