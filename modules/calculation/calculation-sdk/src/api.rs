//! Calculation API trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The up to two operands of a `calculate` call.
///
/// Absent operands are kept as `None` so that "called with no arguments" stays
/// distinguishable from "called with zeros", both for the default calculation and for
/// recorded call history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operands {
    pub a: Option<i64>,
    pub b: Option<i64>,
}

impl Operands {
    /// No operands: `calculate()`.
    pub const NONE: Self = Self { a: None, b: None };

    /// `calculate(a)`.
    #[must_use]
    pub const fn one(a: i64) -> Self {
        Self {
            a: Some(a),
            b: None,
        }
    }

    /// `calculate(a, b)`.
    #[must_use]
    pub const fn pair(a: i64, b: i64) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.a.is_none() && self.b.is_none()
    }
}

/// Calculation API trait
///
/// `calculate` always completes through an await point, whether the implementation has
/// a value at hand or computes it asynchronously; callers treat both the same way.
#[async_trait]
pub trait CalculationClient: Send + Sync {
    /// Produce the result for `operands`.
    async fn calculate(&self, operands: Operands) -> Result<i64, CalculationError>;

    /// Fluent accessor returning this same client, so that `get().calculate(..)` chains.
    fn get(&self) -> &dyn CalculationClient;
}

/// Error type for calculation operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// The operation failed; carries the failure message unchanged.
    #[error("{0}")]
    Failed(String),

    #[error("overflow adding {a} and {b}")]
    Overflow { a: i64, b: i64 },

    #[error("internal error: {0}")]
    Internal(String),
}

impl CalculationError {
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
