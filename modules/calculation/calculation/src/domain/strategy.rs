//! Calculation strategies
//!
//! The service never computes anything itself; it delegates to an `Arc<dyn Calculate>`
//! chosen at construction time.

use async_trait::async_trait;
use calculation_sdk::{CalculationError, Operands};
use tracing::debug;

/// A replaceable calculation.
#[async_trait]
pub trait Calculate: Send + Sync {
    async fn calculate(&self, operands: Operands) -> Result<i64, CalculationError>;
}

/// Built-in calculation.
///
/// - no operands: the configured default result
/// - otherwise: the sum of the operands present, failing on overflow
#[derive(Debug, Clone, Copy)]
pub struct DefaultCalculation {
    default_result: i64,
}

impl DefaultCalculation {
    #[must_use]
    pub fn new(default_result: i64) -> Self {
        Self { default_result }
    }

    fn evaluate(self, operands: Operands) -> Result<i64, CalculationError> {
        if operands.is_empty() {
            return Ok(self.default_result);
        }
        let a = operands.a.unwrap_or_default();
        let b = operands.b.unwrap_or_default();
        a.checked_add(b).ok_or(CalculationError::Overflow { a, b })
    }
}

#[async_trait]
impl Calculate for DefaultCalculation {
    async fn calculate(&self, operands: Operands) -> Result<i64, CalculationError> {
        debug!(a = ?operands.a, b = ?operands.b, "performing calculation");
        self.evaluate(operands)
    }
}

/// A synchronous closure used as a strategy.
pub struct FnCalculation<F>(F);

/// Wrap `f` as a [`Calculate`] strategy.
#[must_use]
pub fn from_fn<F>(f: F) -> FnCalculation<F>
where
    F: Fn(Operands) -> Result<i64, CalculationError> + Send + Sync,
{
    FnCalculation(f)
}

#[async_trait]
impl<F> Calculate for FnCalculation<F>
where
    F: Fn(Operands) -> Result<i64, CalculationError> + Send + Sync,
{
    async fn calculate(&self, operands: Operands) -> Result<i64, CalculationError> {
        (self.0)(operands)
    }
}
