//! Call recorder around a calculation strategy.

use std::sync::Arc;

use async_trait::async_trait;
use calculation_sdk::{CalculationError, Operands};
use spykit::{CallLog, Spy};

use super::strategy::Calculate;

type Outcome = Result<i64, CalculationError>;

/// Records the operands of every call, then answers from the configured overrides or,
/// when none applies, from the wrapped strategy.
///
/// Per call: next one-shot override, else persistent override, else the wrapped strategy.
///
/// ```ignore
/// let recorder = Arc::new(RecordingCalculation::new(Arc::new(DefaultCalculation::new(5))));
/// recorder.resolves_once(2).resolves_once(3);
/// let service = Service::with_strategy(recorder.clone());
/// ```
pub struct RecordingCalculation {
    inner: Arc<dyn Calculate>,
    spy: Spy<Operands, Outcome>,
}

impl RecordingCalculation {
    #[must_use]
    pub fn new(inner: Arc<dyn Calculate>) -> Self {
        Self {
            inner,
            spy: Spy::new(),
        }
    }

    pub fn resolves(&self, value: i64) -> &Self {
        self.spy.returns(Ok(value));
        self
    }

    pub fn resolves_once(&self, value: i64) -> &Self {
        self.spy.returns_once(Ok(value));
        self
    }

    pub fn rejects(&self, err: CalculationError) -> &Self {
        self.spy.returns(Err(err));
        self
    }

    pub fn rejects_once(&self, err: CalculationError) -> &Self {
        self.spy.returns_once(Err(err));
        self
    }

    /// Custom overrides (`implements`, `implements_once`, their async forms) and lifecycle
    /// (`restore`, `reset`).
    #[must_use]
    pub fn spy(&self) -> &Spy<Operands, Outcome> {
        &self.spy
    }

    #[must_use]
    pub fn calls(&self) -> &CallLog<Operands> {
        self.spy.calls()
    }
}

#[async_trait]
impl Calculate for RecordingCalculation {
    async fn calculate(&self, operands: Operands) -> Outcome {
        tracing::trace!(?operands, call = self.spy.calls().count() + 1, "recorded calculation");
        self.spy
            .invoke(operands, |operands| self.inner.calculate(operands))
            .await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::strategy::DefaultCalculation;

    fn recorder() -> RecordingCalculation {
        RecordingCalculation::new(Arc::new(DefaultCalculation::new(5)))
    }

    #[tokio::test]
    async fn passes_through_when_unconfigured() {
        let rec = recorder();
        assert_eq!(rec.calculate(Operands::NONE).await, Ok(5));
        assert_eq!(rec.calculate(Operands::pair(2, 3)).await, Ok(5));
        assert!(rec.calls().was_called_with(&Operands::pair(2, 3)));
    }

    #[tokio::test]
    async fn once_overrides_fall_back_to_persistent_override() {
        let rec = recorder();
        rec.resolves(9).resolves_once(2).resolves_once(3);

        assert_eq!(rec.calculate(Operands::NONE).await, Ok(2));
        assert_eq!(rec.calculate(Operands::NONE).await, Ok(3));
        assert_eq!(rec.calculate(Operands::NONE).await, Ok(9));
        assert_eq!(rec.calculate(Operands::NONE).await, Ok(9));
    }

    #[tokio::test]
    async fn once_overrides_fall_back_to_strategy() {
        let rec = recorder();
        rec.rejects_once(CalculationError::failed("boom"));

        assert_eq!(
            rec.calculate(Operands::NONE).await,
            Err(CalculationError::failed("boom"))
        );
        assert_eq!(rec.calculate(Operands::NONE).await, Ok(5));
    }

    #[tokio::test]
    async fn restore_returns_to_strategy() {
        let rec = recorder();
        rec.rejects(CalculationError::failed("boom"));
        assert!(rec.calculate(Operands::NONE).await.is_err());

        rec.spy().restore();
        assert_eq!(rec.calculate(Operands::NONE).await, Ok(5));
        assert_eq!(rec.calls().count(), 2);
    }
}
