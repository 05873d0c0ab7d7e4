//! Test double for [`CalculationClient`].

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use spykit::{CallLog, Spy};

use crate::api::{CalculationClient, CalculationError, Operands};

type Outcome = Result<i64, CalculationError>;

/// Records every `calculate` and `get` call and lets tests override `calculate`.
///
/// Built with [`MockCalculationClient::new`] it has no real implementation behind it: an
/// unconfigured `calculate` fails with `CalculationError::Internal`. Built with
/// [`MockCalculationClient::spy_on`] it calls through to the wrapped client until an
/// override is configured. `get` always returns the mock itself.
pub struct MockCalculationClient {
    calculate: Spy<Operands, Outcome>,
    get_calls: CallLog<()>,
    real: Option<Arc<dyn CalculationClient>>,
}

impl Default for MockCalculationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCalculationClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculate: Spy::new(),
            get_calls: CallLog::new(),
            real: None,
        }
    }

    /// Wrap `real`: calls are recorded and fall through to it unless overridden.
    #[must_use]
    pub fn spy_on(real: Arc<dyn CalculationClient>) -> Self {
        Self {
            real: Some(real),
            ..Self::new()
        }
    }

    pub fn resolves(&self, value: i64) -> &Self {
        self.calculate.returns(Ok(value));
        self
    }

    pub fn resolves_once(&self, value: i64) -> &Self {
        self.calculate.returns_once(Ok(value));
        self
    }

    pub fn rejects(&self, err: CalculationError) -> &Self {
        self.calculate.returns(Err(err));
        self
    }

    pub fn rejects_once(&self, err: CalculationError) -> &Self {
        self.calculate.returns_once(Err(err));
        self
    }

    pub fn implements<F>(&self, f: F) -> &Self
    where
        F: Fn(Operands) -> Outcome + Send + Sync + 'static,
    {
        self.calculate.implements(f);
        self
    }

    pub fn implements_once<F>(&self, f: F) -> &Self
    where
        F: Fn(Operands) -> Outcome + Send + Sync + 'static,
    {
        self.calculate.implements_once(f);
        self
    }

    pub fn implements_async<F, Fut>(&self, f: F) -> &Self
    where
        F: Fn(Operands) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Outcome> + Send + 'static,
    {
        self.calculate.implements_async(f);
        self
    }

    /// Recorded `calculate` calls.
    #[must_use]
    pub fn calculate_calls(&self) -> &CallLog<Operands> {
        self.calculate.calls()
    }

    /// Recorded `get` calls.
    #[must_use]
    pub fn get_calls(&self) -> &CallLog<()> {
        &self.get_calls
    }

    /// Drop every `calculate` override; history is kept.
    pub fn restore(&self) {
        self.calculate.restore();
    }

    /// Drop history and overrides of both methods.
    pub fn reset(&self) {
        self.calculate.reset();
        self.get_calls.clear();
    }
}

#[async_trait]
impl CalculationClient for MockCalculationClient {
    async fn calculate(&self, operands: Operands) -> Outcome {
        let real = self.real.as_deref();
        self.calculate
            .invoke(operands, |operands| async move {
                match real {
                    Some(real) => real.calculate(operands).await,
                    None => Err(CalculationError::Internal(
                        "calculate called on a mock without a configured outcome".to_owned(),
                    )),
                }
            })
            .await
    }

    fn get(&self) -> &dyn CalculationClient {
        self.get_calls.record(());
        self
    }
}
