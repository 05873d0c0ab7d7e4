//! Domain service for calculation

use std::sync::Arc;

use async_trait::async_trait;
use calculation_sdk::{CalculationClient, CalculationError, Operands};

use super::strategy::{Calculate, DefaultCalculation};
use crate::config::CalculationConfig;

/// Calculation service.
///
/// Holds the strategy that answers `calculate`; [`Service::with_strategy`] is the
/// injection point tests use to put a recorder or a fixed implementation in its place.
#[derive(Clone)]
pub struct Service {
    strategy: Arc<dyn Calculate>,
}

impl Service {
    /// Service backed by [`DefaultCalculation`].
    #[must_use]
    pub fn new(config: &CalculationConfig) -> Self {
        Self::with_strategy(Arc::new(DefaultCalculation::new(config.default_result)))
    }

    #[must_use]
    pub fn with_strategy(strategy: Arc<dyn Calculate>) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub fn strategy(&self) -> &Arc<dyn Calculate> {
        &self.strategy
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new(&CalculationConfig::default())
    }
}

#[async_trait]
impl CalculationClient for Service {
    async fn calculate(&self, operands: Operands) -> Result<i64, CalculationError> {
        self.strategy.calculate(operands).await
    }

    fn get(&self) -> &dyn CalculationClient {
        self
    }
}
