//! Calculation Module definition
//!
//! Builds the calculation [`Service`] from `modules.calculation.config` and registers it
//! in the hub as `dyn CalculationClient`.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use calculation_sdk::CalculationClient;
use hostkit::ModuleCtx;

use crate::config::CalculationConfig;
use crate::domain::Service;

pub const MODULE_NAME: &str = "calculation";

/// Calculation module.
#[derive(Default)]
pub struct CalculationModule;

#[async_trait]
impl hostkit::Module for CalculationModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    async fn init(&self, ctx: &ModuleCtx) -> Result<()> {
        tracing::info!("Initializing calculation module");

        let cfg: CalculationConfig = ctx.config()?;
        let service = Arc::new(Service::new(&cfg));
        ctx.client_hub().register::<dyn CalculationClient>(service);

        tracing::info!(default_result = cfg.default_result, "calculation module initialized");
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use calculation_sdk::Operands;
    use hostkit::{AppConfig, ClientHub, init_modules};

    async fn hub_with(cfg: AppConfig) -> Arc<ClientHub> {
        let hub = Arc::new(ClientHub::new());
        init_modules(Arc::new(cfg), Arc::clone(&hub), &[&CalculationModule])
            .await
            .unwrap();
        hub
    }

    #[tokio::test]
    async fn registers_default_service() {
        let hub = hub_with(AppConfig::default()).await;
        let client = hub.get::<dyn CalculationClient>().unwrap();
        assert_eq!(client.calculate(Operands::NONE).await, Ok(5));
    }

    #[tokio::test]
    async fn honours_configured_default() {
        let cfg = AppConfig::from_yaml_str(
            "modules:\n  calculation:\n    config:\n      default_result: 12\n",
        )
        .unwrap();
        let hub = hub_with(cfg).await;
        let client = hub.get::<dyn CalculationClient>().unwrap();
        assert_eq!(client.get().calculate(Operands::NONE).await, Ok(12));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn logs_initialization_and_calculations() {
        let hub = hub_with(AppConfig::default()).await;
        let client = hub.get::<dyn CalculationClient>().unwrap();
        let _ = client.calculate(Operands::pair(1, 2)).await;

        assert!(logs_contain("Initializing calculation module"));
        assert!(logs_contain("calculation module initialized"));
        assert!(logs_contain("performing calculation"));
    }

    #[tokio::test]
    async fn rejects_unknown_config_keys() {
        let cfg = AppConfig::from_yaml_str(
            "modules:\n  calculation:\n    config:\n      default: 12\n",
        )
        .unwrap();
        let res = init_modules(
            Arc::new(cfg),
            Arc::new(ClientHub::new()),
            &[&CalculationModule],
        )
        .await;
        assert!(res.is_err());
    }
}
