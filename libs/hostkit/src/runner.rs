//! Init phase runner.
//!
//! Modules are initialised in the given order against one shared [`ClientHub`], so a
//! module may resolve any client registered by a module listed before it.

use std::sync::Arc;

use crate::client_hub::ClientHub;
use crate::config::ConfigProvider;
use crate::context::ModuleCtx;
use crate::contracts::Module;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("module '{module}' failed to initialise")]
    Init {
        module: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

/// Run `init` for every module; stops at the first failure.
///
/// # Errors
/// `RunnerError::Init` naming the module whose `init` failed.
pub async fn init_modules(
    config: Arc<dyn ConfigProvider>,
    hub: Arc<ClientHub>,
    modules: &[&dyn Module],
) -> Result<(), RunnerError> {
    tracing::info!(count = modules.len(), "Phase: init");

    for module in modules {
        let ctx = ModuleCtx::new(module.name(), Arc::clone(&config), Arc::clone(&hub));
        module.init(&ctx).await.map_err(|source| RunnerError::Init {
            module: module.name(),
            source,
        })?;
    }

    Ok(())
}
