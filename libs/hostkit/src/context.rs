use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::client_hub::ClientHub;
use crate::config::{ConfigError, ConfigProvider, module_config_or_default};

/// Module execution context passed to [`crate::Module::init`].
///
/// Gives a module its typed configuration section and the shared [`ClientHub`]
/// where it registers its own API and resolves the APIs of others.
///
/// ```ignore
/// async fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
///     let cfg: MyConfig = ctx.config()?;
///     ctx.client_hub().register::<dyn MyApi>(Arc::new(MyService::new(cfg)));
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ModuleCtx {
    module_name: Arc<str>,
    config_provider: Arc<dyn ConfigProvider>,
    client_hub: Arc<ClientHub>,
}

impl ModuleCtx {
    #[must_use]
    pub fn new(
        module_name: impl Into<Arc<str>>,
        config_provider: Arc<dyn ConfigProvider>,
        client_hub: Arc<ClientHub>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            config_provider,
            client_hub,
        }
    }

    #[inline]
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    #[inline]
    #[must_use]
    pub fn client_hub(&self) -> Arc<ClientHub> {
        Arc::clone(&self.client_hub)
    }

    /// Typed configuration for this module, falling back to `T::default()` when the
    /// section is absent.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the section is present but malformed.
    pub fn config<T: DeserializeOwned + Default>(&self) -> Result<T, ConfigError> {
        module_config_or_default(self.config_provider.as_ref(), &self.module_name)
    }

    /// Raw JSON section for this module, if any.
    #[must_use]
    pub fn raw_config(&self) -> Option<&serde_json::Value> {
        self.config_provider.get_module_config(&self.module_name)
    }
}
