//! Externals module definition
//!
//! Reads `modules.externals.config` and wires the real HTTP and filesystem clients.

use anyhow::Result;
use async_trait::async_trait;
use hostkit::ModuleCtx;

use crate::config::ExternalsConfig;
use crate::wiring::wire_externals;

pub const MODULE_NAME: &str = "externals";

#[derive(Default)]
pub struct ExternalsModule;

#[async_trait]
impl hostkit::Module for ExternalsModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    async fn init(&self, ctx: &ModuleCtx) -> Result<()> {
        tracing::info!("Initializing externals module");

        let cfg: ExternalsConfig = ctx.config()?;
        wire_externals(&ctx.client_hub(), &cfg);

        tracing::info!("externals module initialized");
        Ok(())
    }
}
