use async_trait::async_trait;

/// A unit of wiring: reads its configuration and registers its clients in the hub.
#[async_trait]
pub trait Module: Send + Sync + 'static {
    /// Name of the configuration section under `modules.*`.
    fn name(&self) -> &'static str;

    async fn init(&self, ctx: &crate::context::ModuleCtx) -> anyhow::Result<()>;
}
