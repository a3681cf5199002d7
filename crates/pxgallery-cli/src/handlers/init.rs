use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::InitOutcome;
use anyhow::{Context, Result};
use pxgallery_runtime::Config;

pub fn handle(ctx: &ExecutionContext, force: bool, out: &HandlerContext) -> Result<()> {
    let path = ctx.config_path();
    let exists = path.exists();

    let outcome = match (exists, force) {
        (true, false) => InitOutcome::KeptExisting,
        (true, true) => InitOutcome::Overwritten,
        (false, _) => InitOutcome::Created,
    };

    if outcome != InitOutcome::KeptExisting {
        Config::default()
            .save_to(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote default configuration");
    }

    let config = ctx.config(&Default::default())?;

    out.render(presenters::present_init_result(path, outcome, &config))
}
