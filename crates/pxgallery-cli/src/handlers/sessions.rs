use super::HandlerContext;
use crate::context::{ConfigOverrides, ExecutionContext};
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, overrides: &ConfigOverrides, out: &HandlerContext) -> Result<()> {
    let config = ctx.config(overrides)?;

    let plan = pxgallery_runtime::plan_sessions(&config)?;

    out.render(presenters::present_session_list(
        &plan,
        config.session_threshold_minutes,
    ))
}
