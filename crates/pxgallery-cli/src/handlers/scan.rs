use super::HandlerContext;
use crate::context::{ConfigOverrides, ExecutionContext};
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, overrides: &ConfigOverrides, out: &HandlerContext) -> Result<()> {
    let config = ctx.config(overrides)?;

    let (listing, extraction) = pxgallery_runtime::scan_source(&config)?;

    out.render(presenters::present_scan_result(
        &listing,
        &extraction,
        &config.naming(),
    ))
}
