use super::HandlerContext;
use crate::context::{ConfigOverrides, ExecutionContext};
use crate::presentation::presenters;
use anyhow::Result;
use pxgallery_runtime::BuildOptions;

pub fn handle(
    ctx: &ExecutionContext,
    overrides: &ConfigOverrides,
    skip_media: bool,
    out: &HandlerContext,
) -> Result<()> {
    let config = ctx.config(overrides)?;

    let report = pxgallery_runtime::build(&config, BuildOptions { skip_media })?;

    out.render(presenters::present_build_result(&report))
}
