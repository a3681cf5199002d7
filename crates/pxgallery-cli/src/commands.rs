use super::args::{Cli, Commands, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::context::{ConfigOverrides, ExecutionContext};
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let ctx = ExecutionContext::new(cli.config);

    match cli.command {
        Commands::Build {
            source,
            output,
            threshold,
            no_media,
        } => {
            let overrides = ConfigOverrides {
                source,
                output,
                threshold,
            };
            let out = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::build::handle(&ctx, &overrides, no_media, &out)
        }

        Commands::Sessions {
            source,
            threshold,
            view_mode,
        } => {
            let overrides = ConfigOverrides {
                source,
                threshold,
                ..Default::default()
            };
            let out = HandlerContext::new(cli.format, &view_mode);
            handlers::sessions::handle(&ctx, &overrides, &out)
        }

        Commands::Scan { source, view_mode } => {
            let overrides = ConfigOverrides {
                source,
                ..Default::default()
            };
            let out = HandlerContext::new(cli.format, &view_mode);
            handlers::scan::handle(&ctx, &overrides, &out)
        }

        Commands::Init { force } => {
            let out = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::init::handle(&ctx, force, &out)
        }
    }
}
