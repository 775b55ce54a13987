mod config;
mod persist;
mod runtime;
mod svg;

use anyhow::Result;
use clap::Parser;

use dial_engine::logging::init_logging;

use crate::config::{Cli, StudioConfig};
use crate::runtime::Runtime;

fn main() -> Result<()> {
    let config = StudioConfig::try_from(Cli::parse())?;
    init_logging(config.logging.clone());

    log::info!(
        "dial studio: {}px face, writing {}",
        config.size,
        config.out.display()
    );

    Runtime::new(config).run()
}
