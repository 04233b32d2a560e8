//! @ai:module:intent CLI entry point for the NanoGrid summary function
//! @ai:module:layer presentation

use anyhow::{Context, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nanogrid_summary=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    nanogrid_summary::run().context("failed to produce summary report")?;
    Ok(())
}
