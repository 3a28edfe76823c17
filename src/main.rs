use anyhow::Result;
use inline_bundle::{Config, bundle};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_cli()?;
    bundle::run(&config)?;
    Ok(())
}
