use anyhow::{Context, Result};
use numstat::{cli::ConvertArgs, logging, Config, Job};

fn main() -> Result<()> {
    let args: ConvertArgs = argh::from_env();
    logging::init();

    let config: Config = args.into();
    Job::new(config)
        .conversion()
        .context("Failed to convert numbers")?;

    Ok(())
}
