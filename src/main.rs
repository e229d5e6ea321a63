use anyhow::{Context, Result};
use numstat::{cli::StatisticsArgs, logging, Config, Job};

fn main() -> Result<()> {
    let args: StatisticsArgs = argh::from_env();
    logging::init();

    let config: Config = args.into();
    Job::new(config)
        .statistics()
        .context("Failed to compute statistics")?;

    Ok(())
}
