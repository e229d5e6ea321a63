use std::time::Instant;

use tracing::{info, warn};

use crate::{
    config::Config, convert::Conversions, error::Result, report, sample::Sample,
    stats::StatisticsResult,
};

/// One ingest, compute and report run over a single input file.
#[derive(Debug)]
pub struct Job {
    config: Config,
}

impl Job {
    pub fn new(config: Config) -> Job {
        Job { config }
    }

    /// Reads the input and logs every malformed line. `None` when nothing usable was
    /// read.
    fn ingest(&self) -> Result<Option<Sample>> {
        let ingested = Sample::read(&self.config.input)?;
        for warning in &ingested.warnings {
            warn!("{}", warning);
        }

        if ingested.sample.is_empty() {
            warn!(
                "no valid numbers in '{}', nothing to report",
                self.config.input.display()
            );
            return Ok(None);
        }
        info!(
            "read {} values from '{}'",
            ingested.sample.len(),
            self.config.input.display()
        );
        Ok(Some(ingested.sample))
    }

    pub fn statistics(&self) -> Result<Option<StatisticsResult>> {
        let start = Instant::now();
        let sample = match self.ingest()? {
            Some(sample) => sample,
            None => return Ok(None),
        };

        let result = StatisticsResult::compute(&sample).with_elapsed(start.elapsed());
        report::publish(&result, &self.config.output)?;
        info!("results saved to '{}'", self.config.output.display());
        Ok(Some(result))
    }

    pub fn conversion(&self) -> Result<Option<Conversions>> {
        let start = Instant::now();
        let sample = match self.ingest()? {
            Some(sample) => sample,
            None => return Ok(None),
        };

        let conversions = Conversions::compute(&sample);
        if conversions.is_empty() {
            warn!("no value could be converted, nothing to report");
            return Ok(None);
        }
        let conversions = conversions.with_elapsed(start.elapsed());
        report::publish(&conversions, &self.config.output)?;
        info!("results saved to '{}'", self.config.output.display());
        Ok(Some(conversions))
    }
}
