pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod job;
pub mod logging;
pub mod report;
pub mod sample;
pub mod stats;

pub use config::Config;
pub use convert::Conversions;
pub use error::{Error, Result};
pub use job::Job;
pub use sample::{Ingested, Sample, Warning};
pub use stats::StatisticsResult;
