use std::path::PathBuf;

pub const STATISTICS_OUTPUT: &str = "StatisticsResults.txt";
pub const CONVERSION_OUTPUT: &str = "ConversionResults.txt";

/// Where a job reads its numbers from and where it writes its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Config {
        Config {
            input: input.into(),
            output: output.into(),
        }
    }
}
