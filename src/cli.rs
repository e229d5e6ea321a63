use std::path::PathBuf;

use argh::FromArgs;

use crate::config::{Config, CONVERSION_OUTPUT, STATISTICS_OUTPUT};

#[derive(FromArgs, Debug)]
/// Compute mean, median, mode, standard deviation and variance of a file with one number
/// per line. Results are also written to StatisticsResults.txt.
pub struct StatisticsArgs {
    /// path to the file with the numbers
    #[argh(positional)]
    pub file_path: PathBuf,
}

impl From<StatisticsArgs> for Config {
    fn from(args: StatisticsArgs) -> Self {
        Config::new(args.file_path, STATISTICS_OUTPUT)
    }
}

#[derive(FromArgs, Debug)]
/// Convert every number of a file with one number per line to binary and hexadecimal.
/// Results are also written to ConversionResults.txt.
pub struct ConvertArgs {
    /// path to the file with the numbers
    #[argh(positional)]
    pub file_path: PathBuf,
}

impl From<ConvertArgs> for Config {
    fn from(args: ConvertArgs) -> Self {
        Config::new(args.file_path, CONVERSION_OUTPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_exactly_one_path() {
        let args = StatisticsArgs::from_args(&["compute-statistics"], &["data.txt"]).unwrap();
        let config: Config = args.into();

        assert_eq!(config, Config::new("data.txt", "StatisticsResults.txt"));
    }

    #[test]
    fn missing_path_is_a_usage_error() {
        let exit = StatisticsArgs::from_args(&["compute-statistics"], &[]).unwrap_err();

        assert!(exit.status.is_err());
        assert!(!exit.output.is_empty());
    }

    #[test]
    fn extra_arguments_are_a_usage_error() {
        let exit = ConvertArgs::from_args(&["convert-numbers"], &["a.txt", "b.txt"]).unwrap_err();

        assert!(exit.status.is_err());
    }

    #[test]
    fn help_is_not_an_error() {
        let exit = ConvertArgs::from_args(&["convert-numbers"], &["--help"]).unwrap_err();

        assert!(exit.status.is_ok());
        assert!(exit.output.contains("Usage: convert-numbers"));
    }
}
