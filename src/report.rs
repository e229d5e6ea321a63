use std::{fmt, fs, path::Path};

use crate::error::{Error, Result};

/// Renders a statistic, or `None` when there was no data to compute it from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value(pub Option<f64>);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{:?}", value),
            None => write!(f, "None"),
        }
    }
}

/// Prints the report to stdout and writes the same text to `output`, replacing whatever
/// the file held before.
pub fn publish(report: &impl fmt::Display, output: &Path) -> Result<()> {
    let text = report.to_string();
    print!("{}", text);
    fs::write(output, &text).map_err(|source| Error::Write {
        path: output.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_a_decimal_point() {
        assert_eq!(Value(Some(2.)).to_string(), "2.0");
        assert_eq!(Value(Some(-2.5)).to_string(), "-2.5");
        assert_eq!(Value(Some(0.)).to_string(), "0.0");
        assert_eq!(Value(None).to_string(), "None");
    }

    #[test]
    fn publish_overwrites_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("results.txt");
        fs::write(&output, "stale content that is longer than the report\n").unwrap();

        publish(&"fresh\n", &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "fresh\n");
    }

    #[test]
    fn publish_reports_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no-such-dir").join("results.txt");

        assert!(matches!(
            publish(&"report\n", &output),
            Err(Error::Write { .. })
        ));
    }
}
