use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{Error, Result};

/// Numbers collected from a line-oriented source, one value per line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

/// A line that could not be parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// 1-based line number
    pub line: usize,
    pub raw: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid data at line {}: '{}'", self.line, self.raw)
    }
}

#[derive(Debug, Default)]
pub struct Ingested {
    pub sample: Sample,
    pub warnings: Vec<Warning>,
}

/// Parses a single line as a finite base-10 float.
///
/// Surrounding whitespace is ignored. `nan` and `inf` are rejected since they have no
/// place in an order statistic or a frequency table.
pub fn parse_value(line: &str) -> Option<f64> {
    line.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

impl Sample {
    pub fn new(values: Vec<f64>) -> Sample {
        Sample { values }
    }

    pub fn read(path: &Path) -> Result<Ingested> {
        let file = File::open(path).map_err(|e| Error::source_unavailable(path.to_owned(), e))?;
        Sample::from_reader(BufReader::new(file))
            .map_err(|e| Error::source_unavailable(path.to_owned(), e))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Ingested> {
        let mut values = Vec::new();
        let mut warnings = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_value(&line) {
                Some(value) => values.push(value),
                None => warnings.push(Warning {
                    line: index + 1,
                    raw: line,
                }),
            }
        }

        Ok(Ingested {
            sample: Sample { values },
            warnings,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
