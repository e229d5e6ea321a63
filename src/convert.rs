use std::{fmt, time::Duration};

use tracing::warn;

use crate::sample::Sample;

/// Binary and hexadecimal renderings of the integer part of every value in a sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversions {
    pub binary: Vec<String>,
    pub hexadecimal: Vec<String>,
    pub elapsed: Duration,
}

/// Truncates toward zero. `None` if the result does not fit in an `i128`.
fn integer_part(value: f64) -> Option<i128> {
    let truncated = value.trunc();
    // i128::MAX is not representable as f64; 2^127 is the first value out of range
    if truncated >= -(2f64.powi(127)) && truncated < 2f64.powi(127) {
        Some(truncated as i128)
    } else {
        None
    }
}

fn sign(number: i128) -> &'static str {
    if number < 0 {
        "-"
    } else {
        ""
    }
}

pub fn to_binary(number: i128) -> String {
    format!("{}0b{:b}", sign(number), number.unsigned_abs())
}

pub fn to_hexadecimal(number: i128) -> String {
    format!("{}0x{:x}", sign(number), number.unsigned_abs())
}

impl Conversions {
    pub fn compute(sample: &Sample) -> Conversions {
        let mut conversions = Conversions::default();
        for &value in sample.values() {
            match integer_part(value) {
                Some(number) => {
                    conversions.binary.push(to_binary(number));
                    conversions.hexadecimal.push(to_hexadecimal(number));
                }
                None => warn!("{:?} is out of range for conversion, skipping", value),
            }
        }
        conversions
    }

    pub fn with_elapsed(self, elapsed: Duration) -> Conversions {
        Conversions { elapsed, ..self }
    }

    pub fn is_empty(&self) -> bool {
        self.binary.is_empty()
    }
}

impl fmt::Display for Conversions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion Results:")?;
        writeln!(f, "Binary:")?;
        for line in &self.binary {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "Hexadecimal:")?;
        for line in &self.hexadecimal {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "Time Elapsed: {:?} seconds", self.elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        let conversions = Conversions::compute(&Sample::new(vec![10.7, -5.9, 0., -0.4]));

        assert_eq!(conversions.binary, vec!["0b1010", "-0b101", "0b0", "0b0"]);
        assert_eq!(conversions.hexadecimal, vec!["0xa", "-0x5", "0x0", "0x0"]);
    }

    #[test]
    fn large_values() {
        assert_eq!(to_hexadecimal(1 << 64), "0x10000000000000000");
        assert_eq!(to_hexadecimal(i128::MIN), format!("-0x8{}", "0".repeat(31)));
        assert_eq!(to_binary(255), "0b11111111");
    }

    #[test]
    fn out_of_range_values_are_skipped() {
        let conversions = Conversions::compute(&Sample::new(vec![1e40, 3.]));

        assert_eq!(conversions.binary, vec!["0b11"]);
        assert_eq!(conversions.hexadecimal, vec!["0x3"]);
    }

    #[test]
    fn renders_report() {
        let conversions = Conversions::compute(&Sample::new(vec![2., 31.]))
            .with_elapsed(Duration::from_millis(500));

        assert_eq!(
            conversions.to_string(),
            "Conversion Results:\n\
             Binary:\n\
             0b10\n\
             0b11111\n\
             \n\
             Hexadecimal:\n\
             0x2\n\
             0x1f\n\
             \n\
             Time Elapsed: 0.5 seconds\n"
        );
    }
}
