//! Record value input.

use thiserror::Error;

/// Errors from parsing a typed record value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueInputError {
    #[error("'{input}' is not a valid number")]
    NotANumber { input: String },

    #[error("value cannot be negative")]
    Negative,
}

/// Parses a non-negative, finite value such as minutes, liters or hours.
///
/// A single comma is accepted as the decimal separator when the input has no
/// dot, so both `1.5` and `1,5` read as one and a half.
pub fn parse_value(input: &str) -> Result<f64, ValueInputError> {
    let input = input.trim();
    let normalized = if !input.contains('.') && input.matches(',').count() == 1 {
        input.replace(',', ".")
    } else {
        input.to_string()
    };

    let value: f64 = normalized
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ValueInputError::NotANumber {
            input: input.to_string(),
        })?;

    if value < 0.0 {
        return Err(ValueInputError::Negative);
    }
    // "-0" parses to negative zero
    Ok(value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::float_cmp, reason = "exact decimal literals")]
    fn parses_plain_numbers() {
        assert_eq!(parse_value("30").unwrap(), 30.0);
        assert_eq!(parse_value("2.5").unwrap(), 2.5);
        assert_eq!(parse_value(" 0 ").unwrap(), 0.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact decimal literals")]
    fn accepts_comma_decimal_separator() {
        assert_eq!(parse_value("1,5").unwrap(), 1.5);
        assert_eq!(parse_value("0,25").unwrap(), 0.25);
    }

    #[test]
    fn rejects_ambiguous_separators() {
        assert!(parse_value("1,000.5").is_err());
        assert!(parse_value("1,2,3").is_err());
    }

    #[test]
    fn rejects_non_numbers() {
        for input in ["", "abc", "NaN", "inf", "-inf", "1e400"] {
            assert_eq!(
                parse_value(input),
                Err(ValueInputError::NotANumber {
                    input: input.to_string()
                }),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_negative_values() {
        assert_eq!(parse_value("-1"), Err(ValueInputError::Negative));
        assert_eq!(parse_value("-0,5"), Err(ValueInputError::Negative));
    }

    #[test]
    fn negative_zero_reads_as_zero() {
        for input in ["-0", "-0.0", "-0,0"] {
            let value = parse_value(input).unwrap();
            assert!(value.is_sign_positive(), "{input} kept its sign");
            assert_eq!(format!("{value:.2}"), "0.00");
        }
    }
}
