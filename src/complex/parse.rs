use std::str::FromStr;

use super::Complex;
use crate::error::ParseComplexError;

/// `"4,3"` -> `4 + 3i`. 공백은 허용됩니다.
impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (real, imaginary) = s
            .split_once(',')
            .ok_or_else(|| ParseComplexError::MissingSeparator(s.to_string()))?;
        Ok(Complex::new(
            parse_component("real", real)?,
            parse_component("imaginary", imaginary)?,
        ))
    }
}

fn parse_component(part: &'static str, input: &str) -> Result<f64, ParseComplexError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|source| ParseComplexError::InvalidComponent {
            part,
            input: input.to_string(),
            source,
        })
}
