//! Normalize colour channel values

use crate::actions::Colour;
use crate::utils::formatting::{format_colour_human, render, OutputFormat};
use anyhow::Result;

/// Colour command arguments
#[derive(Debug, Clone)]
pub struct ColourRequest<'a> {
    pub values: &'a [String],
    /// Interpret channels as 0-255 integers instead of 0.0-1.0 floats
    pub integers: bool,
    /// Accept a fourth (alpha) value
    pub alpha: bool,
    pub output_format: OutputFormat,
}

/// Normalize the requested colour and format it
///
/// # Errors
///
/// Returns an `ActionError` for unparsable values, the wrong number of values,
/// or channels outside the permitted range
pub fn execute(request: &ColourRequest<'_>) -> Result<String> {
    let colour = Colour {
        alpha: request.alpha,
    };

    if request.integers {
        let rgba = colour.parse::<i64>("colour", request.values)?;
        render(request.output_format, &rgba, format_colour_human)
    } else {
        let rgba = colour.parse::<f64>("colour", request.values)?;
        render(request.output_format, &rgba, format_colour_human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(values: &[String], integers: bool) -> ColourRequest<'_> {
        ColourRequest {
            values,
            integers,
            alpha: true,
            output_format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_float_colour() {
        let values = vec!["0.5".to_string()];
        let output = execute(&request(&values, false)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["data"], serde_json::json!([0.5, 0.5, 0.5, 1.0]));
    }

    #[test]
    fn test_integer_colour() {
        let values: Vec<String> = ["128", "200", "255"].map(String::from).to_vec();
        let output = execute(&request(&values, true)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["data"], serde_json::json!([128, 200, 255, 255]));
    }

    #[test]
    fn test_out_of_range() {
        let values = vec!["2".to_string()];
        let error = execute(&request(&values, false)).unwrap_err();
        assert_eq!(error.to_string(), "Colour values must be between 0.0 and 1.0");
    }
}
