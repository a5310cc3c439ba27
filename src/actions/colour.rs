//! Normalize 1, 3 or 4 numeric values into an RGBA colour

use crate::errors::ActionError;
use serde::Serialize;
use std::fmt::Debug;
use std::str::FromStr;

/// A numeric channel domain with inclusive bounds
///
/// `f64` channels use 0.0-1.0, `i64` channels use 0-255.
pub trait Channel: Copy + PartialOrd + Debug + FromStr {
    const MIN: Self;
    const MAX: Self;
}

impl Channel for f64 {
    const MIN: Self = 0.0;
    const MAX: Self = 1.0;
}

impl Channel for i64 {
    const MIN: Self = 0;
    const MAX: Self = 255;
}

/// A colour with exactly four channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
    pub alpha: T,
}

impl<T: Copy> Rgba<T> {
    #[must_use]
    pub const fn to_array(&self) -> [T; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl<T: Copy> From<Rgba<T>> for [T; 4] {
    fn from(colour: Rgba<T>) -> Self {
        colour.to_array()
    }
}

impl<T: Copy + Serialize> Serialize for Rgba<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

/// Colour normalization settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
    /// Whether a fourth (alpha) value may be supplied
    pub alpha: bool,
}

impl Default for Colour {
    fn default() -> Self {
        Self { alpha: true }
    }
}

impl Colour {
    /// Colour that only accepts 1 (constant) or 3 (rgb) values
    #[must_use]
    pub const fn without_alpha() -> Self {
        Self { alpha: false }
    }

    /// Expand `values` to four channels and range-check them
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an unsupported number of values or a
    /// channel outside `T::MIN..=T::MAX`
    pub fn apply<T: Channel>(&self, dest: &str, values: Vec<T>) -> Result<Rgba<T>, ActionError> {
        let colour = match values[..] {
            [v] => Rgba {
                red: v,
                green: v,
                blue: v,
                alpha: T::MAX,
            },
            [red, green, blue] => Rgba {
                red,
                green,
                blue,
                alpha: T::MAX,
            },
            [red, green, blue, alpha] if self.alpha => Rgba {
                red,
                green,
                blue,
                alpha,
            },
            _ => return Err(self.arity_error(dest)),
        };

        if !colour
            .to_array()
            .iter()
            .all(|v| (T::MIN..=T::MAX).contains(v))
        {
            return Err(ActionError::invalid(format!(
                "Colour values must be between {:?} and {:?}",
                T::MIN,
                T::MAX
            )));
        }

        Ok(colour)
    }

    /// Parse raw tokens as `T` and normalize them
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a token is not a valid `T`, or for any
    /// failure of [`Colour::apply`]
    pub fn parse<T: Channel>(&self, dest: &str, raw: &[String]) -> Result<Rgba<T>, ActionError> {
        let values = raw
            .iter()
            .map(|token| {
                token.parse::<T>().map_err(|_| {
                    ActionError::invalid(format!("Invalid colour value for {dest}: '{token}'"))
                })
            })
            .collect::<Result<Vec<T>, _>>()?;
        self.apply(dest, values)
    }

    fn arity_error(&self, dest: &str) -> ActionError {
        let allowed = if self.alpha {
            "1 (constant), 3 (rgb) or 4 (rgba)"
        } else {
            "1 (constant) or 3 (rgb)"
        };
        ActionError::invalid(format!(
            "Invalid number of arguments for {dest}, must be {allowed}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RGBA_ARITY: &str =
        "Invalid number of arguments for colour, must be 1 (constant), 3 (rgb) or 4 (rgba)";

    fn float(values: &[f64]) -> Result<[f64; 4], ActionError> {
        Colour::default().apply("colour", values.to_vec()).map(Into::into)
    }

    #[test]
    fn test_single_value_is_replicated() {
        assert_eq!(float(&[0.0]).unwrap(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rgb_gets_opaque_alpha() {
        assert_eq!(float(&[0.1, 0.2, 0.3]).unwrap(), [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(float(&[0.0, 0.5, 1.0]).unwrap(), [0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_rgba_passes_through() {
        assert_eq!(float(&[0.1, 0.2, 0.3, 0.4]).unwrap(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_wrong_arity() {
        let error = float(&[0.1, 0.5]).unwrap_err();
        assert_eq!(error.to_string(), RGBA_ARITY);

        let error = float(&[0.1, 0.2, 0.3, 0.4, 0.5]).unwrap_err();
        assert_eq!(error.to_string(), RGBA_ARITY);
    }

    #[test]
    fn test_alpha_disabled_rejects_four_values() {
        let error = Colour::without_alpha()
            .apply("colour", vec![0.1, 0.2, 0.3, 0.4])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid number of arguments for colour, must be 1 (constant) or 3 (rgb)"
        );

        let colour = Colour::without_alpha().apply("colour", vec![0.5]).unwrap();
        assert_eq!(colour.to_array(), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_out_of_range_float() {
        let error = float(&[2.0]).unwrap_err();
        assert!(matches!(error, ActionError::InvalidArgument(_)));
        assert_eq!(error.to_string(), "Colour values must be between 0.0 and 1.0");
    }

    #[test]
    fn test_integer_mode() {
        let colour = Colour::default().apply("colour", vec![0_i64]).unwrap();
        assert_eq!(colour.to_array(), [0, 0, 0, 255]);

        let colour = Colour::default()
            .apply("colour", vec![128_i64, 200, 255])
            .unwrap();
        assert_eq!(colour.to_array(), [128, 200, 255, 255]);
    }

    #[test]
    fn test_integer_out_of_range() {
        for bad in [vec![256_i64], vec![-1, 0, 0]] {
            let error = Colour::default().apply("colour", bad).unwrap_err();
            assert_eq!(error.to_string(), "Colour values must be between 0 and 255");
        }
    }

    #[test]
    fn test_parse_tokens() {
        let raw = vec!["0.25".to_string()];
        let colour: Rgba<f64> = Colour::default().parse("colour", &raw).unwrap();
        assert_eq!(colour.to_array(), [0.25, 0.25, 0.25, 1.0]);

        let raw = vec!["0.5".to_string()];
        let error = Colour::default().parse::<i64>("colour", &raw).unwrap_err();
        assert!(error.to_string().contains("'0.5'"));
    }

    #[test]
    fn test_serializes_as_array() {
        let colour = Colour::default().apply("colour", vec![1_i64, 2, 3]).unwrap();
        assert_eq!(serde_json::to_string(&colour).unwrap(), "[1,2,3,255]");
    }
}
