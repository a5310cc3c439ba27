//! Group values into fixed-size chunks

use crate::actions::Chunks;
use crate::utils::formatting::{format_chunks_human, render, OutputFormat};
use anyhow::Result;

/// Chunk `values` into groups of `size` and format the result
///
/// # Errors
///
/// Returns an `ActionError` if `size` is zero or does not divide the number of
/// values
pub fn execute(size: usize, values: Vec<String>, output_format: OutputFormat) -> Result<String> {
    let groups = Chunks::new(size)?.apply("values", values)?;
    render(output_format, &groups, |groups| {
        format_chunks_human("values", groups)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ActionError;

    fn values(raw: &str) -> Vec<String> {
        raw.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_json_output() {
        let output = execute(2, values("a b c d"), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["data"], serde_json::json!([["a", "b"], ["c", "d"]]));
    }

    #[test]
    fn test_wrong_multiple_is_action_error() {
        let error = execute(3, values("1 2 3 4"), OutputFormat::Human).unwrap_err();
        let action_error = error.downcast_ref::<ActionError>().expect("ActionError");
        assert_eq!(
            action_error.to_string(),
            "\"values\" args must be a multiple of 3"
        );
    }
}
