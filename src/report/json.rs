//! JSON export

use crate::result::SampleResult;

/// JSON formatter for scored samples
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format result as pretty-printed JSON, indices rounded to `places`
    pub fn format(result: &SampleResult, places: u32) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&result.rounded(places))
    }

    /// Format result as compact JSON (no whitespace, full precision)
    pub fn format_compact(result: &SampleResult) -> Result<String, serde_json::Error> {
        serde_json::to_string(result)
    }

    /// Format a batch as a JSON array, indices rounded to `places`
    pub fn format_batch(results: &[SampleResult], places: u32) -> Result<String, serde_json::Error> {
        let rounded: Vec<SampleResult> = results.iter().map(|r| r.rounded(places)).collect();
        serde_json::to_string_pretty(&rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{ConcentrationSet, Sample, SampleMeta};
    use crate::scorer::SampleScorer;

    fn scored() -> SampleResult {
        let sample = Sample::new(
            SampleMeta::new("GW-01"),
            ConcentrationSet::new().with("Pb", 0.02).with("Cu", 1.0),
        );
        SampleScorer::new().unwrap().score_sample(&sample).unwrap()
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&scored(), 2).unwrap();

        assert!(json.contains("\"HEI\": 2.5"));
        assert!(json.contains("\"HPI\": 199.25"));
        assert!(json.contains("\"classification\": \"Critical\""));
        assert!(json.contains("\"sampleId\": \"GW-01\""));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&scored()).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"PLI\":1.0"));
    }

    #[test]
    fn test_format_batch() {
        let json = JsonFormatter::format_batch(&[scored(), scored()], 2).unwrap();
        let parsed: Vec<SampleResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
