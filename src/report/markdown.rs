use crate::classification::{ClassifiedIndex, IndexKind, QualityLevel};
use crate::result::SampleResult;
use crate::utils::format_value;

/// Markdown formatter for scored samples
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format result as a markdown report, values at `places` decimals
    pub fn format(result: &SampleResult, places: u32) -> String {
        let mut md = String::with_capacity(1024);

        // Title with overall level
        md.push_str(&format!(
            "# Sample {} - {}\n\n",
            result.sample_id(),
            result.classification
        ));
        md.push_str(&format!("{}\n\n", result.classification.description()));
        md.push_str(&format!(
            "**Binding index:** {} ({})\n\n",
            result.binding_index,
            result.binding_index.kind().name()
        ));

        Self::format_metadata(&mut md, result);

        // Indices
        md.push_str("## Pollution Indices\n\n");
        md.push_str("| Index | Name | Value | Level |\n");
        md.push_str("|-------|------|-------|-------|\n");
        for index in IndexKind::ALL {
            let level = ClassifiedIndex::try_from(index)
                .ok()
                .and_then(|c| result.level(c))
                .map(QualityLevel::label)
                .unwrap_or("-");
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                index.code(),
                index.name(),
                format_value(result.value(index), places),
                level
            ));
        }
        md.push('\n');

        // Metals
        md.push_str(&format!(
            "**Measured metals:** {}\n\n",
            result.measured_metals.join(", ")
        ));
        if !result.excluded_from_weighting.is_empty() {
            md.push_str(&format!(
                "*Not weighted in HPI/HMPI (standard equals ideal value):* {}\n\n",
                result.excluded_from_weighting.join(", ")
            ));
        }

        // Legend
        md.push_str("## Quality Assessment Guidelines\n\n");
        for level in QualityLevel::ALL {
            md.push_str(&format!("- **{}**: {}\n", level.label(), level.guidance()));
        }

        md
    }

    fn format_metadata(md: &mut String, result: &SampleResult) {
        let meta = &result.meta;
        let mut lines = Vec::new();

        if let (Some(lat), Some(lon)) = (meta.latitude, meta.longitude) {
            lines.push(format!("- Location: {:.6}, {:.6}", lat, lon));
        }
        if let Some(depth) = meta.well_depth {
            lines.push(format!("- Well depth: {} m", depth));
        }
        if let Some(date) = meta.sampling_date {
            lines.push(format!("- Sampling date: {}", date.format("%Y-%m-%d")));
        }

        if lines.is_empty() {
            return;
        }

        md.push_str("## Sample\n\n");
        for line in lines {
            md.push_str(&line);
            md.push('\n');
        }
        md.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{ConcentrationSet, Sample, SampleMeta};
    use crate::scorer::SampleScorer;
    use chrono::NaiveDate;

    #[test]
    fn test_format_markdown() {
        let meta = SampleMeta::new("GW-02")
            .with_location(28.613939, 77.209021)
            .with_well_depth(35.0)
            .with_sampling_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let sample = Sample::new(
            meta,
            ConcentrationSet::new().with("Pb", 0.02).with("Cu", 1.0).with("Fe", 0.2),
        );
        let result = SampleScorer::new().unwrap().score_sample(&sample).unwrap();

        let md = MarkdownFormatter::format(&result, 2);

        assert!(md.starts_with("# Sample GW-02 - Critical"));
        assert!(md.contains("| HEI | Heavy-metal Evaluation Index | 3.17 | Good |"));
        assert!(md.contains("| Cd | Degree of Contamination | 1.00 | - |"));
        assert!(md.contains("- Location: 28.613939, 77.209021"));
        assert!(md.contains("- Sampling date: 2024-01-15"));
        assert!(md.contains("standard equals ideal value):* Fe"));
        assert!(md.contains("- **Poor**: Treatment required"));
    }
}
