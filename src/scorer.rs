//! Sample Scorer - main coordinator for scoring water samples
//!
//! Resolves the standards overlay against the registry once, then scores
//! samples against it: validate → build measured-metal terms → seven indices →
//! classification → `SampleResult`. Includes sequential and parallel (Rayon)
//! batch scoring.

use rayon::prelude::*;

use crate::classification::{classify, IndexReadings};
use crate::data::{Registry, DEFAULT_REGISTRY};
use crate::error::Result;
use crate::metrics::*;
use crate::result::SampleResult;
use crate::sample::{ConcentrationSet, Sample};
use crate::utils::{ResolvedStandards, StandardsOverlay};

/// Main sample scorer
///
/// Holds only read-only state, so one scorer can be shared across threads.
#[derive(Debug, Clone)]
pub struct SampleScorer {
    registry: Registry,
    standards: ResolvedStandards,
    /// Separate standards pass for HMPI; `None` reuses `standards`
    hmpi_standards: Option<ResolvedStandards>,
}

/// Indices plus the bookkeeping needed to assemble a result
#[derive(Debug, Clone, PartialEq)]
pub struct IndexComputation {
    pub indices: IndexValues,
    pub measured_metals: Vec<String>,
    pub excluded_from_weighting: Vec<String>,
}

impl SampleScorer {
    /// Scorer over the default registry with no overrides
    pub fn new() -> Result<Self> {
        Self::with_overlay(&StandardsOverlay::new())
    }

    /// Scorer over the default registry with caller overrides
    pub fn with_overlay(overlay: &StandardsOverlay) -> Result<Self> {
        Self::with_registry(DEFAULT_REGISTRY, overlay)
    }

    /// Scorer over a custom registry table
    pub fn with_registry(registry: Registry, overlay: &StandardsOverlay) -> Result<Self> {
        registry.validate()?;
        let standards = overlay.resolve(&registry)?;

        tracing::debug!(
            "Scorer ready: registry {} ({} metals), {} override(s)",
            registry.version(),
            registry.len(),
            overlay.len()
        );

        Ok(Self {
            registry,
            standards,
            hmpi_standards: None,
        })
    }

    /// Use a different overlay for the HMPI pass only
    pub fn with_hmpi_overlay(mut self, overlay: &StandardsOverlay) -> Result<Self> {
        self.hmpi_standards = Some(overlay.resolve(&self.registry)?);
        Ok(self)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn standards(&self) -> &ResolvedStandards {
        &self.standards
    }

    /// Standards used for the HMPI pass
    pub fn hmpi_standards(&self) -> &ResolvedStandards {
        self.hmpi_standards.as_ref().unwrap_or(&self.standards)
    }

    /// Compute the seven indices for a concentration set
    ///
    /// Concentrations are validated first; any error means no values at all.
    pub fn compute_indices(&self, concentrations: &ConcentrationSet) -> Result<IndexComputation> {
        concentrations.validate(&self.registry)?;

        let terms = build_terms(concentrations, &self.standards)?;

        let hpi = calculate_hpi(&terms)?;
        let hmpi = if self.hmpi_standards.is_some() {
            let hmpi_terms = build_terms(concentrations, self.hmpi_standards())?;
            calculate_hmpi(&hmpi_terms)?
        } else {
            calculate_hmpi(&terms)?
        };

        let indices = IndexValues {
            hpi: hpi.value,
            hei: calculate_hei(&terms)?,
            hmpi: hmpi.value,
            hci: calculate_hci(&terms)?,
            cd: calculate_cd(&terms)?,
            pi: calculate_pi(&terms)?,
            pli: calculate_pli(&terms)?,
        };

        let mut excluded = hpi.excluded;
        for symbol in hmpi.excluded {
            if !excluded.contains(&symbol) {
                excluded.push(symbol);
            }
        }
        if !excluded.is_empty() {
            tracing::warn!(
                "Excluded from HPI/HMPI weighting (standard == ideal): {}",
                excluded.join(", ")
            );
        }

        Ok(IndexComputation {
            indices,
            measured_metals: terms.iter().map(|t| t.symbol.clone()).collect(),
            excluded_from_weighting: excluded,
        })
    }

    /// Score one sample
    pub fn score_sample(&self, sample: &Sample) -> Result<SampleResult> {
        sample.meta.validate()?;

        let computed = self.compute_indices(&sample.concentrations)?;
        let classification = classify(&IndexReadings::from(&computed.indices));

        tracing::debug!(
            "Scored sample {}: {} metal(s), overall {} (binding {})",
            sample.meta.sample_id,
            computed.measured_metals.len(),
            classification.overall,
            classification.binding_index
        );

        Ok(SampleResult::new(
            sample.meta.clone(),
            computed.indices,
            classification,
            computed.measured_metals,
            computed.excluded_from_weighting,
        ))
    }

    /// Score samples one after another
    pub fn score_batch_sequential(&self, samples: &[Sample]) -> Vec<Result<SampleResult>> {
        samples.iter().map(|s| self.score_sample(s)).collect()
    }

    /// Score independent samples IN PARALLEL using Rayon
    ///
    /// Output order matches input order. A failing sample does not affect
    /// the others.
    pub fn score_batch(&self, samples: &[Sample]) -> Vec<Result<SampleResult>> {
        tracing::info!("Scoring batch of {} sample(s)", samples.len());

        let results: Vec<_> = samples.par_iter().map(|s| self.score_sample(s)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(
            "Batch complete: {} scored, {} failed",
            results.len() - failed,
            failed
        );

        results
    }
}
