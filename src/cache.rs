//! Memoized scoring
//!
//! Index computation is a pure function of the measured concentrations and the
//! standards/ideals those metals resolve to, so its output can be cached under
//! that pair. Entries are immutable (`Arc`) and never invalidated; the bound
//! only caps memory.

use moka::sync::Cache;
use std::sync::Arc;

use crate::classification::{classify, IndexReadings};
use crate::error::Result;
use crate::result::SampleResult;
use crate::sample::Sample;
use crate::scorer::{IndexComputation, SampleScorer};

/// Bit-exact key: (symbol, concentration, standard, ideal, hmpi standard, hmpi ideal)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreKey(Vec<(String, [u64; 5])>);

impl ScoreKey {
    fn for_sample(scorer: &SampleScorer, sample: &Sample) -> Option<Self> {
        let hmpi = scorer.hmpi_standards();
        let mut entries = Vec::with_capacity(sample.concentrations.len());

        for (symbol, concentration) in sample.concentrations.iter() {
            let s = scorer.standards().get(symbol)?;
            let h = hmpi.get(symbol)?;
            entries.push((
                symbol.to_string(),
                [
                    concentration.to_bits(),
                    s.standard.to_bits(),
                    s.ideal.to_bits(),
                    h.standard.to_bits(),
                    h.ideal.to_bits(),
                ],
            ));
        }

        Some(Self(entries))
    }
}

/// `SampleScorer` with a bounded memo of index computations
pub struct CachedScorer {
    scorer: SampleScorer,
    cache: Cache<ScoreKey, Arc<IndexComputation>>,
}

impl CachedScorer {
    pub fn new(scorer: SampleScorer, max_entries: u64) -> Self {
        Self {
            scorer,
            cache: Cache::new(max_entries),
        }
    }

    pub fn scorer(&self) -> &SampleScorer {
        &self.scorer
    }

    /// Score one sample, reusing cached indices when the inputs match
    ///
    /// Errors are never cached.
    pub fn score_sample(&self, sample: &Sample) -> Result<SampleResult> {
        sample.meta.validate()?;

        let Some(key) = ScoreKey::for_sample(&self.scorer, sample) else {
            // Unknown metal: let the scorer produce the proper error
            return self.scorer.score_sample(sample);
        };

        let computed = match self.cache.get(&key) {
            Some(hit) => {
                tracing::debug!("Cache hit for sample {}", sample.meta.sample_id);
                hit
            }
            None => {
                let fresh = Arc::new(self.scorer.compute_indices(&sample.concentrations)?);
                self.cache.insert(key, Arc::clone(&fresh));
                fresh
            }
        };

        let classification = classify(&IndexReadings::from(&computed.indices));

        Ok(SampleResult::new(
            sample.meta.clone(),
            computed.indices,
            classification,
            computed.measured_metals.clone(),
            computed.excluded_from_weighting.clone(),
        ))
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{ConcentrationSet, SampleMeta};

    #[test]
    fn test_cached_result_matches_uncached() {
        let scorer = SampleScorer::new().unwrap();
        let cached = CachedScorer::new(scorer.clone(), 100);

        let first = Sample::new(
            SampleMeta::new("A"),
            ConcentrationSet::new().with("Pb", 0.02).with("Cu", 1.0),
        );
        let second = Sample::new(SampleMeta::new("B"), first.concentrations.clone());

        let a = cached.score_sample(&first).unwrap();
        let b = cached.score_sample(&second).unwrap();

        assert_eq!(a, scorer.score_sample(&first).unwrap());
        assert_eq!(b.meta.sample_id, "B");
        assert_eq!(a.indices, b.indices);
        assert_eq!(cached.entry_count(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cached = CachedScorer::new(SampleScorer::new().unwrap(), 100);

        let only_fe = Sample::new(SampleMeta::new("C"), ConcentrationSet::new().with("Fe", 0.4));
        assert!(cached.score_sample(&only_fe).unwrap_err().is_computation());

        let unknown = Sample::new(SampleMeta::new("D"), ConcentrationSet::new().with("Sn", 0.4));
        assert!(cached.score_sample(&unknown).unwrap_err().is_input());

        assert_eq!(cached.entry_count(), 0);
    }
}
