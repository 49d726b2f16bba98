//! OHANG AGGREGATION
//!
//! Turns the available pillars into a five-element distribution.
//!
//! **Weighting**:
//!   - every glyph of a pillar's element label counts one whole unit
//!   - hidden stems add 0.5 / 0.3 / 0.2 by position (main, middle, residual)
//!   - glyphs outside the lookup tables contribute nothing
//!
//! **Hour pillar**: omitted entirely when the birth time is unknown, so the
//! denominator shrinks rather than a zero-weighted pillar being added.
//!
//! **Zero weight**: if nothing maps, the distribution is the uniform 20×5
//! fallback. That is the only path that produces it.

use crate::calendar::{ChartPillars, Pillar};
use crate::types::{Element, ElementScores};
use crate::utils::normalization::{percentages, FALLBACK_PERCENT};
use crate::utils::{element_for_hidden_stem, element_for_label_glyph, ScoringWeights};
use serde::{Deserialize, Serialize};

/// Five integer percentages summing to exactly 100
pub type OhangDistribution = ElementScores<u8>;

/// How a distribution was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionSource {
    /// Normalized from real weights
    Weighted,
    /// No pillar glyph mapped to an element; uniform shares were used
    ZeroWeightFallback,
}

/// Result of aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct OhangResult {
    /// Weighted counts before normalization
    pub raw: ElementScores<f64>,
    /// Sum of `raw`
    pub total: f64,
    /// Percentages (sum = 100)
    pub distribution: OhangDistribution,
    pub source: DistributionSource,
    /// Number of pillars that took part (3 or 4)
    pub pillars_used: usize,
    /// Glyphs that mapped to nothing
    pub skipped_glyphs: usize,
}

/// Uniform distribution used when there is no weight at all
pub fn fallback_distribution() -> OhangDistribution {
    ElementScores::uniform(FALLBACK_PERCENT)
}

/// Add one pillar's weight to `counts`; returns the number of skipped glyphs
pub fn accumulate_pillar(
    pillar: &Pillar,
    weights: &ScoringWeights,
    counts: &mut ElementScores<f64>,
) -> usize {
    let mut skipped = 0;

    for glyph in pillar.element_label.chars() {
        match element_for_label_glyph(glyph) {
            Some(element) => *counts.get_mut(element) += weights.stem_branch_unit(),
            None => {
                tracing::debug!("Skipping unmapped element glyph {:?} in pillar {}", glyph, pillar.ganzhi);
                skipped += 1;
            }
        }
    }

    if pillar.hidden_stems.len() > weights.hidden_stem_weights().len() {
        tracing::warn!(
            "Pillar {} has {} hidden stems; entries past the third are ignored",
            pillar.ganzhi,
            pillar.hidden_stems.len()
        );
    }

    for (position, stem) in pillar.hidden_stems.iter().enumerate() {
        let Some(weight) = weights.hidden_weight(position) else {
            break;
        };
        match element_for_hidden_stem(stem) {
            Some(element) => *counts.get_mut(element) += weight,
            None => {
                tracing::debug!("Skipping unmapped hidden stem {:?} in pillar {}", stem, pillar.ganzhi);
                skipped += 1;
            }
        }
    }

    skipped
}

/// Aggregate the available pillars into an ohang distribution
pub fn calculate_ohang(pillars: &ChartPillars, weights: &ScoringWeights) -> OhangResult {
    let mut raw = ElementScores::<f64>::default();
    let mut pillars_used = 0;
    let mut skipped_glyphs = 0;

    for pillar in pillars.available() {
        skipped_glyphs += accumulate_pillar(pillar, weights, &mut raw);
        pillars_used += 1;
    }

    let total: f64 = Element::ALL.iter().map(|&e| raw.get(e)).sum();

    let (distribution, source) = match percentages(&raw) {
        Some(distribution) => (distribution, DistributionSource::Weighted),
        None => {
            tracing::warn!(
                "Pillars carried no element weight ({} glyphs skipped); using uniform fallback",
                skipped_glyphs
            );
            (fallback_distribution(), DistributionSource::ZeroWeightFallback)
        }
    };

    OhangResult {
        raw,
        total,
        distribution,
        source,
        pillars_used,
        skipped_glyphs,
    }
}
