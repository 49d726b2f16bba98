//! Normalization Utilities
//!
//! Converts weighted element counts to integer percentages that always sum to
//! exactly 100, and holds the weight configuration used to build those counts.

use crate::error::SajuError;
use crate::types::{Element, ElementScores};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Whole-count contribution of each glyph in a pillar's element label
pub const STEM_BRANCH_UNIT: f64 = 1.0;

/// Hidden-stem weights by position (main, middle, residual)
pub const HIDDEN_STEM_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

/// Share given to every element when there is no weight at all
pub const FALLBACK_PERCENT: u8 = 20;

/// Weights used by the aggregator
///
/// Always valid: every constructor, deserialization included, goes through
/// `ScoringWeights::new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    stem_branch_unit: f64,
    hidden_stem_weights: [f64; 3],
}

/// On-disk shape; missing fields keep their defaults
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
struct WeightsFile {
    stem_branch_unit: f64,
    hidden_stem_weights: [f64; 3],
}

impl Default for WeightsFile {
    fn default() -> Self {
        Self {
            stem_branch_unit: STEM_BRANCH_UNIT,
            hidden_stem_weights: HIDDEN_STEM_WEIGHTS,
        }
    }
}

impl<'de> Deserialize<'de> for ScoringWeights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let file = WeightsFile::deserialize(deserializer)?;
        ScoringWeights::new(file.stem_branch_unit, file.hidden_stem_weights)
            .map_err(serde::de::Error::custom)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            stem_branch_unit: STEM_BRANCH_UNIT,
            hidden_stem_weights: HIDDEN_STEM_WEIGHTS,
        }
    }
}

impl ScoringWeights {
    /// Build weights, rejecting anything `validate` would
    pub fn new(stem_branch_unit: f64, hidden_stem_weights: [f64; 3]) -> Result<Self, SajuError> {
        let weights = Self {
            stem_branch_unit,
            hidden_stem_weights,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Load weights from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring weights file: {:?}", path))?;

        Self::from_json(&contents)
    }

    /// Parse weights from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let file: WeightsFile = serde_json::from_str(json)
            .with_context(|| "Failed to parse scoring weights JSON")?;

        Ok(Self::new(file.stem_branch_unit, file.hidden_stem_weights)?)
    }

    /// Every weight must be finite and non-negative, and each hidden-stem
    /// weight strictly below the stem/branch unit
    pub fn validate(&self) -> Result<(), SajuError> {
        let all = std::iter::once(self.stem_branch_unit).chain(self.hidden_stem_weights);
        for w in all {
            if !w.is_finite() || w < 0.0 {
                return Err(SajuError::InvalidWeights(format!(
                    "weight {} must be finite and non-negative",
                    w
                )));
            }
        }
        if let Some(&w) = self
            .hidden_stem_weights
            .iter()
            .find(|&&w| w >= self.stem_branch_unit)
        {
            return Err(SajuError::InvalidWeights(format!(
                "hidden stem weight {} must be below the stem/branch unit {}",
                w, self.stem_branch_unit
            )));
        }
        Ok(())
    }

    pub fn stem_branch_unit(&self) -> f64 {
        self.stem_branch_unit
    }

    pub fn hidden_stem_weights(&self) -> [f64; 3] {
        self.hidden_stem_weights
    }

    /// Weight for a hidden stem at `position`, `None` past the third entry
    pub fn hidden_weight(&self, position: usize) -> Option<f64> {
        self.hidden_stem_weights.get(position).copied()
    }
}

/// Convert weighted counts to percentages summing to 100
///
/// Algorithm:
/// 1. total = sum of all counts; `None` if total is not positive or any
///    count is negative or non-finite
/// 2. percent = round(count / total × 100), halves rounding up
/// 3. diff = 100 − sum(percent); added to the largest percentage
///    (first in canonical order on ties)
pub fn percentages(counts: &ElementScores<f64>) -> Option<ElementScores<u8>> {
    if Element::ALL
        .iter()
        .any(|&e| !counts.get(e).is_finite() || counts.get(e) < 0.0)
    {
        return None;
    }

    let total: f64 = Element::ALL.iter().map(|&e| counts.get(e)).sum();
    if !(total > 0.0) {
        return None;
    }

    let mut rounded = ElementScores::<i32>::default();
    for e in Element::ALL {
        *rounded.get_mut(e) = (counts.get(e) / total * 100.0).round() as i32;
    }

    correct_remainder(&mut rounded);

    let mut out = ElementScores::<u8>::default();
    for e in Element::ALL {
        let share = rounded.get(e);
        debug_assert!((0..=100).contains(&share), "share {} out of range", share);
        *out.get_mut(e) = share as u8;
    }
    Some(out)
}

/// Push the rounding remainder onto the largest element
pub fn correct_remainder(rounded: &mut ElementScores<i32>) {
    let sum: i32 = Element::ALL.iter().map(|&e| rounded.get(e)).sum();
    let diff = 100 - sum;
    if diff == 0 {
        return;
    }

    let largest = largest_element(rounded);
    *rounded.get_mut(largest) += diff;
}

/// Element with the maximum value; ties go to the earliest in canonical order
pub fn largest_element<T: Copy + PartialOrd>(values: &ElementScores<T>) -> Element {
    let mut best = Element::ALL[0];
    for e in Element::ALL.into_iter().skip(1) {
        if values.get(e) > values.get(best) {
            best = e;
        }
    }
    best
}
