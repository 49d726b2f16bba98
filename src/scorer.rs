//! Saju Scorer - Main coordinator for building a chart
//!
//! Runs the pipeline end to end:
//! calendar adapter → ohang aggregation → classification → interpretation.
//!
//! Calendar errors are returned exactly as the adapter produced them.

use crate::calendar::{CalendarAdapter, ChartPillars, CivilDateTime, Pillar};
use crate::error::SajuError;
use crate::explanation::{InterpretationBundle, InterpretationGenerator};
use crate::guardians::recommended_guardian;
use crate::metrics::{calculate_ohang, classify, DistributionSource, OhangDistribution};
use crate::types::{BirthInput, Element, UNKNOWN_TIME_HOUR};
use crate::utils::ScoringWeights;
use serde::{Deserialize, Serialize};

/// Display value of the hour pillar when the birth time is unknown
pub const UNKNOWN_PILLAR: &str = "?";

/// Stem-branch codes of the four pillars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarDisplay {
    pub year: String,
    pub month: String,
    pub day: String,
    /// `UNKNOWN_PILLAR` when the birth time is unknown
    pub hour: String,
}

impl PillarDisplay {
    pub fn from_pillars(pillars: &ChartPillars) -> Self {
        Self {
            year: pillars.year.ganzhi.clone(),
            month: pillars.month.ganzhi.clone(),
            day: pillars.day.ganzhi.clone(),
            hour: pillars
                .hour
                .as_ref()
                .map(|p: &Pillar| p.ganzhi.clone())
                .unwrap_or_else(|| UNKNOWN_PILLAR.to_string()),
        }
    }

    pub fn hour_known(&self) -> bool {
        self.hour != UNKNOWN_PILLAR
    }
}

/// Chart result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SajuResult {
    pub distribution: OhangDistribution,
    pub strongest: Element,
    pub weakest: Element,
    pub pillars: PillarDisplay,
    pub source: DistributionSource,
}

/// Everything the caller stores after onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SajuProfile {
    pub result: SajuResult,
    pub interpretation: InterpretationBundle,
    pub recommended_guardian_id: String,
}

impl SajuProfile {
    pub fn from_result(result: SajuResult) -> Self {
        let interpretation = InterpretationGenerator::generate(result.strongest, result.weakest);
        let recommended_guardian_id = recommended_guardian(result.weakest).id.to_string();
        Self {
            result,
            interpretation,
            recommended_guardian_id,
        }
    }
}

/// Main chart scorer
pub struct SajuScorer<C> {
    calendar: C,
    weights: ScoringWeights,
}

impl<C: CalendarAdapter> SajuScorer<C> {
    /// Scorer with the default weights
    pub fn new(calendar: C) -> Self {
        Self {
            calendar,
            weights: ScoringWeights::default(),
        }
    }

    /// Scorer with custom weights
    pub fn with_weights(calendar: C, weights: ScoringWeights) -> Result<Self, SajuError> {
        weights.validate()?;
        Ok(Self { calendar, weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Ask the calendar for the pillars of `input`
    ///
    /// The hour pillar is only requested when the birth time is known. Date
    /// pillars for an unknown time are taken at noon.
    pub fn fetch_pillars(&self, input: &BirthInput) -> Result<ChartPillars, C::Error> {
        let hour = input.birth_time.hour();
        let moment = CivilDateTime::at_hour(
            input.year,
            input.month,
            input.day,
            hour.unwrap_or(UNKNOWN_TIME_HOUR),
        );

        let date = self.calendar.date_pillars(&moment)?;
        let hour_pillar = match hour {
            Some(_) => Some(self.calendar.hour_pillar(&moment)?),
            None => None,
        };

        Ok(ChartPillars::new(date, hour_pillar))
    }

    /// Compute the chart for `input`
    pub fn compute(&self, input: &BirthInput) -> Result<SajuResult, C::Error> {
        let pillars = self.fetch_pillars(input)?;
        Ok(compute_from_pillars(&pillars, &self.weights))
    }

    /// Compute the chart and everything derived from it
    pub fn profile(&self, input: &BirthInput) -> Result<SajuProfile, C::Error> {
        self.compute(input).map(SajuProfile::from_result)
    }
}

/// Score pillars that are already in hand
pub fn compute_from_pillars(pillars: &ChartPillars, weights: &ScoringWeights) -> SajuResult {
    let ohang = calculate_ohang(pillars, weights);
    let classification = classify(&ohang.distribution);

    tracing::debug!(
        "Chart scored: pillars={}, total={:.2}, distribution={:?}, strongest={}, weakest={}",
        ohang.pillars_used,
        ohang.total,
        ohang.distribution,
        classification.strongest,
        classification.weakest,
    );

    SajuResult {
        distribution: ohang.distribution,
        strongest: classification.strongest,
        weakest: classification.weakest,
        pillars: PillarDisplay::from_pillars(pillars),
        source: ohang.source,
    }
}
