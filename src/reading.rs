//! Request payload for the long-form reading generator
//!
//! The reading itself is produced by an external service. This module only
//! flattens the chart facts into the JSON shape that service expects:
//!
//! ```json
//! {
//!   "pillars": { "year": "庚午", "month": "辛巳", "day": "庚辰", "time": "?" },
//!   "ohang": { "목": 3, "화": 34, "토": 23, "금": 38, "수": 2 },
//!   "strongest": "금",
//!   "weakest": "수",
//!   "gender": "남",
//!   "name": "홍길동"
//! }
//! ```

use crate::metrics::OhangDistribution;
use crate::scorer::SajuResult;
use crate::types::{BirthInput, Element, Gender};
use serde::{Deserialize, Serialize};

/// Pillar codes as the reading service names them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPillars {
    pub year: String,
    pub month: String,
    pub day: String,
    /// "?" when the birth time is unknown
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub pillars: ReadingPillars,
    pub ohang: OhangDistribution,
    pub strongest: Element,
    pub weakest: Element,
    pub gender: Gender,
    pub name: String,
}

impl ReadingRequest {
    pub fn new(input: &BirthInput, result: &SajuResult) -> Self {
        Self {
            pillars: ReadingPillars {
                year: result.pillars.year.clone(),
                month: result.pillars.month.clone(),
                day: result.pillars.day.clone(),
                time: result.pillars.hour.clone(),
            },
            ohang: result.distribution,
            strongest: result.strongest,
            weakest: result.weakest,
            gender: input.gender,
            name: input.name.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
