//! Saju Engine
//!
//! Derives a five-element (ohang) profile from birth data.
//!
//! Pipeline, leaves first:
//! - `calendar/`: adapter contract for the external sexagenary calendar
//! - `utils/`: glyph lookup tables, percentage normalization, weights
//! - `metrics/`: ohang aggregation and strongest/weakest classification
//! - `explanation/`: interpretation text and JSON output
//! - `guardians/`: companion roster and recommendation ranking
//! - `scorer`: coordinator tying the pipeline together
//!
//! Everything here is synchronous, deterministic and free of I/O apart from
//! optional weight loading.

pub mod error;
pub mod types;
pub mod calendar;
pub mod utils;
pub mod metrics;
pub mod explanation;
pub mod guardians;
pub mod reading;
pub mod scorer;

// Re-export commonly used types
pub use error::SajuError;
pub use types::{BirthInput, BirthTime, DoubleHour, Element, ElementScores, Gender};
pub use calendar::{CalendarAdapter, ChartPillars, CivilDateTime, DatePillars, HiddenStems, Pillar, StaticCalendar};
pub use utils::ScoringWeights;
pub use metrics::*;
pub use explanation::{ElementCard, InterpretationBundle, InterpretationGenerator, JsonFormatter};
pub use guardians::{guardian_by_id, rank_companions, ranked_guardians, recommended_guardian, Companion, Guardian};
pub use reading::ReadingRequest;
pub use scorer::{compute_from_pillars, PillarDisplay, SajuProfile, SajuResult, SajuScorer, UNKNOWN_PILLAR};
