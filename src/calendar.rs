//! Calendar adapter boundary
//!
//! The sexagenary conversion itself lives outside this crate. An adapter turns a
//! civil moment into pillars; the engine only reads the strings it hands back.
//!
//! The hour pillar is requested separately so that an unknown birth time never
//! reaches the calendar at all.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::convert::Infallible;

/// Hidden stems of one branch (never more than three in practice)
pub type HiddenStems = SmallVec<[String; 3]>;

/// Civil date-time in the proleptic Gregorian calendar, local time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    /// Moment at the top of `hour`
    pub fn at_hour(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute: 0,
            second: 0,
        }
    }
}

/// One pillar as returned by the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    /// Stem-branch code for display, e.g. "庚午"
    pub ganzhi: String,
    /// One element glyph per stem and branch, e.g. "金火". Scored.
    pub element_label: String,
    /// Hidden stems of the branch, main stem first, e.g. ["丁", "己"]
    pub hidden_stems: HiddenStems,
}

impl Pillar {
    pub fn new(
        ganzhi: impl Into<String>,
        element_label: impl Into<String>,
        hidden_stems: &[&str],
    ) -> Self {
        Self {
            ganzhi: ganzhi.into(),
            element_label: element_label.into(),
            hidden_stems: hidden_stems.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Year, month and day pillars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
}

/// The pillars actually used for one chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// `None` when the birth time is unknown
    pub hour: Option<Pillar>,
}

impl ChartPillars {
    pub fn new(date: DatePillars, hour: Option<Pillar>) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour,
        }
    }

    /// Pillars that take part in aggregation: year, month, day, then hour if present
    pub fn available(&self) -> impl Iterator<Item = &Pillar> {
        [&self.year, &self.month, &self.day]
            .into_iter()
            .chain(self.hour.as_ref())
    }
}

/// Converts a civil birth moment into pillars
///
/// Implementations must be deterministic. Errors are passed to the caller
/// untouched.
pub trait CalendarAdapter {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Year, month and day pillars for the moment
    fn date_pillars(&self, moment: &CivilDateTime) -> Result<DatePillars, Self::Error>;

    /// Hour pillar for the moment. Never called when the birth time is unknown.
    fn hour_pillar(&self, moment: &CivilDateTime) -> Result<Pillar, Self::Error>;
}

impl<C: CalendarAdapter + ?Sized> CalendarAdapter for &C {
    type Error = C::Error;

    fn date_pillars(&self, moment: &CivilDateTime) -> Result<DatePillars, Self::Error> {
        (**self).date_pillars(moment)
    }

    fn hour_pillar(&self, moment: &CivilDateTime) -> Result<Pillar, Self::Error> {
        (**self).hour_pillar(moment)
    }
}

/// Adapter that returns pillars supplied up front
///
/// Used when the four pillars are entered directly or replayed from a stored
/// chart. The civil moment is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCalendar {
    date: DatePillars,
    hour: Pillar,
}

impl StaticCalendar {
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            date: DatePillars { year, month, day },
            hour,
        }
    }
}

impl CalendarAdapter for StaticCalendar {
    type Error = Infallible;

    fn date_pillars(&self, _moment: &CivilDateTime) -> Result<DatePillars, Self::Error> {
        Ok(self.date.clone())
    }

    fn hour_pillar(&self, _moment: &CivilDateTime) -> Result<Pillar, Self::Error> {
        Ok(self.hour.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StaticCalendar {
        StaticCalendar::new(
            Pillar::new("庚午", "金火", &["丁", "己"]),
            Pillar::new("辛巳", "金火", &["丙", "庚", "戊"]),
            Pillar::new("庚辰", "金土", &["戊", "乙", "癸"]),
            Pillar::new("丙子", "火水", &["癸"]),
        )
    }

    #[test]
    fn test_available_skips_missing_hour() {
        let calendar = sample();
        let moment = CivilDateTime::at_hour(1990, 5, 15, 12);
        let date = calendar.date_pillars(&moment).unwrap();

        let without_hour = ChartPillars::new(date.clone(), None);
        assert_eq!(without_hour.available().count(), 3);

        let hour = calendar.hour_pillar(&moment).unwrap();
        let with_hour = ChartPillars::new(date, Some(hour));
        let codes: Vec<&str> = with_hour.available().map(|p| p.ganzhi.as_str()).collect();
        assert_eq!(codes, vec!["庚午", "辛巳", "庚辰", "丙子"]);
    }

    #[test]
    fn test_adapter_by_reference() {
        let calendar = sample();
        let by_ref = &calendar;
        let moment = CivilDateTime::at_hour(2000, 1, 1, 0);
        assert_eq!(by_ref.hour_pillar(&moment).unwrap().ganzhi, "丙子");
    }
}
