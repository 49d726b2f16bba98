//! Core value types shared across the engine
//!
//! - `Element`: the five elements (ohang) in declared canonical order
//! - `ElementScores<T>`: one value per element, serialized with Korean keys
//! - `BirthInput`: what the onboarding screen collects
//! - `BirthTime` / `DoubleHour`: the 12 traditional two-hour bins plus "unknown"

use crate::error::SajuError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "목")]
    Wood,
    #[serde(rename = "화")]
    Fire,
    #[serde(rename = "토")]
    Earth,
    #[serde(rename = "금")]
    Metal,
    #[serde(rename = "수")]
    Water,
}

impl Element {
    /// Canonical order. Every tie-break in the engine iterates this array,
    /// never a map.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in `Element::ALL`
    pub fn index(self) -> usize {
        match self {
            Element::Wood => 0,
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Metal => 3,
            Element::Water => 4,
        }
    }

    /// Korean label used in stored profiles ("목", "화", ...)
    pub fn korean(self) -> &'static str {
        match self {
            Element::Wood => "목",
            Element::Fire => "화",
            Element::Earth => "토",
            Element::Metal => "금",
            Element::Water => "수",
        }
    }

    /// Hanja glyph ("木", "火", ...)
    pub fn hanja(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }

    /// Parse a Korean label back into an element
    pub fn from_korean(label: &str) -> Option<Element> {
        Element::ALL.into_iter().find(|e| e.korean() == label)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean())
    }
}

/// One value per element
///
/// Serialized as a map keyed by the Korean labels, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementScores<T> {
    #[serde(rename = "목")]
    pub wood: T,
    #[serde(rename = "화")]
    pub fire: T,
    #[serde(rename = "토")]
    pub earth: T,
    #[serde(rename = "금")]
    pub metal: T,
    #[serde(rename = "수")]
    pub water: T,
}

impl<T: Copy> ElementScores<T> {
    /// Same value for every element
    pub fn uniform(value: T) -> Self {
        Self {
            wood: value,
            fire: value,
            earth: value,
            metal: value,
            water: value,
        }
    }

    pub fn get(&self, element: Element) -> T {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn get_mut(&mut self, element: Element) -> &mut T {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// (element, value) pairs in canonical order
    pub fn entries(&self) -> [(Element, T); 5] {
        Element::ALL.map(|e| (e, self.get(e)))
    }
}

/// Gender as collected at onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "남")]
    Male,
    #[serde(rename = "여")]
    Female,
}

impl Gender {
    pub fn korean(self) -> &'static str {
        match self {
            Gender::Male => "남",
            Gender::Female => "여",
        }
    }
}

impl FromStr for Gender {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "남" | "male" | "Male" | "M" => Ok(Gender::Male),
            "여" | "female" | "Female" | "F" => Ok(Gender::Female),
            other => Err(SajuError::UnknownGender(other.to_string())),
        }
    }
}

/// The twelve traditional double-hours (시진)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoubleHour {
    Ja,    // 子 23:00-01:00
    Chuk,  // 丑 01:00-03:00
    In,    // 寅 03:00-05:00
    Myo,   // 卯 05:00-07:00
    Jin,   // 辰 07:00-09:00
    Sa,    // 巳 09:00-11:00
    O,     // 午 11:00-13:00
    Mi,    // 未 13:00-15:00
    Sin,   // 申 15:00-17:00
    Yu,    // 酉 17:00-19:00
    Sul,   // 戌 19:00-21:00
    Hae,   // 亥 21:00-23:00
}

impl DoubleHour {
    pub const ALL: [DoubleHour; 12] = [
        DoubleHour::Ja,
        DoubleHour::Chuk,
        DoubleHour::In,
        DoubleHour::Myo,
        DoubleHour::Jin,
        DoubleHour::Sa,
        DoubleHour::O,
        DoubleHour::Mi,
        DoubleHour::Sin,
        DoubleHour::Yu,
        DoubleHour::Sul,
        DoubleHour::Hae,
    ];

    /// Hour-of-day handed to the calendar for this bin
    pub fn representative_hour(self) -> u32 {
        match self {
            DoubleHour::Ja => 0,
            DoubleHour::Chuk => 2,
            DoubleHour::In => 4,
            DoubleHour::Myo => 6,
            DoubleHour::Jin => 8,
            DoubleHour::Sa => 10,
            DoubleHour::O => 12,
            DoubleHour::Mi => 14,
            DoubleHour::Sin => 16,
            DoubleHour::Yu => 18,
            DoubleHour::Sul => 20,
            DoubleHour::Hae => 22,
        }
    }

    /// Label shown in the birth-time picker
    pub fn label(self) -> &'static str {
        match self {
            DoubleHour::Ja => "子시 (23:00~01:00)",
            DoubleHour::Chuk => "丑시 (01:00~03:00)",
            DoubleHour::In => "寅시 (03:00~05:00)",
            DoubleHour::Myo => "卯시 (05:00~07:00)",
            DoubleHour::Jin => "辰시 (07:00~09:00)",
            DoubleHour::Sa => "巳시 (09:00~11:00)",
            DoubleHour::O => "午시 (11:00~13:00)",
            DoubleHour::Mi => "未시 (13:00~15:00)",
            DoubleHour::Sin => "申시 (15:00~17:00)",
            DoubleHour::Yu => "酉시 (17:00~19:00)",
            DoubleHour::Sul => "戌시 (19:00~21:00)",
            DoubleHour::Hae => "亥시 (21:00~23:00)",
        }
    }
}

/// Hour used for the date pillars when the birth time is unknown
pub const UNKNOWN_TIME_HOUR: u32 = 12;

/// Picker label for "birth time unknown"
pub const UNKNOWN_TIME_LABEL: &str = "모름";

/// Birth time as chosen in the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BirthTime {
    Known(DoubleHour),
    Unknown,
}

impl BirthTime {
    /// Parse a picker label. Anything outside the 13 known labels is rejected.
    pub fn from_label(label: &str) -> Result<Self, SajuError> {
        let label = label.trim();
        if label == UNKNOWN_TIME_LABEL {
            return Ok(BirthTime::Unknown);
        }
        DoubleHour::ALL
            .into_iter()
            .find(|h| h.label() == label)
            .map(BirthTime::Known)
            .ok_or_else(|| SajuError::UnknownBirthTimeLabel(label.to_string()))
    }

    pub fn label(self) -> &'static str {
        match self {
            BirthTime::Known(h) => h.label(),
            BirthTime::Unknown => UNKNOWN_TIME_LABEL,
        }
    }

    /// Representative hour, or `None` when unknown
    pub fn hour(self) -> Option<u32> {
        match self {
            BirthTime::Known(h) => Some(h.representative_hour()),
            BirthTime::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, BirthTime::Known(_))
    }
}

impl TryFrom<String> for BirthTime {
    type Error = SajuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BirthTime::from_label(&value)
    }
}

impl From<BirthTime> for String {
    fn from(value: BirthTime) -> Self {
        value.label().to_string()
    }
}

/// Birth data entered at onboarding. Calendar legality is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub birth_time: BirthTime,
    pub gender: Gender,
}

impl BirthInput {
    pub fn new(
        name: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
        birth_time: BirthTime,
        gender: Gender,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            month,
            day,
            birth_time,
            gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let labels: Vec<&str> = Element::ALL.iter().map(|e| e.korean()).collect();
        assert_eq!(labels, vec!["목", "화", "토", "금", "수"]);
        for (i, e) in Element::ALL.iter().enumerate() {
            assert_eq!(e.index(), i);
        }
    }

    #[test]
    fn test_korean_round_trip() {
        for e in Element::ALL {
            assert_eq!(Element::from_korean(e.korean()), Some(e));
        }
        assert_eq!(Element::from_korean("木"), None);
    }

    #[test]
    fn test_element_names() {
        let english: Vec<&str> = Element::ALL.iter().map(|e| e.english()).collect();
        assert_eq!(english, vec!["Wood", "Fire", "Earth", "Metal", "Water"]);
        assert_eq!(Element::Water.hanja(), "水");
        assert_eq!(Element::Metal.to_string(), "금");
    }

    #[test]
    fn test_element_scores_serialize_korean_keys() {
        let scores = ElementScores { wood: 10u8, fire: 20, earth: 30, metal: 25, water: 15 };
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"목":10,"화":20,"토":30,"금":25,"수":15}"#);
    }

    #[test]
    fn test_birth_time_labels() {
        assert_eq!(BirthTime::from_label("모름").unwrap(), BirthTime::Unknown);
        assert_eq!(
            BirthTime::from_label("午시 (11:00~13:00)").unwrap(),
            BirthTime::Known(DoubleHour::O)
        );
        assert_eq!(BirthTime::from_label("子시 (23:00~01:00)").unwrap().hour(), Some(0));
        assert_eq!(BirthTime::from_label("亥시 (21:00~23:00)").unwrap().hour(), Some(22));
        assert!(BirthTime::Unknown.hour().is_none());
    }

    #[test]
    fn test_birth_time_rejects_unknown_label() {
        let err = BirthTime::from_label("noon").unwrap_err();
        assert!(matches!(err, SajuError::UnknownBirthTimeLabel(ref l) if l == "noon"));
    }

    #[test]
    fn test_representative_hours_are_even_and_distinct() {
        let hours: Vec<u32> = DoubleHour::ALL.iter().map(|h| h.representative_hour()).collect();
        assert_eq!(hours, (0..12).map(|i| i * 2).collect::<Vec<u32>>());
    }

    #[test]
    fn test_birth_input_serde() {
        let input = BirthInput::new("홍길동", 1990, 5, 15, BirthTime::Unknown, Gender::Male);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""birth_time":"모름""#));
        assert!(json.contains(r#""gender":"남""#));

        let back: BirthInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("여".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert!("x".parse::<Gender>().is_err());
    }
}
