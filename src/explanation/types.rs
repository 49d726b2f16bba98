use serde::{Deserialize, Serialize};
use crate::types::Element;

/// Interpretation shown on the result screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationBundle {
    pub summary_text: String,
    pub strength_block: ElementCard,
    pub weakness_block: ElementCard,
    pub cta_text: String,
}

/// Card describing one element of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCard {
    pub icon: String,     // "⚔", "🛡"
    pub heading: String,  // "타고난 무기 (강점)"
    pub title: String,    // "성장하는 나무의 힘"
    pub description: String,
    pub element: Element,
}

/// Static copy for one element
#[derive(Debug, Clone, Copy)]
pub struct ElementText {
    pub emoji: &'static str,
    pub summary_phrase: &'static str,
    pub strong_title: &'static str,
    pub strong_desc: &'static str,
    pub weak_title: &'static str,
    pub weak_desc: &'static str,
}
