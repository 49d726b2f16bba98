use crate::explanation::element_texts::element_text;
use crate::explanation::types::{ElementCard, InterpretationBundle};
use crate::metrics::Classification;
use crate::types::Element;

const STRENGTH_ICON: &str = "⚔";
const STRENGTH_HEADING: &str = "타고난 무기 (강점)";
const WEAKNESS_ICON: &str = "🛡";
const WEAKNESS_HEADING: &str = "뚫린 방어구 (약점)";

/// Builds interpretation text from a chart's strongest and weakest element
pub struct InterpretationGenerator;

impl InterpretationGenerator {
    /// Generate the full bundle
    ///
    /// Pure lookup: the same pair always yields the same bundle.
    pub fn generate(strongest: Element, weakest: Element) -> InterpretationBundle {
        InterpretationBundle {
            summary_text: Self::summary_text(strongest),
            strength_block: Self::strength_block(strongest),
            weakness_block: Self::weakness_block(weakest),
            cta_text: Self::cta_text(weakest),
        }
    }

    /// Generate from a classification
    pub fn from_classification(classification: &Classification) -> InterpretationBundle {
        Self::generate(classification.strongest, classification.weakest)
    }

    /// "{emoji} {summary phrase}" of the strongest element
    pub fn summary_text(strongest: Element) -> String {
        let text = element_text(strongest);
        format!("{} {}", text.emoji, text.summary_phrase)
    }

    pub fn strength_block(strongest: Element) -> ElementCard {
        let text = element_text(strongest);
        ElementCard {
            icon: STRENGTH_ICON.to_string(),
            heading: STRENGTH_HEADING.to_string(),
            title: text.strong_title.to_string(),
            description: text.strong_desc.to_string(),
            element: strongest,
        }
    }

    pub fn weakness_block(weakest: Element) -> ElementCard {
        let text = element_text(weakest);
        ElementCard {
            icon: WEAKNESS_ICON.to_string(),
            heading: WEAKNESS_HEADING.to_string(),
            title: text.weak_title.to_string(),
            description: text.weak_desc.to_string(),
            element: weakest,
        }
    }

    /// Invitation toward a guardian that fills the weakest element
    pub fn cta_text(weakest: Element) -> String {
        format!(
            "당신의 부족한 기운({})을 채워줄 수호신을 찾아보세요",
            weakest.hanja()
        )
    }
}
