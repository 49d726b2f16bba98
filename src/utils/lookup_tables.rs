//! Element lookup tables
//!
//! Maps calendar glyphs to elements. Two tables:
//! - element glyphs (木火土金水) as found in a pillar's element label
//! - the ten heavenly stems (甲..癸), used only for hidden stems
//!
//! Unknown glyphs map to `None` and contribute nothing.

use crate::types::Element;

/// A single glyph with its element
#[derive(Debug, Clone, Copy)]
pub struct GlyphEntry {
    pub glyph: char,
    pub element: Element,
}

// ============================================================================
// EMBEDDED TABLES
// ============================================================================

static ELEMENT_GLYPHS: &[GlyphEntry] = &[
    GlyphEntry { glyph: '木', element: Element::Wood },
    GlyphEntry { glyph: '火', element: Element::Fire },
    GlyphEntry { glyph: '土', element: Element::Earth },
    GlyphEntry { glyph: '金', element: Element::Metal },
    GlyphEntry { glyph: '水', element: Element::Water },
];

static HEAVENLY_STEMS: &[GlyphEntry] = &[
    GlyphEntry { glyph: '甲', element: Element::Wood },
    GlyphEntry { glyph: '乙', element: Element::Wood },
    GlyphEntry { glyph: '丙', element: Element::Fire },
    GlyphEntry { glyph: '丁', element: Element::Fire },
    GlyphEntry { glyph: '戊', element: Element::Earth },
    GlyphEntry { glyph: '己', element: Element::Earth },
    GlyphEntry { glyph: '庚', element: Element::Metal },
    GlyphEntry { glyph: '辛', element: Element::Metal },
    GlyphEntry { glyph: '壬', element: Element::Water },
    GlyphEntry { glyph: '癸', element: Element::Water },
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Element for one glyph of a pillar's element label
///
/// # Examples
/// ```
/// use saju_engine::utils::lookup_tables::element_for_label_glyph;
/// use saju_engine::Element;
///
/// assert_eq!(element_for_label_glyph('金'), Some(Element::Metal));
/// assert_eq!(element_for_label_glyph('?'), None);
/// ```
pub fn element_for_label_glyph(glyph: char) -> Option<Element> {
    ELEMENT_GLYPHS
        .iter()
        .find(|entry| entry.glyph == glyph)
        .map(|entry| entry.element)
}

/// Element for a heavenly stem
pub fn element_for_stem(glyph: char) -> Option<Element> {
    HEAVENLY_STEMS
        .iter()
        .find(|entry| entry.glyph == glyph)
        .map(|entry| entry.element)
}

/// Element for a hidden-stem entry as delivered by the calendar
///
/// Entries are single glyphs; anything else (empty, multi-glyph, unknown) is `None`.
pub fn element_for_hidden_stem(entry: &str) -> Option<Element> {
    let mut chars = entry.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => element_for_stem(glyph),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_element_has_one_label_glyph() {
        for e in Element::ALL {
            let n = ELEMENT_GLYPHS.iter().filter(|g| g.element == e).count();
            assert_eq!(n, 1, "{:?}", e);
        }
    }

    #[test]
    fn test_stems_pair_up_by_element() {
        assert_eq!(HEAVENLY_STEMS.len(), 10);
        for e in Element::ALL {
            let n = HEAVENLY_STEMS.iter().filter(|g| g.element == e).count();
            assert_eq!(n, 2, "{:?}", e);
        }
        assert_eq!(element_for_stem('甲'), Some(Element::Wood));
        assert_eq!(element_for_stem('丁'), Some(Element::Fire));
        assert_eq!(element_for_stem('己'), Some(Element::Earth));
        assert_eq!(element_for_stem('庚'), Some(Element::Metal));
        assert_eq!(element_for_stem('癸'), Some(Element::Water));
    }

    #[test]
    fn test_tables_do_not_overlap() {
        // Stems are not element glyphs and vice versa
        assert_eq!(element_for_label_glyph('甲'), None);
        assert_eq!(element_for_stem('木'), None);
    }

    #[test]
    fn test_unknown_glyphs() {
        assert_eq!(element_for_label_glyph('목'), None);
        assert_eq!(element_for_label_glyph('子'), None);
        assert_eq!(element_for_stem('子'), None);
    }

    #[test]
    fn test_hidden_stem_entries() {
        assert_eq!(element_for_hidden_stem("壬"), Some(Element::Water));
        assert_eq!(element_for_hidden_stem(" 戊 "), Some(Element::Earth));
        assert_eq!(element_for_hidden_stem(""), None);
        assert_eq!(element_for_hidden_stem("甲乙"), None);
        assert_eq!(element_for_hidden_stem("x"), None);
    }
}
