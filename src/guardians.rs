//! Guardian companions
//!
//! Five built-in guardians, one per element, and the ranking that puts the
//! guardian matching the user's weakest element first.

use crate::types::{Element, ElementScores};
use serde::Serialize;

/// Anything tagged with exactly one element
pub trait Companion {
    fn element(&self) -> Element;
}

/// Five-element stat rows shown on the guardian card (0-5 each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuardianStats {
    pub ohso: ElementScores<u8>,
    pub hwaksin: ElementScores<u8>,
}

/// A guardian companion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guardian {
    pub id: &'static str,
    pub name: &'static str,
    pub hanja: &'static str,
    pub element: Element,
    pub title: &'static str,
    pub motif: &'static str,
    pub description: &'static str,
    pub personality: &'static str,
    pub is_premium: bool,
    pub stats: GuardianStats,
}

impl Companion for Guardian {
    fn element(&self) -> Element {
        self.element
    }
}

const fn row(wood: u8, fire: u8, earth: u8, metal: u8, water: u8) -> ElementScores<u8> {
    ElementScores { wood, fire, earth, metal, water }
}

/// Built-in roster, in display order
pub static GUARDIANS: [Guardian; 5] = [
    Guardian {
        id: "cheongmyeong",
        name: "청명",
        hanja: "淸明",
        element: Element::Water,
        title: "물(水)을 다루는 자",
        motif: "해태(해치) + 물의 정령",
        description: "깊은 바다의 지혜를 품은 신비로운 수호신. 물처럼 유연하게 흐르며 감정의 균형을 잡아줍니다.",
        personality: "고요하고 신비로우며, 깊은 통찰력으로 마음의 평화를 가져다주는 수호신",
        is_premium: false,
        stats: GuardianStats {
            ohso: row(4, 2, 1, 3, 5),
            hwaksin: row(3, 1, 2, 4, 5),
        },
    },
    Guardian {
        id: "yeomhwa",
        name: "염화",
        hanja: "炎火",
        element: Element::Fire,
        title: "불(火)을 다루는 자",
        motif: "불삽살개 + 불의 정령",
        description: "뜨거운 열정으로 액운을 불태우는 용맹한 수호신. 어둠 속에서 빛이 되어줍니다.",
        personality: "활기차고 용맹하며, 나쁜 기운을 불태워버리는 든든한 수호신",
        is_premium: false,
        stats: GuardianStats {
            ohso: row(3, 5, 4, 2, 1),
            hwaksin: row(4, 5, 3, 1, 2),
        },
    },
    Guardian {
        id: "taepung",
        name: "태풍",
        hanja: "颱風",
        element: Element::Wood,
        title: "나무(木)를 다루는 자",
        motif: "아기 호랑이(산군) + 바람과 나뭇잎의 정령",
        description: "자유로운 바람을 타고 새로운 생명력을 불어넣는 수호신. 정체된 기운을 깨뜨립니다.",
        personality: "생기 넘치고 자유분방하며, 새로운 활력을 불어넣는 수호신",
        is_premium: false,
        stats: GuardianStats {
            ohso: row(5, 4, 2, 1, 3),
            hwaksin: row(5, 3, 1, 2, 4),
        },
    },
    Guardian {
        id: "musoe",
        name: "무쇠",
        hanja: "武釗",
        element: Element::Metal,
        title: "쇠(金)를 다루는 자",
        motif: "현무/거북이 + 바위와 쇠의 정령",
        description: "어떤 액운도 막아내는 철벽의 수호신. 묵직한 의지로 당신을 지켜줍니다.",
        personality: "묵묵하고 우직하며, 어떤 액운도 막아내는 든든한 방패 같은 수호신",
        is_premium: false,
        stats: GuardianStats {
            ohso: row(1, 2, 4, 5, 3),
            hwaksin: row(2, 1, 3, 5, 4),
        },
    },
    Guardian {
        id: "hwangto",
        name: "황토",
        hanja: "黃土",
        element: Element::Earth,
        title: "흙(土)을 다루는 자",
        motif: "아기 곰(단군신화) + 비옥한 흙과 땅의 정령",
        description: "따뜻한 대지의 품처럼 복과 안정을 가져다주는 수호신. 흔들리는 마음을 다잡아줍니다.",
        personality: "온화하고 인내심이 강하며, 복과 안정을 가져다주는 어머니 같은 수호신",
        is_premium: false,
        stats: GuardianStats {
            ohso: row(2, 4, 5, 3, 1),
            hwaksin: row(1, 3, 5, 4, 2),
        },
    },
];

/// Order a roster for the selection screen
///
/// Companions whose element equals `weakest` come first; everything else keeps
/// its original relative order (stable partition, not a sort).
pub fn rank_companions<T: Companion>(roster: &[T], weakest: Element) -> Vec<&T> {
    let (mut matching, rest): (Vec<&T>, Vec<&T>) =
        roster.iter().partition(|c| c.element() == weakest);
    matching.extend(rest);
    matching
}

/// Built-in roster ranked for `weakest`
pub fn ranked_guardians(weakest: Element) -> Vec<&'static Guardian> {
    rank_companions(&GUARDIANS, weakest)
}

/// Guardian that fills `weakest`; the first roster entry if none does
pub fn recommended_guardian(weakest: Element) -> &'static Guardian {
    GUARDIANS
        .iter()
        .find(|g| g.element == weakest)
        .unwrap_or(&GUARDIANS[0])
}

pub fn guardian_by_id(id: &str) -> Option<&'static Guardian> {
    GUARDIANS.iter().find(|g| g.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Tagged(&'static str, Element);

    impl Companion for Tagged {
        fn element(&self) -> Element {
            self.1
        }
    }

    #[test]
    fn test_one_guardian_per_element() {
        for e in Element::ALL {
            assert_eq!(GUARDIANS.iter().filter(|g| g.element == e).count(), 1);
        }
    }

    #[test]
    fn test_own_element_is_top_stat() {
        for g in &GUARDIANS {
            assert_eq!(g.stats.ohso.get(g.element), 5, "{}", g.id);
            assert_eq!(g.stats.hwaksin.get(g.element), 5, "{}", g.id);
        }
    }

    #[test]
    fn test_rank_moves_weakest_first_and_keeps_order() {
        let roster = vec![
            Tagged("a", Element::Wood),
            Tagged("b", Element::Fire),
            Tagged("c", Element::Water),
            Tagged("d", Element::Earth),
            Tagged("e", Element::Metal),
        ];
        let ranked: Vec<&str> = rank_companions(&roster, Element::Water)
            .into_iter()
            .map(|t| t.0)
            .collect();
        assert_eq!(ranked, vec!["c", "a", "b", "d", "e"]);
    }

    #[test]
    fn test_rank_already_first_is_unchanged() {
        let ids: Vec<&str> = ranked_guardians(Element::Water).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["cheongmyeong", "yeomhwa", "taepung", "musoe", "hwangto"]);
    }

    #[test]
    fn test_rank_builtin_roster() {
        let ids: Vec<&str> = ranked_guardians(Element::Earth).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["hwangto", "cheongmyeong", "yeomhwa", "taepung", "musoe"]);
    }

    #[test]
    fn test_rank_without_match_keeps_roster() {
        let roster = vec![Tagged("a", Element::Wood), Tagged("b", Element::Fire)];
        let ranked = rank_companions(&roster, Element::Metal);
        assert_eq!(ranked, vec![&roster[0], &roster[1]]);
    }

    #[test]
    fn test_recommended_and_lookup() {
        assert_eq!(recommended_guardian(Element::Fire).id, "yeomhwa");
        assert_eq!(recommended_guardian(Element::Metal).id, "musoe");
        assert_eq!(guardian_by_id("taepung").map(|g| g.element), Some(Element::Wood));
        assert!(guardian_by_id("nobody").is_none());
    }
}
