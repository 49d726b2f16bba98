//! Per-element interpretation copy
//!
//! Indexed by `Element::index()`, so every element has exactly one entry.

use crate::explanation::types::ElementText;
use crate::types::Element;

static ELEMENT_TEXTS: [ElementText; 5] = [
    // 목 (Wood)
    ElementText {
        emoji: "🌳",
        summary_phrase: "뿌리 깊은 나무처럼 꿋꿋한 성장의 기운을 타고났습니다",
        strong_title: "성장하는 나무의 힘",
        strong_desc: "끊임없이 뻗어나가는 생명력과 창의력이 뛰어나며, 새로운 도전을 두려워하지 않는 개척자의 기운입니다.",
        weak_title: "뿌리가 약한 나무",
        weak_desc: "목의 기운이 부족하여 새로운 시작에 주저함이 있을 수 있습니다.",
    },
    // 화 (Fire)
    ElementText {
        emoji: "🔥",
        summary_phrase: "뜨거운 불꽃처럼 맹렬한 기운을 타고났습니다",
        strong_title: "타오르는 불꽃의 열정",
        strong_desc: "열정과 추진력이 뛰어나며, 장애물을 돌파하는 힘이 강합니다.",
        weak_title: "꺼져가는 불씨",
        weak_desc: "화의 기운이 부족하여 열정과 활력이 쉽게 소진될 수 있습니다.",
    },
    // 토 (Earth)
    ElementText {
        emoji: "🏔",
        summary_phrase: "산처럼 묵직한 안정의 기운을 타고났습니다",
        strong_title: "흔들리지 않는 대지의 안정",
        strong_desc: "중심을 잡아주는 든든한 신뢰감이 있으며, 사람들이 기대고 싶은 존재입니다.",
        weak_title: "갈라진 땅",
        weak_desc: "토의 기운이 부족하여 안정감과 집중력이 흔들릴 수 있습니다.",
    },
    // 금 (Metal)
    ElementText {
        emoji: "⚔️",
        summary_phrase: "날카로운 금속처럼 단단한 의지의 기운을 타고났습니다",
        strong_title: "날카로운 검의 결단력",
        strong_desc: "확고한 의지와 결단력으로 목표를 향해 나아가며, 맺고 끊음이 확실합니다.",
        weak_title: "무뎌진 칼날",
        weak_desc: "금의 기운이 부족하여 결단의 순간에 망설임이 클 수 있습니다.",
    },
    // 수 (Water)
    ElementText {
        emoji: "🌊",
        summary_phrase: "깊은 바다처럼 고요한 지혜의 기운을 타고났습니다",
        strong_title: "깊은 물의 지혜",
        strong_desc: "깊은 사고력과 직관력을 가졌으며, 물처럼 유연하게 어떤 상황에도 적응합니다.",
        weak_title: "마른 우물",
        weak_desc: "수의 기운이 부족하여 감정 기복이 심할 수 있습니다.",
    },
];

/// Copy for `element`
pub fn element_text(element: Element) -> &'static ElementText {
    &ELEMENT_TEXTS[element.index()]
}
