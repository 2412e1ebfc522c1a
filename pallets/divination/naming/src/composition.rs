//! # 名字组合
//!
//! 将候选字组合为单字名或双字名，双字名需通过音韵和谐检查。

use crate::constants::{INITIAL_CONSONANTS, SIMILAR_INITIAL_GROUPS};
use crate::types::{
    element_relation, Character, ElementRelation, GeneratedName, GivenLength, NameCharacter,
    NamingLimits, WuxingAnalysis,
};
use alloc::{format, string::String};
use sp_std::prelude::*;

/// 解释中最多列出的寓意标签数（双字名）
const PAIR_EXPLANATION_TAGS: usize = 4;

// ============================================================================
// 音韵
// ============================================================================

/// 拼音声母
///
/// `zh`/`ch`/`sh` 为双字母声母，其余取首字母；零声母（以元音开头）返回 None。
pub fn pinyin_initial(pinyin: &str) -> Option<String> {
    let lower = pinyin.trim().to_ascii_lowercase();
    if let Some(digraph) = ["zh", "ch", "sh"].into_iter().find(|d| lower.starts_with(d)) {
        return Some(String::from(digraph));
    }
    let first = *lower.as_bytes().first()?;
    INITIAL_CONSONANTS.contains(&first).then(|| String::from(first as char))
}

fn same_group(a: &str, b: &str) -> bool {
    SIMILAR_INITIAL_GROUPS
        .iter()
        .any(|group| group.iter().any(|g| *g == a) && group.iter().any(|g| *g == b))
}

/// 音韵和谐检查
///
/// 声母相同（含两个零声母）或属于同一相近组时不和谐。
pub fn is_phonetic_harmony(pinyin1: &str, pinyin2: &str) -> bool {
    match (pinyin_initial(pinyin1), pinyin_initial(pinyin2)) {
        (None, None) => false,
        (Some(a), Some(b)) => a != b && !same_group(&a, &b),
        _ => true,
    }
}

// ============================================================================
// 组合
// ============================================================================

fn element_note(first: &Character, second: &Character) -> String {
    let (a, b) = (first.element, second.element);
    let note = |from: &str, verb: &str, to: &str| format!("（{}{}{}）", from, verb, to);
    match (element_relation(a, b), element_relation(b, a)) {
        (ElementRelation::Sheng, _) => note(a.name(), "生", b.name()),
        (ElementRelation::Ke, _) => note(a.name(), "克", b.name()),
        (_, ElementRelation::Sheng) => note(b.name(), "生", a.name()),
        (_, ElementRelation::Ke) => note(b.name(), "克", a.name()),
        _ => String::new(),
    }
}

fn explain(characters: &[&Character]) -> String {
    match characters {
        [single] => format!(
            "{}字{}，五行属{}，寓意{}",
            single.glyph,
            single.meaning,
            single.element.name(),
            single.tags.join("、")
        ),
        [first, second, ..] => {
            let tags: Vec<&str> = first
                .tags
                .iter()
                .chain(second.tags.iter())
                .copied()
                .take(PAIR_EXPLANATION_TAGS)
                .collect();
            format!(
                "{}字{}，{}字{}，五行为{}{}{}，寓意{}",
                first.glyph,
                first.meaning,
                second.glyph,
                second.meaning,
                first.element.name(),
                second.element.name(),
                element_note(first, second),
                tags.join("、")
            )
        },
        [] => String::new(),
    }
}

/// 由姓氏和名字字构造候选名字（分数为 0）
pub fn build_name(surname: &str, characters: &[&Character], analysis: &WuxingAnalysis) -> GeneratedName {
    let mut full_name = String::from(surname);
    for c in characters {
        full_name.push_str(c.glyph);
    }

    GeneratedName {
        full_name: full_name.into_bytes(),
        surname: surname.as_bytes().to_vec(),
        characters: characters.iter().map(|c| NameCharacter::from(*c)).collect(),
        meanings: characters
            .iter()
            .flat_map(|c| c.tags.iter())
            .map(|tag| tag.as_bytes().to_vec())
            .collect(),
        wuxing_analysis: analysis.clone(),
        explanation: explain(characters).into_bytes(),
        score: 0,
    }
}

/// 组合候选名字
///
/// - 单字名：前 `max_single_candidates` 个字各成一名
/// - 双字名：前 `max_pair_candidates` 个字两两组合（i < j），剔除音韵不和谐的组合
/// - 四字全名：前 `max_compound_candidates` 个字两两组合，不做音韵过滤
pub fn compose_names(
    surname: &str,
    candidates: &[&'static Character],
    given_length: GivenLength,
    analysis: &WuxingAnalysis,
    limits: &NamingLimits,
) -> Vec<GeneratedName> {
    let cap = limits.candidate_cap(given_length).min(candidates.len());
    let pool = &candidates[..cap];

    if given_length == GivenLength::Single {
        return pool.iter().map(|c| build_name(surname, &[*c], analysis)).collect();
    }

    let check_harmony = given_length == GivenLength::Double;
    let mut names = Vec::new();
    for (i, first) in pool.iter().enumerate() {
        for second in pool.iter().skip(i + 1) {
            if check_harmony && !is_phonetic_harmony(first.pinyin, second.pinyin) {
                continue;
            }
            names.push(build_name(surname, &[*first, *second], analysis));
        }
    }
    names
}
