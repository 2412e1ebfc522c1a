//! # 候选字筛选
//!
//! 依次按性别、五行、寓意三道过滤，从字库中选出候选字：
//!
//! 1. 性别：保留与请求性别一致或中性的字
//! 2. 五行：保留推荐五行的字；若结果为空则退回性别过滤后的字池
//! 3. 寓意：先严格匹配，数量不足时放宽为模糊匹配（模糊结果即使为空也不再回退）
//!
//! 字库中完全无法识别的寓意偏好在过滤前被丢弃。

use crate::types::{Character, Gender, NamingLimits, NamingTables, WuXing};
use crate::LOG_TARGET;
use alloc::string::String;
use sp_std::prelude::*;

/// 按性别过滤
pub fn filter_by_gender(pool: &'static [Character], gender: Gender) -> Vec<&'static Character> {
    pool.iter().filter(|c| c.gender.accepts(gender)).collect()
}

/// 按推荐五行过滤
///
/// 推荐集合为空时不过滤；过滤后为空时返回原字池。
pub fn filter_by_elements(
    pool: Vec<&'static Character>,
    recommended: &[WuXing],
) -> Vec<&'static Character> {
    if recommended.is_empty() {
        return pool;
    }

    let matched: Vec<&'static Character> =
        pool.iter().copied().filter(|c| recommended.contains(&c.element)).collect();

    if matched.is_empty() {
        log::debug!(
            target: LOG_TARGET,
            "no candidate matches recommended elements {:?}, keeping {} characters",
            recommended,
            pool.len()
        );
        return pool;
    }
    matched
}

/// 严格匹配：标签与偏好完全相同，或字属于列出该偏好的寓意分类
pub fn matches_strictly(tables: &NamingTables, character: &Character, preferences: &[&str]) -> bool {
    preferences.iter().any(|pref| {
        character.tags.iter().any(|tag| tag == pref) ||
            tables.categories.iter().any(|category| {
                category.meanings.iter().any(|m| m == pref) &&
                    category.characters.contains(&character.glyph)
            })
    })
}

/// 模糊匹配：标签包含偏好或被偏好包含（忽略大小写）
pub fn matches_fuzzily(character: &Character, lowered_preferences: &[String]) -> bool {
    character.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        lowered_preferences.iter().any(|pref| tag.contains(pref.as_str()) || pref.contains(tag.as_str()))
    })
}

/// 偏好是否可识别：寓意目录中存在，或字库中有标签与之互相包含
pub fn is_known_preference(tables: &NamingTables, preference: &str) -> bool {
    if tables.all_meanings().any(|meaning| meaning == preference) {
        return true;
    }
    let lowered = preference.to_lowercase();
    tables.characters.iter().any(|c| matches_fuzzily(c, core::slice::from_ref(&lowered)))
}

/// 按寓意偏好过滤
///
/// 严格匹配数量达到 `min_strict` 时直接采用，否则采用模糊匹配结果。
pub fn filter_by_meaning(
    tables: &NamingTables,
    pool: Vec<&'static Character>,
    preferences: &[&str],
    min_strict: usize,
) -> Vec<&'static Character> {
    if preferences.is_empty() {
        return pool;
    }

    let strict: Vec<&'static Character> =
        pool.iter().copied().filter(|c| matches_strictly(tables, c, preferences)).collect();
    if strict.len() >= min_strict {
        return strict;
    }

    log::debug!(
        target: LOG_TARGET,
        "only {} strict meaning matches, widening to fuzzy matching",
        strict.len()
    );

    let lowered: Vec<String> = preferences.iter().map(|p| p.to_lowercase()).collect();
    pool.into_iter()
        .filter(|c| matches_strictly(tables, c, preferences) || matches_fuzzily(c, &lowered))
        .collect()
}

/// 选出候选字（保持字库顺序）
pub fn select_candidates(
    tables: &NamingTables,
    gender: Gender,
    recommended: &[WuXing],
    preferences: &[&str],
    limits: &NamingLimits,
) -> Vec<&'static Character> {
    let by_gender = filter_by_gender(tables.characters, gender);
    log::debug!(target: LOG_TARGET, "gender filter kept {} characters", by_gender.len());

    let by_element = filter_by_elements(by_gender, recommended);
    log::debug!(target: LOG_TARGET, "element filter kept {} characters", by_element.len());

    let known: Vec<&str> =
        preferences.iter().copied().filter(|p| is_known_preference(tables, p)).collect();
    if known.len() < preferences.len() {
        log::debug!(
            target: LOG_TARGET,
            "ignoring {} unrecognised meaning preferences",
            preferences.len() - known.len()
        );
    }

    let by_meaning =
        filter_by_meaning(tables, by_element, &known, limits.min_strict_meaning_matches as usize);
    log::debug!(target: LOG_TARGET, "meaning filter kept {} characters", by_meaning.len());
    by_meaning
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenderAffinity, MeaningCategory};

    static POOL: [Character; 5] = [
        Character {
            glyph: "松",
            pinyin: "sōng",
            meaning: "松树",
            element: WuXing::Mu,
            gender: GenderAffinity::Male,
            strokes: 8,
            tags: &["坚韧", "长青"],
        },
        Character {
            glyph: "兰",
            pinyin: "lán",
            meaning: "兰花",
            element: WuXing::Mu,
            gender: GenderAffinity::Female,
            strokes: 5,
            tags: &["高洁", "Elegant"],
        },
        Character {
            glyph: "炎",
            pinyin: "yán",
            meaning: "火光",
            element: WuXing::Huo,
            gender: GenderAffinity::Neutral,
            strokes: 8,
            tags: &["热情", "光明"],
        },
        Character {
            glyph: "泉",
            pinyin: "quán",
            meaning: "泉水",
            element: WuXing::Shui,
            gender: GenderAffinity::Neutral,
            strokes: 9,
            tags: &["清澈", "坚韧不拔"],
        },
        Character {
            glyph: "铭",
            pinyin: "míng",
            meaning: "铭记",
            element: WuXing::Jin,
            gender: GenderAffinity::Male,
            strokes: 11,
            tags: &["铭记"],
        },
    ];

    static CATEGORIES: [MeaningCategory; 1] = [MeaningCategory {
        category: "品德",
        meanings: &["忠诚"],
        characters: &["铭"],
    }];

    fn tables() -> NamingTables {
        NamingTables { characters: &POOL, categories: &CATEGORIES }
    }

    fn glyphs(pool: &[&Character]) -> Vec<&'static str> {
        pool.iter().map(|c| c.glyph).collect()
    }

    #[test]
    fn gender_filter_keeps_neutral() {
        let female = filter_by_gender(&POOL, Gender::Female);
        assert_eq!(glyphs(&female), vec!["兰", "炎", "泉"]);
        let male = filter_by_gender(&POOL, Gender::Male);
        assert_eq!(glyphs(&male), vec!["松", "炎", "泉", "铭"]);
    }

    #[test]
    fn element_filter_falls_back_when_empty() {
        let pool = filter_by_gender(&POOL, Gender::Female);
        let water = filter_by_elements(pool.clone(), &[WuXing::Shui]);
        assert_eq!(glyphs(&water), vec!["泉"]);

        let earth = filter_by_elements(pool.clone(), &[WuXing::Tu]);
        assert_eq!(earth, pool);

        let unfiltered = filter_by_elements(pool.clone(), &[]);
        assert_eq!(unfiltered, pool);
    }

    #[test]
    fn strict_matching_uses_tags_and_categories() {
        let t = tables();
        assert!(matches_strictly(&t, &POOL[0], &["坚韧"]));
        assert!(!matches_strictly(&t, &POOL[3], &["坚韧"]));
        assert!(matches_strictly(&t, &POOL[4], &["忠诚"]));
    }

    #[test]
    fn fuzzy_matching_widens_small_strict_result() {
        let t = tables();
        let pool: Vec<&'static Character> = POOL.iter().collect();
        // 严格只匹配「松」，模糊再加上「泉」（坚韧不拔 包含 坚韧）
        let widened = filter_by_meaning(&t, pool.clone(), &["坚韧"], 10);
        assert_eq!(glyphs(&widened), vec!["松", "泉"]);

        let strict_only = filter_by_meaning(&t, pool, &["坚韧"], 1);
        assert_eq!(glyphs(&strict_only), vec!["松"]);
    }

    #[test]
    fn fuzzy_matching_ignores_case() {
        let t = tables();
        let pool: Vec<&'static Character> = POOL.iter().collect();
        let result = filter_by_meaning(&t, pool, &["ELEGANT"], 10);
        assert_eq!(glyphs(&result), vec!["兰"]);
    }

    #[test]
    fn known_preferences() {
        let t = tables();
        assert!(is_known_preference(&t, "忠诚"));
        assert!(is_known_preference(&t, "光明"));
        assert!(is_known_preference(&t, "坚韧不拔的精神"));
        assert!(!is_known_preference(&t, "财富"));
    }

    #[test]
    fn unknown_preferences_do_not_empty_the_pool() {
        let t = tables();
        let limits = NamingLimits::default();
        let result = select_candidates(&t, Gender::Male, &[], &["财富"], &limits);
        assert_eq!(glyphs(&result), vec!["松", "炎", "泉", "铭"]);
    }

    #[test]
    fn known_preferences_may_empty_the_pool() {
        let t = tables();
        let limits = NamingLimits::default();
        // 女性 + 水 只剩「泉」，与「热情」无关
        let result = select_candidates(&t, Gender::Female, &[WuXing::Shui], &["热情"], &limits);
        assert!(result.is_empty());
    }

    #[test]
    fn standard_tables_strict_selection() {
        let t = NamingTables::standard();
        let limits = NamingLimits::default();
        let result = select_candidates(&t, Gender::Male, &[], &["勇敢"], &limits);
        assert_eq!(glyphs(&result), vec!["军", "勇", "诚"]);
    }
}
