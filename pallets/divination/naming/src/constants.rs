//! # 取名模块常量
//!
//! 天干地支、五行映射、十二时辰、声母相近组以及候选数量上限。

use crate::types::WuXing;

// ============================================================================
// 天干地支
// ============================================================================

/// 十天干
pub const TIANGAN: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 十二地支
pub const DIZHI: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 天干五行：甲乙木、丙丁火、戊己土、庚辛金、壬癸水
pub const TIANGAN_WUXING: [WuXing; 10] = [
    WuXing::Mu,
    WuXing::Mu,
    WuXing::Huo,
    WuXing::Huo,
    WuXing::Tu,
    WuXing::Tu,
    WuXing::Jin,
    WuXing::Jin,
    WuXing::Shui,
    WuXing::Shui,
];

/// 地支五行：子亥水、寅卯木、巳午火、申酉金、辰戌丑未土
pub const DIZHI_WUXING: [WuXing; 12] = [
    WuXing::Shui, // 子
    WuXing::Tu,   // 丑
    WuXing::Mu,   // 寅
    WuXing::Mu,   // 卯
    WuXing::Tu,   // 辰
    WuXing::Huo,  // 巳
    WuXing::Huo,  // 午
    WuXing::Tu,   // 未
    WuXing::Jin,  // 申
    WuXing::Jin,  // 酉
    WuXing::Tu,   // 戌
    WuXing::Shui, // 亥
];

/// 十二时辰 (名称, 起始小时, 结束小时)
///
/// 子时跨越午夜（23:00-01:00），顺序与地支索引一致。
pub const SHICHEN: [(&str, u8, u8); 12] = [
    ("子时", 23, 1),
    ("丑时", 1, 3),
    ("寅时", 3, 5),
    ("卯时", 5, 7),
    ("辰时", 7, 9),
    ("巳时", 9, 11),
    ("午时", 11, 13),
    ("未时", 13, 15),
    ("申时", 15, 17),
    ("酉时", 17, 19),
    ("戌时", 19, 21),
    ("亥时", 21, 23),
];

/// 未提供出生小时时使用的默认小时（午时）
pub const DEFAULT_BIRTH_HOUR: u8 = 12;

// ============================================================================
// 音韵
// ============================================================================

/// 可作声母的拉丁字母（含半元音 y/w）
pub const INITIAL_CONSONANTS: &[u8] = b"bpmfdtnlgkhjqxzcsryw";

/// 声母相近组，同组声母的两个字连读拗口
pub const SIMILAR_INITIAL_GROUPS: [&[&str]; 6] = [
    &["b", "p", "m"],
    &["d", "t", "n", "l"],
    &["g", "k", "h"],
    &["j", "q", "x"],
    &["z", "c", "s"],
    &["zh", "ch", "sh", "r"],
];

// ============================================================================
// 候选数量上限
// ============================================================================

/// 单字名最多取前 20 个候选字
pub const MAX_SINGLE_CANDIDATES: u32 = 20;

/// 双字名最多在前 15 个候选字中两两组合
pub const MAX_PAIR_CANDIDATES: u32 = 15;

/// 复姓四字名最多在前 10 个候选字中两两组合
pub const MAX_COMPOUND_CANDIDATES: u32 = 10;

/// 最终返回的名字数量
pub const MAX_RESULTS: u32 = 8;

/// 严格寓意匹配少于该数量时放宽为模糊匹配
pub const MIN_STRICT_MEANING_MATCHES: u32 = 10;

/// 无缺失五行时推荐的最弱五行个数
pub const LEAST_REPRESENTED_COUNT: usize = 2;

// ============================================================================
// 评分（千分制定点数）
// ============================================================================

/// 定点缩放：1 分 = 1000
pub const SCORE_SCALE: i64 = 1_000;

/// 基础分
pub const BASE_SCORE: i64 = 60;

/// 五行匹配满分
pub const ELEMENT_WEIGHT: i64 = 30;

/// 五行无缺失时的固定加分
pub const ELEMENT_BALANCED_BONUS: i64 = 20;

/// 寓意匹配满分
pub const MEANING_WEIGHT: i64 = 20;

/// 未指定寓意时的固定加分
pub const MEANING_DEFAULT_BONUS: i64 = 15;

/// 双字音韵和谐加分
pub const HARMONY_BONUS: i64 = 10;

/// 双字音韵不和谐加分
pub const DISHARMONY_BONUS: i64 = 5;

/// 单字名音韵加分
pub const SINGLE_PHONETIC_BONUS: i64 = 8;

/// 随机扰动幅度（±5 分）
pub const JITTER_RANGE: i64 = 5;

/// 满分
pub const MAX_SCORE: i64 = 100;

/// 平衡度 = 100 - 方差 × 该系数
pub const BALANCE_VARIANCE_FACTOR: i64 = 10;

// ============================================================================
// 请求校验
// ============================================================================

/// 出生年份下限
pub const MIN_BIRTH_YEAR: u16 = 1900;

/// 出生年份上限
pub const MAX_BIRTH_YEAR: u16 = 2030;

/// 姓氏最多字数（含复姓）
pub const MAX_SURNAME_CHARS: usize = 4;

// ============================================================================
// 分析文案
// ============================================================================

/// 生辰信息不完整时的提示
pub const INSUFFICIENT_DATA_TEXT: &str = "请提供完整的生辰信息以进行五行分析";

/// 五行平衡时的建议
pub const BALANCED_TEXT: &str = "五行较为平衡，可根据个人喜好选择合适的字。";

/// 单一五行数量超过该值视为过旺
pub const DOMINANT_THRESHOLD: u8 = 3;
