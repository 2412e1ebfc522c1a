//! # 取名模块类型定义
//!
//! - 五行、天干、地支、四柱
//! - 取名请求与生成结果
//! - 字库与寓意分类（外部提供的只读参考数据）
//!
//! 所有跨越 SCALE 边界的文本均为 UTF-8 字节。

use crate::constants::{
    DIZHI, DIZHI_WUXING, MAX_COMPOUND_CANDIDATES, MAX_PAIR_CANDIDATES,
    MAX_RESULTS, MAX_SINGLE_CANDIDATES, MIN_STRICT_MEANING_MATCHES, SHICHEN, TIANGAN,
    TIANGAN_WUXING,
};
use alloc::string::String;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{traits::ConstU32, BoundedVec};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

// ============================================================================
// 五行
// ============================================================================

/// 五行，顺序为木、火、土、金、水
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug,
)]
pub enum WuXing {
    /// 木
    Mu = 0,
    /// 火
    Huo = 1,
    /// 土
    Tu = 2,
    /// 金
    Jin = 3,
    /// 水
    Shui = 4,
}

impl WuXing {
    /// 全部五行（固定顺序）
    pub const ALL: [WuXing; 5] = [WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui];

    /// 列举顺序：金木水火土
    ///
    /// 缺失五行、最旺五行、最弱五行遇到并列时都按此顺序取舍。
    pub const LISTING_ORDER: [WuXing; 5] =
        [WuXing::Jin, WuXing::Mu, WuXing::Shui, WuXing::Huo, WuXing::Tu];

    pub fn index(self) -> usize {
        self as usize
    }

    /// 中文名称
    pub fn name(self) -> &'static str {
        match self {
            WuXing::Mu => "木",
            WuXing::Huo => "火",
            WuXing::Tu => "土",
            WuXing::Jin => "金",
            WuXing::Shui => "水",
        }
    }

    /// 相生：木生火、火生土、土生金、金生水、水生木
    pub fn generates(self) -> WuXing {
        match self {
            WuXing::Mu => WuXing::Huo,
            WuXing::Huo => WuXing::Tu,
            WuXing::Tu => WuXing::Jin,
            WuXing::Jin => WuXing::Shui,
            WuXing::Shui => WuXing::Mu,
        }
    }

    /// 相克：木克土、土克水、水克火、火克金、金克木
    pub fn restrains(self) -> WuXing {
        match self {
            WuXing::Mu => WuXing::Tu,
            WuXing::Tu => WuXing::Shui,
            WuXing::Shui => WuXing::Huo,
            WuXing::Huo => WuXing::Jin,
            WuXing::Jin => WuXing::Mu,
        }
    }

    /// 克制本五行的五行
    pub fn restrained_by(self) -> WuXing {
        WuXing::ALL
            .into_iter()
            .find(|element| element.restrains() == self)
            .unwrap_or(self)
    }
}

/// 两个五行之间的关系
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum ElementRelation {
    /// 前者生后者
    Sheng,
    /// 前者克后者
    Ke,
    /// 无生克
    Neutral,
}

/// 判断 `from` 对 `to` 的生克关系
pub fn element_relation(from: WuXing, to: WuXing) -> ElementRelation {
    if from.generates() == to {
        ElementRelation::Sheng
    } else if from.restrains() == to {
        ElementRelation::Ke
    } else {
        ElementRelation::Neutral
    }
}

// ============================================================================
// 天干地支
// ============================================================================

/// 天干（0-9）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug,
)]
pub struct TianGan(pub u8);

impl TianGan {
    /// 按索引取天干，超出范围自动取模
    pub fn from_index(index: u8) -> Self {
        Self(index % 10)
    }

    pub fn name(&self) -> &'static str {
        TIANGAN[(self.0 % 10) as usize]
    }

    pub fn to_wuxing(&self) -> WuXing {
        TIANGAN_WUXING[(self.0 % 10) as usize]
    }
}

/// 地支（0-11）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug,
)]
pub struct DiZhi(pub u8);

impl DiZhi {
    /// 按索引取地支，超出范围自动取模
    pub fn from_index(index: u8) -> Self {
        Self(index % 12)
    }

    /// 按小时查十二时辰对应的地支
    ///
    /// 子时为 23:00-01:00，跨越午夜。
    pub fn from_hour(hour: u8) -> Self {
        let slot = SHICHEN.iter().position(|(_, start, end)| {
            if start > end {
                hour >= *start || hour < *end
            } else {
                hour >= *start && hour < *end
            }
        });
        Self(slot.unwrap_or(0) as u8)
    }

    pub fn name(&self) -> &'static str {
        DIZHI[(self.0 % 12) as usize]
    }

    /// 时辰名称（子时、丑时……）
    pub fn shichen_name(&self) -> &'static str {
        SHICHEN[(self.0 % 12) as usize].0
    }

    pub fn to_wuxing(&self) -> WuXing {
        DIZHI_WUXING[(self.0 % 12) as usize]
    }
}

/// 干支组合
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug,
)]
pub struct GanZhi {
    pub gan: TianGan,
    pub zhi: DiZhi,
}

impl GanZhi {
    pub fn new(gan: u8, zhi: u8) -> Self {
        Self { gan: TianGan::from_index(gan), zhi: DiZhi::from_index(zhi) }
    }
}

/// 四柱（年、月、日、时）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug,
)]
pub struct SiZhu {
    pub year_zhu: GanZhi,
    pub month_zhu: GanZhi,
    pub day_zhu: GanZhi,
    pub hour_zhu: GanZhi,
}

impl SiZhu {
    /// 按年、月、日、时顺序返回四柱
    pub fn pillars(&self) -> [GanZhi; 4] {
        [self.year_zhu, self.month_zhu, self.day_zhu, self.hour_zhu]
    }
}

// ============================================================================
// 五行分布与分析结果
// ============================================================================

/// 五行计数，按 `WuXing::index()` 索引
///
/// 有完整生辰时八个字的五行计数之和恒为 8，否则为 0。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug, Default,
)]
pub struct ElementDistribution {
    pub counts: [u8; 5],
}

impl ElementDistribution {
    pub fn count(&self, element: WuXing) -> u8 {
        self.counts[element.index()]
    }

    pub fn add(&mut self, element: WuXing) {
        self.counts[element.index()] = self.counts[element.index()].saturating_add(1);
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|c| *c as u32).sum()
    }

    /// 计数为零的五行
    pub fn missing(&self) -> Vec<WuXing> {
        WuXing::LISTING_ORDER.into_iter().filter(|e| self.count(*e) == 0).collect()
    }

    /// 计数最多的五行，并列时取列举顺序靠前者
    pub fn dominant(&self) -> Option<(WuXing, u8)> {
        let mut best: Option<(WuXing, u8)> = None;
        for element in WuXing::LISTING_ORDER {
            let count = self.count(element);
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((element, count));
            }
        }
        best
    }

    /// 计数最少的 `n` 个五行（稳定排序，并列时保持列举顺序）
    pub fn least_represented(&self, n: usize) -> Vec<WuXing> {
        let mut elements: Vec<WuXing> = WuXing::LISTING_ORDER.to_vec();
        elements.sort_by_key(|e| self.count(*e));
        elements.truncate(n);
        elements
    }
}

/// 命盘中出现的五行条目
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
pub struct WuxingElement {
    /// 显示标签（五行中文名）
    pub label: Vec<u8>,
    pub element: WuXing,
}

/// 生辰五行分析结果，每次请求重新计算
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
pub struct WuxingAnalysis {
    /// 四柱，生辰不完整时为 None
    pub pillars: Option<SiZhu>,
    pub distribution: ElementDistribution,
    /// 命盘中出现的五行
    pub elements: Vec<WuxingElement>,
    /// 缺失的五行
    pub missing: Vec<WuXing>,
    /// 平衡度 0-100
    pub balance: u8,
    /// 建议文案（UTF-8）
    pub recommendation: Vec<u8>,
}

impl WuxingAnalysis {
    /// 生辰不完整时的中性分析结果
    pub fn insufficient() -> Self {
        Self {
            pillars: None,
            distribution: ElementDistribution::default(),
            elements: Vec::new(),
            missing: Vec::new(),
            balance: 0,
            recommendation: crate::constants::INSUFFICIENT_DATA_TEXT.as_bytes().to_vec(),
        }
    }

    pub fn recommendation_str(&self) -> &str {
        core::str::from_utf8(&self.recommendation).unwrap_or_default()
    }
}

// ============================================================================
// 取名请求
// ============================================================================

/// 请求性别
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug, Default,
)]
pub enum Gender {
    #[default]
    Male = 0,
    Female = 1,
}

/// 字的性别倾向
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug,
)]
pub enum GenderAffinity {
    Male,
    Female,
    Neutral,
}

impl GenderAffinity {
    /// 中性字适合所有性别
    pub fn accepts(self, gender: Gender) -> bool {
        matches!(
            (self, gender),
            (GenderAffinity::Neutral, _)
                | (GenderAffinity::Male, Gender::Male)
                | (GenderAffinity::Female, Gender::Female)
        )
    }
}

/// 名字（不含姓）的字数
///
/// `Compound` 用于复姓等四字全名场景，仍组合两个名字字。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug, Default,
)]
pub enum GivenLength {
    /// 单字名
    Single = 1,
    /// 双字名
    #[default]
    Double = 2,
    /// 四字全名
    Compound = 3,
}

/// 出生日期，各字段均可缺省
///
/// 年、月、日齐全才会排盘；小时缺省时按 `DEFAULT_BIRTH_HOUR` 计算。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug, Default,
)]
pub struct BirthDate {
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
}

impl BirthDate {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year: Some(year), month: Some(month), day: Some(day), hour: None }
    }

    pub fn with_hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    /// 年月日齐全时返回 (年, 月, 日, 时)
    pub fn complete(&self) -> Option<(u16, u8, u8, u8)> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => Some((
                year,
                month,
                day,
                self.hour.unwrap_or(crate::constants::DEFAULT_BIRTH_HOUR),
            )),
            _ => None,
        }
    }
}

/// 姓氏（UTF-8，最多 4 个汉字）
pub type SurnameBytes = BoundedVec<u8, ConstU32<16>>;
/// 单个寓意偏好（UTF-8）
pub type PreferenceBytes = BoundedVec<u8, ConstU32<32>>;
/// 寓意偏好列表
pub type Preferences = BoundedVec<PreferenceBytes, ConstU32<16>>;

/// 取名请求，在整个流水线中保持不变
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
pub struct NameRequest {
    pub surname: SurnameBytes,
    pub gender: Gender,
    pub given_length: GivenLength,
    pub birth_date: Option<BirthDate>,
    pub meaning_preferences: Preferences,
}

impl NameRequest {
    /// 姓氏超过长度上限时返回 None
    pub fn new(surname: &str, gender: Gender, given_length: GivenLength) -> Option<Self> {
        Some(Self {
            surname: surname.as_bytes().to_vec().try_into().ok()?,
            gender,
            given_length,
            birth_date: None,
            meaning_preferences: Default::default(),
        })
    }

    pub fn with_birth_date(mut self, birth_date: BirthDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// 追加寓意偏好，超出上限时返回 None
    pub fn with_preference(mut self, preference: &str) -> Option<Self> {
        let bytes: PreferenceBytes = preference.as_bytes().to_vec().try_into().ok()?;
        self.meaning_preferences.try_push(bytes).ok()?;
        Some(self)
    }

    /// 去除全部空白后的姓氏
    pub fn sanitized_surname(&self) -> String {
        core::str::from_utf8(&self.surname).map(crate::validation::sanitize_input).unwrap_or_default()
    }

    /// 有效的寓意偏好：合法 UTF-8、去除首尾空白后非空
    pub fn preference_strs(&self) -> Vec<&str> {
        self.meaning_preferences
            .iter()
            .filter_map(|p| core::str::from_utf8(p).ok())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

// ============================================================================
// 生成结果
// ============================================================================

/// 名字中的一个字
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
pub struct NameCharacter {
    pub glyph: Vec<u8>,
    pub pinyin: Vec<u8>,
    pub element: WuXing,
}

impl From<&Character> for NameCharacter {
    fn from(c: &Character) -> Self {
        Self {
            glyph: c.glyph.as_bytes().to_vec(),
            pinyin: c.pinyin.as_bytes().to_vec(),
            element: c.element,
        }
    }
}

impl NameCharacter {
    pub fn pinyin_str(&self) -> &str {
        core::str::from_utf8(&self.pinyin).unwrap_or_default()
    }
}

/// 候选名字
///
/// 组合阶段 `score` 为 0，评分阶段写入一次最终得分。
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
pub struct GeneratedName {
    pub full_name: Vec<u8>,
    pub surname: Vec<u8>,
    pub characters: Vec<NameCharacter>,
    /// 各字寓意标签依次拼接
    pub meanings: Vec<Vec<u8>>,
    pub wuxing_analysis: WuxingAnalysis,
    pub explanation: Vec<u8>,
    pub score: u8,
}

impl GeneratedName {
    pub fn full_name_str(&self) -> &str {
        core::str::from_utf8(&self.full_name).unwrap_or_default()
    }

    pub fn explanation_str(&self) -> &str {
        core::str::from_utf8(&self.explanation).unwrap_or_default()
    }
}

// ============================================================================
// 参考数据
// ============================================================================

/// 字库中的一个字
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct Character {
    pub glyph: &'static str,
    /// 带声调拼音
    pub pinyin: &'static str,
    /// 核心释义
    pub meaning: &'static str,
    pub element: WuXing,
    pub gender: GenderAffinity,
    pub strokes: u8,
    /// 寓意标签
    pub tags: &'static [&'static str],
}

/// 寓意分类
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct MeaningCategory {
    pub category: &'static str,
    /// 该分类下的寓意词
    pub meanings: &'static [&'static str],
    /// 该分类推荐的字
    pub characters: &'static [&'static str],
}

/// 只读参考表，启动时确定后按引用传入各阶段
#[derive(Clone, Copy, RuntimeDebug)]
pub struct NamingTables {
    pub characters: &'static [Character],
    pub categories: &'static [MeaningCategory],
}

// ============================================================================
// 上限配置
// ============================================================================

/// 组合与筛选上限
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct NamingLimits {
    /// 单字名候选字上限
    pub max_single_candidates: u32,
    /// 双字名候选字上限
    pub max_pair_candidates: u32,
    /// 四字全名候选字上限
    pub max_compound_candidates: u32,
    /// 返回名字数量上限
    pub max_results: u32,
    /// 严格寓意匹配的最少数量，低于此值放宽匹配
    pub min_strict_meaning_matches: u32,
}

impl Default for NamingLimits {
    fn default() -> Self {
        Self {
            max_single_candidates: MAX_SINGLE_CANDIDATES,
            max_pair_candidates: MAX_PAIR_CANDIDATES,
            max_compound_candidates: MAX_COMPOUND_CANDIDATES,
            max_results: MAX_RESULTS,
            min_strict_meaning_matches: MIN_STRICT_MEANING_MATCHES,
        }
    }
}

impl NamingLimits {
    /// 按名字字数取候选字上限
    pub fn candidate_cap(&self, given_length: GivenLength) -> usize {
        match given_length {
            GivenLength::Single => self.max_single_candidates as usize,
            GivenLength::Double => self.max_pair_candidates as usize,
            GivenLength::Compound => self.max_compound_candidates as usize,
        }
    }
}
