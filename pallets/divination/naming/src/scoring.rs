//! # 名字评分
//!
//! 综合分 = 基础分 60 + 五行匹配（满分 30）+ 寓意匹配（满分 20）+ 音韵（满分 10）+ 随机扰动 ±5，
//! 最终截断到 0-100 并四舍五入。
//!
//! 计算采用千分制定点数，避免浮点运算。

use crate::composition::is_phonetic_harmony;
use crate::constants::{
    BASE_SCORE, DISHARMONY_BONUS, ELEMENT_BALANCED_BONUS, ELEMENT_WEIGHT, HARMONY_BONUS,
    JITTER_RANGE, MAX_SCORE, MEANING_DEFAULT_BONUS, MEANING_WEIGHT, SCORE_SCALE,
    SINGLE_PHONETIC_BONUS,
};
use crate::types::{GeneratedName, NameRequest};
use codec::Encode;
use sp_core::hashing::blake2_256;

// ============================================================================
// 随机扰动
// ============================================================================

/// 评分扰动来源
///
/// 每次调用返回一个千分制扰动值，范围 `[-5000, 5000]`（即 ±5 分）。
pub trait JitterSource {
    fn next_jitter(&mut self) -> i32;
}

/// 无扰动，用于测试和可复现的排序
#[derive(Clone, Copy, Debug, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn next_jitter(&mut self) -> i32 {
        0
    }
}

/// 基于 32 字节种子的确定性扰动序列
///
/// 第 n 个值取 `blake2_256((seed, n))` 的前 4 字节，映射到 `[-5000, 5000]`。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededJitter {
    seed: [u8; 32],
    cursor: u32,
}

impl SeededJitter {
    pub fn new(seed: [u8; 32]) -> Self {
        Self { seed, cursor: 0 }
    }

    /// 从任意哈希构造种子，不足 32 字节时补零
    pub fn from_hash(hash: impl AsRef<[u8]>) -> Self {
        let bytes = hash.as_ref();
        let mut seed = [0u8; 32];
        let len = bytes.len().min(32);
        seed[..len].copy_from_slice(&bytes[..len]);
        Self::new(seed)
    }
}

impl JitterSource for SeededJitter {
    fn next_jitter(&mut self) -> i32 {
        let digest = blake2_256(&(self.seed, self.cursor).encode());
        self.cursor = self.cursor.wrapping_add(1);

        let raw = u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]);
        let range = (JITTER_RANGE * SCORE_SCALE) as u32;
        (raw % (2 * range + 1)) as i32 - range as i32
    }
}

// ============================================================================
// 评分
// ============================================================================

fn element_points(name: &GeneratedName) -> i64 {
    let missing = &name.wuxing_analysis.missing;
    if missing.is_empty() {
        return ELEMENT_BALANCED_BONUS * SCORE_SCALE;
    }
    let total = name.characters.len().max(1) as i64;
    let hits = name.characters.iter().filter(|c| missing.contains(&c.element)).count() as i64;
    ELEMENT_WEIGHT * SCORE_SCALE * hits / total
}

fn meaning_points(name: &GeneratedName, preferences: &[&str]) -> i64 {
    if preferences.is_empty() {
        return MEANING_DEFAULT_BONUS * SCORE_SCALE;
    }
    let matches = name
        .meanings
        .iter()
        .filter_map(|tag| core::str::from_utf8(tag).ok())
        .filter(|tag| preferences.iter().any(|pref| tag.contains(pref)))
        .count() as i64;
    MEANING_WEIGHT * SCORE_SCALE * matches / preferences.len() as i64
}

fn phonetic_points(name: &GeneratedName) -> i64 {
    match name.characters.as_slice() {
        [first, second, ..] =>
            if is_phonetic_harmony(first.pinyin_str(), second.pinyin_str()) {
                HARMONY_BONUS * SCORE_SCALE
            } else {
                DISHARMONY_BONUS * SCORE_SCALE
            },
        _ => SINGLE_PHONETIC_BONUS * SCORE_SCALE,
    }
}

/// 计算名字综合分（0-100）
///
/// 寓意匹配按请求中全部有效偏好计分，包括筛选阶段未识别的偏好。
pub fn score_name<J: JitterSource>(name: &GeneratedName, request: &NameRequest, jitter: &mut J) -> u8 {
    let preferences = request.preference_strs();
    let total = BASE_SCORE * SCORE_SCALE +
        element_points(name) +
        meaning_points(name, &preferences) +
        phonetic_points(name) +
        jitter.next_jitter() as i64;

    let clamped = total.clamp(0, MAX_SCORE * SCORE_SCALE);
    ((clamped + SCORE_SCALE / 2) / SCORE_SCALE) as u8
}
