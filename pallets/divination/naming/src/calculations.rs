//! # 生辰五行分析
//!
//! 将出生日期换算为四柱干支，统计八字五行分布，给出缺失五行、平衡度和补益建议。
//!
//! ## 历法说明
//!
//! 四柱换算采用固定的取模公式，并非真正的农历节气排盘：
//!
//! - 年柱：干 `(年 - 4) mod 10`，支 `(年 - 4) mod 12`
//! - 月柱：干 `(年干 × 2 + 月) mod 10`，支 `(月 + 1) mod 12`
//! - 日柱：`总数 = 年 × 365 + 月 × 30 + 日`，干 `总数 mod 10`，支 `总数 mod 12`
//! - 时柱：支按十二时辰查表，干 `(日干 × 2 + ⌊时 / 2⌋) mod 10`
//!
//! 换算集中在 [`simplified_four_pillars`]，日后替换为精确历法时其余流程不受影响。

use crate::constants::{BALANCE_VARIANCE_FACTOR, BALANCED_TEXT, DOMINANT_THRESHOLD, LEAST_REPRESENTED_COUNT};
use crate::types::{
    BirthDate, DiZhi, ElementDistribution, GanZhi, SiZhu, TianGan, WuXing, WuxingAnalysis,
    WuxingElement,
};
use alloc::format;
use sp_std::prelude::*;

/// 年柱
pub fn year_ganzhi(year: u16) -> GanZhi {
    let offset = year as i32 - 4;
    GanZhi::new(offset.rem_euclid(10) as u8, offset.rem_euclid(12) as u8)
}

/// 月柱（依赖年干）
pub fn month_ganzhi(year_gan: TianGan, month: u8) -> GanZhi {
    let gan = (year_gan.0 as u32 * 2 + month as u32) % 10;
    let zhi = (month as u32 + 1) % 12;
    GanZhi::new(gan as u8, zhi as u8)
}

/// 日柱
pub fn day_ganzhi(year: u16, month: u8, day: u8) -> GanZhi {
    let total = year as u32 * 365 + month as u32 * 30 + day as u32;
    GanZhi::new((total % 10) as u8, (total % 12) as u8)
}

/// 时柱（依赖日干）
pub fn hour_ganzhi(day_gan: TianGan, hour: u8) -> GanZhi {
    let gan = (day_gan.0 as u32 * 2 + hour as u32 / 2) % 10;
    GanZhi { gan: TianGan::from_index(gan as u8), zhi: DiZhi::from_hour(hour) }
}

/// 简化四柱换算
pub fn simplified_four_pillars(year: u16, month: u8, day: u8, hour: u8) -> SiZhu {
    let year_zhu = year_ganzhi(year);
    let month_zhu = month_ganzhi(year_zhu.gan, month);
    let day_zhu = day_ganzhi(year, month, day);
    let hour_zhu = hour_ganzhi(day_zhu.gan, hour);
    SiZhu { year_zhu, month_zhu, day_zhu, hour_zhu }
}

/// 统计八字（四干四支）的五行分布
pub fn element_distribution(sizhu: &SiZhu) -> ElementDistribution {
    let mut distribution = ElementDistribution::default();
    for pillar in sizhu.pillars() {
        distribution.add(pillar.gan.to_wuxing());
        distribution.add(pillar.zhi.to_wuxing());
    }
    distribution
}

/// 五行平衡度：`round(clamp(0, 100, 100 - 10 × 方差))`
///
/// 方差为五个计数相对均值的总体方差。设总数为 T，
/// `方差 = Σ(5c - T)² / 125`，全程整数运算，四舍五入取半进一。
pub fn balance_score(distribution: &ElementDistribution) -> u8 {
    let total = distribution.total() as i64;
    let squared: i64 = distribution
        .counts
        .iter()
        .map(|c| {
            let d = 5 * *c as i64 - total;
            d * d
        })
        .sum();

    // 100 - 10 × squared / 125，分母统一为 125
    let numerator = 100 * 125 - BALANCE_VARIANCE_FACTOR * squared;
    if numerator <= 0 {
        return 0;
    }
    ((2 * numerator + 125) / 250).min(100) as u8
}

/// 补益建议
pub fn recommendation_text(distribution: &ElementDistribution, missing: &[WuXing]) -> Vec<u8> {
    if !missing.is_empty() {
        let names = missing.iter().map(|e| e.name()).collect::<Vec<_>>().join("、");
        return format!("命理缺{}，建议在名字中补充{}属性的字。", names, names).into_bytes();
    }

    match distribution.dominant() {
        Some((dominant, count)) if count > DOMINANT_THRESHOLD => format!(
            "{}过旺，建议使用{}属性的字来平衡。",
            dominant.name(),
            dominant.restrained_by().name()
        )
        .into_bytes(),
        _ => BALANCED_TEXT.as_bytes().to_vec(),
    }
}

/// 计算生辰五行分析
///
/// 年、月、日任一缺失时返回中性结果（无五行、无缺失、平衡度 0），不视为错误。
pub fn calculate_wuxing(birth_date: &BirthDate) -> WuxingAnalysis {
    let Some((year, month, day, hour)) = birth_date.complete() else {
        return WuxingAnalysis::insufficient();
    };

    let sizhu = simplified_four_pillars(year, month, day, hour);
    let distribution = element_distribution(&sizhu);
    let missing = distribution.missing();

    let elements = WuXing::LISTING_ORDER
        .into_iter()
        .filter(|e| distribution.count(*e) > 0)
        .map(|element| WuxingElement { label: element.name().as_bytes().to_vec(), element })
        .collect();

    WuxingAnalysis {
        pillars: Some(sizhu),
        distribution,
        elements,
        recommendation: recommendation_text(&distribution, &missing),
        missing,
        balance: balance_score(&distribution),
    }
}

/// 推荐用于取名的五行
///
/// 有缺失时取缺失五行，否则取数量最少的两个五行。
///
/// 无命盘时分布全为零，按列举顺序得到金、木。
pub fn recommended_elements(analysis: &WuxingAnalysis) -> Vec<WuXing> {
    if !analysis.missing.is_empty() {
        return analysis.missing.clone();
    }
    analysis.distribution.least_represented(LEAST_REPRESENTED_COUNT)
}
