//! # 取名请求校验
//!
//! 在进入取名引擎之前检查姓氏和出生日期；引擎本身对任何输入都返回结果。
//!
//! 出生日期不得晚于当前日期。当前日期由调用方提供（链上取自 `pallet-timestamp`），
//! 未提供时跳过该项检查。

use crate::constants::{MAX_BIRTH_YEAR, MAX_SURNAME_CHARS, MIN_BIRTH_YEAR};
use crate::types::{BirthDate, NameRequest};
use alloc::string::String;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// 请求校验失败原因
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, RuntimeDebug,
)]
pub enum InvalidRequest {
    /// 姓氏须为 1-4 个汉字
    InvalidSurname,
    /// 年、月、日须同时提供
    IncompleteBirthDate,
    /// 年份超出 1900-2030
    InvalidYear,
    /// 月份超出 1-12
    InvalidMonth,
    /// 日期超出当月天数
    InvalidDay,
    /// 小时超出 0-23
    InvalidHour,
    /// 出生日期晚于当前日期
    FutureBirthDate,
}

/// 公历日期 (年, 月, 日)
pub type CivilDate = (u16, u8, u8);

/// 去除全部空白字符
pub fn sanitize_input(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Unix 纪元以来的天数换算为公历日期（UTC）
pub fn civil_date_from_days(days: u64) -> CivilDate {
    // 以 0000-03-01 为纪元起点，每 400 年 146097 天
    let z = days.saturating_add(719_468);
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year.min(u16::MAX as u64) as u16, month, day)
}

/// Unix 毫秒时间戳换算为公历日期（UTC）
pub fn civil_date_from_millis(millis: u64) -> CivilDate {
    civil_date_from_days(millis / 1000 / 86_400)
}

/// 基本汉字区 U+4E00..=U+9FA5
fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// 姓氏是否为 1-4 个汉字（不做空白清理）
pub fn is_chinese_surname(surname: &[u8]) -> bool {
    let Ok(text) = core::str::from_utf8(surname) else {
        return false;
    };
    let count = text.chars().count();
    (1..=MAX_SURNAME_CHARS).contains(&count) && text.chars().all(is_cjk)
}

pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 当月天数，月份非法时返回 0
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// 校验出生日期
///
/// 年、月、日全部缺省视为未提供生辰；只提供其中一部分时报错。
pub fn validate_birth_date(birth_date: &BirthDate) -> Result<(), InvalidRequest> {
    if let Some(hour) = birth_date.hour {
        if hour > 23 {
            return Err(InvalidRequest::InvalidHour);
        }
    }

    let (year, month, day) = match (birth_date.year, birth_date.month, birth_date.day) {
        (None, None, None) => return Ok(()),
        (Some(year), Some(month), Some(day)) => (year, month, day),
        _ => return Err(InvalidRequest::IncompleteBirthDate),
    };

    if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&year) {
        return Err(InvalidRequest::InvalidYear);
    }
    if !(1..=12).contains(&month) {
        return Err(InvalidRequest::InvalidMonth);
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(InvalidRequest::InvalidDay);
    }
    Ok(())
}

/// 出生日期不得晚于 `today`，当天出生视为有效
pub fn ensure_not_future(birth_date: &BirthDate, today: CivilDate) -> Result<(), InvalidRequest> {
    match (birth_date.year, birth_date.month, birth_date.day) {
        (Some(year), Some(month), Some(day)) if (year, month, day) > today =>
            Err(InvalidRequest::FutureBirthDate),
        _ => Ok(()),
    }
}

/// 校验取名请求
///
/// 姓氏先去除空白再检查；`today` 为 None 时不检查未来日期。
pub fn validate_request(request: &NameRequest, today: Option<CivilDate>) -> Result<(), InvalidRequest> {
    if !is_chinese_surname(request.sanitized_surname().as_bytes()) {
        return Err(InvalidRequest::InvalidSurname);
    }
    let Some(birth_date) = &request.birth_date else {
        return Ok(());
    };
    validate_birth_date(birth_date)?;
    match today {
        Some(today) => ensure_not_future(birth_date, today),
        None => Ok(()),
    }
}

impl NameRequest {
    /// 不含未来日期检查的校验
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        validate_request(self, None)
    }

    /// 以 `today` 为当前日期校验
    pub fn validate_at(&self, today: CivilDate) -> Result<(), InvalidRequest> {
        validate_request(self, Some(today))
    }
}
