//! # 取名流水线
//!
//! 生辰分析 → 候选字筛选 → 名字组合 → 逐个评分 → 按分数稳定降序 → 截取前 `max_results` 个。
//!
//! 除扰动来源外无副作用，相同输入与相同扰动序列得到相同结果。

use crate::calculations::{calculate_wuxing, recommended_elements};
use crate::composition::compose_names;
use crate::scoring::{score_name, JitterSource};
use crate::selection::select_candidates;
use crate::types::{GeneratedName, NameRequest, NamingLimits, NamingTables, WuxingAnalysis};
use crate::LOG_TARGET;
use sp_std::prelude::*;

/// 生成并排序候选名字
pub fn generate_names<J: JitterSource>(
    tables: &NamingTables,
    limits: &NamingLimits,
    request: &NameRequest,
    jitter: &mut J,
) -> Vec<GeneratedName> {
    generate_with_analysis(tables, limits, request, jitter).0
}

/// 生成候选名字，同时返回本次使用的生辰分析
pub fn generate_with_analysis<J: JitterSource>(
    tables: &NamingTables,
    limits: &NamingLimits,
    request: &NameRequest,
    jitter: &mut J,
) -> (Vec<GeneratedName>, WuxingAnalysis) {
    let analysis = match &request.birth_date {
        Some(birth_date) => calculate_wuxing(birth_date),
        None => WuxingAnalysis::insufficient(),
    };
    let recommended = recommended_elements(&analysis);
    let preferences = request.preference_strs();

    let candidates =
        select_candidates(tables, request.gender, &recommended, &preferences, limits);

    let surname = request.sanitized_surname();
    let mut names = compose_names(&surname, &candidates, request.given_length, &analysis, limits);
    log::debug!(
        target: LOG_TARGET,
        "composed {} names from {} candidates",
        names.len(),
        candidates.len()
    );

    for name in names.iter_mut() {
        name.score = score_name(name, request, jitter);
    }

    names.sort_by(|a, b| b.score.cmp(&a.score));
    names.truncate(limits.max_results as usize);
    (names, analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::{is_phonetic_harmony, pinyin_initial};
    use crate::scoring::{NoJitter, SeededJitter};
    use crate::types::{BirthDate, Gender, GivenLength, WuXing};

    fn tables() -> NamingTables {
        NamingTables::standard()
    }

    fn request(surname: &str, gender: Gender, length: GivenLength) -> NameRequest {
        NameRequest::new(surname, gender, length).unwrap()
    }

    #[test]
    fn single_names_for_a_complete_chart() {
        let req = request("张", Gender::Male, GivenLength::Single)
            .with_birth_date(BirthDate::new(1990, 5, 15).with_hour(10));
        let names = generate_names(&tables(), &NamingLimits::default(), &req, &mut NoJitter);

        assert_eq!(names.len(), 8);
        // 男性可用的木属性字，全部满分，排序保持字库顺序
        let full: Vec<&str> = names.iter().map(|n| n.full_name_str()).collect();
        assert_eq!(full, vec!["张强", "张军", "张康", "张嘉", "张木", "张月", "张草", "张树"]);
        for name in &names {
            assert!(name.full_name_str().starts_with("张"));
            assert_eq!(name.characters.len(), 1);
            assert_eq!(name.characters[0].element, WuXing::Mu);
            assert_eq!(name.score, 100);
            assert_eq!(name.wuxing_analysis.missing, vec![WuXing::Mu]);
            assert_eq!(name.wuxing_analysis.balance, 90);
        }
    }

    #[test]
    fn double_names_without_birth_date() {
        let req = request("李", Gender::Male, GivenLength::Double).with_preference("勇敢").unwrap();
        let names = generate_names(&tables(), &NamingLimits::default(), &req, &mut NoJitter);

        // 无生辰时限定金、木，勇(土) 被排除；军诚：60 + 20 + 20 + 10
        let full: Vec<&str> = names.iter().map(|n| n.full_name_str()).collect();
        assert_eq!(full, vec!["李军诚"]);
        assert_eq!(names[0].score, 100);
        assert!(names[0].wuxing_analysis.missing.is_empty());
        assert_eq!(names[0].wuxing_analysis.balance, 0);
    }

    #[test]
    fn no_birth_date_restricts_to_jin_and_mu() {
        let req = request("张", Gender::Male, GivenLength::Single);
        let limits = NamingLimits { max_results: 200, ..Default::default() };
        let names = generate_names(&tables(), &limits, &req, &mut NoJitter);

        // 男性与中性字中属金、木的共 14 个
        assert_eq!(names.len(), 14);
        assert!(names
            .iter()
            .all(|n| matches!(n.characters[0].element, WuXing::Jin | WuXing::Mu)));
    }

    #[test]
    fn analysis_is_returned_with_names() {
        let req = request("张", Gender::Male, GivenLength::Single)
            .with_birth_date(BirthDate::new(1990, 5, 15).with_hour(10));
        let (names, analysis) =
            generate_with_analysis(&tables(), &NamingLimits::default(), &req, &mut NoJitter);
        assert_eq!(analysis.balance, 90);
        assert!(names.iter().all(|n| n.wuxing_analysis == analysis));

        let padded = request(" 张 ", Gender::Male, GivenLength::Single);
        let names = generate_names(&tables(), &NamingLimits::default(), &padded, &mut NoJitter);
        assert!(names.iter().all(|n| n.surname == "张".as_bytes().to_vec()));
    }

    #[test]
    fn filters_can_eliminate_every_candidate() {
        let req = request("张", Gender::Female, GivenLength::Single)
            .with_birth_date(BirthDate::new(1990, 5, 15).with_hour(10))
            .with_preference("勇敢")
            .unwrap();
        assert!(generate_names(&tables(), &NamingLimits::default(), &req, &mut NoJitter).is_empty());
    }

    #[test]
    fn unknown_preferences_are_ignored() {
        let req = request("王", Gender::Female, GivenLength::Single).with_preference("量子").unwrap();
        let names = generate_names(&tables(), &NamingLimits::default(), &req, &mut NoJitter);
        assert_eq!(names.len(), 8);
        // 寓意得分为 0：60 + 20 + 0 + 8
        assert!(names.iter().all(|n| n.score == 88));
    }

    #[test]
    fn double_names_never_pair_clashing_initials() {
        for gender in [Gender::Male, Gender::Female] {
            for year in [1955u16, 1987, 2004, 2019] {
                let req = request("陈", gender, GivenLength::Double)
                    .with_birth_date(BirthDate::new(year, 3, 8));
                let limits = NamingLimits { max_results: 200, ..Default::default() };
                for name in generate_names(&tables(), &limits, &req, &mut NoJitter) {
                    let a = name.characters[0].pinyin_str();
                    let b = name.characters[1].pinyin_str();
                    assert!(is_phonetic_harmony(a, b), "{} {}", a, b);
                    assert!(pinyin_initial(a) != pinyin_initial(b));
                }
            }
        }
    }

    #[test]
    fn results_are_bounded_and_sorted() {
        let mut jitter = SeededJitter::new([42u8; 32]);
        for length in [GivenLength::Single, GivenLength::Double, GivenLength::Compound] {
            let req = request("欧阳", Gender::Female, length)
                .with_birth_date(BirthDate::new(2012, 11, 2).with_hour(23))
                .with_preference("美丽")
                .unwrap();
            let names = generate_names(&tables(), &NamingLimits::default(), &req, &mut jitter);
            assert!(names.len() <= 8);
            assert!(names.windows(2).all(|w| w[0].score >= w[1].score));
            assert!(names.iter().all(|n| n.score <= 100));
            assert!(names.iter().all(|n| n.surname == "欧阳".as_bytes().to_vec()));
        }
    }

    #[test]
    fn same_seed_same_names() {
        let req = request("赵", Gender::Male, GivenLength::Compound)
            .with_birth_date(BirthDate::new(1978, 8, 20))
            .with_preference("智慧")
            .unwrap();
        let limits = NamingLimits::default();
        let first = generate_names(&tables(), &limits, &req, &mut SeededJitter::new([9u8; 32]));
        let second = generate_names(&tables(), &limits, &req, &mut SeededJitter::new([9u8; 32]));
        assert_eq!(first, second);

        let plain = generate_names(&tables(), &limits, &req, &mut NoJitter);
        assert_eq!(plain, generate_names(&tables(), &limits, &req, &mut NoJitter));
    }

    #[test]
    fn max_results_limit_is_respected() {
        let req = request("孙", Gender::Female, GivenLength::Double);
        let limits = NamingLimits { max_results: 3, ..Default::default() };
        assert_eq!(generate_names(&tables(), &limits, &req, &mut NoJitter).len(), 3);
    }
}
