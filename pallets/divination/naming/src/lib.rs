//! # pallet-divination-naming
//!
//! ## 五行取名模块 - 基于生辰五行与寓意偏好的姓名推荐
//!
//! 根据出生日期排出简化四柱，统计五行分布并找出缺失五行，
//! 再结合性别与寓意偏好从字库中选字、组合、评分，返回排序后的候选名字。
//!
//! ### 核心功能
//!
//! - **五行分析**：四柱干支、五行计数、缺失五行、平衡度与补益建议
//! - **候选字筛选**：性别 → 五行 → 寓意（严格匹配不足时放宽）
//! - **名字组合**：单字名、双字名（音韵和谐过滤）、复姓四字全名
//! - **综合评分**：五行、寓意、音韵加随机扰动，千分制定点计算
//!
//! ### 技术架构
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  pallet-divination-naming                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Extrinsics:                                                 │
//! │  - generate_names: 生成候选名字（仅发出事件，不落存储）       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Runtime API:                                                │
//! │  - generate_names / analyze_birth_chart                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Algorithm:                                                  │
//! │  - calculations: 四柱与五行分析                               │
//! │  - selection:    候选字筛选                                   │
//! │  - composition:  名字组合与音韵检查                           │
//! │  - scoring:      评分与随机扰动                               │
//! │  - generator:    完整流水线                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! 算法模块不依赖运行时，可以在链下直接调用 [`generator::generate_names`]。

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod calculations;
pub mod composition;
pub mod constants;
pub mod data;
pub mod generator;
pub mod runtime_api;
pub mod scoring;
pub mod selection;
pub mod types;
pub mod validation;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub use pallet::*;
pub use scoring::{JitterSource, NoJitter, SeededJitter};
pub use types::*;
pub use validation::{CivilDate, InvalidRequest};

/// 日志目标
pub const LOG_TARGET: &str = "runtime::naming";

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use codec::Encode;
    use frame_support::{pallet_prelude::*, traits::Randomness};
    use frame_system::pallet_prelude::*;
    use sp_std::prelude::*;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Pallet 配置 trait
    ///
    /// 依赖 `pallet-timestamp` 取得当前日期，用于拒绝未来的出生日期。
    ///
    /// 注：RuntimeEvent 关联类型已从 Polkadot SDK 2506 版本开始自动附加
    #[pallet::config]
    pub trait Config: frame_system::Config + pallet_timestamp::Config {
        /// 随机数生成器（用于评分扰动）
        type Randomness: Randomness<Self::Hash, BlockNumberFor<Self>>;

        /// 权重信息
        type WeightInfo: WeightInfo;

        /// 单字名候选字上限
        #[pallet::constant]
        type MaxSingleCandidates: Get<u32>;

        /// 双字名候选字上限
        #[pallet::constant]
        type MaxPairCandidates: Get<u32>;

        /// 四字全名候选字上限
        #[pallet::constant]
        type MaxCompoundCandidates: Get<u32>;

        /// 返回名字数量上限
        #[pallet::constant]
        type MaxResults: Get<u32>;

        /// 严格寓意匹配最少数量
        #[pallet::constant]
        type MinStrictMeaningMatches: Get<u32>;
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 候选名字已生成
        NamesGenerated {
            who: T::AccountId,
            /// 五行平衡度（无生辰时为 0）
            balance: u8,
            /// (全名, 分数)，按分数降序
            names: Vec<(Vec<u8>, u8)>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// 姓氏须为 1-4 个汉字
        InvalidSurname,
        /// 出生日期不完整（年、月、日须同时提供）
        IncompleteBirthDate,
        /// 出生年份超出范围
        InvalidYear,
        /// 月份无效
        InvalidMonth,
        /// 日期无效
        InvalidDay,
        /// 小时无效
        InvalidHour,
        /// 出生日期晚于当前日期
        FutureBirthDate,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 生成候选名字
        ///
        /// # 参数
        /// - `origin`: 调用者（需签名）
        /// - `request`: 取名请求
        ///
        /// # 说明
        /// 结果通过 `NamesGenerated` 事件返回，不写入存储；
        /// 完整结果（含解释与五行分析）可通过 Runtime API 查询。
        #[pallet::call_index(0)]
        #[pallet::weight(<T as pallet::Config>::WeightInfo::generate_names())]
        pub fn generate_names(origin: OriginFor<T>, request: NameRequest) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::check_request(&request).map_err(Error::<T>::from)?;

            let (random_hash, _) = T::Randomness::random(&(b"naming", &who).encode());
            let mut jitter = SeededJitter::from_hash(random_hash);
            let (names, analysis) = generator::generate_with_analysis(
                &NamingTables::standard(),
                &Self::limits(),
                &request,
                &mut jitter,
            );

            log::info!(
                target: LOG_TARGET,
                "generated {} names for {:?}, surname {}",
                names.len(),
                who,
                request.sanitized_surname()
            );

            Self::deposit_event(Event::NamesGenerated {
                who,
                balance: analysis.balance,
                names: names.into_iter().map(|n| (n.full_name, n.score)).collect(),
            });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// 由配置常量得到筛选与组合上限
        pub fn limits() -> NamingLimits {
            NamingLimits {
                max_single_candidates: T::MaxSingleCandidates::get(),
                max_pair_candidates: T::MaxPairCandidates::get(),
                max_compound_candidates: T::MaxCompoundCandidates::get(),
                max_results: T::MaxResults::get(),
                min_strict_meaning_matches: T::MinStrictMeaningMatches::get(),
            }
        }

        /// 当前链上日期（UTC），时间戳尚未设置时为 None
        pub fn today() -> Option<CivilDate> {
            let moment = pallet_timestamp::Pallet::<T>::get();
            let ms: u64 = moment.try_into().unwrap_or(0);
            (ms > 0).then(|| validation::civil_date_from_millis(ms))
        }

        /// 按当前链上日期校验请求
        pub fn check_request(request: &NameRequest) -> Result<(), InvalidRequest> {
            validation::validate_request(request, Self::today())
        }

        /// 以指定种子生成候选名字（Runtime API 使用）
        ///
        /// 请求未通过校验时返回空列表。
        pub fn generate_with_seed(request: &NameRequest, seed: [u8; 32]) -> Vec<GeneratedName> {
            if Self::check_request(request).is_err() {
                return Vec::new();
            }
            generator::generate_names(
                &NamingTables::standard(),
                &Self::limits(),
                request,
                &mut SeededJitter::new(seed),
            )
        }

        /// 生辰五行分析（Runtime API 使用）
        pub fn analyze_birth_chart(birth_date: &BirthDate) -> WuxingAnalysis {
            calculations::calculate_wuxing(birth_date)
        }
    }
}

impl<T> From<InvalidRequest> for Error<T> {
    fn from(reason: InvalidRequest) -> Self {
        match reason {
            InvalidRequest::InvalidSurname => Error::InvalidSurname,
            InvalidRequest::IncompleteBirthDate => Error::IncompleteBirthDate,
            InvalidRequest::InvalidYear => Error::InvalidYear,
            InvalidRequest::InvalidMonth => Error::InvalidMonth,
            InvalidRequest::InvalidDay => Error::InvalidDay,
            InvalidRequest::InvalidHour => Error::InvalidHour,
            InvalidRequest::FutureBirthDate => Error::FutureBirthDate,
        }
    }
}
