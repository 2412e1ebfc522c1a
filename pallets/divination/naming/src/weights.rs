//! # Divination Naming Pallet Weights
//!
//! 五行取名模块权重定义

use frame_support::{traits::Get, weights::Weight};

/// 权重信息 Trait
pub trait WeightInfo {
    fn generate_names() -> Weight;
}

/// Substrate 权重实现
///
/// 组合上限为 15 × 15，计算量与请求内容基本无关。
///
/// 本模块没有存储项。读取两次：`Timestamp::Now` 与随机数来源；事件不计入写入。
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn generate_names() -> Weight {
        Weight::from_parts(90_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
    }
}

/// 默认权重实现（用于测试）
impl WeightInfo for () {
    fn generate_names() -> Weight { Weight::from_parts(90_000_000, 0) }
}
