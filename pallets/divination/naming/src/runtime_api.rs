//! Runtime API 定义：供前端查询完整的取名结果
//!
//! 提供以下接口：
//! - `generate_names`: 以指定种子生成候选名字（含解释与五行分析）
//! - `analyze_birth_chart`: 单独查询生辰五行分析

use crate::types::{BirthDate, GeneratedName, NameRequest, WuxingAnalysis};
use sp_std::vec::Vec;

sp_api::decl_runtime_apis! {
    /// 五行取名 Runtime API
    pub trait NamingApi {
        /// 生成候选名字
        ///
        /// ### 参数
        /// - `request`: 取名请求
        /// - `seed`: 评分扰动种子，相同种子返回相同结果
        ///
        /// ### 返回
        /// - 按分数降序的候选名字，请求无效时为空
        fn generate_names(request: NameRequest, seed: [u8; 32]) -> Vec<GeneratedName>;

        /// 生辰五行分析
        fn analyze_birth_chart(birth_date: BirthDate) -> WuxingAnalysis;
    }
}
