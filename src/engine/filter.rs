// ==========================================
// 发电机组项目状态看板 - 过滤管道引擎
// ==========================================
// 职责: 全量数据集 → 类型/年度/月份切片
// 红线: 保持输入顺序；对任意输入全函数；幂等
// ==========================================

use crate::domain::project::{ProjectDataset, ProjectRecord};
use crate::domain::types::{MonthFilter, TypeFilter};

// ==========================================
// FilterEngine - 过滤管道
// ==========================================
pub struct FilterEngine {
    // 无状态引擎
}

impl FilterEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 过滤项目数据集
    ///
    /// 步骤（顺序固定）:
    /// 1. 类型: "All" 保留全部，否则精确匹配 project_type
    /// 2. 年度: year 精确匹配；表结构缺 Year/Lead_Time 列时直接返回空切片
    /// 3. 月份: 哨兵不过滤；指定月份时按交期月份索引匹配，
    ///    交期缺失/无法解析的行一律排除
    ///
    /// 输出顺序与输入顺序一致
    pub fn filter(
        &self,
        dataset: &ProjectDataset,
        type_filter: &TypeFilter,
        year: i32,
        month: &MonthFilter,
    ) -> Vec<ProjectRecord> {
        // 缺少分组列 → 降级为空结果，交给调用方提示
        if !dataset.columns.has_grouping_columns() {
            tracing::warn!("数据表缺少 Year/Lead_Time 列，过滤结果为空");
            return Vec::new();
        }

        let filtered: Vec<ProjectRecord> = dataset
            .rows
            .iter()
            .filter(|r| type_filter.matches(&r.project_type))
            .filter(|r| r.year == Some(year))
            .filter(|r| month.matches(r.lead_time))
            .cloned()
            .collect();

        tracing::debug!(
            "过滤: type={}, year={}, month={} → {} / {} 行",
            type_filter,
            year,
            month,
            filtered.len(),
            dataset.len()
        );

        filtered
    }
}
