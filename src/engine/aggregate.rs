// ==========================================
// 发电机组项目状态看板 - 数量汇总引擎
// ==========================================
// 职责: 过滤结果 → 总数 + 分类型计数
// 红线: 分类型顺序 = 类型在结果中首次出现的顺序（可复现）
// ==========================================

use crate::domain::project::ProjectRecord;
use crate::domain::status::{ProjectCountSummary, TypeCount};

// ==========================================
// AggregateEngine - 数量汇总
// ==========================================
pub struct AggregateEngine {
    // 无状态引擎
}

impl AggregateEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总过滤结果
    ///
    /// 类型数量有限（个位数），线性查找即可，换来稳定的首现顺序
    pub fn summarize(&self, rows: &[ProjectRecord]) -> ProjectCountSummary {
        let mut by_type: Vec<TypeCount> = Vec::new();

        for row in rows {
            match by_type
                .iter_mut()
                .find(|c| c.project_type == row.project_type)
            {
                Some(entry) => entry.count += 1,
                None => by_type.push(TypeCount {
                    project_type: row.project_type.clone(),
                    count: 1,
                }),
            }
        }

        ProjectCountSummary {
            total: rows.len(),
            by_type,
        }
    }
}
