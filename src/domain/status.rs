// ==========================================
// 发电机组项目状态看板 - 状态计算结果实体
// ==========================================
// 职责: 引擎层输出的结构化结果（进度报告/交付提醒/数量汇总）
// 红线: 结果只由引擎派生，绝不写回项目记录
// ==========================================

use crate::domain::types::Rgb;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// MilestoneFlags - 里程碑达成标记
// ==========================================
// 五个里程碑的布尔判定结果，随进度一起交给展示层
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneFlags {
    pub parts_arrival: bool, // 到料
    pub installation: bool,  // 安装完成
    pub testing: bool,       // 测试
    pub cleaning: bool,      // 清洁
    pub delivery: bool,      // 交货
}

impl MilestoneFlags {
    /// 五个里程碑是否全部达成
    pub fn all_met(&self) -> bool {
        self.parts_arrival && self.installation && self.testing && self.cleaning && self.delivery
    }

    /// 已达成的里程碑个数
    pub fn met_count(&self) -> usize {
        [
            self.parts_arrival,
            self.installation,
            self.testing,
            self.cleaning,
            self.delivery,
        ]
        .iter()
        .filter(|m| **m)
        .count()
    }
}

// ==========================================
// ProgressReport - 单项目进度报告
// ==========================================
// 进度不落盘：每次计算相对 "今天" 重新派生，
// 对固定记录而言只会随时间推进单调不减
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub percent: u8,                // 完成百分比 [0, 100]
    pub color: Rgb,                 // 进度条颜色
    pub milestones: MilestoneFlags, // 各里程碑判定明细
}

// ==========================================
// DeliveryReminder - 交付风险提醒
// ==========================================
// 交货日期为空、或晚于交期的项目；跨越当前过滤条件，
// 始终基于全量数据集生成
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReminder {
    pub project_name: String,
    pub lead_time: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub remarks: Option<String>,
}

// ==========================================
// TypeCount / ProjectCountSummary - 数量汇总
// ==========================================
// by_type 顺序 = 过滤结果中类型首次出现的顺序（可复现，供计数器排版）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub project_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCountSummary {
    pub total: usize,            // 过滤结果总数
    pub by_type: Vec<TypeCount>, // 分类型计数（首次出现顺序）
}
