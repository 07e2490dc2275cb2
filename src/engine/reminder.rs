// ==========================================
// 发电机组项目状态看板 - 交付风险提醒引擎
// ==========================================
// 职责: 全量数据集 → 交货缺失/晚于交期的项目清单
// 红线: 跨越当前过滤条件，始终基于全量数据集；保持输入顺序
// ==========================================

use crate::domain::project::ProjectDataset;
use crate::domain::status::DeliveryReminder;

// ==========================================
// ReminderEngine - 交付风险提醒
// ==========================================
pub struct ReminderEngine {
    // 无状态引擎
}

impl ReminderEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 选出交付风险项目
    ///
    /// 入选条件: 交货日期为空，或交货日期严格晚于交期。
    /// 交货日期存在而交期为空时不入选（无基准可比）。
    /// 四个输出字段全为空的行丢弃（没有可报告的内容）。
    pub fn select(&self, dataset: &ProjectDataset) -> Vec<DeliveryReminder> {
        // 表结构缺交货/交期列 → 无法判定风险，不出提醒
        if !dataset.columns.delivery_date || !dataset.columns.lead_time {
            tracing::warn!("数据表缺少 Delivery_Date/Lead_Time 列，跳过交付风险提醒");
            return Vec::new();
        }

        dataset
            .rows
            .iter()
            .filter(|r| Self::is_risky(r.delivery_date, r.lead_time))
            .map(|r| DeliveryReminder {
                project_name: r.project_name.clone(),
                lead_time: r.lead_time,
                delivery_date: r.delivery_date,
                remarks: r.remarks.clone(),
            })
            .filter(|reminder| !Self::is_blank(reminder))
            .collect()
    }

    fn is_risky(
        delivery_date: Option<chrono::NaiveDate>,
        lead_time: Option<chrono::NaiveDate>,
    ) -> bool {
        match (delivery_date, lead_time) {
            (None, _) => true,
            (Some(delivery), Some(lead)) => delivery > lead,
            (Some(_), None) => false,
        }
    }

    fn is_blank(reminder: &DeliveryReminder) -> bool {
        reminder.project_name.is_empty()
            && reminder.lead_time.is_none()
            && reminder.delivery_date.is_none()
            && reminder.remarks.is_none()
    }
}
