// ==========================================
// 发电机组项目状态看板 - 进度计算引擎
// ==========================================
// 职责: 项目记录 → (完成百分比, 颜色, 里程碑明细)
// 权重: 到料 30 / 安装 40 / 测试 10 / 清洁 10 / 交货 10
// 红线: 对任意记录全函数，绝不 panic；进度不落盘，每次重算
// ==========================================

use crate::domain::project::ProjectRecord;
use crate::domain::status::{MilestoneFlags, ProgressReport};
use crate::engine::color::progress_color;
use chrono::NaiveDate;

// 里程碑权重（合计恰好 100）
pub const WEIGHT_PARTS_ARRIVAL: u32 = 30;
pub const WEIGHT_INSTALLATION: u32 = 40;
pub const WEIGHT_TESTING: u32 = 10;
pub const WEIGHT_CLEANING: u32 = 10;
pub const WEIGHT_DELIVERY: u32 = 10;

// ==========================================
// ProgressEngine - 进度计算引擎
// ==========================================
pub struct ProgressEngine {
    // 无状态引擎，不需要注入依赖
}

impl ProgressEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算单项目进度
    ///
    /// # 参数
    /// - `record`: 项目记录
    /// - `today`: 计算基准日（只比较日历日，忽略时刻）
    ///
    /// # 返回
    /// ProgressReport { percent ∈ [0,100], color, milestones }
    pub fn evaluate(&self, record: &ProjectRecord, today: NaiveDate) -> ProgressReport {
        let milestones = self.judge_milestones(record, today);

        let mut percent = self.weighted_sum(&milestones);

        // 五个里程碑全部达成时强制 100，兜住任何权重合计漂移
        if milestones.all_met() {
            percent = 100;
        }
        let percent = percent.min(100) as u8;

        ProgressReport {
            percent,
            color: progress_color(percent),
            milestones,
        }
    }

    // ==========================================
    // 里程碑判定
    // ==========================================

    /// 日期里程碑: 日期存在且不晚于基准日才算达成
    /// 清洁里程碑: 加载时派生的布尔标记
    fn judge_milestones(&self, record: &ProjectRecord, today: NaiveDate) -> MilestoneFlags {
        MilestoneFlags {
            parts_arrival: Self::date_met(record.parts_arrival_date, today),
            installation: Self::date_met(record.installation_complete_date, today),
            testing: Self::date_met(record.testing_date, today),
            cleaning: record.cleaning.is_done(),
            delivery: Self::date_met(record.delivery_date, today),
        }
    }

    fn date_met(date: Option<NaiveDate>, today: NaiveDate) -> bool {
        date.map_or(false, |d| d <= today)
    }

    fn weighted_sum(&self, milestones: &MilestoneFlags) -> u32 {
        let mut sum = 0;
        if milestones.parts_arrival {
            sum += WEIGHT_PARTS_ARRIVAL;
        }
        if milestones.installation {
            sum += WEIGHT_INSTALLATION;
        }
        if milestones.testing {
            sum += WEIGHT_TESTING;
        }
        if milestones.cleaning {
            sum += WEIGHT_CLEANING;
        }
        if milestones.delivery {
            sum += WEIGHT_DELIVERY;
        }
        sum
    }
}
