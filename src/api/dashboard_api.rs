// ==========================================
// 发电机组项目状态看板 - 看板 API
// ==========================================
// 职责: 组合四个引擎，产出一次完整的看板视图
// 架构: API 层 → 引擎层（纯函数），渲染层只消费结构化结果
// ==========================================

use crate::config::DashboardConfig;
use crate::domain::project::{ProjectDataset, ProjectRecord};
use crate::domain::status::{DeliveryReminder, MilestoneFlags, ProjectCountSummary};
use crate::domain::types::{MonthFilter, Rgb, TypeFilter};
use crate::engine::{AggregateEngine, FilterEngine, ProgressEngine, ReminderEngine};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};

// 展示层日期格式
const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// DashboardQuery - 一次查询的过滤条件
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub project_type: TypeFilter,
    pub year: i32,
    pub month: MonthFilter,
}

impl DashboardQuery {
    /// 从 UI 选中项构造（month_index: None 或 0 表示不过滤）
    pub fn from_selection(type_selection: &str, year: i32, month_index: Option<u32>) -> Self {
        let month = match month_index {
            None | Some(0) => MonthFilter::All,
            Some(m) => MonthFilter::Month(m),
        };
        Self {
            project_type: TypeFilter::from_selection(type_selection),
            year,
            month,
        }
    }
}

// ==========================================
// 视图 DTO
// ==========================================

/// 单个项目的展示行：格式化日期 + 进度 + 颜色 + 标记
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStatusRow {
    pub project_name: String,
    pub description: Option<String>,
    pub has_tag_marker: bool, // 描述包含机型标记（如 KTA38）时展示图标
    pub parts_arrival_date: Option<String>,
    pub installation_complete_date: Option<String>,
    pub testing_date: Option<String>,
    pub cleaning: Option<String>, // 源文本原样展示
    pub delivery_date: Option<String>,
    pub remarks: Option<String>,
    pub percent: u8,
    pub color: Rgb,
    pub color_css: String,
    pub milestones: MilestoneFlags,
}

/// 交付风险提醒的展示行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderRow {
    pub project_name: String,
    pub lead_time: Option<String>,
    pub delivery_date: Option<String>,
    pub remarks: Option<String>,
}

/// 过滤控件的选项集合
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub project_types: Vec<String>,
    pub years: Vec<i32>,
    pub months: Vec<String>,
}

/// 一次完整的看板视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub summary: ProjectCountSummary,
    pub projects: Vec<ProjectStatusRow>,
    pub reminders: Vec<ReminderRow>,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    config: DashboardConfig,
    progress: ProgressEngine,
    filter: FilterEngine,
    reminder: ReminderEngine,
    aggregate: AggregateEngine,
}

impl DashboardApi {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            progress: ProgressEngine::new(),
            filter: FilterEngine::new(),
            reminder: ReminderEngine::new(),
            aggregate: AggregateEngine::new(),
        }
    }

    /// 构建一次完整的看板视图
    ///
    /// 提醒清单始终基于全量数据集生成，不受查询过滤条件影响
    ///
    /// # 参数
    /// - `dataset`: 全量数据集快照
    /// - `query`: 过滤条件
    /// - `today`: 进度计算基准日
    pub fn build_view(
        &self,
        dataset: &ProjectDataset,
        query: &DashboardQuery,
        today: NaiveDate,
    ) -> ApiResult<DashboardView> {
        if !query.month.is_valid() {
            return Err(ApiError::InvalidInput(format!(
                "月份索引必须在 1-12 之间: {}",
                query.month
            )));
        }

        let filtered = self
            .filter
            .filter(dataset, &query.project_type, query.year, &query.month);

        let summary = self.aggregate.summarize(&filtered);

        let projects = filtered
            .iter()
            .map(|record| self.status_row(record, today))
            .collect();

        let reminders = self
            .reminder
            .select(dataset)
            .into_iter()
            .map(Self::reminder_row)
            .collect();

        Ok(DashboardView {
            summary,
            projects,
            reminders,
        })
    }

    /// 过滤控件的选项集合（月份显示名来自语言表）
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            project_types: self.config.type_options(),
            years: self.config.year_options(),
            months: self.config.month_options(),
        }
    }

    // ==========================================
    // 行装配
    // ==========================================

    fn status_row(&self, record: &ProjectRecord, today: NaiveDate) -> ProjectStatusRow {
        let progress = self.progress.evaluate(record, today);

        ProjectStatusRow {
            project_name: record.project_name.clone(),
            description: record.description.clone(),
            has_tag_marker: self.has_tag_marker(record.description.as_deref()),
            parts_arrival_date: record.parts_arrival_date.map(Self::format_date),
            installation_complete_date: record.installation_complete_date.map(Self::format_date),
            testing_date: record.testing_date.map(Self::format_date),
            cleaning: record.cleaning_src.clone(),
            delivery_date: record.delivery_date.map(Self::format_date),
            remarks: record.remarks.clone(),
            percent: progress.percent,
            color: progress.color,
            color_css: progress.color.to_css(),
            milestones: progress.milestones,
        }
    }

    /// 描述中是否含机型标记（大小写不敏感的子串匹配）
    fn has_tag_marker(&self, description: Option<&str>) -> bool {
        if self.config.tag_marker.is_empty() {
            return false;
        }
        description.map_or(false, |d| {
            d.to_uppercase()
                .contains(&self.config.tag_marker.to_uppercase())
        })
    }

    fn reminder_row(reminder: DeliveryReminder) -> ReminderRow {
        ReminderRow {
            project_name: reminder.project_name,
            lead_time: reminder.lead_time.map(Self::format_date),
            delivery_date: reminder.delivery_date.map(Self::format_date),
            remarks: reminder.remarks,
        }
    }

    fn format_date(date: NaiveDate) -> String {
        date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}
