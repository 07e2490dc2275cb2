// ==========================================
// 发电机组项目状态看板 - 核心库
// ==========================================
// 技术栈: Tauri + Rust + CSV 平面数据表
// 系统定位: 项目进度跟踪与交付风险提醒 (只读看板)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据 (CSV)
pub mod importer;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 看板配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 看板视图接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CleaningFlag, MonthFilter, Rgb, TypeFilter};

// 领域实体
pub use domain::{
    ColumnPresence, DeliveryReminder, LoadReport, LoadWarning, LoadWarningLevel, MilestoneFlags,
    ProgressReport, ProjectCountSummary, ProjectDataset, ProjectRecord, RawProjectRecord,
    TypeCount,
};

// 引擎
pub use engine::{AggregateEngine, FilterEngine, ProgressEngine, ReminderEngine};

// 导入层
pub use importer::{ImportError, ImportResult, ProjectLoader};

// API
pub use api::{DashboardApi, DashboardQuery, DashboardView};

// 配置
pub use config::DashboardConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "发电机组项目状态看板";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
