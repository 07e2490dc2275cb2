// ==========================================
// 发电机组项目状态看板 - API 层
// ==========================================
// 职责: 输入校验 + 引擎编排 + 展示 DTO 装配
// ==========================================

pub mod dashboard_api;
pub mod error;

// 重导出核心类型
pub use dashboard_api::{
    DashboardApi, DashboardQuery, DashboardView, FilterOptions, ProjectStatusRow, ReminderRow,
};
pub use error::{ApiError, ApiResult};
