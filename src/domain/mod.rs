// ==========================================
// 发电机组项目状态看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体与值类型
// 红线: 不含文件访问逻辑，不含引擎逻辑
// ==========================================

pub mod project;
pub mod status;
pub mod types;

// 重导出核心类型
pub use project::{
    columns, ColumnPresence, LoadReport, LoadWarning, LoadWarningLevel, ProjectDataset,
    ProjectRecord, RawProjectRecord,
};
pub use status::{
    DeliveryReminder, MilestoneFlags, ProgressReport, ProjectCountSummary, TypeCount,
};
pub use types::{CleaningFlag, MonthFilter, Rgb, TypeFilter};
