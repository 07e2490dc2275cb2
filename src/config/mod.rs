// ==========================================
// 发电机组项目状态看板 - 配置层
// ==========================================
// 职责: 看板配置管理（过滤选项集合/标记词/数据文件名）
// ==========================================

pub mod dashboard_config;

// 重导出核心配置
pub use dashboard_config::DashboardConfig;
