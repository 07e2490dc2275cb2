// ==========================================
// 发电机组项目状态看板 - 引擎层
// ==========================================
// 职责: 纯函数业务规则（进度/过滤/提醒/汇总）
// 红线: 引擎无状态、不做 IO、对任意输入全函数
// ==========================================

pub mod aggregate;
pub mod color;
pub mod filter;
pub mod progress;
pub mod reminder;

// 重导出核心引擎
pub use aggregate::AggregateEngine;
pub use color::progress_color;
pub use filter::FilterEngine;
pub use progress::ProgressEngine;
pub use reminder::ReminderEngine;
