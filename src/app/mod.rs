// ==========================================
// 发电机组项目状态看板 - 应用层
// ==========================================
// 职责: Tauri 集成，连接前端与后端
// ==========================================

pub mod state;

#[cfg(feature = "tauri-app")]
pub mod tauri_commands;

// 重导出
pub use state::{get_default_data_path, AppState};

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;
