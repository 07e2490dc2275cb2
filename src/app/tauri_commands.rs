// ==========================================
// 发电机组项目状态看板 - Tauri 命令层
// ==========================================
// 职责: 连接前端与看板 API；命令只做参数转换和序列化
// ==========================================

use crate::api::{ApiError, DashboardQuery};
use crate::app::state::{get_default_data_path, AppState};

/// API 错误 → 前端错误消息
fn map_api_error(err: ApiError) -> String {
    err.to_string()
}

/// 加载项目数据表（path 为空时使用默认路径）
#[tauri::command(rename_all = "snake_case")]
pub async fn load_projects(
    state: tauri::State<'_, AppState>,
    path: Option<String>,
) -> Result<String, String> {
    let path = match path {
        Some(p) if !p.trim().is_empty() => std::path::PathBuf::from(p),
        _ => get_default_data_path(&state.config),
    };

    let report = state
        .load_from_file(&path)
        .map_err(|e| map_api_error(ApiError::from(e)))?;

    serde_json::to_string(&report).map_err(|e| format!("序列化失败: {}", e))
}

/// 构建看板视图（进度基准日 = 今天）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_dashboard(
    state: tauri::State<'_, AppState>,
    project_type: String,
    year: i32,
    month_index: Option<u32>,
) -> Result<String, String> {
    let dataset = state
        .dataset()
        .ok_or_else(|| map_api_error(ApiError::DataNotLoaded("请先加载数据".to_string())))?;

    let query = DashboardQuery::from_selection(&project_type, year, month_index);
    let today = chrono::Local::now().date_naive();

    let view = state
        .dashboard_api
        .build_view(&dataset, &query, today)
        .map_err(map_api_error)?;

    serde_json::to_string(&view).map_err(|e| format!("序列化失败: {}", e))
}

/// 过滤控件选项集合
#[tauri::command(rename_all = "snake_case")]
pub async fn get_filter_options(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let options = state.dashboard_api.filter_options();
    serde_json::to_string(&options).map_err(|e| format!("序列化失败: {}", e))
}

/// 最近一次加载报告（未加载时返回 null）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_load_report(state: tauri::State<'_, AppState>) -> Result<String, String> {
    serde_json::to_string(&state.last_load()).map_err(|e| format!("序列化失败: {}", e))
}

/// 切换界面语言（"zh-CN" / "en"）
#[tauri::command(rename_all = "snake_case")]
pub async fn set_language(locale: String) -> Result<String, String> {
    crate::i18n::set_locale(&locale);
    Ok(crate::i18n::current_locale())
}
