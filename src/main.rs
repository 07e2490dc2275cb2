// ==========================================
// 发电机组项目状态看板 - 主入口
// ==========================================
// 技术栈: Tauri + Rust + CSV 平面数据表
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use project_status_board::app::{get_default_data_path, AppState};
use project_status_board::config::DashboardConfig;

#[cfg(feature = "tauri-app")]
fn main() {
    use project_status_board::app::tauri_commands::*;

    // 初始化日志系统
    project_status_board::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", project_status_board::APP_NAME);
    tracing::info!("系统版本: {}", project_status_board::VERSION);
    tracing::info!("==================================================");

    // 加载配置
    let config = DashboardConfig::load().expect("配置文件读取失败");

    // 创建AppState
    let app_state = AppState::new(config);

    // 启动前尝试加载默认数据文件（失败不阻断启动，前端可重新选择文件）
    let data_path = get_default_data_path(&app_state.config);
    match app_state.load_from_file(&data_path) {
        Ok(report) => tracing::info!("已加载 {} 个项目", report.loaded_rows),
        Err(e) => tracing::warn!("默认数据文件加载失败: {}", e),
    }

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            load_projects,
            get_dashboard,
            get_filter_options,
            get_load_report,
            set_language,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    use project_status_board::api::DashboardQuery;
    use project_status_board::i18n;

    project_status_board::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", project_status_board::APP_NAME);
    tracing::info!("系统版本: {}", project_status_board::VERSION);
    tracing::info!("==================================================");

    let config = match DashboardConfig::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("配置文件读取失败: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(config);
    let data_path = get_default_data_path(&state.config);

    let report = match state.load_from_file(&data_path) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{}: {}", i18n::t("common.load_failed"), e);
            tracing::info!("请确认 {} 存在且为 UTF-8 逗号分隔的 CSV", data_path.display());
            std::process::exit(1);
        }
    };

    for warning in &report.warnings {
        tracing::warn!(
            "加载警告 [{}:{}]: {}",
            warning.column.as_deref().unwrap_or("-"),
            warning
                .row_number
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
            warning.message
        );
    }

    // 默认过滤条件: All + 默认年度 + 不过滤月份
    let dataset = state.dataset().expect("数据集刚刚加载成功");
    let query = DashboardQuery::from_selection("All", state.config.default_year, None);
    let today = chrono::Local::now().date_naive();

    let view = match state.dashboard_api.build_view(&dataset, &query, today) {
        Ok(view) => view,
        Err(e) => {
            tracing::error!("看板视图构建失败: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("{} - {}", i18n::t("app.title"), state.config.default_year);
    println!("Total Projects: {}", view.summary.total);
    for count in &view.summary.by_type {
        println!("  {}: {}", count.project_type, count.count);
    }

    println!();
    for row in &view.projects {
        println!(
            "{:<40} {:>3}%  {}",
            row.project_name, row.percent, row.color_css
        );
    }

    if !view.reminders.is_empty() {
        println!();
        println!("{}", i18n::t("reminder.title"));
        println!("{}", i18n::t("reminder.hint"));
        for reminder in &view.reminders {
            println!(
                "  {:<40} lead: {:<10}  delivery: {:<10}  {}",
                reminder.project_name,
                reminder.lead_time.as_deref().unwrap_or("-"),
                reminder.delivery_date.as_deref().unwrap_or("-"),
                reminder.remarks.as_deref().unwrap_or("")
            );
        }
    }
}
