// ==========================================
// 发电机组项目状态看板 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 红线: 可变状态只在这里；引擎层全部保持纯函数
// ==========================================

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::api::DashboardApi;
use crate::config::DashboardConfig;
use crate::domain::project::{LoadReport, ProjectDataset};
use crate::importer::{ImportResult, ProjectLoader};

/// 应用状态
///
/// 数据集是一次加载的不可变快照；重新加载整体替换，
/// 过滤条件变化只触发重算，不触碰数据
pub struct AppState {
    /// 看板配置
    pub config: DashboardConfig,

    /// 看板API
    pub dashboard_api: Arc<DashboardApi>,

    /// 当前数据集快照（未加载时为 None）
    dataset: Mutex<Option<ProjectDataset>>,

    /// 最近一次加载报告
    last_load: Mutex<Option<LoadReport>>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let dashboard_api = Arc::new(DashboardApi::new(config.clone()));
        Self {
            config,
            dashboard_api,
            dataset: Mutex::new(None),
            last_load: Mutex::new(None),
        }
    }

    /// 从文件加载数据集，替换当前快照
    ///
    /// # 返回
    /// - Ok(LoadReport): 加载报告（含降级警告明细）
    /// - Err(ImportError): 整批致命问题，当前快照保持不变
    pub fn load_from_file<P: AsRef<std::path::Path>>(&self, path: P) -> ImportResult<LoadReport> {
        let loader = ProjectLoader::new();
        let (dataset, report) = loader.load(path)?;

        *self.dataset.lock().unwrap() = Some(dataset);
        *self.last_load.lock().unwrap() = Some(report.clone());

        Ok(report)
    }

    /// 当前数据集快照（克隆，调用方拿到的是独立副本）
    pub fn dataset(&self) -> Option<ProjectDataset> {
        self.dataset.lock().unwrap().clone()
    }

    /// 最近一次加载报告
    pub fn last_load(&self) -> Option<LoadReport> {
        self.last_load.lock().unwrap().clone()
    }
}

/// 默认数据文件路径
///
/// 优先级: 环境变量 > 用户数据目录 > 当前目录
pub fn get_default_data_path(config: &DashboardConfig) -> PathBuf {
    // 允许通过环境变量显式指定（便于调试/测试/CI）
    if let Ok(path) = std::env::var("PROJECT_STATUS_BOARD_DATA") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    // 用户数据目录下存在同名文件时优先使用
    if let Some(data_dir) = dirs::data_dir() {
        let candidate = data_dir.join("project-status-board").join(&config.data_file);
        if candidate.exists() {
            return candidate;
        }
    }

    // 回退: 当前目录
    PathBuf::from(&config.data_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_state_starts_empty() {
        let state = AppState::new(DashboardConfig::default());
        assert!(state.dataset().is_none());
        assert!(state.last_load().is_none());
    }

    #[test]
    fn test_load_replaces_snapshot() {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            f,
            "Project_Type,Project_Name,Year,Lead_Time\nMarine,MT-001,2025,15/06/2025\n"
        )
        .unwrap();

        let state = AppState::new(DashboardConfig::default());
        let report = state.load_from_file(f.path()).unwrap();

        assert_eq!(report.loaded_rows, 1);
        assert_eq!(state.dataset().unwrap().len(), 1);
        assert!(state.last_load().is_some());
    }

    #[test]
    fn test_failed_load_keeps_snapshot() {
        let mut ok = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            ok,
            "Project_Type,Project_Name,Year,Lead_Time\nMarine,MT-001,2025,15/06/2025\n"
        )
        .unwrap();

        let state = AppState::new(DashboardConfig::default());
        state.load_from_file(ok.path()).unwrap();

        // 缺必填列的文件加载失败，原快照保持不变
        let mut bad = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(bad, "Project_Name\nMT-002\n").unwrap();
        assert!(state.load_from_file(bad.path()).is_err());
        assert_eq!(state.dataset().unwrap().len(), 1);
    }

    #[test]
    fn test_default_data_path_falls_back_to_cwd() {
        let config = DashboardConfig::default();
        let path = get_default_data_path(&config);
        assert!(path.to_string_lossy().ends_with("projects.csv"));
    }
}
