// ==========================================
// 发电机组项目状态看板 - 看板配置
// ==========================================
// 职责: 过滤选项集合、机型标记、数据文件名
// 存储: 可选 JSON 覆写文件（缺失时使用内置默认值）
// ==========================================

use crate::i18n;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 看板配置
///
/// 月份显示名不在配置里：核心匹配只用 1-12 的整数索引，
/// 显示名由语言表提供（见 `month_options`）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// 可选的项目类型集合（开放集合，"All" 为保留项，不在此列）
    #[serde(default = "default_project_types")]
    pub project_types: Vec<String>,

    /// 可选年度集合
    #[serde(default = "default_years")]
    pub years: Vec<i32>,

    /// 默认选中的年度
    #[serde(default = "default_year")]
    pub default_year: i32,

    /// 描述中触发机型图标的标记词（大小写不敏感的子串匹配）
    #[serde(default = "default_tag_marker")]
    pub tag_marker: String,

    /// 数据文件名
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_project_types() -> Vec<String> {
    ["Enclosure", "Open Set", "Scania", "Marine", "K50G3"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_years() -> Vec<i32> {
    vec![2024, 2025, 2026]
}

fn default_year() -> i32 {
    2025
}

fn default_tag_marker() -> String {
    "KTA38".to_string()
}

fn default_data_file() -> String {
    "projects.csv".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            project_types: default_project_types(),
            years: default_years(),
            default_year: default_year(),
            tag_marker: default_tag_marker(),
            data_file: default_data_file(),
        }
    }
}

impl DashboardConfig {
    /// 配置覆写文件路径（系统配置目录下）
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("project-status-board").join("config.json"))
    }

    /// 加载配置
    ///
    /// 覆写文件不存在 → 默认值；存在但不可读/格式错误 → 错误上抛，
    /// 由外层提示用户修复
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                let config = serde_json::from_str(&content)?;
                tracing::info!("已加载配置覆写: {}", path.display());
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }

    /// 项目类型下拉选项（"All" 置顶）
    pub fn type_options(&self) -> Vec<String> {
        let mut options = vec![crate::domain::types::TypeFilter::ALL_LABEL.to_string()];
        options.extend(self.project_types.iter().cloned());
        options
    }

    /// 年度下拉选项
    pub fn year_options(&self) -> Vec<i32> {
        self.years.clone()
    }

    /// 月份下拉选项（哨兵 "--" 置顶，显示名取自语言表）
    pub fn month_options(&self) -> Vec<String> {
        let mut options = vec![crate::domain::types::MonthFilter::NO_FILTER_LABEL.to_string()];
        options.extend((1..=12).map(i18n::month_name));
        options
    }
}
