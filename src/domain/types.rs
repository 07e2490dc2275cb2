// ==========================================
// 发电机组项目状态看板 - 领域类型定义
// ==========================================
// 职责: 过滤器、清洁标记、进度颜色等小型值类型
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 清洁标记 (Cleaning Flag)
// ==========================================
// 源数据约定: 单元格文本严格等于 "YES"（区分大小写）才算完成
// 在数据模型边界一次性解析为枚举，引擎层不再做字符串比较
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CleaningFlag {
    Yes,     // 已清洁
    NotDone, // 未清洁/未填写/其他文本
}

impl CleaningFlag {
    /// 从源字段文本解析（TRIM 后严格等于 "YES" 才算完成）
    pub fn from_src(src: Option<&str>) -> Self {
        match src {
            Some(v) if v.trim() == "YES" => CleaningFlag::Yes,
            _ => CleaningFlag::NotDone,
        }
    }

    pub fn is_done(self) -> bool {
        self == CleaningFlag::Yes
    }
}

impl fmt::Display for CleaningFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleaningFlag::Yes => write!(f, "YES"),
            CleaningFlag::NotDone => write!(f, "NOT_DONE"),
        }
    }
}

// ==========================================
// RGB 颜色
// ==========================================
// 进度条颜色，由进度百分比确定性插值得出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS rgb() 形式，供前端进度条直接使用
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// 十六进制形式（#rrggbb）
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

// ==========================================
// 项目类型过滤器
// ==========================================
// 项目类型为开放集合（Enclosure/Open Set/Scania/Marine/K50G3/...），
// 过滤语义为精确匹配，"All" 为保留选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    All,
    Only(String),
}

impl TypeFilter {
    /// UI 下拉框中 "全部" 的保留字
    pub const ALL_LABEL: &'static str = "All";

    /// 从 UI 选中项构造
    pub fn from_selection(selection: &str) -> Self {
        if selection == Self::ALL_LABEL {
            TypeFilter::All
        } else {
            TypeFilter::Only(selection.to_string())
        }
    }

    pub fn matches(&self, project_type: &str) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => t == project_type,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "{}", Self::ALL_LABEL),
            TypeFilter::Only(t) => write!(f, "{}", t),
        }
    }
}

// ==========================================
// 月份过滤器 (按交期 Lead_Time)
// ==========================================
// UI 哨兵 "--" 表示不过滤；指定月份时按 1-12 的整数索引匹配，
// 交期缺失或无法解析的行在指定月份时一律排除
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl MonthFilter {
    /// UI 下拉框中 "不过滤" 的哨兵值
    pub const NO_FILTER_LABEL: &'static str = "--";

    /// 月份索引是否落在 1-12
    pub fn is_valid(&self) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => (1..=12).contains(m),
        }
    }

    pub fn matches(&self, lead_time: Option<NaiveDate>) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => lead_time.map_or(false, |d| d.month() == *m),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => write!(f, "{}", Self::NO_FILTER_LABEL),
            MonthFilter::Month(m) => write!(f, "{}", m),
        }
    }
}
