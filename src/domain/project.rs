// ==========================================
// 发电机组项目状态看板 - 项目领域模型
// ==========================================
// 数据来源: projects.csv 平面数据表（一行一个项目）
// 生命周期: 每次加载构造一次，计算周期内不可变
// ==========================================

use crate::domain::types::CleaningFlag;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 源数据表列名
// ==========================================
// 与 projects.csv 表头一一对应；必填列缺失时整批加载失败，
// 选填列缺失时按"整列缺失"降级处理
pub mod columns {
    pub const PROJECT_TYPE: &str = "Project_Type";
    pub const PROJECT_NAME: &str = "Project_Name";
    pub const YEAR: &str = "Year";
    pub const LEAD_TIME: &str = "Lead_Time";
    pub const PARTS_ARRIVAL_DATE: &str = "Parts_Arrival_Date";
    pub const INSTALLATION_COMPLETE_DATE: &str = "Installation_Complete_Date";
    pub const TESTING_DATE: &str = "Testing_Date";
    pub const CLEANING: &str = "Cleaning";
    pub const DELIVERY_DATE: &str = "Delivery_Date";
    pub const DESCRIPTION: &str = "Description";
    pub const REMARKS: &str = "Remarks";
}

// ==========================================
// ProjectRecord - 项目记录
// ==========================================
// 用途: 导入层写入，引擎层只读
// 所有选填字段解析失败一律降级为 None，不中断整行/整批
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    // ===== 过滤与聚合维度 =====
    pub project_type: String,          // 项目类型（Enclosure/Open Set/...）
    pub project_name: String,          // 项目名称（展示键，不保证唯一）
    pub year: Option<i32>,             // 年度（无法解析时永不匹配年度过滤）
    pub lead_time: Option<NaiveDate>,  // 交期（月份过滤 + 交付风险基准）

    // ===== 里程碑 =====
    pub parts_arrival_date: Option<NaiveDate>, // 到料日期（权重 30）
    pub installation_complete_date: Option<NaiveDate>, // 安装完成日期（权重 40）
    pub testing_date: Option<NaiveDate>,       // 测试日期（权重 10）
    pub cleaning_src: Option<String>,          // 清洁标记（源字段文本，展示用）
    pub cleaning: CleaningFlag,                // 清洁标记（派生：源文本 == "YES"，权重 10）
    pub delivery_date: Option<NaiveDate>,      // 交货日期（权重 10）

    // ===== 展示文本 =====
    pub description: Option<String>, // 描述（可能包含机型标记，如 KTA38）
    pub remarks: Option<String>,     // 备注（原样透传）
}

impl ProjectRecord {
    /// 从导入中间结构构造（清洁标记在此一次性派生为枚举）
    pub fn from_raw(raw: RawProjectRecord) -> Self {
        let cleaning = CleaningFlag::from_src(raw.cleaning.as_deref());
        Self {
            project_type: raw.project_type.unwrap_or_default(),
            project_name: raw.project_name.unwrap_or_default(),
            year: raw.year,
            lead_time: raw.lead_time,
            parts_arrival_date: raw.parts_arrival_date,
            installation_complete_date: raw.installation_complete_date,
            testing_date: raw.testing_date,
            cleaning_src: raw.cleaning,
            cleaning,
            delivery_date: raw.delivery_date,
            description: raw.description,
            remarks: raw.remarks,
        }
    }
}

// ==========================================
// RawProjectRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 字段映射 → 此结构）
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProjectRecord {
    pub project_type: Option<String>,
    pub project_name: Option<String>,
    pub year: Option<i32>,
    pub lead_time: Option<NaiveDate>,
    pub parts_arrival_date: Option<NaiveDate>,
    pub installation_complete_date: Option<NaiveDate>,
    pub testing_date: Option<NaiveDate>,
    pub cleaning: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub remarks: Option<String>,

    // 元信息
    pub row_number: usize, // 原始文件行号（用于加载报告）
}

// ==========================================
// ColumnPresence - 列存在性
// ==========================================
// 加载时一次性解析表头得出，后续所有降级判断只看这里，
// 不在运行期反复探测列是否存在
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ColumnPresence {
    pub project_type: bool,
    pub project_name: bool,
    pub year: bool,
    pub lead_time: bool,
    pub parts_arrival_date: bool,
    pub installation_complete_date: bool,
    pub testing_date: bool,
    pub cleaning: bool,
    pub delivery_date: bool,
    pub description: bool,
    pub remarks: bool,
}

impl ColumnPresence {
    /// 从表头解析列存在性
    pub fn from_headers(headers: &[String]) -> Self {
        let has = |name: &str| headers.iter().any(|h| h == name);
        Self {
            project_type: has(columns::PROJECT_TYPE),
            project_name: has(columns::PROJECT_NAME),
            year: has(columns::YEAR),
            lead_time: has(columns::LEAD_TIME),
            parts_arrival_date: has(columns::PARTS_ARRIVAL_DATE),
            installation_complete_date: has(columns::INSTALLATION_COMPLETE_DATE),
            testing_date: has(columns::TESTING_DATE),
            cleaning: has(columns::CLEANING),
            delivery_date: has(columns::DELIVERY_DATE),
            description: has(columns::DESCRIPTION),
            remarks: has(columns::REMARKS),
        }
    }

    /// 缺失的必填列
    pub fn missing_required(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if !self.project_type {
            missing.push(columns::PROJECT_TYPE.to_string());
        }
        if !self.project_name {
            missing.push(columns::PROJECT_NAME.to_string());
        }
        if !self.year {
            missing.push(columns::YEAR.to_string());
        }
        if !self.lead_time {
            missing.push(columns::LEAD_TIME.to_string());
        }
        missing
    }

    /// 年度/交期分组列是否可用（过滤管道的前置条件）
    pub fn has_grouping_columns(&self) -> bool {
        self.year && self.lead_time
    }
}

// ==========================================
// ProjectDataset - 项目数据集
// ==========================================
// 一次加载的不可变快照：行集合 + 加载时解析出的列存在性
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDataset {
    pub rows: Vec<ProjectRecord>,
    pub columns: ColumnPresence,
}

impl ProjectDataset {
    pub fn new(rows: Vec<ProjectRecord>, columns: ColumnPresence) -> Self {
        Self { rows, columns }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// LoadWarning - 加载警告
// ==========================================
// 局部降级的记录：哪一行/哪一列、什么级别、什么问题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadWarning {
    pub row_number: Option<usize>,  // 原始文件行号（整列问题时为 None）
    pub column: Option<String>,     // 相关列名
    pub level: LoadWarningLevel,    // 级别
    pub message: String,            // 描述
}

// ==========================================
// LoadWarningLevel - 加载警告级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadWarningLevel {
    Warning, // 数据降级（字段置空/整列忽略）
    Info,    // 仅记录
}

// ==========================================
// LoadReport - 加载报告
// ==========================================
// 用途: 加载接口返回值，交给外部展示层做用户提示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub load_id: String,            // 加载批次 ID（UUID）
    pub file_name: Option<String>,  // 源文件名
    pub total_rows: usize,          // 文件数据行数（不含表头，不含全空行）
    pub loaded_rows: usize,         // 成功载入行数
    pub warnings: Vec<LoadWarning>, // 降级明细
}

impl LoadReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
