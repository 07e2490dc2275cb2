// ==========================================
// 发电机组项目状态看板 - 字段映射器实现
// ==========================================
// 职责: 源列 → 标准字段映射 + 类型转换
// 红线: 单元格级别的解析失败只降级该字段并记录警告
// ==========================================

use crate::domain::project::{columns, LoadWarning, LoadWarningLevel, RawProjectRecord};
use crate::importer::data_cleaner::DataCleaner;
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct FieldMapper {
    cleaner: DataCleaner,
}

impl FieldMapper {
    pub fn new() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }

    /// 将一行源数据映射为导入中间结构
    ///
    /// # 参数
    /// - `row`: 表头 → 单元格文本
    /// - `row_number`: 原始文件行号（表头为第 1 行）
    /// - `warnings`: 单元格降级警告的收集器
    pub fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
        warnings: &mut Vec<LoadWarning>,
    ) -> RawProjectRecord {
        RawProjectRecord {
            project_type: self.get_string(row, columns::PROJECT_TYPE),
            project_name: self.get_string(row, columns::PROJECT_NAME),
            year: self.parse_year(row, columns::YEAR, row_number, warnings),
            lead_time: self.parse_date(row, columns::LEAD_TIME, row_number, warnings),
            parts_arrival_date: self.parse_date(
                row,
                columns::PARTS_ARRIVAL_DATE,
                row_number,
                warnings,
            ),
            installation_complete_date: self.parse_date(
                row,
                columns::INSTALLATION_COMPLETE_DATE,
                row_number,
                warnings,
            ),
            testing_date: self.parse_date(row, columns::TESTING_DATE, row_number, warnings),
            cleaning: self.get_string(row, columns::CLEANING),
            delivery_date: self.parse_date(row, columns::DELIVERY_DATE, row_number, warnings),
            description: self.get_string(row, columns::DESCRIPTION),
            remarks: self.get_string(row, columns::REMARKS),
            row_number,
        }
    }

    /// 提取字符串字段（返回 Option），支持多个可能的列名（别名）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        // 历史表格偶见以空格代替下划线的表头
        let aliases: Vec<String> = vec![key.to_string(), key.replace('_', " ")];

        for alias in aliases {
            if let Some(v) = row.get(&alias) {
                if let Some(cleaned) = self.cleaner.normalize_null(Some(v.clone())) {
                    return Some(cleaned);
                }
            }
        }
        None
    }

    /// 解析日期字段（日在前），失败记录警告并返回 None
    fn parse_date(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
        warnings: &mut Vec<LoadWarning>,
    ) -> Option<NaiveDate> {
        let value = self.get_string(row, key)?;
        match self.cleaner.parse_date_dayfirst(&value) {
            Some(date) => Some(date),
            None => {
                warnings.push(LoadWarning {
                    row_number: Some(row_number),
                    column: Some(key.to_string()),
                    level: LoadWarningLevel::Warning,
                    message: format!("日期无法解析，按空值处理: {}", value),
                });
                None
            }
        }
    }

    /// 解析年度字段，失败记录警告并返回 None
    fn parse_year(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
        warnings: &mut Vec<LoadWarning>,
    ) -> Option<i32> {
        let value = self.get_string(row, key)?;
        match self.cleaner.parse_year(&value) {
            Some(year) => Some(year),
            None => {
                warnings.push(LoadWarning {
                    row_number: Some(row_number),
                    column: Some(key.to_string()),
                    level: LoadWarningLevel::Warning,
                    message: format!("年度无法解析，该行不会匹配任何年度过滤: {}", value),
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_map_row_basic() {
        let mapper = FieldMapper::new();
        let mut warnings = Vec::new();
        let raw = mapper.map_row(
            &row(&[
                ("Project_Type", "Marine"),
                ("Project_Name", "MT-001"),
                ("Year", "2025"),
                ("Lead_Time", "15/06/2025"),
                ("Cleaning", "YES"),
            ]),
            2,
            &mut warnings,
        );

        assert_eq!(raw.project_type.as_deref(), Some("Marine"));
        assert_eq!(raw.year, Some(2025));
        assert_eq!(raw.lead_time, NaiveDate::from_ymd_opt(2025, 6, 15));
        assert_eq!(raw.cleaning.as_deref(), Some("YES"));
        assert_eq!(raw.row_number, 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_map_row_empty_as_none() {
        let mapper = FieldMapper::new();
        let mut warnings = Vec::new();
        let raw = mapper.map_row(
            &row(&[
                ("Project_Type", "Marine"),
                ("Project_Name", "MT-001"),
                ("Year", "2025"),
                ("Lead_Time", ""),
                ("Remarks", "  "),
            ]),
            2,
            &mut warnings,
        );

        // 空白单元格不是解析失败，不产生警告
        assert_eq!(raw.lead_time, None);
        assert_eq!(raw.remarks, None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_map_row_bad_date_degrades_with_warning() {
        let mapper = FieldMapper::new();
        let mut warnings = Vec::new();
        let raw = mapper.map_row(
            &row(&[
                ("Project_Type", "Marine"),
                ("Project_Name", "MT-001"),
                ("Year", "2025"),
                ("Lead_Time", "TBC"),
                ("Delivery_Date", "31/02/2025"),
            ]),
            5,
            &mut warnings,
        );

        assert_eq!(raw.lead_time, None);
        assert_eq!(raw.delivery_date, None);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].row_number, Some(5));
        assert_eq!(warnings[0].column.as_deref(), Some("Lead_Time"));
    }

    #[test]
    fn test_map_row_header_alias_with_spaces() {
        let mapper = FieldMapper::new();
        let mut warnings = Vec::new();
        let raw = mapper.map_row(
            &row(&[
                ("Project Type", "Enclosure"),
                ("Project Name", "EN-009"),
                ("Year", "2024"),
                ("Lead Time", "01/12/2024"),
            ]),
            2,
            &mut warnings,
        );

        assert_eq!(raw.project_type.as_deref(), Some("Enclosure"));
        assert_eq!(raw.lead_time, NaiveDate::from_ymd_opt(2024, 12, 1));
    }
}
