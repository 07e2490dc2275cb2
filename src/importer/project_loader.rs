// ==========================================
// 发电机组项目状态看板 - 项目数据加载器
// ==========================================
// 职责: 文件解析 → 必填列校验 → 字段映射 → 数据集 + 加载报告
// 红线: 单元格问题只降级，整批失败仅限文件/表结构问题
// ==========================================

use crate::domain::project::{
    columns, ColumnPresence, LoadReport, LoadWarning, LoadWarningLevel, ProjectDataset,
    ProjectRecord,
};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::CsvParser;
use chrono::NaiveDate;
use std::path::Path;
use uuid::Uuid;

pub struct ProjectLoader {
    parser: CsvParser,
    mapper: FieldMapper,
}

impl ProjectLoader {
    pub fn new() -> Self {
        Self {
            parser: CsvParser,
            mapper: FieldMapper::new(),
        }
    }

    /// 加载项目数据表
    ///
    /// # 返回
    /// - Ok((dataset, report)): 数据集快照 + 加载报告（含降级明细）
    /// - Err(ImportError): 文件缺失/不可读/缺必填列等整批致命问题
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ImportResult<(ProjectDataset, LoadReport)> {
        let path = path.as_ref();
        tracing::info!("加载项目数据表: {}", path.display());

        // 阶段 1: 文件解析
        let table = self.parser.parse(path)?;

        // 阶段 2: 必填列校验
        let presence = ColumnPresence::from_headers(&table.headers);
        let missing = presence.missing_required();
        if !missing.is_empty() {
            tracing::error!("数据表缺少必填列: {:?}", missing);
            return Err(ImportError::MissingRequiredColumns(missing));
        }

        // 阶段 3: 选填列缺失警告（整列按空处理）
        let mut warnings = Vec::new();
        self.warn_missing_optional_columns(&presence, &mut warnings);

        // 阶段 4: 逐行映射（表头占第 1 行，数据从第 2 行起）
        let mut rows = Vec::with_capacity(table.rows.len());
        for (idx, source_row) in table.rows.iter().enumerate() {
            let row_number = idx + 2;
            let raw = self.mapper.map_row(source_row, row_number, &mut warnings);
            rows.push(ProjectRecord::from_raw(raw));
        }

        // 阶段 5: 日期列整列无有效值的提示
        self.warn_all_invalid_date_columns(&rows, &presence, &mut warnings);

        let report = LoadReport {
            load_id: Uuid::new_v4().to_string(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
            total_rows: table.rows.len(),
            loaded_rows: rows.len(),
            warnings,
        };

        tracing::info!(
            "加载完成: {} 行, {} 条警告 (load_id={})",
            report.loaded_rows,
            report.warnings.len(),
            report.load_id
        );

        Ok((ProjectDataset::new(rows, presence), report))
    }

    /// 选填列缺失 → 逐列记录警告
    fn warn_missing_optional_columns(
        &self,
        presence: &ColumnPresence,
        warnings: &mut Vec<LoadWarning>,
    ) {
        let optional: [(&str, bool, LoadWarningLevel); 7] = [
            (
                columns::PARTS_ARRIVAL_DATE,
                presence.parts_arrival_date,
                LoadWarningLevel::Warning,
            ),
            (
                columns::INSTALLATION_COMPLETE_DATE,
                presence.installation_complete_date,
                LoadWarningLevel::Warning,
            ),
            (
                columns::TESTING_DATE,
                presence.testing_date,
                LoadWarningLevel::Warning,
            ),
            (columns::CLEANING, presence.cleaning, LoadWarningLevel::Warning),
            (
                columns::DELIVERY_DATE,
                presence.delivery_date,
                LoadWarningLevel::Warning,
            ),
            (
                columns::DESCRIPTION,
                presence.description,
                LoadWarningLevel::Info,
            ),
            (columns::REMARKS, presence.remarks, LoadWarningLevel::Info),
        ];

        for (name, present, level) in optional {
            if !present {
                warnings.push(LoadWarning {
                    row_number: None,
                    column: Some(name.to_string()),
                    level,
                    message: format!("数据表缺少列 {}，整列按空处理", name),
                });
            }
        }
    }

    /// 日期列存在但不含任何有效日期 → 提示该列可能被忽略
    fn warn_all_invalid_date_columns(
        &self,
        rows: &[ProjectRecord],
        presence: &ColumnPresence,
        warnings: &mut Vec<LoadWarning>,
    ) {
        if rows.is_empty() {
            return;
        }

        type DateGetter = fn(&ProjectRecord) -> Option<NaiveDate>;
        let date_columns: [(&str, bool, DateGetter); 5] = [
            (columns::LEAD_TIME, presence.lead_time, |r| r.lead_time),
            (
                columns::PARTS_ARRIVAL_DATE,
                presence.parts_arrival_date,
                |r| r.parts_arrival_date,
            ),
            (
                columns::INSTALLATION_COMPLETE_DATE,
                presence.installation_complete_date,
                |r| r.installation_complete_date,
            ),
            (columns::TESTING_DATE, presence.testing_date, |r| {
                r.testing_date
            }),
            (columns::DELIVERY_DATE, presence.delivery_date, |r| {
                r.delivery_date
            }),
        ];

        for (name, present, getter) in date_columns {
            if present && rows.iter().all(|r| getter(r).is_none()) {
                warnings.push(LoadWarning {
                    row_number: None,
                    column: Some(name.to_string()),
                    level: LoadWarningLevel::Warning,
                    message: format!("列 {} 不含任何有效日期，可能被忽略", name),
                });
            }
        }
    }
}
