// ==========================================
// 发电机组项目状态看板 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 日在前日期解析 / 年度解析
// ==========================================

use chrono::NaiveDate;

// 日期格式候选，日在前优先（dd/mm 歧义时按 dd/mm 解释）
const DATE_FORMATS: [&str; 6] = [
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%Y-%m-%d",
    "%Y/%m/%d",
];

pub struct DataCleaner;

impl DataCleaner {
    /// 文本清洗（TRIM）
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 空值标准化（空白单元格 → None）
    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 日在前日期解析
    ///
    /// 解析失败一律返回 None（单字段局部降级，绝不让整行失败），
    /// 是否记录警告由调用方决定
    pub fn parse_date_dayfirst(&self, value: &str) -> Option<NaiveDate> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
    }

    /// 年度解析
    ///
    /// 源表年度列偶见 "2025.0" 这类导出痕迹，整数解析失败后
    /// 再尝试无小数部分的浮点
    pub fn parse_year(&self, value: &str) -> Option<i32> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(y) = trimmed.parse::<i32>() {
            return Some(y);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.fract() == 0.0 => Some(f as i32),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_null() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null(Some("  ".to_string())), None);
        assert_eq!(cleaner.normalize_null(Some("".to_string())), None);
        assert_eq!(
            cleaner.normalize_null(Some(" x ".to_string())),
            Some("x".to_string())
        );
        assert_eq!(cleaner.normalize_null(None), None);
    }

    #[test]
    fn test_parse_date_dayfirst_preference() {
        let cleaner = DataCleaner;
        // 05/03/2025 按日在前解释为 3 月 5 日，而不是 5 月 3 日
        assert_eq!(
            cleaner.parse_date_dayfirst("05/03/2025"),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
        assert_eq!(
            cleaner.parse_date_dayfirst("28-02-2025"),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
    }

    #[test]
    fn test_parse_date_iso_accepted() {
        let cleaner = DataCleaner;
        assert_eq!(
            cleaner.parse_date_dayfirst("2025-03-05"),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
    }

    #[test]
    fn test_parse_date_invalid_is_none() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_date_dayfirst("not a date"), None);
        assert_eq!(cleaner.parse_date_dayfirst("32/13/2025"), None);
        assert_eq!(cleaner.parse_date_dayfirst(""), None);
        assert_eq!(cleaner.parse_date_dayfirst("TBC"), None);
    }

    #[test]
    fn test_parse_year() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_year("2025"), Some(2025));
        assert_eq!(cleaner.parse_year(" 2024 "), Some(2024));
        assert_eq!(cleaner.parse_year("2025.0"), Some(2025));
        assert_eq!(cleaner.parse_year("2025.5"), None);
        assert_eq!(cleaner.parse_year("N/A"), None);
        assert_eq!(cleaner.parse_year(""), None);
    }
}
