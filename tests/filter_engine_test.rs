// ==========================================
// 过滤管道 / 汇总 / 提醒 - 集成测试
// ==========================================
// 覆盖: 顺序保持 / 月份排除规则 / 降级空结果 / 幂等
//       首现顺序计数 / 提醒与过滤条件解耦
// ==========================================


use project_status_board::domain::project::ProjectDataset;
use project_status_board::domain::types::{MonthFilter, TypeFilter};
use project_status_board::engine::{AggregateEngine, FilterEngine, ReminderEngine};
use test_helpers::{dataset, date, record};

fn sample_dataset() -> ProjectDataset {
    let mut a = record("Enclosure", "EN-001", 2025);
    a.lead_time = Some(date(2025, 3, 10));
    a.delivery_date = Some(date(2025, 3, 5));

    let mut b = record("Marine", "MT-002", 2025);
    b.lead_time = Some(date(2025, 3, 20));
    b.delivery_date = None; // 交货缺失 → 风险

    let mut c = record("Enclosure", "EN-003", 2024);
    c.lead_time = Some(date(2024, 3, 1));
    c.delivery_date = Some(date(2024, 4, 1)); // 晚于交期 → 风险

    let mut d = record("Scania", "SC-004", 2025);
    d.lead_time = None; // 交期缺失
    d.delivery_date = Some(date(2025, 5, 1));

    let mut e = record("Enclosure", "EN-005", 2025);
    e.lead_time = Some(date(2025, 7, 1));
    e.delivery_date = Some(date(2025, 6, 30));

    dataset(vec![a, b, c, d, e])
}

// ==========================================
// 过滤管道
// ==========================================

#[test]
fn test_all_types_year_slice_preserves_order() {
    let ds = sample_dataset();
    let engine = FilterEngine::new();

    let result = engine.filter(&ds, &TypeFilter::All, 2025, &MonthFilter::All);
    let names: Vec<&str> = result.iter().map(|r| r.project_name.as_str()).collect();
    assert_eq!(names, vec!["EN-001", "MT-002", "SC-004", "EN-005"]);

    // 数据中不存在的年度 → 空
    assert!(engine
        .filter(&ds, &TypeFilter::All, 2030, &MonthFilter::All)
        .is_empty());
}

#[test]
fn test_month_filter_requires_parsed_lead_time() {
    let ds = sample_dataset();
    let engine = FilterEngine::new();

    let result = engine.filter(&ds, &TypeFilter::All, 2025, &MonthFilter::Month(3));
    let names: Vec<&str> = result.iter().map(|r| r.project_name.as_str()).collect();
    // SC-004 交期缺失，指定月份时必须排除
    assert_eq!(names, vec!["EN-001", "MT-002"]);
}

#[test]
fn test_type_and_month_combined() {
    let ds = sample_dataset();
    let engine = FilterEngine::new();

    let result = engine.filter(
        &ds,
        &TypeFilter::Only("Enclosure".to_string()),
        2025,
        &MonthFilter::Month(7),
    );
    let names: Vec<&str> = result.iter().map(|r| r.project_name.as_str()).collect();
    assert_eq!(names, vec!["EN-005"]);
}

#[test]
fn test_missing_grouping_columns_degrade_to_empty() {
    let mut ds = sample_dataset();
    ds.columns.year = false;

    let engine = FilterEngine::new();
    assert!(engine
        .filter(&ds, &TypeFilter::All, 2025, &MonthFilter::All)
        .is_empty());
}

#[test]
fn test_refiltering_is_idempotent() {
    let ds = sample_dataset();
    let engine = FilterEngine::new();
    let type_filter = TypeFilter::Only("Enclosure".to_string());
    let month = MonthFilter::Month(3);

    let once = engine.filter(&ds, &type_filter, 2025, &month);
    let again = engine.filter(
        &ProjectDataset::new(once.clone(), ds.columns),
        &type_filter,
        2025,
        &month,
    );

    assert_eq!(once.len(), again.len());
    for (x, y) in once.iter().zip(again.iter()) {
        assert_eq!(x.project_name, y.project_name);
    }
}

// ==========================================
// 数量汇总
// ==========================================

#[test]
fn test_counts_by_type_first_seen_order() {
    // 类型出现顺序 [A, B, A] → A 在 B 前，计数 {A:2, B:1}
    let rows = vec![
        record("Enclosure", "1", 2025),
        record("Marine", "2", 2025),
        record("Enclosure", "3", 2025),
    ];

    let summary = AggregateEngine::new().summarize(&rows);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.by_type.len(), 2);
    assert_eq!(summary.by_type[0].project_type, "Enclosure");
    assert_eq!(summary.by_type[0].count, 2);
    assert_eq!(summary.by_type[1].project_type, "Marine");
    assert_eq!(summary.by_type[1].count, 1);
}

#[test]
fn test_counts_over_filtered_slice() {
    let ds = sample_dataset();
    let filtered = FilterEngine::new().filter(&ds, &TypeFilter::All, 2025, &MonthFilter::All);
    let summary = AggregateEngine::new().summarize(&filtered);

    assert_eq!(summary.total, 4);
    let pairs: Vec<(&str, usize)> = summary
        .by_type
        .iter()
        .map(|c| (c.project_type.as_str(), c.count))
        .collect();
    assert_eq!(
        pairs,
        vec![("Enclosure", 2), ("Marine", 1), ("Scania", 1)]
    );
}

// ==========================================
// 交付风险提醒
// ==========================================

#[test]
fn test_reminders_cover_full_dataset_regardless_of_filters() {
    let ds = sample_dataset();
    let reminder_engine = ReminderEngine::new();

    // 过滤前
    let before: Vec<String> = reminder_engine
        .select(&ds)
        .into_iter()
        .map(|r| r.project_name)
        .collect();

    // 过滤（任意条件）不影响随后的提醒结果
    let _ = FilterEngine::new().filter(
        &ds,
        &TypeFilter::Only("Marine".to_string()),
        2025,
        &MonthFilter::Month(3),
    );

    let after: Vec<String> = reminder_engine
        .select(&ds)
        .into_iter()
        .map(|r| r.project_name)
        .collect();

    assert_eq!(before, after);
    // 风险行: MT-002 (交货缺失)、EN-003 (晚于交期)；2024 年的行也在列
    assert_eq!(before, vec!["MT-002".to_string(), "EN-003".to_string()]);
}

#[test]
fn test_reminder_includes_missing_delivery_with_lead_time() {
    let mut r = record("Marine", "MT-010", 2025);
    r.lead_time = Some(date(2025, 3, 1));
    let ds = dataset(vec![r]);

    let reminders = ReminderEngine::new().select(&ds);
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].project_name, "MT-010");
    assert_eq!(reminders[0].lead_time, Some(date(2025, 3, 1)));
    assert_eq!(reminders[0].delivery_date, None);
}
