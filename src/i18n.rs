// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use project_status_board::i18n::t;
/// let msg = t("app.title");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 月份显示名（1-12）
///
/// 核心过滤逻辑只使用整数月份索引，显示名由语言表提供
pub fn month_name(index: u32) -> String {
    t(&format!("month.{}", index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
    }

    #[test]
    fn test_month_name_localized() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(month_name(1), "一月");
        assert_eq!(month_name(12), "十二月");

        set_locale("en");
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");

        // 恢复默认语言
        set_locale("zh-CN");
    }

    #[test]
    fn test_app_title() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert!(t("app.title").contains("项目状态看板"));

        set_locale("en");
        assert!(t("app.title").contains("Project Status Board"));

        set_locale("zh-CN");
    }
}
