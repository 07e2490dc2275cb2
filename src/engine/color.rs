// ==========================================
// 发电机组项目状态看板 - 进度颜色引擎
// ==========================================
// 职责: 进度百分比 → 进度条颜色（分段线性插值）
// 锚点: 0% 灰 / 30% 橙红 / 70% 黄 / 80% 黄绿 / 90% 绿 / 100% 蓝
// ==========================================

use crate::domain::types::Rgb;

// 颜色锚点
pub const GREY: Rgb = Rgb::new(224, 224, 224); // 0%: 接近背景的灰
pub const ORANGE_RED: Rgb = Rgb::new(255, 69, 0); // 30%
pub const YELLOW: Rgb = Rgb::new(255, 255, 0); // 70%
pub const YELLOW_GREEN: Rgb = Rgb::new(154, 205, 50); // 80%
pub const GREEN: Rgb = Rgb::new(0, 255, 0); // 90%
pub const BLUE: Rgb = Rgb::new(0, 0, 255); // 100%

/// 进度百分比对应的进度条颜色
///
/// 两端为固定色（0% 灰、100% 蓝），中间各段按
/// (progress - 段起点) / 段宽 在两个锚点间逐通道线性插值
pub fn progress_color(percent: u8) -> Rgb {
    match percent {
        0 => GREY,
        p if p < 30 => lerp(GREY, ORANGE_RED, f64::from(p) / 30.0),
        p if p < 70 => lerp(ORANGE_RED, YELLOW, f64::from(p - 30) / 40.0),
        p if p < 80 => lerp(YELLOW, YELLOW_GREEN, f64::from(p - 70) / 10.0),
        p if p < 90 => lerp(YELLOW_GREEN, GREEN, f64::from(p - 80) / 10.0),
        p if p < 100 => lerp(GREEN, BLUE, f64::from(p - 90) / 10.0),
        _ => BLUE,
    }
}

/// 逐通道线性插值，结果截断为整数
fn lerp(from: Rgb, to: Rgb, fraction: f64) -> Rgb {
    Rgb::new(
        lerp_channel(from.r, to.r, fraction),
        lerp_channel(from.g, to.g, fraction),
        lerp_channel(from.b, to.b, fraction),
    )
}

fn lerp_channel(from: u8, to: u8, fraction: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * fraction) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_anchors() {
        assert_eq!(progress_color(0), GREY);
        assert_eq!(progress_color(100), BLUE);
    }

    #[test]
    fn test_segment_start_is_exact_anchor() {
        // 段起点处插值分数为 0，必须精确等于锚点色
        assert_eq!(progress_color(30), ORANGE_RED);
        assert_eq!(progress_color(70), YELLOW);
        assert_eq!(progress_color(80), YELLOW_GREEN);
        assert_eq!(progress_color(90), GREEN);
    }

    #[test]
    fn test_interpolation_truncates_per_channel() {
        // 10%: 灰 → 橙红，分数 10/30
        // r = 224 + (255-224)/3 = 234.33 → 234
        // g = 224 + (69-224)/3  = 172.33 → 172
        // b = 224 + (0-224)/3   = 149.33 → 149
        assert_eq!(progress_color(10), Rgb::new(234, 172, 149));
    }

    #[test]
    fn test_mid_segment_values() {
        // 50%: 橙红 → 黄，分数 20/40
        // g = 69 + (255-69)*0.5 = 162
        assert_eq!(progress_color(50), Rgb::new(255, 162, 0));
        // 95%: 绿 → 蓝，分数 5/10
        assert_eq!(progress_color(95), Rgb::new(0, 127, 127));
    }
}
