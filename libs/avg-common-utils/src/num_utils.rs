/// 四舍五入到指定小数位
/// round half away from zero to `precision` decimal places
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// 算术平均值，空序列返回 0.0
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    // 逐个转换为 f64 求和，避免 i64 溢出
    let sum: f64 = values.iter().map(|v| *v as f64).sum();
    sum / values.len() as f64
}

pub fn mean_rounded(values: &[i64], precision: u32) -> f64 {
    round_to(mean(values), precision)
}
