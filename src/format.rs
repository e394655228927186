/// Format seconds as `"{H}h {M}m {S}s"`, truncating any fractional second.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{}h {}m {}s", hours, minutes, secs)
}

/// Abbreviate a count with a `K` or `M` suffix and one decimal place.
///
/// Rounding is half-up on the exact integer value. A thousands value that
/// would round to `1000.0K` is shown as `1.0M` instead.
pub fn format_count(num: u64) -> String {
    if num >= 1_000_000 {
        return scaled(num, 1_000_000, 'M');
    }
    if num >= 1_000 {
        if tenths(num, 1_000) >= 10_000 {
            return scaled(num, 1_000_000, 'M');
        }
        return scaled(num, 1_000, 'K');
    }
    num.to_string()
}

fn tenths(num: u64, unit: u64) -> u64 {
    let step = unit / 10;
    let (quotient, remainder) = (num / step, num % step);
    if remainder * 2 >= step {
        quotient + 1
    } else {
        quotient
    }
}

fn scaled(num: u64, unit: u64, suffix: char) -> String {
    let t = tenths(num, unit);
    format!("{}.{}{}", t / 10, t % 10, suffix)
}
