//! Text shown on the status screen.

/// `(max_len, keep_len)` presets for [`filename_ellipsis`]
pub const FILENAME_LONG: (usize, usize) = (35, 32);
pub const FILENAME_MEDIUM: (usize, usize) = (31, 28);
pub const FILENAME_SHORT: (usize, usize) = (27, 24);

pub const ELLIPSIS: char = '…';

/// Names longer than `max_len` characters are cut to `keep_len` characters
/// plus an ellipsis.
pub fn filename_ellipsis(name: &str, max_len: usize, keep_len: usize) -> String {
    if name.chars().count() > max_len {
        let mut out: String = name.chars().take(keep_len).collect();
        out.push(ELLIPSIS);
        out
    } else {
        name.to_string()
    }
}

/// Compact `1h2m3s` style, whole seconds.
pub fn format_duration(d: chrono::Duration) -> String {
    let total = d.num_seconds();
    if total == 0 {
        return "0s".to_string();
    }

    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    let (h, m, s) = (total / 3600, (total / 60) % 60, total % 60);

    if h > 0 {
        format!("{}{}h{}m{}s", sign, h, m, s)
    } else if m > 0 {
        format!("{}{}m{}s", sign, m, s)
    } else {
        format!("{}{}s", sign, s)
    }
}

pub fn seconds(secs: Option<f64>) -> chrono::Duration {
    let secs = secs.unwrap_or_default();
    if !secs.is_finite() {
        return chrono::Duration::zero();
    }
    chrono::Duration::try_seconds(secs.trunc() as i64).unwrap_or_else(chrono::Duration::zero)
}

/// Progress line under the file name.
pub fn time_text(
    completion: f64,
    elapsed: chrono::Duration,
    left: chrono::Duration,
    last_print_time: chrono::Duration,
) -> String {
    if completion == 100.0 {
        format!("Completed in {}", format_duration(last_print_time))
    } else if completion == 0.0 {
        "Warming up ...".to_string()
    } else if left.is_zero() {
        format!("Elapsed: {}", format_duration(elapsed))
    } else {
        format!(
            "Elapsed: {} / Left: {}",
            format_duration(elapsed),
            format_duration(left)
        )
    }
}

pub fn temperature_text(actual: f32, target: Option<f32>) -> String {
    format!("{:.0}°C ⇒ {:.0}°C", actual, target.unwrap_or_default())
}
