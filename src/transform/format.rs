//! Number formatting for display. Values are rounded here only.

/// Text shown where a score is missing
pub const MISSING: &str = "N/A";

/// Fixed-decimal score, or "N/A" when absent
pub fn fmt_score(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => MISSING.to_string(),
    }
}

/// Fixed-decimal value with a leading `+` when non-negative
pub fn fmt_signed(value: f64, decimals: usize) -> String {
    // -0.0 prints as "+0"
    let value = if value == 0.0 { 0.0 } else { value };
    if value >= 0.0 {
        format!("+{:.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Integer grouped by thousands with `.` (pt-BR)
pub fn fmt_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
