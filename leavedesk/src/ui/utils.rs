use chrono::NaiveDate;

/// Day counts without a trailing `.0` for whole days
pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 && days.abs() < 1e15 {
        format!("{}", days as i64)
    } else {
        format!("{}", days)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Text for an optional column, with a dash when the service sent nothing
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
