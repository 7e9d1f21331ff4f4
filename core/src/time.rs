use chrono::{Duration, NaiveDate};

/// Rounds half-way values toward positive infinity, the way dashboard
/// figures have always been rounded (`-2.5` becomes `-2`, `2.5` becomes `3`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// First day of a window of `days` calendar days ending on `end` (inclusive).
/// `None` when the window would start before the earliest representable date.
pub fn window_start(end: NaiveDate, days: u32) -> Option<NaiveDate> {
    end.checked_sub_signed(Duration::days(i64::from(days.max(1)) - 1))
}

/// Last day of the equal-length window that ends right before the window
/// ending on `end`.
pub fn previous_window_end(end: NaiveDate, days: u32) -> Option<NaiveDate> {
    window_start(end, days)?.pred_opt()
}
