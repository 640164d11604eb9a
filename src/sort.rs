use std::cmp::Ordering;

use crate::CalendarDate;
use crate::consts::MONTH_NAME_MARKER;

/// Returns true when the date's month name contains `MONTH_NAME_MARKER`.
/// The match is ASCII case-insensitive.
pub fn is_r_month(date: &CalendarDate) -> bool {
    date.month_name()
        .chars()
        .any(|c| c.eq_ignore_ascii_case(&MONTH_NAME_MARKER))
}

/// Total order over calendar dates in two tiers by month-name spelling.
///
/// A marker-month date sorts before a non-marker-month date regardless of
/// chronology. Within the marker tier dates compare in natural ascending
/// order; within the other tier the comparison is reversed, so a stable
/// sort yields that tier newest-first.
pub fn r_month_order(a: &CalendarDate, b: &CalendarDate) -> Ordering {
    match (is_r_month(a), is_r_month(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.cmp(b),
        (false, false) => b.cmp(a),
    }
}

/// Sorts dates into two-tier month-name order: months spelled with the
/// marker letter first, earliest to latest, then the remaining months,
/// latest to earliest.
///
/// Returns a freshly allocated vector; the input slice is not mutated.
/// Exact duplicates keep their input relative order (the sort is stable).
pub fn sort_dates(dates: &[CalendarDate]) -> Vec<CalendarDate> {
    let mut sorted = dates.to_vec();
    sorted.sort_by(r_month_order);
    sorted
}
