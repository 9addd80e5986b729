use crate::date::CycleDate;
use crate::types::CycleLength;

/// Position of `today` within the repeating cycle, as a 1-based day-index
/// in `[1, cycle_length]`.
///
/// The whole-day difference may be negative when `today` precedes
/// `period_start`; euclidean remainder keeps the wrapped value in
/// `[0, cycle_length - 1]` either way, so the index is always valid.
/// Any two dates whose difference is a multiple of the cycle length map
/// to the same index.
pub fn cyclic_day_index(period_start: CycleDate, today: CycleDate, length: CycleLength) -> u8 {
    let days = today.days_since_epoch() - period_start.days_since_epoch();
    let wrapped = days.rem_euclid(i64::from(length.get()));
    // wrapped < length <= 45, so the cast is lossless
    wrapped as u8 + 1
}
