/// Shortest supported cycle length in days (inclusive)
pub const MIN_CYCLE_LENGTH: u8 = 20;
/// Longest supported cycle length in days (inclusive)
pub const MAX_CYCLE_LENGTH: u8 = 45;

/// Shortest supported menstrual phase in days (inclusive)
pub const MIN_MENSTRUAL_DAYS: u8 = 2;
/// Longest supported menstrual phase in days (inclusive)
pub const MAX_MENSTRUAL_DAYS: u8 = 10;

/// Shortest supported luteal phase in days (inclusive)
pub const MIN_LUTEAL_DAYS: u8 = 11;
/// Longest supported luteal phase in days (inclusive)
pub const MAX_LUTEAL_DAYS: u8 = 17;

/// Shortest supported ovulation window in days (inclusive)
pub const MIN_OVULATION_DAYS: u8 = 1;
/// Longest supported ovulation window in days (inclusive)
pub const MAX_OVULATION_DAYS: u8 = 3;

/// Cycle length assumed when no setting has been recorded
pub const DEFAULT_CYCLE_LENGTH: u8 = 28;
/// Menstrual duration assumed when no setting has been recorded
pub const DEFAULT_MENSTRUAL_DAYS: u8 = 7;
/// Luteal duration assumed when no setting has been recorded
pub const DEFAULT_LUTEAL_DAYS: u8 = 14;
/// Ovulation duration assumed when no setting has been recorded
pub const DEFAULT_OVULATION_DAYS: u8 = 2;

/// Maximum valid year (inclusive) for the ISO text encoding
pub const MAX_YEAR: u16 = 9999;
/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// First day of any month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Seconds per calendar day, used to floor a timestamp to its day
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Offset between day 0 of the civil-day algorithm (0000-03-01)
/// and the Unix epoch (1970-01-01)
pub(crate) const UNIX_EPOCH_CIVIL_DAYS: i64 = 719_468;

/// Days in one 400-year Gregorian era
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
