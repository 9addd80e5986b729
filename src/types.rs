use crate::consts::{
    DEFAULT_CYCLE_LENGTH, DEFAULT_LUTEAL_DAYS, DEFAULT_MENSTRUAL_DAYS, DEFAULT_OVULATION_DAYS,
    MAX_CYCLE_LENGTH, MAX_LUTEAL_DAYS, MAX_MENSTRUAL_DAYS, MAX_OVULATION_DAYS, MIN_CYCLE_LENGTH,
    MIN_LUTEAL_DAYS, MIN_MENSTRUAL_DAYS, MIN_OVULATION_DAYS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total days in one cycle, clamped to `MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH`.
///
/// Construction never fails: out-of-range values (including anything read
/// back from persisted settings) are pulled to the nearest bound rather
/// than rejected, so a stored garbage value still yields a usable cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct CycleLength(u8);

impl CycleLength {
    /// Creates a new cycle length, clamping into the supported range
    pub const fn new(value: u8) -> Self {
        Self(clamp_u8(value, MIN_CYCLE_LENGTH, MAX_CYCLE_LENGTH))
    }

    /// Returns the length in days as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_LENGTH)
    }
}

impl From<u8> for CycleLength {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<CycleLength> for u8 {
    fn from(length: CycleLength) -> Self {
        length.0
    }
}

impl fmt::Display for CycleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Days the menstrual phase lasts, clamped to `MIN_MENSTRUAL_DAYS..=MAX_MENSTRUAL_DAYS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct MenstrualDays(u8);

impl MenstrualDays {
    /// Creates a new menstrual duration, clamping into the supported range
    pub const fn new(value: u8) -> Self {
        Self(clamp_u8(value, MIN_MENSTRUAL_DAYS, MAX_MENSTRUAL_DAYS))
    }

    /// Returns the duration in days as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for MenstrualDays {
    fn default() -> Self {
        Self::new(DEFAULT_MENSTRUAL_DAYS)
    }
}

impl From<u8> for MenstrualDays {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<MenstrualDays> for u8 {
    fn from(days: MenstrualDays) -> Self {
        days.0
    }
}

impl fmt::Display for MenstrualDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Days the luteal phase lasts, clamped to `MIN_LUTEAL_DAYS..=MAX_LUTEAL_DAYS`.
/// The luteal phase always anchors at the end of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct LutealDays(u8);

impl LutealDays {
    /// Creates a new luteal duration, clamping into the supported range
    pub const fn new(value: u8) -> Self {
        Self(clamp_u8(value, MIN_LUTEAL_DAYS, MAX_LUTEAL_DAYS))
    }

    /// Returns the duration in days as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for LutealDays {
    fn default() -> Self {
        Self::new(DEFAULT_LUTEAL_DAYS)
    }
}

impl From<u8> for LutealDays {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<LutealDays> for u8 {
    fn from(days: LutealDays) -> Self {
        days.0
    }
}

impl fmt::Display for LutealDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Days the ovulation window lasts, clamped to `MIN_OVULATION_DAYS..=MAX_OVULATION_DAYS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct OvulationDays(u8);

impl OvulationDays {
    /// Creates a new ovulation duration, clamping into the supported range
    pub const fn new(value: u8) -> Self {
        Self(clamp_u8(value, MIN_OVULATION_DAYS, MAX_OVULATION_DAYS))
    }

    /// Returns the duration in days as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for OvulationDays {
    fn default() -> Self {
        Self::new(DEFAULT_OVULATION_DAYS)
    }
}

impl From<u8> for OvulationDays {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<OvulationDays> for u8 {
    fn from(days: OvulationDays) -> Self {
        days.0
    }
}

impl fmt::Display for OvulationDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// `u8::clamp` is not const; months and durations stay in u8 throughout
const fn clamp_u8(value: u8, min: u8, max: u8) -> u8 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_length_in_range() {
        assert_eq!(CycleLength::new(20).get(), 20);
        assert_eq!(CycleLength::new(28).get(), 28);
        assert_eq!(CycleLength::new(45).get(), 45);
    }

    #[test]
    fn test_cycle_length_clamps_low_and_high() {
        assert_eq!(CycleLength::new(0).get(), 20);
        assert_eq!(CycleLength::new(19).get(), 20);
        assert_eq!(CycleLength::new(46).get(), 45);
        assert_eq!(CycleLength::new(255).get(), 45);
    }

    #[test]
    fn test_menstrual_days_clamps() {
        assert_eq!(MenstrualDays::new(0).get(), 2);
        assert_eq!(MenstrualDays::new(2).get(), 2);
        assert_eq!(MenstrualDays::new(10).get(), 10);
        assert_eq!(MenstrualDays::new(11).get(), 10);
    }

    #[test]
    fn test_luteal_days_clamps() {
        assert_eq!(LutealDays::new(5).get(), 11);
        assert_eq!(LutealDays::new(11).get(), 11);
        assert_eq!(LutealDays::new(17).get(), 17);
        assert_eq!(LutealDays::new(30).get(), 17);
    }

    #[test]
    fn test_ovulation_days_clamps() {
        assert_eq!(OvulationDays::new(0).get(), 1);
        assert_eq!(OvulationDays::new(1).get(), 1);
        assert_eq!(OvulationDays::new(3).get(), 3);
        assert_eq!(OvulationDays::new(9).get(), 3);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(CycleLength::default().get(), 28);
        assert_eq!(MenstrualDays::default().get(), 7);
        assert_eq!(LutealDays::default().get(), 14);
        assert_eq!(OvulationDays::default().get(), 2);
    }

    #[test]
    fn test_from_u8_round_trip() {
        let length: CycleLength = 30.into();
        assert_eq!(length.get(), 30);
        let raw: u8 = length.into();
        assert_eq!(raw, 30);
    }

    #[test]
    fn test_display() {
        assert_eq!(CycleLength::new(28).to_string(), "28");
        assert_eq!(MenstrualDays::new(7).to_string(), "7");
        assert_eq!(LutealDays::new(14).to_string(), "14");
        assert_eq!(OvulationDays::new(2).to_string(), "2");
    }

    #[test]
    fn test_serde_clamps_persisted_garbage() {
        // Out-of-range stored values are normalized, never rejected
        let length: CycleLength = serde_json::from_str("200").expect("u8 in range parses");
        assert_eq!(length.get(), 45);

        let days: LutealDays = serde_json::from_str("1").expect("u8 in range parses");
        assert_eq!(days.get(), 11);
    }

    #[test]
    fn test_serde_plain_integer_format() {
        let length = CycleLength::new(28);
        let json = serde_json::to_string(&length).expect("serializes");
        assert_eq!(json, "28");

        let parsed: CycleLength = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(length, parsed);
    }

    #[test]
    fn test_ordering() {
        assert!(CycleLength::new(21) < CycleLength::new(35));
        assert!(MenstrualDays::new(3) < MenstrualDays::new(8));
    }
}
