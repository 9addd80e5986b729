use crate::clock::cyclic_day_index;
use crate::date::CycleDate;
use crate::phase::{days_until_menstrual, Phase, PhaseBoundaries};
use crate::prelude::*;
use crate::types::{CycleLength, LutealDays, MenstrualDays, OvulationDays};
use serde::{Deserialize, Serialize};

/// The persisted cycle configuration, owned and stored by the caller.
///
/// Each duration field clamps itself on construction and on deserialization,
/// and falls back to the standard defaults (28/7/14/2) when absent from the
/// persisted form. `period_start` is `None` until the user records a first
/// cycle; nothing can be reported before then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CycleSettings {
    #[serde(default)]
    pub cycle_length: CycleLength,
    #[serde(default)]
    pub menstrual_days: MenstrualDays,
    #[serde(default)]
    pub luteal_days: LutealDays,
    #[serde(default)]
    pub ovulation_days: OvulationDays,
    #[serde(default)]
    pub period_start: Option<CycleDate>,
}

/// Error type for cycle report requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    /// No cycle start has been recorded yet, so there is no position to report.
    #[error("No cycle start recorded yet")]
    NoHistory,
}

/// Where today falls in the cycle: the phase, the position inside it, and
/// how long until the next cycle begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(fmt = "{phase}, day {day_in_phase} ({days_left} days until next cycle)")]
pub struct PhaseReport {
    /// Classified phase for the queried day
    pub phase: Phase,
    /// 1-based cyclic day-index in `[1, cycle_length]`
    pub day_index: u8,
    /// 1-based offset from the start of the classified phase
    pub day_in_phase: u8,
    /// Whole days until the next Menstrual phase; 0 means it starts tomorrow
    pub days_left: u8,
}

impl CycleSettings {
    /// Creates settings from raw persisted integers, clamping each one
    pub fn from_raw(
        cycle_length: u8,
        menstrual_days: u8,
        luteal_days: u8,
        ovulation_days: u8,
        period_start: Option<CycleDate>,
    ) -> Self {
        Self {
            cycle_length: CycleLength::new(cycle_length),
            menstrual_days: MenstrualDays::new(menstrual_days),
            luteal_days: LutealDays::new(luteal_days),
            ovulation_days: OvulationDays::new(ovulation_days),
            period_start,
        }
    }

    /// True once a cycle start has been recorded
    pub const fn has_history(&self) -> bool {
        self.period_start.is_some()
    }

    /// Phase boundaries for these settings, recomputed on each call
    pub fn boundaries(&self) -> PhaseBoundaries {
        PhaseBoundaries::new(
            self.cycle_length,
            self.menstrual_days,
            self.luteal_days,
            self.ovulation_days,
        )
    }

    /// Classifies `today` against the recorded cycle start.
    ///
    /// # Errors
    /// Returns `CycleError::NoHistory` if no start date has been recorded.
    pub fn report_for(&self, today: CycleDate) -> Result<PhaseReport, CycleError> {
        let start = self.period_start.ok_or(CycleError::NoHistory)?;
        let day_index = cyclic_day_index(start, today, self.cycle_length);
        let (phase, day_in_phase) = self.boundaries().classify(day_index);
        Ok(PhaseReport {
            phase,
            day_index,
            day_in_phase,
            days_left: days_until_menstrual(day_index, self.cycle_length),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CycleDate {
        CycleDate::new(year, month, day).expect("valid test date")
    }

    fn default_settings_starting(start: CycleDate) -> CycleSettings {
        CycleSettings {
            period_start: Some(start),
            ..CycleSettings::default()
        }
    }

    #[test]
    fn test_default_settings_match_standard_cycle() {
        let settings = CycleSettings::default();
        assert_eq!(settings.cycle_length.get(), 28);
        assert_eq!(settings.menstrual_days.get(), 7);
        assert_eq!(settings.luteal_days.get(), 14);
        assert_eq!(settings.ovulation_days.get(), 2);
        assert!(!settings.has_history());
    }

    #[test]
    fn test_report_without_history_is_an_error() {
        let settings = CycleSettings::default();
        let result = settings.report_for(date(2025, 9, 28));
        assert_eq!(result, Err(CycleError::NoHistory));
    }

    #[test]
    fn test_report_on_start_day() {
        let settings = default_settings_starting(date(2025, 9, 28));
        let report = settings.report_for(date(2025, 9, 28)).expect("has history");
        assert_eq!(report.phase, Phase::Menstrual);
        assert_eq!(report.day_index, 1);
        assert_eq!(report.day_in_phase, 1);
        assert_eq!(report.days_left, 27);
    }

    #[test]
    fn test_report_walks_through_default_cycle() {
        let start = date(2025, 9, 1);
        let settings = default_settings_starting(start);

        let follicular = settings.report_for(date(2025, 9, 8)).expect("has history");
        assert_eq!(follicular.phase, Phase::Follicular);
        assert_eq!(follicular.day_in_phase, 1);

        let ovulation = settings.report_for(date(2025, 9, 13)).expect("has history");
        assert_eq!(ovulation.phase, Phase::Ovulation);
        assert_eq!(ovulation.day_in_phase, 1);

        let luteal = settings.report_for(date(2025, 9, 15)).expect("has history");
        assert_eq!(luteal.phase, Phase::Luteal);
        assert_eq!(luteal.day_in_phase, 1);

        let last = settings.report_for(date(2025, 9, 28)).expect("has history");
        assert_eq!(last.phase, Phase::Luteal);
        assert_eq!(last.day_in_phase, 14);
        assert_eq!(last.days_left, 0);
    }

    #[test]
    fn test_report_wraps_into_following_cycle() {
        let settings = default_settings_starting(date(2025, 9, 1));
        // Sep 29 is day 1 of the next 28-day cycle
        let report = settings.report_for(date(2025, 9, 29)).expect("has history");
        assert_eq!(report.phase, Phase::Menstrual);
        assert_eq!(report.day_index, 1);
    }

    #[test]
    fn test_from_raw_clamps_everything() {
        let settings = CycleSettings::from_raw(99, 0, 1, 7, None);
        assert_eq!(settings.cycle_length.get(), 45);
        assert_eq!(settings.menstrual_days.get(), 2);
        assert_eq!(settings.luteal_days.get(), 11);
        assert_eq!(settings.ovulation_days.get(), 3);
    }

    #[test]
    fn test_report_display() {
        let settings = default_settings_starting(date(2025, 9, 1));
        let report = settings.report_for(date(2025, 9, 3)).expect("has history");
        assert_eq!(report.to_string(), "Menstrual, day 3 (25 days until next cycle)");
    }

    #[test]
    fn test_serde_missing_fields_take_defaults() {
        let settings: CycleSettings = serde_json::from_str("{}").expect("all fields default");
        assert_eq!(settings, CycleSettings::default());

        let settings: CycleSettings =
            serde_json::from_str(r#"{"cycle_length": 30, "period_start": "2025-09-28"}"#)
                .expect("partial settings parse");
        assert_eq!(settings.cycle_length.get(), 30);
        assert_eq!(settings.menstrual_days.get(), 7);
        assert_eq!(settings.period_start, Some(date(2025, 9, 28)));
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = CycleSettings::from_raw(30, 5, 12, 3, Some(date(2025, 9, 28)));
        let json = serde_json::to_string(&settings).expect("serializes");
        let restored: CycleSettings = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(settings, restored);
    }

    #[test]
    fn test_serde_date_survives_as_iso_string() {
        let settings = default_settings_starting(date(2025, 9, 28));
        let json = serde_json::to_string(&settings).expect("serializes");
        assert!(json.contains(r#""period_start":"2025-09-28""#));
    }
}
