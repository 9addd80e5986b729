use crate::prelude::*;
use crate::types::{CycleLength, LutealDays, MenstrualDays, OvulationDays};
use serde::{Deserialize, Serialize};

/// One of the four physiological phases of a cycle.
///
/// Together the four phases partition every cyclic day-index in
/// `[1, cycle_length]`: Menstrual opens the cycle, Luteal closes it, the
/// Ovulation window sits just before Luteal, and Follicular absorbs
/// whatever remains in between (possibly nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

impl Phase {
    /// All four phases, in cycle order
    pub const ALL: [Self; 4] = [
        Self::Menstrual,
        Self::Follicular,
        Self::Ovulation,
        Self::Luteal,
    ];
}

/// The cut points that partition one cycle into phases.
///
/// Derived from the clamped duration settings alone; recomputed per query
/// and carrying no identity beyond the settings that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseBoundaries {
    length: CycleLength,
    menstrual_end: u8,
    ovulation_start: u8,
    ovulation_end: u8,
    luteal_start: u8,
}

impl PhaseBoundaries {
    /// Derives the phase cut points from the duration settings.
    ///
    /// Menstrual always occupies days `1..=menstrual_days`; Luteal always
    /// occupies the last `luteal_days` days. The ovulation window ends
    /// right before Luteal starts but is clamped so it never reaches back
    /// into (or past) the menstrual days, which can shrink its effective
    /// width to zero on short cycles with a long luteal phase.
    pub fn new(
        length: CycleLength,
        menstrual: MenstrualDays,
        luteal: LutealDays,
        ovulation: OvulationDays,
    ) -> Self {
        let menstrual_end = menstrual.get();
        let luteal_start = length.get() - luteal.get() + 1;
        let ovulation_end = (menstrual_end + 1).max(luteal_start.saturating_sub(1));
        let ovulation_start =
            (menstrual_end + 1).max(ovulation_end.saturating_sub(ovulation.get() - 1));
        Self {
            length,
            menstrual_end,
            ovulation_start,
            ovulation_end,
            luteal_start,
        }
    }

    /// Last cyclic day-index of the Menstrual phase
    #[inline]
    pub const fn menstrual_end(self) -> u8 {
        self.menstrual_end
    }

    /// First cyclic day-index of the Ovulation window
    #[inline]
    pub const fn ovulation_start(self) -> u8 {
        self.ovulation_start
    }

    /// Last cyclic day-index of the Ovulation window (inclusive)
    #[inline]
    pub const fn ovulation_end(self) -> u8 {
        self.ovulation_end
    }

    /// First cyclic day-index of the Luteal phase
    #[inline]
    pub const fn luteal_start(self) -> u8 {
        self.luteal_start
    }

    /// Total days in the cycle these boundaries partition
    #[inline]
    pub const fn cycle_length(self) -> u8 {
        self.length.get()
    }

    /// Classifies a cyclic day-index into its phase and 1-based day-in-phase.
    ///
    /// Match order matters: Menstrual first, then Luteal, then Ovulation,
    /// with Follicular as the fallback. Checking Luteal before Ovulation
    /// lets the end-anchored Luteal phase win whenever clamping makes the
    /// two windows touch or overlap.
    pub fn classify(self, day_index: u8) -> (Phase, u8) {
        if day_index <= self.menstrual_end {
            (Phase::Menstrual, day_index)
        } else if day_index >= self.luteal_start {
            (Phase::Luteal, day_index - self.luteal_start + 1)
        } else if (self.ovulation_start..=self.ovulation_end).contains(&day_index) {
            (Phase::Ovulation, day_index - self.ovulation_start + 1)
        } else {
            (Phase::Follicular, day_index - self.menstrual_end)
        }
    }
}

/// Whole days remaining until the next Menstrual phase begins.
/// Zero means the cycle wraps tomorrow.
pub fn days_until_menstrual(day_index: u8, length: CycleLength) -> u8 {
    length.get().saturating_sub(day_index)
}
