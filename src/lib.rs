//! Pure cycle-phase arithmetic for menstrual cycle tracking.
//!
//! Given a recorded cycle start date and four duration settings, this crate
//! answers "where in the cycle is today": which of the four phases
//! (Menstrual, Follicular, Ovulation, Luteal) the day falls in, the 1-based
//! day within that phase, and how many days remain until the next cycle.
//!
//! Two stateless pieces compose leaf-first:
//!
//! - [`cyclic_day_index`] wraps the whole-day difference between the start
//!   date and today into a 1-based index in `[1, cycle_length]`.
//! - [`PhaseBoundaries`] derives the phase cut points from the duration
//!   settings and classifies any index into `(Phase, day_in_phase)`.
//!
//! Out-of-range settings are clamped, never rejected: a garbage persisted
//! value still produces a usable answer. The only caller-facing error is
//! asking for a report before any cycle start has been recorded.
//!
//! ```
//! use bloom_cycle::{CycleSettings, Phase};
//!
//! let settings = CycleSettings {
//!     period_start: Some("2025-09-01".parse()?),
//!     ..CycleSettings::default()
//! };
//! let report = settings.report_for("2025-09-14".parse()?)?;
//! assert_eq!(report.phase, Phase::Ovulation);
//! assert_eq!(report.day_in_phase, 2);
//! assert_eq!(report.days_left, 14);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod clock;
mod consts;
mod date;
mod phase;
mod prelude;
mod report;
mod types;

pub use clock::cyclic_day_index;
pub use consts::*;
pub use date::{CycleDate, ParseError};
pub use phase::{days_until_menstrual, Phase, PhaseBoundaries};
pub use report::{CycleError, CycleSettings, PhaseReport};
pub use types::{CycleLength, LutealDays, MenstrualDays, OvulationDays};
