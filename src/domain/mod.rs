//! Domain layer - Liturgical date computation

pub mod calendar;
pub mod cycle;
pub mod date;
pub mod date_ref;
pub mod day;
pub mod elevation;
pub mod movable;
pub mod pascha;
pub mod report;
pub mod season;
pub mod topic;

pub use calendar::CalendarSystem;
pub use cycle::CycleIndices;
pub use date_ref::DateReference;
pub use day::{DayProperties, LiturgicalDay};
pub use elevation::{lukan_cycle_start, sunday_after_elevation, ElevationAnchors};
pub use movable::MovableFeasts;
pub use pascha::{compute_pascha, PaschaDates};
pub use report::ElevationReport;
pub use season::{DayOfSeason, Mode};
pub use topic::{book_acronym, OctoechosOverride, TopicOverrides};
