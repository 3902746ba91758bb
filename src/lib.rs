//! typikon - Liturgical day properties for the Byzantine rite
//!
//! Computes, for a calendar date, the date of Pascha, the movable feasts and
//! seasons (Triodion, Pentecostarion), the Octoechos mode of the week, the
//! Eothinon and Lukan cycles, and the topic keys used to look up the texts
//! appointed for that day.
//!
//! ```
//! use typikon::{CalendarSystem, LiturgicalDay};
//!
//! let day = LiturgicalDay::from_ymd(2020, 4, 19, CalendarSystem::Gregorian).unwrap();
//! assert!(day.is_pascha());
//! assert_eq!(day.relative_topic("oc", 0, 0), "oc.m1.d1");
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{CalendarSystem, LiturgicalDay, TopicOverrides};
pub use error::TypikonError;
