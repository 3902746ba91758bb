//! Application layer - Use cases and orchestration

pub mod day_lookup;
pub mod pascha_table;
pub mod resolve_topics;

pub use day_lookup::DayLookupService;
pub use pascha_table::{pascha_table, PaschaRow};
pub use resolve_topics::{resolve_topics, ResolvedTopic};
