//! Topic keys: the lookup strings text repositories are indexed by
//!
//! A topic code names a liturgical book (`oc.…`, `le.go.lu.…`). The key for a
//! day is the book acronym followed by a suffix taken from that day's
//! properties. These formats are shared with the consumers of the keys and
//! must not drift.

use crate::domain::day::LiturgicalDay;
use crate::domain::season::Mode;

/// Values that temporarily replace computed properties for one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicOverrides {
    /// Mode and weekday number for Octoechos topics.
    pub octoechos: Option<OctoechosOverride>,
    /// Movable-cycle day for Triodion, Pentecostarion and movable-cycle
    /// lectionary topics. `Some(0)` clears the override.
    pub movable_day: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctoechosOverride {
    pub mode: Mode,
    pub day: i32,
}

impl TopicOverrides {
    /// Overrides in the integer form used by templates: a mode outside
    /// 1..=8 means "no override", and the day is only used with a mode.
    pub fn from_ints(mode: i32, day: i32) -> Self {
        TopicOverrides {
            octoechos: Mode::new(i64::from(mode)).map(|mode| OctoechosOverride { mode, day }),
            movable_day: None,
        }
    }
}

/// Books a topic code can refer to, grouped by the suffix they take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Book {
    /// `da`
    Daily,
    /// `eo`
    EothinaHymns,
    /// `le.go.eo`
    EothinaGospels,
    /// `le.go.lu`
    LukanGospels,
    /// `le.go.mc`, `le.ep.mc`, `le.pr.tr`, `pe`, `tr`
    MovableCycle,
    /// `le.go.me`, `le.ep.me`, `me`, `sy`, `ty`
    FixedCycle,
    /// `oc`
    Octoechos,
    /// `eu`, `he`, `ho`, `ka`
    Unsuffixed,
    Unknown,
}

impl Book {
    fn from_acronym(acronym: &str) -> Self {
        match acronym {
            "da" => Book::Daily,
            "eo" => Book::EothinaHymns,
            "le.go.eo" => Book::EothinaGospels,
            "le.go.lu" => Book::LukanGospels,
            "le.go.mc" | "le.ep.mc" | "le.pr.tr" | "pe" | "tr" => Book::MovableCycle,
            "le.go.me" | "le.ep.me" | "me" | "sy" | "ty" => Book::FixedCycle,
            "oc" => Book::Octoechos,
            "eu" | "he" | "ho" | "ka" => Book::Unsuffixed,
            _ => Book::Unknown,
        }
    }
}

/// The book acronym of a topic code: the first dot-segment, or the first
/// three when the code belongs to the lectionary (`le`).
pub fn book_acronym(topic: &str) -> String {
    let parts: Vec<&str> = topic.split('.').collect();
    if parts[0] == "le" {
        parts.iter().take(3).copied().collect::<Vec<_>>().join(".")
    } else {
        parts[0].to_string()
    }
}

impl LiturgicalDay {
    /// Topic key for `topic` on this day.
    ///
    /// `mode_override` in 1..=8 replaces the mode of the week for Octoechos
    /// topics, and `day_override` then replaces the weekday number.
    pub fn relative_topic(&self, topic: &str, mode_override: i32, day_override: i32) -> String {
        self.relative_topic_with(topic, &TopicOverrides::from_ints(mode_override, day_override))
    }

    /// Topic key for `topic` on this day with explicit overrides.
    pub fn relative_topic_with(&self, topic: &str, overrides: &TopicOverrides) -> String {
        let acronym = book_acronym(topic);
        let cycle = self.cycle();
        let suffix = match Book::from_acronym(&acronym) {
            Book::Daily => format!("d{}", self.nbr_day_of_week()),
            Book::EothinaHymns => format!("e{:02}", cycle.eothinon_number),
            Book::EothinaGospels => format!("w{:02}", cycle.eothinon_number),
            Book::LukanGospels => format!("d{:03}", cycle.days_since_start_last_lukan_cycle),
            Book::MovableCycle => format!(
                "d{:03}",
                overrides
                    .movable_day
                    .filter(|&day| day > 0)
                    .unwrap_or(cycle.days_since_start_of_triodion)
            ),
            Book::FixedCycle => format!("m{}.d{}", self.nbr_month(), self.nbr_day_of_month()),
            Book::Octoechos => match overrides.octoechos {
                Some(OctoechosOverride { mode, day }) => format!("m{}.d{}", mode, day),
                None => format!("m{}.d{}", cycle.mode_of_week, self.nbr_day_of_week()),
            },
            Book::Unsuffixed => return acronym,
            Book::Unknown => String::new(),
        };
        format!("{}.{}", acronym, suffix)
    }
}
