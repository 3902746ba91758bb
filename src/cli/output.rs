//! Output formatting utilities

use crate::application::{PaschaRow, ResolvedTopic};
use crate::domain::LiturgicalDay;
use chrono::NaiveDate;

fn date_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format the property set of a day as aligned `name: value` lines
pub fn format_day(day: &LiturgicalDay) -> String {
    let pascha = day.pascha();
    let feasts = day.feasts();
    let elevation = day.elevation();
    let cycle = day.cycle();

    let season = if day.is_triodion() {
        "triodion"
    } else if day.is_pentecostarion() {
        "pentecostarion"
    } else {
        "-"
    };

    let rows: Vec<(&str, String)> = vec![
        ("date", date_str(day.date())),
        ("calendar", day.calendar().to_string()),
        ("weekday", format!("{} ({})", day.day_of_week_abbrev(), day.nbr_day_of_week())),
        ("season", season.to_string()),
        ("pascha day", if day.is_pascha() { "yes" } else { "no" }.to_string()),
        ("day of season", day.day_of_season().to_string()),
        ("week of lent", cycle.week_of_lent.to_string()),
        (
            "movable cycle day",
            cycle
                .pentecostarion_movable_day
                .map_or_else(|| "-".to_string(), |d| d.to_string()),
        ),
        ("mode of week", day.mode_of_week().to_string()),
        ("eothinon", day.eothinon_number().to_string()),
        ("pascha", date_str(pascha.this_year)),
        ("pascha last", date_str(pascha.last)),
        ("pascha next", date_str(pascha.next)),
        ("triodion start", date_str(feasts.triodion_start_this_year)),
        ("triodion start last", date_str(feasts.triodion_start_last)),
        ("great lent start", date_str(feasts.great_lent_start)),
        ("palm sunday", date_str(feasts.palm_sunday)),
        ("pentecost", date_str(feasts.pentecost)),
        ("all saints", date_str(feasts.all_saints_this_year)),
        ("thomas sunday", date_str(feasts.thomas_sunday)),
        ("lazarus saturday next", date_str(feasts.lazarus_saturday_next)),
        (
            "sunday after elevation",
            date_str(elevation.sunday_after_elevation_last),
        ),
        ("lukan cycle start", date_str(elevation.lukan_cycle_start_last)),
        (
            "days since triodion start",
            cycle.days_since_start_of_triodion.to_string(),
        ),
        (
            "days since elevation sunday",
            cycle.days_since_sunday_after_last_elevation.to_string(),
        ),
        (
            "lukan cycle day",
            cycle.days_since_start_last_lukan_cycle.to_string(),
        ),
        ("lukan cycle week", cycle.lukan_cycle_week.to_string()),
        (
            "days until triodion",
            cycle.days_until_start_of_triodion.to_string(),
        ),
        (
            "sundays before triodion",
            cycle.number_of_sundays_before_start_of_triodion.to_string(),
        ),
    ];

    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (name, value) in rows {
        output.push_str(&format!("{:width$}  {}\n", format!("{}:", name), value, width = width + 1));
    }
    output
}

/// Format resolved topic keys, one key per line
pub fn format_topics(topics: &[ResolvedTopic]) -> String {
    if topics.is_empty() {
        return "No topics given".to_string();
    }

    let mut output = String::new();
    for topic in topics {
        output.push_str(&format!("{}\n", topic.key));
    }
    output
}

/// Format a table of movable feasts, one year per line
pub fn format_pascha_table(rows: &[PaschaRow]) -> String {
    let mut output =
        String::from("year  pascha      triodion    clean-mon   pentecost   all-saints\n");
    for row in rows {
        output.push_str(&format!(
            "{}  {}  {}  {}  {}  {}\n",
            row.year,
            date_str(row.pascha),
            date_str(row.triodion_start),
            date_str(row.great_lent_start),
            date_str(row.pentecost),
            date_str(row.all_saints)
        ));
    }
    output
}
