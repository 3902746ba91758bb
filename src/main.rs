mod logging;

use clap::Parser;
use typikon::application::{pascha_table, resolve_topics, DayLookupService};
use typikon::cli::{format_day, format_pascha_table, format_topics, Cli, Commands};
use typikon::domain::{CalendarSystem, TopicOverrides};
use typikon::error::TypikonError;
use typikon::infrastructure::Config;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TypikonError> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    // Command line wins over the config file
    let calendar = match cli.calendar.as_deref() {
        Some(name) => name
            .parse::<CalendarSystem>()
            .map_err(TypikonError::Config)?,
        None => config.calendar,
    };
    let service = DayLookupService::new(calendar);

    match cli.command {
        Some(Commands::Show { date }) => {
            let day = service.execute(&date)?;
            print!("{}", format_day(&day));
            Ok(())
        }
        Some(Commands::Topic {
            codes,
            date,
            mode,
            day,
            movable_day,
        }) => {
            let liturgical_day = service.execute(&date)?;
            let codes = if codes.is_empty() {
                config.topics.clone()
            } else {
                codes
            };
            let overrides = TopicOverrides {
                movable_day,
                ..TopicOverrides::from_ints(mode, day)
            };
            let resolved = resolve_topics(&liturgical_day, &codes, &overrides);
            print!("{}", format_topics(&resolved));
            Ok(())
        }
        Some(Commands::Pascha { from, to }) => {
            let rows = pascha_table(from, to.unwrap_or(from), calendar)?;
            print!("{}", format_pascha_table(&rows));
            Ok(())
        }
        Some(Commands::Lukan { date }) => {
            let day = service.execute(&date)?;
            println!("{}", day.elevation_report());
            println!("{}", day.lukan_cycle_description());
            Ok(())
        }
        None => {
            // A bare date shows that day; no arguments shows today
            let date = cli.date.unwrap_or_else(|| "today".to_string());
            let day = service.execute(&date)?;
            print!("{}", format_day(&day));
            Ok(())
        }
    }
}
