//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "typikon")]
#[command(about = "Liturgical day properties for the Byzantine rite", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Date reference (today, MM-DD, YYYY-MM-DD); shows that day
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Calendar system (julian, gregorian); overrides the config file
    #[arg(short, long, global = true)]
    pub calendar: Option<String>,

    /// Path to a config file (default: $TYPIKON_CONFIG or ./typikon.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the liturgical properties of a day
    Show {
        /// Date reference (default: today)
        #[arg(default_value = "today")]
        date: String,
    },

    /// Resolve topic codes to lookup keys
    Topic {
        /// Topic codes (default: the topics from the config file)
        codes: Vec<String>,

        /// Date reference
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Octoechos mode override (1-8; anything else means none)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        mode: i32,

        /// Octoechos weekday override, used together with --mode
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        day: i32,

        /// Movable-cycle day override for Triodion/Pentecostarion topics (0 clears)
        #[arg(long)]
        movable_day: Option<u32>,
    },

    /// List Pascha and the main movable feasts for a range of years
    Pascha {
        /// First year
        from: i32,

        /// Last year (default: same as first)
        to: Option<i32>,
    },

    /// Show where a day falls in the Lukan cycle
    Lukan {
        /// Date reference (default: today)
        #[arg(default_value = "today")]
        date: String,
    },
}
