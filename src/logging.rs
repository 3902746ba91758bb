use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a level for the `typikon` target.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. `RUST_LOG`, when set, replaces the
/// filter derived from `-v`; stdout stays reserved for command output.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("typikon={}", level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
