use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use super::env_var::EnvVars;

/// Install the global subscriber: human-readable lines on stderr, filtered by
/// `RELTIME_LOG` when set, otherwise by `default_level`.
///
/// Does nothing if a subscriber is already installed.
pub fn init(env: &EnvVars, default_level: &str) {
    let filter = build_filter(env.log.as_deref(), default_level);

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn build_filter(directives: Option<&str>, default_level: &str) -> EnvFilter {
    if let Some(directives) = directives {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Warning: Ignoring invalid RELTIME_LOG value {directives:?}: {e}"),
        }
    }
    EnvFilter::new(default_level)
}
