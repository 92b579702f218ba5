//! Centralized reader for RELTIME_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const LOG: &str = "RELTIME_LOG";

/// Snapshot of all RELTIME_* environment variables at load time.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnvVars {
    /// Log filter directives (e.g. "debug", "reltime=trace").
    /// Takes precedence over `log_level` in the config file.
    pub log: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all RELTIME_* environment variables from the current process.
    pub fn load() -> Self {
        Self {
            log: non_empty_var(LOG),
        }
    }
}
