#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library for the incident map CLI.

pub mod interactive;

use incident_map_incident_models::StateTotals;
use incident_map_session::MapSession;

/// Environment variable naming the topology document source.
pub const COUNTIES_ENV: &str = "INCIDENT_MAP_COUNTIES";

/// Environment variable naming the incident table source.
pub const INCIDENTS_ENV: &str = "INCIDENT_MAP_INCIDENTS";

/// Resolves a data source from the CLI flag or the environment variable,
/// flag first.
///
/// # Errors
///
/// Returns an error naming the flag and variable when neither is set.
pub fn resolve_source(
    cli_value: Option<String>,
    flag: &str,
    env_var: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    cli_value
        .or_else(|| std::env::var(env_var).ok())
        .ok_or_else(|| format!("No data source configured: pass --{flag} or set {env_var}").into())
}

/// Per-state totals sorted by victims killed, descending; ties break on
/// the state name.
#[must_use]
pub fn states_by_killed(session: &MapSession) -> Vec<(&str, &StateTotals)> {
    let mut states: Vec<(&str, &StateTotals)> = session
        .state_totals
        .iter()
        .map(|(name, totals)| (name.as_str(), totals))
        .collect();

    states.sort_by(|a, b| b.1.killed.cmp(&a.1.killed).then_with(|| a.0.cmp(b.0)));
    states
}

/// The `limit` counties with the most victims killed, descending; ties
/// break on the county name.
#[must_use]
pub fn top_counties(session: &MapSession, limit: usize) -> Vec<(&str, u64, u64)> {
    let mut counties: Vec<(&str, u64, u64)> = session
        .county_totals
        .iter()
        .map(|(name, totals)| (name.as_str(), totals.killed, totals.injured))
        .collect();

    counties.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    counties.truncate(limit);
    counties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        let resolved = resolve_source(
            Some("data/counties.json".to_owned()),
            "counties",
            "INCIDENT_MAP_TEST_UNSET",
        )
        .unwrap();

        assert_eq!(resolved, "data/counties.json");
    }

    #[test]
    fn missing_source_names_the_flag_and_variable() {
        let err = resolve_source(None, "counties", "INCIDENT_MAP_TEST_UNSET").unwrap_err();
        let message = err.to_string();

        assert!(message.contains("--counties"));
        assert!(message.contains("INCIDENT_MAP_TEST_UNSET"));
    }
}
