//! Victim aggregation.
//!
//! Single-pass groupby-sum over the incident records. Entries are created
//! lazily on first sight of a key; addition is commutative, so input order
//! never changes the totals. Aggregates are built once after load and never
//! updated afterwards.

use incident_map_incident_models::{
    CountyTotalsMap, IncidentRecord, StateTotals, StateTotalsMap, VictimTotals,
};

/// Reduces incident records into per-county victim totals, keyed by the
/// source's county/city spelling.
#[must_use]
pub fn aggregate_by_county(records: &[IncidentRecord]) -> CountyTotalsMap {
    let mut totals = CountyTotalsMap::new();

    for record in records {
        let entry = totals
            .entry(record.county_or_city.clone())
            .or_insert_with(VictimTotals::default);
        entry.killed += u64::from(record.victims_killed);
        entry.injured += u64::from(record.victims_injured);
    }

    totals
}

/// Reduces incident records into per-state victim totals, keyed by the
/// source's full state name.
///
/// The `killed_state`/`injured_state` duplicates receive the same sums as
/// `killed`/`injured`.
#[must_use]
pub fn aggregate_by_state(records: &[IncidentRecord]) -> StateTotalsMap {
    let mut totals = StateTotalsMap::new();

    for record in records {
        let entry = totals
            .entry(record.state.clone())
            .or_insert_with(StateTotals::default);
        entry.killed += u64::from(record.victims_killed);
        entry.injured += u64::from(record.victims_injured);
        entry.killed_state += u64::from(record.victims_killed);
        entry.injured_state += u64::from(record.victims_injured);
    }

    totals
}
