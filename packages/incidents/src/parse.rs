//! Incident table decoding.
//!
//! The source is a comma-delimited table with at least the columns `State`,
//! `City Or County`, `Victims Killed`, and `Victims Injured`. Location
//! fields are carried through exactly as written (no trimming or re-casing)
//! so that aggregate keys match the source spelling.

use incident_map_incident_models::IncidentRecord;

use crate::IncidentError;

/// Column header for the state name.
pub const STATE_COLUMN: &str = "State";
/// Column header for the county or city name.
pub const COUNTY_COLUMN: &str = "City Or County";
/// Column header for the killed count.
pub const KILLED_COLUMN: &str = "Victims Killed";
/// Column header for the injured count.
pub const INJURED_COLUMN: &str = "Victims Injured";
/// Optional column header for the incident date.
pub const DATE_COLUMN: &str = "Incident Date";

/// Parses a victim count field. Missing, empty, or non-numeric values
/// coerce to zero; this is never an error.
#[must_use]
pub fn parse_count(field: &str) -> u32 {
    field.trim().parse().unwrap_or(0)
}

/// Decodes incident records from delimited text.
///
/// Rows shorter than the header are tolerated (missing cells read as
/// empty, so their counts coerce to zero).
///
/// # Errors
///
/// Returns [`IncidentError`] if the text is not readable as a delimited
/// table or a required column is absent from the header row.
pub fn decode_incidents(text: &str) -> Result<Vec<IncidentRecord>, IncidentError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();

    let column = |name: &str| -> Result<usize, IncidentError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| IncidentError::Conversion {
                message: format!("Missing required column {name:?} in incident table"),
            })
    };

    let state_idx = column(STATE_COLUMN)?;
    let county_idx = column(COUNTY_COLUMN)?;
    let killed_idx = column(KILLED_COLUMN)?;
    let injured_idx = column(INJURED_COLUMN)?;
    let date_idx = headers.iter().position(|h| h.trim() == DATE_COLUMN);

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;

        records.push(IncidentRecord {
            state: row.get(state_idx).unwrap_or("").to_owned(),
            county_or_city: row.get(county_idx).unwrap_or("").to_owned(),
            victims_killed: parse_count(row.get(killed_idx).unwrap_or("")),
            victims_injured: parse_count(row.get(injured_idx).unwrap_or("")),
            incident_date: date_idx
                .and_then(|i| row.get(i))
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        });
    }

    log::debug!("Decoded {} incident records", records.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
Incident ID,Incident Date,State,City Or County,Victims Killed,Victims Injured
1,\"January 21, 2023\",California,Monterey Park,11,9
2,\"January 23, 2023\",California,Half Moon Bay,7,1
3,,Texas,Dallas,,three
";

    #[test]
    fn decodes_records_with_extra_columns() {
        let records = decode_incidents(TABLE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].state, "California");
        assert_eq!(records[0].county_or_city, "Monterey Park");
        assert_eq!(records[0].victims_killed, 11);
        assert_eq!(records[0].victims_injured, 9);
        assert_eq!(records[0].incident_date.as_deref(), Some("January 21, 2023"));
    }

    #[test]
    fn malformed_counts_coerce_to_zero() {
        let records = decode_incidents(TABLE).unwrap();
        assert_eq!(records[2].victims_killed, 0);
        assert_eq!(records[2].victims_injured, 0);
        assert_eq!(records[2].incident_date, None);
    }

    #[test]
    fn location_fields_keep_source_spelling() {
        let records =
            decode_incidents("State,City Or County,Victims Killed,Victims Injured\nTexas, Dallas ,1,0\n")
                .unwrap();
        assert_eq!(records[0].county_or_city, " Dallas ");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let err = decode_incidents("State,Victims Killed\nTexas,1\n").unwrap_err();
        assert!(err.to_string().contains("City Or County"));
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let records =
            decode_incidents("State,City Or County,Victims Killed,Victims Injured\nOhio,Akron\n")
                .unwrap();
        assert_eq!(records[0].victims_killed, 0);
        assert_eq!(records[0].victims_injured, 0);
    }

    #[test]
    fn parse_count_variants() {
        assert_eq!(parse_count("4"), 4);
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("n/a"), 0);
        assert_eq!(parse_count("-3"), 0);
    }
}
