//! Record Sorter
//!
//! Orders analysis records by a chosen column and direction. Pure: the
//! input slice is never mutated, every call returns a fresh `Vec`. The
//! sort is stable, and descending flips the comparator rather than the
//! result, so ties keep their input order in both directions.

use std::cmp::Ordering;

use super::records::AnalysisRecord;

/// Sortable columns of the analysis history table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Timestamp,
    Name,
    ContactId,
    PhoneNumber,
    ComplianceScore,
    Emotion,
}

impl SortField {
    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Timestamp => "Timestamp",
            Self::Name => "Customer Name",
            Self::ContactId => "ContactId",
            Self::PhoneNumber => "Phone Number",
            Self::ComplianceScore => "Compliance Score",
            Self::Emotion => "Emotion",
        }
    }
}

/// Comparison key resolved from a record for one field.
///
/// `Absent` collects records that lack the requested value (no analysis,
/// no score) and sorts after every present key, so they cluster at the
/// bottom of an ascending view.
#[derive(Clone, Debug, PartialEq)]
enum SortKey {
    Instant(i64),
    Number(f64),
    Text(String),
    Absent,
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            Self::Instant(_) => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
            Self::Absent => 3,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Instant(a), Self::Instant(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Absent, Self::Absent) => Ordering::Equal,
            // Mixed variants cannot arise for a single field, but keep the
            // ordering total and deterministic anyway.
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Normalize an upstream `"YYYY-MM-DD HH:MM:SS"` timestamp and parse it
/// to epoch milliseconds. Returns `None` when the string does not parse
/// even after normalization.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let normalized = raw.replacen(' ', "T", 1);
    let parsed = chrono::NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()?;
    Some(parsed.and_utc().timestamp_millis())
}

fn sort_key(record: &AnalysisRecord, field: SortField) -> SortKey {
    match field {
        SortField::Timestamp => {
            // Unparsable timestamps sort as earliest, deterministically.
            SortKey::Instant(parse_timestamp(&record.analysis_timestamp).unwrap_or(i64::MIN))
        }
        SortField::Name => {
            let name = record
                .customer_info
                .as_ref()
                .map(|c| {
                    format!("{} {} {}", c.first_name, c.middle_name, c.last_name)
                        .trim()
                        .to_string()
                })
                .unwrap_or_default();
            SortKey::Text(name)
        }
        SortField::ContactId => SortKey::Text(record.contact_id.clone()),
        SortField::PhoneNumber => SortKey::Text(record.phone_number.clone()),
        SortField::ComplianceScore => record
            .compliance_score()
            .map_or(SortKey::Absent, SortKey::Number),
        SortField::Emotion => record
            .emotion()
            .map_or(SortKey::Absent, |e| SortKey::Text(e.to_string())),
    }
}

/// Return a new ordering of `records` by `field`. Ascending unless
/// `descending`; equal keys keep their input order either way.
pub fn sort_records(
    records: &[AnalysisRecord],
    field: SortField,
    descending: bool,
) -> Vec<AnalysisRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = sort_key(a, field).compare(&sort_key(b, field));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{Analysis, CustomerInfo};

    fn record(contact_id: &str, timestamp: &str, score: Option<f64>) -> AnalysisRecord {
        AnalysisRecord {
            contact_id: contact_id.to_string(),
            phone_number: format!("+84-{}", contact_id),
            analysis_timestamp: timestamp.to_string(),
            analysis: score.map(|s| Analysis {
                compliance_score: Some(s),
                ..Default::default()
            }),
            customer_info: None,
        }
    }

    fn named(contact_id: &str, first: &str, middle: &str, last: &str) -> AnalysisRecord {
        AnalysisRecord {
            customer_info: Some(CustomerInfo {
                first_name: first.to_string(),
                middle_name: middle.to_string(),
                last_name: last.to_string(),
                ..Default::default()
            }),
            ..record(contact_id, "2024-01-01 00:00:00", None)
        }
    }

    #[test]
    fn test_timestamp_ascending() {
        let records = vec![
            record("a", "2024-01-01 10:00:00", None),
            record("b", "2024-01-01 09:00:00", None),
        ];
        let sorted = sort_records(&records, SortField::Timestamp, false);
        assert_eq!(sorted[0].contact_id, "b");
        assert_eq!(sorted[1].contact_id, "a");

        let sorted = sort_records(&records, SortField::Timestamp, true);
        assert_eq!(sorted[0].contact_id, "a");
    }

    #[test]
    fn test_input_not_mutated() {
        let records = vec![
            record("z", "2024-06-01 12:00:00", Some(3.0)),
            record("a", "2024-05-01 12:00:00", Some(9.0)),
        ];
        let _ = sort_records(&records, SortField::ContactId, false);
        assert_eq!(records[0].contact_id, "z");
    }

    #[test]
    fn test_unparsable_timestamp_sorts_earliest() {
        let records = vec![
            record("ok", "2024-01-01 09:00:00", None),
            record("bad", "not a timestamp", None),
        ];
        let sorted = sort_records(&records, SortField::Timestamp, false);
        assert_eq!(sorted[0].contact_id, "bad");
        let sorted = sort_records(&records, SortField::Timestamp, true);
        assert_eq!(sorted[1].contact_id, "bad");
    }

    #[test]
    fn test_name_ascending() {
        let records = vec![
            named("1", "Bob", "", "Kim"),
            named("2", "Ann", "", "Lee"),
        ];
        let sorted = sort_records(&records, SortField::Name, false);
        assert_eq!(sorted[0].contact_id, "2");
        assert_eq!(sorted[1].contact_id, "1");
    }

    #[test]
    fn test_name_compare_is_case_sensitive() {
        // Uppercase letters order before lowercase in a byte-wise compare.
        let records = vec![named("1", "ann", "", "lee"), named("2", "Zed", "", "Quy")];
        let sorted = sort_records(&records, SortField::Name, false);
        assert_eq!(sorted[0].contact_id, "2");
    }

    #[test]
    fn test_score_numeric_not_lexical() {
        // Lexically "10" < "9"; numerically 9 < 10.
        let records = vec![
            record("ten", "2024-01-01 00:00:00", Some(10.0)),
            record("nine", "2024-01-01 00:00:00", Some(9.0)),
        ];
        let sorted = sort_records(&records, SortField::ComplianceScore, false);
        assert_eq!(sorted[0].contact_id, "nine");
    }

    #[test]
    fn test_missing_score_sorts_last() {
        let records = vec![
            record("none", "2024-01-01 00:00:00", None),
            record("low", "2024-01-01 00:00:00", Some(1.0)),
            record("high", "2024-01-01 00:00:00", Some(9.5)),
        ];
        let sorted = sort_records(&records, SortField::ComplianceScore, false);
        assert_eq!(sorted[0].contact_id, "low");
        assert_eq!(sorted[2].contact_id, "none");
    }

    #[test]
    fn test_sort_is_deterministic_and_idempotent() {
        let records = vec![
            record("c", "2024-03-01 08:00:00", Some(5.0)),
            record("a", "2024-01-01 08:00:00", Some(5.0)),
            record("b", "2024-02-01 08:00:00", Some(5.0)),
        ];
        let once = sort_records(&records, SortField::ComplianceScore, false);
        let twice = sort_records(&once, SortField::ComplianceScore, false);
        assert_eq!(once, twice);
        // All keys tie, so the stable sort preserves input order.
        assert_eq!(once[0].contact_id, "c");
        assert_eq!(once[1].contact_id, "a");
        assert_eq!(once[2].contact_id, "b");
    }

    #[test]
    fn test_descending_is_exact_reverse_without_ties() {
        let records = vec![
            record("a", "2024-01-01 00:00:00", Some(2.0)),
            record("b", "2024-01-01 00:00:00", Some(8.0)),
            record("c", "2024-01-01 00:00:00", Some(5.0)),
        ];
        let asc = sort_records(&records, SortField::ComplianceScore, false);
        let mut desc = sort_records(&records, SortField::ComplianceScore, true);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_descending_preserves_tie_order() {
        let records = vec![
            record("first", "2024-01-01 00:00:00", Some(5.0)),
            record("second", "2024-01-01 00:00:00", Some(5.0)),
        ];
        let desc = sort_records(&records, SortField::ComplianceScore, true);
        assert_eq!(desc[0].contact_id, "first");
        assert_eq!(desc[1].contact_id, "second");
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_records(&[], SortField::Timestamp, false).is_empty());
    }

    #[test]
    fn test_parse_timestamp_normalizes_space() {
        let millis = parse_timestamp("2024-01-01 10:00:00").unwrap();
        let direct = chrono::NaiveDateTime::parse_from_str("2024-01-01T10:00:00", "%Y-%m-%dT%H:%M:%S")
            .unwrap()
            .and_utc()
            .timestamp_millis();
        assert_eq!(millis, direct);
        assert!(parse_timestamp("garbage").is_none());
    }
}
