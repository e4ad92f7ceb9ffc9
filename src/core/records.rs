//! Record Types
//!
//! Deserialized shapes of the two upstream data sources. Analysis results
//! come from a DynamoDB-backed endpoint with PascalCase top-level keys and
//! snake_case keys inside the nested analysis object; customer records use
//! camelCase throughout. Records are immutable once fetched: every core
//! operation returns a new view and never touches the originals.

use serde::{Deserialize, Serialize};

/// One analyzed call, as returned by the analysis-results endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnalysisRecord {
    #[serde(rename = "ContactId")]
    pub contact_id: String,

    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: String,

    /// Timestamp in the upstream `"YYYY-MM-DD HH:MM:SS"` format. The space
    /// must be replaced with `'T'` before parsing.
    #[serde(rename = "AnalysisTimestamp", default)]
    pub analysis_timestamp: String,

    /// Absent on records whose analysis has not completed yet.
    #[serde(rename = "Analysis", default)]
    pub analysis: Option<Analysis>,

    /// Identity fields joined from the customer source upstream. The join
    /// is informal; any field (or the whole object) may be missing.
    #[serde(rename = "CustomerInfo", default)]
    pub customer_info: Option<CustomerInfo>,
}

/// Nested analysis payload of a call record.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Default)]
pub struct Analysis {
    /// Compliance rating in the 0-10 range. Compared numerically, never
    /// lexically.
    #[serde(default)]
    pub compliance_score: Option<f64>,

    #[serde(default)]
    pub violations: Vec<String>,

    #[serde(default)]
    pub recommendations: Vec<String>,

    #[serde(default)]
    pub detailed_analysis: String,

    /// Free-form sentiment label, e.g. "positive" or "tích cực".
    #[serde(default)]
    pub customer_emotion: String,

    #[serde(default)]
    pub emotion_details: String,
}

/// Customer identity joined onto an analysis record.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl CustomerInfo {
    /// Display name composed from the three parts, missing parts treated
    /// as empty, surrounding whitespace trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.first_name, self.middle_name, self.last_name)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A customer profile from the second data source. No relationship is
/// enforced against [`AnalysisRecord`] beyond the informal upstream join.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub customer_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl CustomerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.first_name, self.middle_name, self.last_name)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AnalysisRecord {
    /// Compliance score, if the analysis is present and carries one.
    pub fn compliance_score(&self) -> Option<f64> {
        self.analysis.as_ref().and_then(|a| a.compliance_score)
    }

    /// Raw emotion label, if the analysis is present and the label is
    /// non-empty.
    pub fn emotion(&self) -> Option<&str> {
        self.analysis
            .as_ref()
            .map(|a| a.customer_emotion.as_str())
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_analysis_record() {
        let json = r#"{
            "ContactId": "abc-123",
            "PhoneNumber": "+84912345678",
            "AnalysisTimestamp": "2024-01-01 10:00:00",
            "Analysis": {
                "compliance_score": 7.5,
                "violations": ["spoke over customer"],
                "recommendations": ["let the customer finish"],
                "detailed_analysis": "Call went mostly well.",
                "customer_emotion": "neutral",
                "emotion_details": "Calm throughout."
            }
        }"#;

        let record: AnalysisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.contact_id, "abc-123");
        assert_eq!(record.compliance_score(), Some(7.5));
        assert_eq!(record.emotion(), Some("neutral"));
        assert!(record.customer_info.is_none());
    }

    #[test]
    fn test_deserialize_without_analysis() {
        let json = r#"{"ContactId": "pending-1"}"#;
        let record: AnalysisRecord = serde_json::from_str(json).unwrap();
        assert!(record.analysis.is_none());
        assert_eq!(record.compliance_score(), None);
        assert_eq!(record.emotion(), None);
    }

    #[test]
    fn test_full_name_skips_missing_parts() {
        let info = CustomerInfo {
            first_name: "Ann".to_string(),
            middle_name: String::new(),
            last_name: "Lee".to_string(),
            ..Default::default()
        };
        assert_eq!(info.full_name(), "Ann Lee");
    }

    #[test]
    fn test_deserialize_customer_record() {
        let json = r#"{
            "customerId": "c-9",
            "firstName": "Bao",
            "lastName": "Tran",
            "phoneNumber": "+84911222333",
            "address": "12 Ly Thuong Kiet, Hanoi"
        }"#;
        let record: CustomerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.customer_id, "c-9");
        assert_eq!(record.full_name(), "Bao Tran");
        assert_eq!(record.email, None);
    }
}
