//! HTTP API Client
//!
//! Fetch functions for the two upstream endpoints: analysis results and
//! customer profiles. The two fetches are independent; the dashboard runs
//! in a degraded state when one source is unavailable.
//!
//! Both endpoints are API Gateway Lambda proxy integrations, so the HTTP
//! response is an envelope whose `body` field is a JSON *string* of the
//! form `{"success": bool, "data": [...], "count": n}`. The client decodes
//! that double encoding, and falls back to a direct envelope for
//! deployments without the proxy wrapper.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::core::{AnalysisRecord, CustomerRecord};

/// Default analysis-results endpoint.
pub const DEFAULT_ANALYSIS_API: &str = "http://localhost:8082/api/analysis-results";
/// Default customer-profiles endpoint.
pub const DEFAULT_CUSTOMER_API: &str = "http://localhost:8082/api/customers";

const ANALYSIS_URL_KEY: &str = "calldash_analysis_url";
const CUSTOMER_URL_KEY: &str = "calldash_customer_url";

fn stored_url(key: &str, default: &str) -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(key) {
                url
            } else {
                default.to_string()
            }
        } else {
            default.to_string()
        }
    } else {
        default.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

fn store_url(key: &str, url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, url);
        }
    }
}

/// Get the analysis-results endpoint from local storage or use default
pub fn get_analysis_url() -> String {
    stored_url(ANALYSIS_URL_KEY, DEFAULT_ANALYSIS_API)
}

/// Set the analysis-results endpoint in local storage
pub fn set_analysis_url(url: &str) {
    store_url(ANALYSIS_URL_KEY, url);
}

/// Get the customer-profiles endpoint from local storage or use default
pub fn get_customer_url() -> String {
    stored_url(CUSTOMER_URL_KEY, DEFAULT_CUSTOMER_API)
}

/// Set the customer-profiles endpoint in local storage
pub fn set_customer_url(url: &str) {
    store_url(CUSTOMER_URL_KEY, url);
}

// ============ Response Types ============

/// Lambda proxy wrapper: the real payload is JSON re-encoded as a string.
#[derive(Debug, serde::Deserialize)]
struct ProxyEnvelope {
    body: String,
}

#[derive(Debug, serde::Deserialize)]
struct ResultsEnvelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

/// Decode a response body that is either a proxy envelope or the results
/// envelope directly.
fn decode_envelope<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, String> {
    let envelope: ResultsEnvelope<T> = match serde_json::from_str::<ProxyEnvelope>(text) {
        Ok(proxy) => serde_json::from_str(&proxy.body)
            .map_err(|e| format!("Parse error: {}", e))?,
        Err(_) => serde_json::from_str(text).map_err(|e| format!("Parse error: {}", e))?,
    };

    if !envelope.success {
        return Err("No data available".to_string());
    }
    Ok(envelope.data)
}

async fn fetch_envelope<T: DeserializeOwned>(url: &str) -> Result<Vec<T>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("Request failed with status {}", response.status()),
        });
        return Err(error.error);
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))?;

    decode_envelope(&text)
}

// ============ API Functions ============

/// Fetch all analysis records
pub async fn fetch_analyses() -> Result<Vec<AnalysisRecord>, String> {
    fetch_envelope(&get_analysis_url()).await
}

/// Fetch all customer records
pub async fn fetch_customers() -> Result<Vec<CustomerRecord>, String> {
    fetch_envelope(&get_customer_url()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_proxy_envelope() {
        let inner = r#"{"success":true,"data":[{"ContactId":"c-1"}],"count":1}"#;
        let outer = serde_json::json!({ "statusCode": 200, "body": inner }).to_string();
        let records: Vec<AnalysisRecord> = decode_envelope(&outer).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].contact_id, "c-1");
    }

    #[test]
    fn test_decode_direct_envelope() {
        let text = r#"{"success":true,"data":[{"customerId":"c-9","firstName":"Bao"}],"count":1}"#;
        let records: Vec<CustomerRecord> = decode_envelope(&text).unwrap();
        assert_eq!(records[0].customer_id, "c-9");
    }

    #[test]
    fn test_decode_unsuccessful_envelope() {
        let text = r#"{"success":false,"data":[],"count":0}"#;
        let result: Result<Vec<AnalysisRecord>, String> = decode_envelope(text);
        assert_eq!(result.unwrap_err(), "No data available");
    }

    #[test]
    fn test_decode_garbage_is_error() {
        let result: Result<Vec<AnalysisRecord>, String> = decode_envelope("not json");
        assert!(result.unwrap_err().starts_with("Parse error"));
    }
}
