//! Statistics API payloads.

use crate::error::FetchError;
use crate::fetch::{FetchResult, FetchStatus};
use serde::{Deserialize, Serialize};

/// `responseMessage` of a request that found data.
pub const MESSAGE_SUCCESS: &str = "處理完成";

/// `responseMessage` of a request for a region/year without data.
pub const MESSAGE_NO_DATA: &str = "查無資料";

/// One statistical row. Values are numbers or numeric strings depending on
/// the dataset revision.
pub type RawRow = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub response_data: Vec<RawRow>,
    #[serde(default)]
    pub response_message: String,
}

impl ApiResponse {
    pub fn parse(body: &str) -> Result<ApiResponse, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    /// Classify the payload by its message.
    pub fn into_result(self) -> FetchResult {
        match self.response_message.as_str() {
            MESSAGE_SUCCESS => FetchResult {
                status: FetchStatus::Success,
                rows: self.response_data,
            },
            MESSAGE_NO_DATA => FetchResult {
                status: FetchStatus::Empty,
                rows: Vec::new(),
            },
            other => {
                log::warn!("unrecognized response message {:?}", other);
                FetchResult::failed(FetchError::UnexpectedMessage(other.to_string()))
            }
        }
    }
}

/// Parse and classify a response body in one step.
pub fn classify_body(body: &str) -> FetchResult {
    match ApiResponse::parse(body) {
        Ok(response) => response.into_result(),
        Err(e) => {
            log::warn!("{}", e);
            FetchResult::failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let body = r#"{"responseCode":"OD-0101-S","responseMessage":"處理完成","totalPage":"1","responseData":[{"household_single_total":"50"}]}"#;
        let result = classify_body(body);
        assert_eq!(result.status, FetchStatus::Success);
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn test_no_data_body() {
        let result = classify_body(r#"{"responseMessage":"查無資料","responseData":[]}"#);
        assert_eq!(result.status, FetchStatus::Empty);
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_missing_data_defaults_to_empty() {
        let response = ApiResponse::parse(r#"{"responseMessage":"處理完成"}"#).unwrap();
        assert!(response.response_data.is_empty());
    }

    #[test]
    fn test_unknown_message_is_error() {
        let result = classify_body(r#"{"responseMessage":"系統維護中"}"#);
        assert_eq!(
            result.status,
            FetchStatus::Error(FetchError::UnexpectedMessage("系統維護中".to_string()))
        );
    }

    #[test]
    fn test_malformed_body_is_error() {
        let result = classify_body("<html>502</html>");
        assert!(matches!(result.status, FetchStatus::Error(FetchError::Malformed(_))));
    }
}
