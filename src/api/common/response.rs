//
//  fullcontact-client
//  api/common/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response decoding helpers.
//!
//! Reading a successful response never fails: a body that is not JSON is
//! returned as raw text. The header helpers pull pagination links and the
//! rate-limit counters out of a response.

use std::collections::BTreeMap;

use super::pagination::parse_page_header;
use super::{ApiError, ResponseContent};
use crate::api::transport::RawResponse;

/// Total number of calls allowed in the current window.
pub const RATE_LIMIT_LIMIT: &str = "X-Rate-Limit-Limit";
/// Calls left in the current window.
pub const RATE_LIMIT_REMAINING: &str = "X-Rate-Limit-Remaining";
/// Seconds until the current window resets.
pub const RATE_LIMIT_RESET: &str = "X-Rate-Limit-Reset";
/// Link header carrying pagination relations.
pub const PAGE_HEADER: &str = "page";

/// Decodes a response body.
///
/// Falls back to [`ResponseContent::Raw`] when the body is not valid JSON.
pub fn decode(response: &RawResponse) -> ResponseContent {
    match serde_json::from_slice(&response.body) {
        Ok(value) => ResponseContent::Json(value),
        Err(_) => ResponseContent::Raw(response.text()),
    }
}

/// Returns the pagination links advertised in the `page` header.
///
/// `None` when the header is missing or empty.
pub fn extract_pagination(response: &RawResponse) -> Option<BTreeMap<String, String>> {
    let header = response.header_values(PAGE_HEADER).join(",");
    if header.trim().is_empty() {
        return None;
    }
    Some(parse_page_header(&header))
}

/// Reads the `X-Rate-Limit-Limit` header.
///
/// Returns `Ok(None)` when the header is absent or not a number, and
/// [`ApiError::RateLimitExceeded`] when the limit is below one.
pub fn extract_rate_limit(response: &RawResponse) -> Result<Option<i64>, ApiError> {
    match response.header_i64(RATE_LIMIT_LIMIT) {
        Some(limit) if limit < 1 => Err(ApiError::RateLimitExceeded {
            message: format!("{} reached: {}", RATE_LIMIT_LIMIT, limit),
            reset_seconds: response
                .header_i64(RATE_LIMIT_RESET)
                .and_then(|reset| u64::try_from(reset).ok()),
        }),
        limit => Ok(limit),
    }
}

/// Rate-limit counters sent with every API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Calls allowed per window
    pub limit: i64,
    /// Calls left in this window
    pub remaining: i64,
    /// Seconds until the window resets
    pub reset_seconds: i64,
}

impl RateLimitInfo {
    /// Parses the three rate-limit headers. All of them must be present.
    pub fn from_response(response: &RawResponse) -> Option<Self> {
        Some(Self {
            limit: response.header_i64(RATE_LIMIT_LIMIT)?,
            remaining: response.header_i64(RATE_LIMIT_REMAINING)?,
            reset_seconds: response.header_i64(RATE_LIMIT_RESET)?,
        })
    }

    /// True when no calls are left in the current window.
    pub fn is_exhausted(&self) -> bool {
        self.limit < 1 || self.remaining < 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_json() {
        let response = RawResponse::new(200, r#"{"status":200,"likelihood":0.9}"#);
        assert_eq!(
            decode(&response),
            ResponseContent::Json(json!({"status": 200, "likelihood": 0.9}))
        );
    }

    #[test]
    fn test_decode_malformed_json_returns_raw() {
        let response = RawResponse::new(200, "{not json");
        assert_eq!(decode(&response), ResponseContent::Raw("{not json".to_string()));

        let response = RawResponse::new(200, "<person><status>200</status></person>");
        assert_eq!(
            decode(&response).as_raw(),
            Some("<person><status>200</status></person>")
        );
    }

    #[test]
    fn test_extract_pagination() {
        let response = RawResponse::new(200, "")
            .with_header("page", r#"<https://api/x?page=2>; rel="next""#)
            .with_header("page", r#"<https://api/x?page=4>; rel="last""#);

        let links = extract_pagination(&response).unwrap();
        assert_eq!(links["next"], "https://api/x?page=2");
        assert_eq!(links["last"], "https://api/x?page=4");

        assert!(extract_pagination(&RawResponse::new(200, "")).is_none());
    }

    #[test]
    fn test_extract_rate_limit() {
        let ok = RawResponse::new(200, "").with_header(RATE_LIMIT_LIMIT, "60");
        assert_eq!(extract_rate_limit(&ok).unwrap(), Some(60));

        assert_eq!(extract_rate_limit(&RawResponse::new(200, "")).unwrap(), None);

        let exhausted = RawResponse::new(200, "")
            .with_header(RATE_LIMIT_LIMIT, "0")
            .with_header(RATE_LIMIT_RESET, "12");
        match extract_rate_limit(&exhausted) {
            Err(ApiError::RateLimitExceeded { reset_seconds, .. }) => {
                assert_eq!(reset_seconds, Some(12))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rate_limit_info() {
        let response = RawResponse::new(200, "")
            .with_header(RATE_LIMIT_LIMIT, "60")
            .with_header(RATE_LIMIT_REMAINING, "0")
            .with_header(RATE_LIMIT_RESET, "7");

        let info = RateLimitInfo::from_response(&response).unwrap();
        assert_eq!(
            info,
            RateLimitInfo {
                limit: 60,
                remaining: 0,
                reset_seconds: 7
            }
        );
        assert!(info.is_exhausted());

        let partial = RawResponse::new(200, "").with_header(RATE_LIMIT_LIMIT, "60");
        assert!(RateLimitInfo::from_response(&partial).is_none());
    }
}
