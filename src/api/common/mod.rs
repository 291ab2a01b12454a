//
//  fullcontact-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the FullContact client
//!
//! This module provides the types shared by the transport, the client facade
//! and every endpoint wrapper: the error taxonomy, decoded response content,
//! query parameter mappings, pagination and rate-limit helpers.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ResponseContent`] - Decoded response body (JSON or raw text)
//! - [`QueryParams`] - Query parameter mapping accepted by every endpoint
//! - Pagination types (re-exported from the `pagination` submodule)
//! - Response decoding helpers (re-exported from the `response` submodule)
//!
//! # Example
//!
//! ```rust
//! use fullcontact_client::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::RateLimitExceeded { reset_seconds, .. }) => {
//!             println!("Slow down, retry in {:?}s", reset_seconds)
//!         }
//!         Err(ApiError::ResourceNotFound(reason)) => println!("Not found: {}", reason),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

mod pagination;
mod response;

pub use pagination::*;
pub use response::*;

/// Query parameters of a request.
///
/// A `None` value marks a parameter that is present in the mapping but has
/// no value. Such parameters are never serialized into the query string.
pub type QueryParams = BTreeMap<String, Option<String>>;

/// Unified error type for all FullContact API operations.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `InvalidArgument` | Bad option, unknown endpoint, missing API key | N/A |
/// | `RateLimitExceeded` | Absolute or per-second quota hit | 403 |
/// | `ResourceNotFound` | Resource missing, with the server's reason code | 404 |
/// | `Api` | Any other client or server error | 4xx/5xx |
/// | `Network` | Connection, TLS, timeout failures | N/A |
/// | `Transport` | Request could not be built or read | N/A |
/// | `PageLimitExceeded` | Pagination ran past the configured bound | N/A |
///
/// # Notes
///
/// - The `Network` variant automatically converts from `reqwest::Error`
/// - Nothing is retried; every error reaches the caller as is
#[derive(Error, Debug)]
pub enum ApiError {
    /// An argument passed to the client was rejected.
    ///
    /// Raised for unknown option names, unsupported option values, unknown
    /// endpoint names and a missing API key.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The API quota has been exhausted.
    ///
    /// `reset_seconds` is set when the server told us how long to wait.
    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Human readable description of the exhausted quota
        message: String,
        /// Seconds until the quota window resets, when known
        reset_seconds: Option<u64>,
    },

    /// The requested resource was not found.
    ///
    /// Carries the `reasonCode` header sent with the 404 response.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The API answered with an error status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request could not be built or its response could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Pagination did not finish within the configured number of pages.
    #[error("Pagination stopped after {0} pages")]
    PageLimitExceeded(u32),
}

impl ApiError {
    /// Returns the HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimitExceeded { .. } => Some(403),
            Self::ResourceNotFound(_) => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Decoded body of an API response.
///
/// The API answers in JSON, but a body that fails to decode is handed back
/// untouched as [`ResponseContent::Raw`] instead of producing an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseContent {
    /// Body decoded as JSON
    Json(Value),
    /// Body that was not valid JSON
    Raw(String),
}

impl ResponseContent {
    /// Returns the JSON value, if the body decoded.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw text, if the body did not decode.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Raw(text) => Some(text),
        }
    }

    /// Looks up a top-level key of a JSON object body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }

    /// Converts the content into a JSON value.
    ///
    /// Raw text becomes a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Raw(text) => Value::String(text),
        }
    }
}

impl std::fmt::Display for ResponseContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{}", value),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_status() {
        let err = ApiError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(ApiError::ResourceNotFound("x".into()).status(), Some(404));
        assert_eq!(ApiError::InvalidArgument("x".into()).status(), None);
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::RateLimitExceeded {
            message: "per-second limit reached; retry after 30s".to_string(),
            reset_seconds: Some(30),
        };
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded: per-second limit reached; retry after 30s"
        );
    }

    #[test]
    fn test_response_content_accessors() {
        let content = ResponseContent::Json(json!({"name": "x"}));
        assert_eq!(content.get("name"), Some(&json!("x")));
        assert!(content.as_raw().is_none());

        let raw = ResponseContent::Raw("<xml/>".to_string());
        assert_eq!(raw.as_raw(), Some("<xml/>"));
        assert_eq!(raw.get("name"), None);
        assert_eq!(raw.into_value(), json!("<xml/>"));
    }
}
