//
//  fullcontact-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! FullContact authenticates every call with an API key sent in the
//! `X-FullContact-APIKey` header. Once a client is authenticated the key is
//! applied to each outgoing request after all other headers have been merged,
//! so per-call headers cannot drop it.
//!
//! ## Example
//!
//! ```rust
//! use fullcontact_client::auth::{validate_api_key, AuthCredential};
//! use reqwest::header::HeaderMap;
//!
//! assert!(validate_api_key("a1b2c3d4e5"));
//!
//! let credential = AuthCredential::api_key("a1b2c3d4e5");
//! let mut headers = HeaderMap::new();
//! credential.apply_to_headers(&mut headers).unwrap();
//! assert_eq!(headers["x-fullcontact-apikey"], "a1b2c3d4e5");
//! ```

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::api::common::ApiError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-FullContact-APIKey";

/// Credentials attached to every request of an authenticated client.
#[derive(Clone)]
pub enum AuthCredential {
    /// FullContact API key.
    ApiKey {
        /// The key issued by FullContact.
        key: String,
    },
}

impl AuthCredential {
    /// Creates an API key credential.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey { key: key.into() }
    }

    /// Sets the authentication header, replacing any existing value.
    ///
    /// Fails with [`ApiError::InvalidArgument`] if the key is not a valid
    /// header value.
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) -> Result<(), ApiError> {
        match self {
            Self::ApiKey { key } => {
                let mut value = HeaderValue::from_str(key).map_err(|_| {
                    ApiError::InvalidArgument("API key is not a valid header value".to_string())
                })?;
                value.set_sensitive(true);
                headers.insert(HeaderName::from_static("x-fullcontact-apikey"), value);
            }
        }
        Ok(())
    }
}

// Keys must never end up in logs.
impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey { .. } => f.debug_struct("ApiKey").field("key", &"***").finish(),
        }
    }
}

/// Checks the format of an API key.
///
/// This is a format check only; the server decides whether the key is valid.
pub fn validate_api_key(key: &str) -> bool {
    !key.is_empty() && !key.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_existing_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-fullcontact-apikey"),
            HeaderValue::from_static("old"),
        );

        AuthCredential::api_key("new")
            .apply_to_headers(&mut headers)
            .unwrap();

        assert_eq!(headers.get_all(API_KEY_HEADER).iter().count(), 1);
        assert_eq!(headers[API_KEY_HEADER], "new");
    }

    #[test]
    fn test_apply_rejects_invalid_header_value() {
        let mut headers = HeaderMap::new();
        let result = AuthCredential::api_key("bad\nkey").apply_to_headers(&mut headers);
        assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", AuthCredential::api_key("topsecret"));
        assert!(!debug.contains("topsecret"));
    }

    #[test]
    fn test_validate_api_key() {
        assert!(validate_api_key("abc123"));
        assert!(!validate_api_key(""));
        assert!(!validate_api_key("has space"));
    }
}
