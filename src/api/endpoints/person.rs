//
//  fullcontact-client
//  api/endpoints/person.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Person enrichment.
//!
//! Looks up a person profile by one of several identifiers. Every lookup
//! hits `/person` with a different query key.
//!
//! # Example
//!
//! ```rust,no_run
//! use fullcontact_client::FullContactClient;
//! use fullcontact_client::api::common::QueryParams;
//!
//! # async fn example() -> Result<(), fullcontact_client::ApiError> {
//! let mut client = FullContactClient::new()?;
//! client.authenticate(Some("your-api-key"))?;
//!
//! let mut options = QueryParams::new();
//! options.insert("style".to_string(), Some("dictionary".to_string()));
//!
//! let profile = client
//!     .person()
//!     .lookup_by_twitter("bartlorang", options)
//!     .await?;
//! if let Some(name) = profile.get("contactInfo") {
//!     println!("{}", name);
//! }
//! # Ok(())
//! # }
//! ```

use super::merge_params;
use crate::api::client::FullContactClient;
use crate::api::common::{ApiError, QueryParams, ResponseContent};

/// Person lookups.
#[derive(Debug, Clone, Copy)]
pub struct Person<'a> {
    client: &'a FullContactClient,
}

impl<'a> Person<'a> {
    /// Resource path.
    pub const PATH: &'static str = "/person";

    pub(crate) fn new(client: &'a FullContactClient) -> Self {
        Self { client }
    }

    /// Looks up a person by email address.
    pub async fn lookup_by_email(
        &self,
        email: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.lookup("email", email, options).await
    }

    /// Looks up a person by the MD5 hash of their email address.
    pub async fn lookup_by_email_md5(
        &self,
        email_md5: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.lookup("emailMD5", email_md5, options).await
    }

    /// Looks up a person by the SHA-256 hash of their email address.
    pub async fn lookup_by_email_sha256(
        &self,
        email_sha256: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.lookup("emailSHA256", email_sha256, options).await
    }

    /// Looks up a person by phone number.
    pub async fn lookup_by_phone(
        &self,
        phone: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.lookup("phone", phone, options).await
    }

    /// Looks up a person by Twitter handle.
    pub async fn lookup_by_twitter(
        &self,
        twitter: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.lookup("twitter", twitter, options).await
    }

    async fn lookup(
        &self,
        key: &str,
        value: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.client
            .fetch_all(Self::PATH, merge_params([(key, value)], options))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoints::test_support::{client, seen};

    #[tokio::test]
    async fn test_lookup_keys() {
        let (client, log) = client(5);
        let person = client.person();

        person.lookup_by_email("bart@fullcontact.com", QueryParams::new()).await.unwrap();
        person.lookup_by_email_md5("abc", QueryParams::new()).await.unwrap();
        person.lookup_by_email_sha256("def", QueryParams::new()).await.unwrap();
        person.lookup_by_phone("+13037170414", QueryParams::new()).await.unwrap();
        person.lookup_by_twitter("bartlorang", QueryParams::new()).await.unwrap();

        let seen = seen(&log);
        assert!(seen.iter().all(|(path, _)| path == "/person.json"));
        let queries: Vec<&str> = seen.iter().map(|(_, q)| q.as_str()).collect();
        assert_eq!(
            queries,
            vec![
                "email=bart%40fullcontact.com",
                "emailMD5=abc",
                "emailSHA256=def",
                "phone=%2B13037170414",
                "twitter=bartlorang",
            ]
        );
    }

    #[tokio::test]
    async fn test_options_override_required_key() {
        let (client, log) = client(1);

        let mut options = QueryParams::new();
        options.insert("email".to_string(), Some("other@x.com".to_string()));
        options.insert("ref".to_string(), None);
        client
            .person()
            .lookup_by_email("bart@fullcontact.com", options)
            .await
            .unwrap();

        assert_eq!(seen(&log)[0].1, "email=other%40x.com");
    }
}
