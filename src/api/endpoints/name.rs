//
//  fullcontact-client
//  api/endpoints/name.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Name API
//!
//! Name normalization, deduction, comparison and statistics.
//!
//! | Method | Path | Required parameters |
//! |--------|------|---------------------|
//! | [`normalizer`](Name::normalizer) | `/name/normalizer` | `q` |
//! | [`deducer_by_email`](Name::deducer_by_email) | `/name/deducer` | `email` |
//! | [`deducer_by_username`](Name::deducer_by_username) | `/name/deducer` | `username` |
//! | [`parser`](Name::parser) | `/name/deducer` | `q` |
//! | [`similarity`](Name::similarity) | `/name/similarity` | `q1`, `q2` |
//! | [`stats`](Name::stats) | `/name/stats` | `name` |
//! | [`stats_by_given_name`](Name::stats_by_given_name) | `/name/stats` | `givenName` |
//! | [`stats_by_family_name`](Name::stats_by_family_name) | `/name/stats` | `familyName` |
//! | [`stats_by_given_name_and_family_name`](Name::stats_by_given_name_and_family_name) | `/name/stats` | `givenName`, `familyName` |
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
//! let score = client
//!     .name()
//!     .similarity("john", "johnny", QueryParams::new())
//!     .await?;
//! println!("{}", score);
//! # Ok(())
//! # }
//! ```

use super::merge_params;
use crate::api::client::FullContactClient;
use crate::api::common::{ApiError, QueryParams, ResponseContent};

/// Name lookups.
#[derive(Debug, Clone, Copy)]
pub struct Name<'a> {
    client: &'a FullContactClient,
}

impl<'a> Name<'a> {
    /// Common prefix of every name path.
    pub const PATH: &'static str = "/name";

    pub(crate) fn new(client: &'a FullContactClient) -> Self {
        Self { client }
    }

    /// Normalizes a free-form name into its parts.
    pub async fn normalizer(
        &self,
        name: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.fetch("normalizer", merge_params([("q", name)], options))
            .await
    }

    /// Deduces a name from an email address.
    pub async fn deducer_by_email(
        &self,
        email: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.fetch("deducer", merge_params([("email", email)], options))
            .await
    }

    /// Deduces a name from a username.
    pub async fn deducer_by_username(
        &self,
        username: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.fetch("deducer", merge_params([("username", username)], options))
            .await
    }

    /// Parses a full name into given and family name.
    ///
    /// Served by the deducer resource.
    pub async fn parser(
        &self,
        name: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.fetch("deducer", merge_params([("q", name)], options))
            .await
    }

    /// Scores how similar two names are.
    pub async fn similarity(
        &self,
        name1: &str,
        name2: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.fetch(
            "similarity",
            merge_params([("q1", name1), ("q2", name2)], options),
        )
        .await
    }

    /// Usage statistics for a name of unknown kind.
    pub async fn stats(
        &self,
        name: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.fetch("stats", merge_params([("name", name)], options))
            .await
    }

    /// Usage statistics for a given name.
    pub async fn stats_by_given_name(
        &self,
        given_name: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.fetch("stats", merge_params([("givenName", given_name)], options))
            .await
    }

    /// Usage statistics for a family name.
    pub async fn stats_by_family_name(
        &self,
        family_name: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.fetch("stats", merge_params([("familyName", family_name)], options))
            .await
    }

    /// Usage statistics for a full name.
    pub async fn stats_by_given_name_and_family_name(
        &self,
        given_name: &str,
        family_name: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.fetch(
            "stats",
            merge_params(
                [("givenName", given_name), ("familyName", family_name)],
                options,
            ),
        )
        .await
    }

    async fn fetch(&self, resource: &str, query: QueryParams) -> Result<ResponseContent, ApiError> {
        let path = format!("{}/{}", Self::PATH, resource);
        self.client.fetch_all(&path, query).await
    }
}
