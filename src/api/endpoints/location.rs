//
//  fullcontact-client
//  api/endpoints/location.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Location normalization and enrichment.
//!
//! Both calls take a free-form place such as `"denver"` or
//! `"Denver, CO, United States"`.

use super::merge_params;
use crate::api::client::FullContactClient;
use crate::api::common::{ApiError, QueryParams, ResponseContent};

/// Location lookups.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    client: &'a FullContactClient,
}

impl<'a> Location<'a> {
    /// Path of the normalizer.
    pub const NORMALIZER_PATH: &'static str = "/address/locationNormalizer";
    /// Path of the enrichment call.
    pub const ENRICHMENT_PATH: &'static str = "/address/locationEnrichment";

    pub(crate) fn new(client: &'a FullContactClient) -> Self {
        Self { client }
    }

    /// Turns a place into a structured location.
    pub async fn normalizer(
        &self,
        place: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.client
            .fetch_all(Self::NORMALIZER_PATH, merge_params([("place", place)], options))
            .await
    }

    /// Returns every location that may match a place, with population data.
    pub async fn enrichment(
        &self,
        place: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.client
            .fetch_all(Self::ENRICHMENT_PATH, merge_params([("place", place)], options))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoints::test_support::{client, seen};
    use crate::api::endpoints::Endpoint;

    #[tokio::test]
    async fn test_location_paths() {
        let (client, log) = client(2);

        let Endpoint::Location(location) = client.resolve_endpoint("location").unwrap() else {
            panic!("expected the location endpoint");
        };
        location.normalizer("denver", QueryParams::new()).await.unwrap();

        let mut options = QueryParams::new();
        options.insert("includeZeroPopulation".to_string(), Some("true".to_string()));
        location.enrichment("Denver, CO", options).await.unwrap();

        assert_eq!(
            seen(&log),
            vec![
                (
                    "/address/locationNormalizer.json".to_string(),
                    "place=denver".to_string()
                ),
                (
                    "/address/locationEnrichment.json".to_string(),
                    "includeZeroPopulation=true&place=Denver%2C+CO".to_string()
                ),
            ]
        );
    }
}
