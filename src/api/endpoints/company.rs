//
//  fullcontact-client
//  api/endpoints/company.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Company enrichment by domain.

use super::merge_params;
use crate::api::client::FullContactClient;
use crate::api::common::{ApiError, QueryParams, ResponseContent};

/// Company lookups.
#[derive(Debug, Clone, Copy)]
pub struct Company<'a> {
    client: &'a FullContactClient,
}

impl<'a> Company<'a> {
    /// Resource path.
    pub const PATH: &'static str = "/company/lookup";

    pub(crate) fn new(client: &'a FullContactClient) -> Self {
        Self { client }
    }

    /// Looks up a company by its web domain, e.g. `fullcontact.com`.
    pub async fn lookup_by_domain(
        &self,
        domain: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.client
            .fetch_all(Self::PATH, merge_params([("domain", domain)], options))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientOptions;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_lookup_by_domain_follows_pages() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/company/lookup.json")
            .match_query(Matcher::Exact("domain=fullcontact.com".to_string()))
            .match_header("x-fullcontact-apikey", "test-key")
            .match_header("accept", "application/vnd.FullContact.v2+json")
            .with_status(200)
            .with_header("X-Rate-Limit-Limit", "60")
            .with_header("X-Rate-Limit-Remaining", "58")
            .with_header("X-Rate-Limit-Reset", "1")
            .with_body(r#"{"results":[{"id":1}],"currentPage":1,"totalPages":2}"#)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/company/lookup.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("domain".into(), "fullcontact.com".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"results":[{"id":2}],"currentPage":2,"totalPages":2}"#)
            .create_async()
            .await;

        let options = ClientOptions {
            base_url: server.url(),
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        let client = FullContactClient::from_options(options).unwrap();

        let content = client
            .company()
            .lookup_by_domain("fullcontact.com", QueryParams::new())
            .await
            .unwrap();

        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(content, ResponseContent::Json(json!([{"id": 1}, {"id": 2}])));
    }

    #[tokio::test]
    async fn test_lookup_by_domain_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/company/lookup.json")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_header("reasonCode", "NotFound")
            .create_async()
            .await;

        let options = ClientOptions {
            base_url: server.url(),
            ..Default::default()
        };
        let client = FullContactClient::with_options(options).unwrap();

        let result = client
            .company()
            .lookup_by_domain("nowhere.invalid", QueryParams::new())
            .await;
        assert!(matches!(result, Err(ApiError::ResourceNotFound(reason)) if reason == "NotFound"));
    }
}
