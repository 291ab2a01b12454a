//
//  fullcontact-client
//  api/endpoints/email.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Email verification.

use super::merge_params;
use crate::api::client::FullContactClient;
use crate::api::common::{ApiError, QueryParams, ResponseContent};

/// Email checks.
#[derive(Debug, Clone, Copy)]
pub struct Email<'a> {
    client: &'a FullContactClient,
}

impl<'a> Email<'a> {
    /// Resource path.
    pub const PATH: &'static str = "/email/disposable";

    pub(crate) fn new(client: &'a FullContactClient) -> Self {
        Self { client }
    }

    /// Checks whether an address belongs to a disposable email provider.
    pub async fn disposable(
        &self,
        email: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.client
            .fetch_all(Self::PATH, merge_params([("email", email)], options))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoints::test_support::{client, seen};

    #[test]
    fn test_disposable() {
        let (client, log) = client(1);

        let content = tokio_test::block_on(
            client
                .email()
                .disposable("user@mailinator.com", QueryParams::new()),
        )
        .unwrap();

        assert_eq!(content.get("status"), Some(&serde_json::json!(200)));
        assert_eq!(
            seen(&log),
            vec![(
                "/email/disposable.json".to_string(),
                "email=user%40mailinator.com".to_string()
            )]
        );
    }
}
