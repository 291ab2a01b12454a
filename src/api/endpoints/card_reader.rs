//
//  fullcontact-client
//  api/endpoints/card_reader.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Business card transcription.
//!
//! Results are delivered asynchronously to the webhook given on upload.

use super::merge_params;
use crate::api::client::FullContactClient;
use crate::api::common::{ApiError, QueryParams, ResponseContent};

/// Card reader requests.
#[derive(Debug, Clone, Copy)]
pub struct CardReader<'a> {
    client: &'a FullContactClient,
}

impl<'a> CardReader<'a> {
    /// Resource path.
    pub const PATH: &'static str = "/cardReader";

    pub(crate) fn new(client: &'a FullContactClient) -> Self {
        Self { client }
    }

    /// Submits a card transcription request.
    ///
    /// `webhook_url` receives the transcription once it is done. Card images
    /// and other request fields go in `options`.
    pub async fn upload(
        &self,
        webhook_url: &str,
        options: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        self.client
            .fetch_all(Self::PATH, merge_params([("webhookUrl", webhook_url)], options))
            .await
    }
}
