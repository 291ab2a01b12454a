//
//  fullcontact-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Client Facade for the FullContact API
//!
//! This module provides [`FullContactClient`], the single entry point of the
//! library. It owns the client options and the default headers, resolves
//! endpoint wrappers by name and runs the request pipeline shared by all of
//! them.
//!
//! ## Features
//!
//! - Endpoint lookup by name (`person`, `company`, `card-reader`, `email`,
//!   `name`, `location`) or through named accessors
//! - API key injection once authenticated
//! - Default `Accept` and `User-Agent` headers, overridable per call
//! - Transparent multi-page fetching
//! - Mapping of error responses to [`ApiError`] variants
//!
//! ## Thread Safety
//!
//! Option and header changes take `&mut self`, endpoint calls take `&self`.
//! Sharing a client between tasks therefore needs external synchronization
//! whenever it is reconfigured.

use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::path::Path;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT,
};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::common::{
    decode, ApiError, PagedResult, QueryParams, RateLimitInfo, ResponseContent,
    RATE_LIMIT_LIMIT, RATE_LIMIT_REMAINING, RATE_LIMIT_RESET,
};
use super::endpoints::{
    CardReader, Company, Email, Endpoint, EndpointKind, Location, Name, Person,
};
use super::transport::{HttpTransport, PreparedRequest, RawResponse, RequestSpec, Transport};
use crate::auth::AuthCredential;
use crate::config::{ApiVersion, ClientOptions, ResponseFormat};

/// Header carrying the reason of a 404 response.
const REASON_CODE_HEADER: &str = "reasonCode";

/// Query parameter selecting a page of a multi-page response.
const PAGE_PARAM: &str = "page";

/// Maps a 4xx/5xx response to the matching [`ApiError`].
///
/// Rules are checked in order:
///
/// 1. 403 with `X-Rate-Limit-Limit: 0` is an exhausted absolute quota.
/// 2. 403 with `X-Rate-Limit-Remaining: 0` is an exhausted per-second quota;
///    the wait comes from `X-Rate-Limit-Reset`.
/// 3. 404 with a `reasonCode` header is a missing resource.
/// 4. Anything else is [`ApiError::Api`] carrying the body's `message`, or
///    the whole decoded body when it has none.
///
/// Missing or non-numeric rate-limit headers never count as zero, so a 403
/// without exhausted counters falls through to rule 4.
///
/// # Parameters
///
/// * `response` - The error response
/// * `api_limit` - The account's absolute quota, quoted in the message
///
/// # Example
///
/// ```rust
/// use fullcontact_client::api::client::map_error_response;
/// use fullcontact_client::api::transport::RawResponse;
/// use fullcontact_client::ApiError;
///
/// let response = RawResponse::new(404, "").with_header("reasonCode", "NotFound");
/// match map_error_response(&response, 600) {
///     ApiError::ResourceNotFound(reason) => assert_eq!(reason, "NotFound"),
///     other => panic!("unexpected error: {}", other),
/// }
/// ```
pub fn map_error_response(response: &RawResponse, api_limit: u64) -> ApiError {
    let reset_seconds = response
        .header_i64(RATE_LIMIT_RESET)
        .and_then(|reset| u64::try_from(reset).ok());

    if response.status == 403 {
        if response.header_i64(RATE_LIMIT_LIMIT) == Some(0) {
            return ApiError::RateLimitExceeded {
                message: format!("absolute limit of {} requests reached", api_limit),
                reset_seconds,
            };
        }
        if response.header_i64(RATE_LIMIT_REMAINING) == Some(0) {
            let message = match reset_seconds {
                Some(reset) => format!("per-second limit reached; retry after {}s", reset),
                None => "per-second limit reached".to_string(),
            };
            return ApiError::RateLimitExceeded {
                message,
                reset_seconds,
            };
        }
    }

    if response.status == 404 {
        if let Some(reason) = response.header(REASON_CODE_HEADER).filter(|r| !r.is_empty()) {
            return ApiError::ResourceNotFound(reason.to_string());
        }
    }

    let message = match decode(response) {
        ResponseContent::Json(content) => match content.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(message) => message.to_string(),
            None => content.to_string(),
        },
        ResponseContent::Raw(text) => text,
    };

    ApiError::Api {
        status: response.status,
        message,
    }
}

/// The FullContact API client.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use fullcontact_client::FullContactClient;
///
/// # async fn example() -> Result<(), fullcontact_client::ApiError> {
/// let mut client = FullContactClient::new()?;
/// client.authenticate(Some("your-api-key"))?;
///
/// let person = client
///     .person()
///     .lookup_by_email("bart@fullcontact.com", Default::default())
///     .await?;
/// println!("{}", person);
/// # Ok(())
/// # }
/// ```
///
/// # Endpoint Lookup
///
/// ```rust
/// use fullcontact_client::api::endpoints::Endpoint;
/// use fullcontact_client::FullContactClient;
///
/// let client = FullContactClient::new().unwrap();
/// assert!(matches!(client.api("person"), Ok(Endpoint::Person(_))));
/// assert!(client.api("bogus").is_err());
/// ```
pub struct FullContactClient {
    /// Named options requests are resolved against
    options: ClientOptions,
    /// Effective default headers
    headers: HeaderMap,
    /// Credentials applied to every request once set
    auth: Option<AuthCredential>,
    /// Sends prepared requests
    transport: Box<dyn Transport>,
}

impl std::fmt::Debug for FullContactClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullContactClient")
            .field("options", &self.options)
            .field("headers", &self.headers)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl FullContactClient {
    /// Creates a client with default options and the HTTP transport.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_options(ClientOptions::default())
    }

    /// Creates a client with the given options and the HTTP transport.
    ///
    /// The `api_key` option is not applied; call
    /// [`authenticate`](Self::authenticate) or use
    /// [`from_options`](Self::from_options).
    pub fn with_options(options: ClientOptions) -> Result<Self, ApiError> {
        Ok(Self::with_transport(options, Box::new(HttpTransport::new()?)))
    }

    /// Creates a client that sends requests through a custom transport.
    pub fn with_transport(options: ClientOptions, transport: Box<dyn Transport>) -> Self {
        let mut client = Self {
            options,
            headers: HeaderMap::new(),
            auth: None,
            transport,
        };
        client.clear_headers();
        client
    }

    /// Creates a client and authenticates with the `api_key` option when set.
    pub fn from_options(options: ClientOptions) -> Result<Self, ApiError> {
        let api_key = options.api_key.clone();
        let mut client = Self::with_options(options)?;
        if let Some(key) = api_key {
            client.authenticate(Some(&key))?;
        }
        Ok(client)
    }

    /// Creates a client from the default configuration file.
    ///
    /// See [`ClientOptions::load`].
    pub fn from_config() -> anyhow::Result<Self> {
        Ok(Self::from_options(ClientOptions::load()?)?)
    }

    /// Creates a client from a specific configuration file.
    pub fn from_config_file(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::from_options(ClientOptions::load_from(path)?)?)
    }

    /// Replaces the transport used for all further requests.
    pub fn set_transport(&mut self, transport: Box<dyn Transport>) {
        self.transport = transport;
    }

    /// Resolves an endpoint wrapper by name.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`] for names other than `person`,
    /// `company`, `card-reader`, `email`, `name` and `location`.
    pub fn resolve_endpoint(&self, name: &str) -> Result<Endpoint<'_>, ApiError> {
        let kind: EndpointKind = name.parse()?;
        Ok(Endpoint::new(kind, self))
    }

    /// Shorthand for [`resolve_endpoint`](Self::resolve_endpoint).
    pub fn api(&self, name: &str) -> Result<Endpoint<'_>, ApiError> {
        self.resolve_endpoint(name)
    }

    /// Person lookups.
    pub fn person(&self) -> Person<'_> {
        Person::new(self)
    }

    /// Company lookups.
    pub fn company(&self) -> Company<'_> {
        Company::new(self)
    }

    /// Business card transcription.
    pub fn card_reader(&self) -> CardReader<'_> {
        CardReader::new(self)
    }

    /// Email verification.
    pub fn email(&self) -> Email<'_> {
        Email::new(self)
    }

    /// Name normalization, deduction and statistics.
    pub fn name(&self) -> Name<'_> {
        Name::new(self)
    }

    /// Location normalization and enrichment.
    pub fn location(&self) -> Location<'_> {
        Location::new(self)
    }

    /// Authenticates every subsequent request with an API key.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`] when no key is given or the key cannot
    /// be sent as a header.
    pub fn authenticate(&mut self, api_key: Option<&str>) -> Result<(), ApiError> {
        let key = api_key.ok_or_else(|| {
            ApiError::InvalidArgument("You need to specify authentication method!".to_string())
        })?;

        let credential = AuthCredential::api_key(key);
        credential.apply_to_headers(&mut HeaderMap::new())?;
        self.auth = Some(credential);
        Ok(())
    }

    /// True once [`authenticate`](Self::authenticate) succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Current options.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Reads an option by name. See [`ClientOptions::get`].
    pub fn get_option(&self, name: &str) -> Result<String, ApiError> {
        self.options.get(name)
    }

    /// Changes an option by name. See [`ClientOptions::set`].
    ///
    /// Changing `api_version` or `user_agent` also refreshes the matching
    /// default header.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ApiError> {
        self.options.set(name, value)?;
        match name {
            "api_version" => {
                let accept = header_value(&self.options.accept_header())?;
                self.headers.insert(ACCEPT, accept);
            }
            "user_agent" => {
                let agent = header_value(&self.options.user_agent)?;
                self.headers.insert(USER_AGENT, agent);
            }
            _ => {}
        }
        Ok(())
    }

    /// API versions this client supports.
    pub fn supported_api_versions() -> &'static [ApiVersion] {
        &ApiVersion::SUPPORTED
    }

    /// Response formats this client supports.
    pub fn supported_formats() -> &'static [ResponseFormat] {
        &ResponseFormat::SUPPORTED
    }

    /// Effective default headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Merges headers into the defaults sent with every request.
    ///
    /// Existing values for the same names are replaced. Nothing changes if
    /// any name or value is invalid.
    pub fn set_headers(&mut self, headers: BTreeMap<String, String>) -> Result<(), ApiError> {
        let mut merged = self.headers.clone();
        for (name, value) in &headers {
            merged.insert(header_name(name)?, header_value(value)?);
        }
        self.headers = merged;
        Ok(())
    }

    /// Resets the default headers to `Accept` and `User-Agent`.
    pub fn clear_headers(&mut self) {
        self.headers.clear();
        if let Ok(accept) = HeaderValue::from_str(&self.options.accept_header()) {
            self.headers.insert(ACCEPT, accept);
        }
        match HeaderValue::from_str(&self.options.user_agent) {
            Ok(agent) => {
                self.headers.insert(USER_AGENT, agent);
            }
            Err(_) => warn!("Ignoring invalid user agent {:?}", self.options.user_agent),
        }
    }

    /// Resolves a request against the current options.
    ///
    /// GET paths get the format extension, `None` query values are skipped,
    /// per-call headers override the defaults and the API key is applied
    /// last.
    pub fn prepare(&self, spec: &RequestSpec) -> Result<PreparedRequest, ApiError> {
        let path = if spec.method() == Method::GET {
            format!("{}.{}", spec.path(), self.options.format)
        } else {
            spec.path().to_string()
        };

        let base = self.options.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}{}", base, path)).map_err(|e| {
            ApiError::InvalidArgument(format!("Invalid request URL {}{}: {}", base, path, e))
        })?;

        let pairs: Vec<(&str, &str)> = spec
            .query()
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|value| (key.as_str(), value)))
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let mut headers = self.headers.clone();
        for (name, value) in spec.headers() {
            headers.insert(header_name(name)?, header_value(value)?);
        }
        if spec.body().is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(auth) = &self.auth {
            auth.apply_to_headers(&mut headers)?;
        }

        Ok(PreparedRequest {
            method: spec.method().clone(),
            url,
            headers,
            body: spec.body().map(str::to_string),
            timeout: self.options.timeout_duration(),
        })
    }

    /// Sends a request and maps error statuses.
    ///
    /// # Errors
    ///
    /// Transport failures, and any 4xx/5xx response mapped by
    /// [`map_error_response`].
    pub async fn send(&self, spec: RequestSpec) -> Result<RawResponse, ApiError> {
        let request = self.prepare(&spec)?;
        debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;

        if response.is_error() {
            let error = map_error_response(&response, self.options.api_limit);
            warn!(status = response.status, "{}", error);
            return Err(error);
        }

        if let Some(info) = RateLimitInfo::from_response(&response) {
            debug!(
                limit = info.limit,
                remaining = info.remaining,
                reset = info.reset_seconds,
                "Rate limit status"
            );
        }

        Ok(response)
    }

    /// Sends a GET request and decodes the body.
    pub async fn get(&self, path: &str, query: QueryParams) -> Result<ResponseContent, ApiError> {
        let response = self.send(RequestSpec::get(path, query)).await?;
        Ok(decode(&response))
    }

    /// Sends a HEAD request and returns the response untouched.
    pub async fn head(&self, path: &str, query: QueryParams) -> Result<RawResponse, ApiError> {
        self.send(RequestSpec::head(path, query)).await
    }

    /// Sends a POST request with the parameters as JSON body.
    pub async fn post(&self, path: &str, parameters: &Value) -> Result<ResponseContent, ApiError> {
        self.send_json(Method::POST, path, parameters).await
    }

    /// Sends a POST request with an already serialized body.
    pub async fn post_raw(
        &self,
        path: &str,
        body: Option<String>,
    ) -> Result<ResponseContent, ApiError> {
        let response = self
            .send(RequestSpec::with_body(Method::POST, path, body))
            .await?;
        Ok(decode(&response))
    }

    /// Sends a PATCH request with the parameters as JSON body.
    pub async fn patch(&self, path: &str, parameters: &Value) -> Result<ResponseContent, ApiError> {
        self.send_json(Method::PATCH, path, parameters).await
    }

    /// Sends a PUT request with the parameters as JSON body.
    pub async fn put(&self, path: &str, parameters: &Value) -> Result<ResponseContent, ApiError> {
        self.send_json(Method::PUT, path, parameters).await
    }

    /// Sends a DELETE request with the parameters as JSON body.
    pub async fn delete(&self, path: &str, parameters: &Value) -> Result<ResponseContent, ApiError> {
        self.send_json(Method::DELETE, path, parameters).await
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        parameters: &Value,
    ) -> Result<ResponseContent, ApiError> {
        let response = self
            .send(RequestSpec::with_json(method, path, parameters))
            .await?;
        Ok(decode(&response))
    }

    /// Fetches a resource, following pagination until the last page.
    ///
    /// A response without a `results` key is returned as is. Otherwise the
    /// `results` of every page are concatenated in page order and returned
    /// as one JSON array. Pages are requested with a `page=<n>` parameter
    /// while the latest response reports `currentPage < totalPages`.
    ///
    /// # Errors
    ///
    /// Any error of [`send`](Self::send);
    /// [`ApiError::PageLimitExceeded`] when more than `max_pages` pages would
    /// be fetched; [`ApiError::Transport`] when a follow-up page is not a
    /// page or the reported page counter cannot be advanced.
    pub async fn fetch_all(
        &self,
        path: &str,
        query: QueryParams,
    ) -> Result<ResponseContent, ApiError> {
        let value = match self.get(path, query.clone()).await? {
            ResponseContent::Json(value) => value,
            raw => return Ok(raw),
        };

        let mut page = match PagedResult::from_value(value) {
            Ok(page) => page,
            Err(single) => return Ok(ResponseContent::Json(single)),
        };

        let mut results = std::mem::take(&mut page.results);
        let mut fetched: u32 = 1;

        while page.has_next() {
            let next = page.next_page().ok_or_else(|| {
                ApiError::Transport(format!(
                    "Page counter of {} cannot be advanced past {:?}",
                    path,
                    page.page_number.or(page.current_page)
                ))
            })?;

            if let Some(max_pages) = self.options.max_pages.map(NonZeroU32::get) {
                if fetched >= max_pages {
                    warn!(path, max_pages, "Pagination stopped before the last page");
                    return Err(ApiError::PageLimitExceeded(max_pages));
                }
            }

            debug!(path, page = next, total = ?page.total_pages, "Fetching next page");
            let mut page_query = query.clone();
            page_query.insert(PAGE_PARAM.to_string(), Some(next.to_string()));

            page = match self.get(path, page_query).await? {
                ResponseContent::Json(value) => PagedResult::from_value(value).map_err(|_| {
                    ApiError::Transport(format!("Page {} of {} has no results", next, path))
                })?,
                ResponseContent::Raw(_) => {
                    return Err(ApiError::Transport(format!(
                        "Page {} of {} is not JSON",
                        next, path
                    )))
                }
            };
            fetched += 1;
            results.append(&mut page.results);
        }

        Ok(ResponseContent::Json(Value::Array(results)))
    }
}

fn header_name(name: &str) -> Result<HeaderName, ApiError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ApiError::InvalidArgument(format!("Invalid header name \"{}\"", name)))
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value)
        .map_err(|_| ApiError::InvalidArgument(format!("Invalid header value \"{}\"", value)))
}
