//
//  fullcontact-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Transport
//!
//! This module describes requests and responses at the HTTP level and the
//! [`Transport`] seam that actually puts them on the wire.
//!
//! ## Request lifecycle
//!
//! 1. An endpoint or a facade helper builds a [`RequestSpec`]: method, relative
//!    path, query parameters, optional JSON body and per-call headers.
//! 2. The [`FullContactClient`](super::FullContactClient) resolves it against the
//!    current options into a [`PreparedRequest`] (absolute URL, merged headers,
//!    API key, timeout).
//! 3. A [`Transport`] sends the prepared request and hands back a
//!    [`RawResponse`]. [`HttpTransport`] is the reqwest-backed default.
//!
//! The transport never inspects status codes: mapping error responses is the
//! facade's job.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use url::Url;

use super::common::{ApiError, QueryParams};

/// Query parameter that callers may pass as `None` to mean "not set".
const REF_PARAM: &str = "ref";

/// Logical description of one API request.
///
/// A spec is immutable once built; use the constructors and
/// [`with_headers`](Self::with_headers) to assemble it.
///
/// # Example
///
/// ```rust
/// use fullcontact_client::api::transport::RequestSpec;
/// use fullcontact_client::api::common::QueryParams;
///
/// let mut query = QueryParams::new();
/// query.insert("email".to_string(), Some("bart@fullcontact.com".to_string()));
/// query.insert("ref".to_string(), None);
///
/// let spec = RequestSpec::get("/person", query);
/// assert!(!spec.query().contains_key("ref"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: QueryParams,
    body: Option<String>,
    headers: BTreeMap<String, String>,
}

impl RequestSpec {
    /// Builds a GET request. A `ref` parameter without a value is dropped.
    pub fn get(path: impl Into<String>, query: QueryParams) -> Self {
        Self::with_query(Method::GET, path, query)
    }

    /// Builds a HEAD request. A `ref` parameter without a value is dropped.
    pub fn head(path: impl Into<String>, query: QueryParams) -> Self {
        Self::with_query(Method::HEAD, path, query)
    }

    /// Builds a request carrying an already serialized body.
    pub fn with_body(method: Method, path: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body,
            headers: BTreeMap::new(),
        }
    }

    /// Builds a POST/PATCH/PUT/DELETE request whose body is the JSON encoding
    /// of `parameters` (see [`create_json_body`]).
    pub fn with_json(method: Method, path: impl Into<String>, parameters: &Value) -> Self {
        Self::with_body(method, path, create_json_body(parameters))
    }

    /// Adds per-call headers. They win over the client's default headers.
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    fn with_query(method: Method, path: impl Into<String>, mut query: QueryParams) -> Self {
        if matches!(query.get(REF_PARAM), Some(None)) {
            query.remove(REF_PARAM);
        }
        Self {
            method,
            path: path.into(),
            query,
            body: None,
            headers: BTreeMap::new(),
        }
    }

    /// HTTP method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the configured base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Serialized JSON body, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Per-call headers.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

/// Encodes request parameters as a JSON body.
///
/// Empty parameters (`null`, `{}` or `[]`) produce no body at all. Anything
/// else is sent as a JSON object: arrays and scalars are keyed by position so
/// the API never receives a top-level array.
///
/// # Example
///
/// ```rust
/// use fullcontact_client::api::transport::create_json_body;
/// use serde_json::json;
///
/// assert_eq!(create_json_body(&json!({})), None);
/// assert_eq!(create_json_body(&json!([])), None);
/// assert_eq!(create_json_body(&json!({"a": 1})), Some(r#"{"a":1}"#.to_string()));
/// assert_eq!(create_json_body(&json!([1])), Some(r#"{"0":1}"#.to_string()));
/// ```
pub fn create_json_body(parameters: &Value) -> Option<String> {
    match parameters {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(_) => Some(parameters.to_string()),
        Value::Array(items) => Some(indexed_object(items.iter()).to_string()),
        scalar => Some(indexed_object(std::iter::once(scalar)).to_string()),
    }
}

fn indexed_object<'a>(items: impl Iterator<Item = &'a Value>) -> Value {
    let map: Map<String, Value> = items
        .enumerate()
        .map(|(index, value)| (index.to_string(), value.clone()))
        .collect();
    Value::Object(map)
}

/// Fully resolved request, ready for the wire.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the serialized query string
    pub url: Url,
    /// Merged default, per-call and authentication headers
    pub headers: HeaderMap,
    /// Serialized JSON body
    pub body: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl PreparedRequest {
    /// Returns the first value of a header as text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Response exactly as received from the server.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers; a name may carry several values
    pub headers: HeaderMap,
    /// Undecoded body
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response with no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Appends a header. Names or values that are not valid HTTP are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Returns the first value of a header as text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns every value of a header, in the order received.
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    /// Parses a header as an integer. Missing or non-numeric yields `None`.
    pub fn header_i64(&self, name: &str) -> Option<i64> {
        self.header(name).and_then(|v| v.trim().parse().ok())
    }

    /// True for 4xx and 5xx statuses.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends prepared requests.
///
/// Implementations only move bytes: they must not retry, throttle or map
/// status codes. Any status, including 4xx/5xx, is returned as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the response as received.
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError>;
}

/// The default [`Transport`], backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Creates a transport with its own connection pool.
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
                .build()?,
        })
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;

        let mut builder = self
            .http
            .request(method, url)
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Requests seen by a [`ScriptedTransport`].
    pub(crate) type RequestLog = Arc<Mutex<Vec<PreparedRequest>>>;

    /// Answers requests from a fixed queue of responses.
    pub(crate) struct ScriptedTransport {
        responses: Mutex<VecDeque<RawResponse>>,
        log: RequestLog,
    }

    impl ScriptedTransport {
        pub(crate) fn new(responses: Vec<RawResponse>) -> (Self, RequestLog) {
            let log = RequestLog::default();
            let transport = Self {
                responses: Mutex::new(responses.into()),
                log: log.clone(),
            };
            (transport, log)
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
            self.log.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| ApiError::Transport("no scripted response left".to_string()))
        }
    }

    pub(crate) fn json_response(status: u16, body: Value) -> RawResponse {
        RawResponse::new(status, body.to_string()).with_header("Content-Type", "application/json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn prepared(method: Method, url: &str) -> PreparedRequest {
        PreparedRequest {
            method,
            url: Url::parse(url).unwrap(),
            headers: HeaderMap::new(),
            body: None,
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_get_drops_null_ref() {
        let mut query = QueryParams::new();
        query.insert("ref".to_string(), None);
        query.insert("email".to_string(), Some("a@b.com".to_string()));

        let spec = RequestSpec::get("/person", query);
        assert!(!spec.query().contains_key("ref"));
        assert!(spec.query().contains_key("email"));
    }

    #[test]
    fn test_get_keeps_ref_with_value() {
        let mut query = QueryParams::new();
        query.insert("ref".to_string(), Some("main".to_string()));

        let spec = RequestSpec::head("/person", query);
        assert_eq!(spec.query().get("ref"), Some(&Some("main".to_string())));
        assert_eq!(spec.method(), &Method::HEAD);
    }

    #[test]
    fn test_create_json_body() {
        assert_eq!(create_json_body(&Value::Null), None);
        assert_eq!(create_json_body(&json!({})), None);
        assert_eq!(create_json_body(&json!([])), None);
        assert_eq!(
            create_json_body(&json!({"a": 1})),
            Some(r#"{"a":1}"#.to_string())
        );
        assert_eq!(
            create_json_body(&json!(["x", "y"])),
            Some(r#"{"0":"x","1":"y"}"#.to_string())
        );
    }

    #[test]
    fn test_with_json_spec() {
        let spec = RequestSpec::with_json(Method::POST, "/cardReader", &json!({}));
        assert_eq!(spec.body(), None);

        let spec = RequestSpec::with_json(Method::PUT, "/cardReader", &json!({"id": "1"}));
        assert_eq!(spec.body(), Some(r#"{"id":"1"}"#));
    }

    #[test]
    fn test_raw_response_headers() {
        let response = RawResponse::new(403, "")
            .with_header("X-Rate-Limit-Limit", "0")
            .with_header("Set-Cookie", "a=1")
            .with_header("Set-Cookie", "b=2")
            .with_header("X-Rate-Limit-Reset", "soon");

        assert!(response.is_error());
        assert_eq!(response.header_i64("x-rate-limit-limit"), Some(0));
        assert_eq!(response.header_i64("X-Rate-Limit-Reset"), None);
        assert_eq!(response.header_values("set-cookie"), vec!["a=1", "b=2"]);
    }

    #[tokio::test]
    async fn test_http_transport_sends_headers_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/cardReader")
            .match_header("x-fullcontact-apikey", "secret")
            .match_body(Matcher::Json(json!({"webhookUrl": "https://hook"})))
            .with_status(202)
            .with_header("X-Rate-Limit-Remaining", "59")
            .with_body(r#"{"status":202}"#)
            .create_async()
            .await;

        let mut request = prepared(Method::POST, &format!("{}/cardReader", server.url()));
        request
            .headers
            .insert(HeaderName::from_static("x-fullcontact-apikey"), HeaderValue::from_static("secret"));
        request.body = Some(r#"{"webhookUrl":"https://hook"}"#.to_string());

        let transport = HttpTransport::new().unwrap();
        let response = transport.send(request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 202);
        assert_eq!(response.header("x-rate-limit-remaining"), Some("59"));
        assert_eq!(response.text(), r#"{"status":202}"#);
    }

    #[tokio::test]
    async fn test_http_transport_returns_error_statuses() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/person.json")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_header("reasonCode", "NotFound")
            .create_async()
            .await;

        let transport = HttpTransport::new().unwrap();
        let response = transport
            .send(prepared(Method::GET, &format!("{}/person.json", server.url())))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 404);
        assert_eq!(response.header("reasoncode"), Some("NotFound"));
    }
}
