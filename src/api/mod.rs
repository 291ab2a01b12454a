//
//  fullcontact-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the FullContact REST API.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: The [`FullContactClient`] facade: options, headers,
//!   authentication, error mapping and pagination
//! - [`endpoints`]: One wrapper per API area (person, company, name, ...)
//! - [`transport`]: Request/response types and the [`Transport`](transport::Transport)
//!   seam that sends them
//! - [`common`]: Shared types (errors, decoded content, pagination)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fullcontact_client::api::FullContactClient;
//! use fullcontact_client::api::common::QueryParams;
//!
//! # async fn example() -> Result<(), fullcontact_client::api::ApiError> {
//! let mut client = FullContactClient::new()?;
//! client.authenticate(Some("your-api-key"))?;
//!
//! let company = client
//!     .company()
//!     .lookup_by_domain("fullcontact.com", QueryParams::new())
//!     .await?;
//! println!("{}", company);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! API errors are returned as [`ApiError`] variants:
//!
//! - `RateLimitExceeded`: 403 with an exhausted absolute or per-second quota
//! - `ResourceNotFound`: 404 carrying a `reasonCode` header
//! - `Api`: any other 4xx/5xx, with the server's message
//! - `InvalidArgument`: bad option, unknown endpoint or missing API key
//! - `Network` / `Transport`: failures below the HTTP layer

/// The client facade.
pub mod client;

/// Shared types used across the API layer.
pub mod common;

/// Endpoint wrappers.
pub mod endpoints;

/// Request/response types and the transport seam.
pub mod transport;

pub use client::FullContactClient;
pub use common::{ApiError, ResponseContent};
