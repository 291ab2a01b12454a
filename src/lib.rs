//
//  fullcontact-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # FullContact Client Library
//!
//! An async client for the FullContact REST API: person, company, name,
//! location, email and business card lookups.
//!
//! ## Overview
//!
//! Every endpoint call goes through the same pipeline in
//! [`FullContactClient`]: the request is built from the client options,
//! the default headers and the API key are attached, the response is
//! decoded, multi-page results are merged and error responses become
//! [`ApiError`] values.
//!
//! ## Module Structure
//!
//! - [`api`]: The client facade, endpoint wrappers and transport
//! - [`auth`]: API key handling
//! - [`config`]: Client options and the configuration file
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fullcontact_client::FullContactClient;
//! use fullcontact_client::api::common::QueryParams;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Reads ~/.config/fullcontact/config.toml and applies its api_key
//! let client = FullContactClient::from_config()?;
//!
//! let person = client
//!     .person()
//!     .lookup_by_email("bart@fullcontact.com", QueryParams::new())
//!     .await?;
//! println!("{}", person);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (requests and pages at `debug`,
//! mapped errors at `warn`) and never installs a subscriber itself.

/// API client, endpoint wrappers and transport.
pub mod api;

/// API key handling.
///
/// Holds the credential applied to every request of an authenticated client.
pub mod auth;

/// Client options.
///
/// Named, validated options and their TOML file stored in platform-specific
/// locations:
/// - Linux: `~/.config/fullcontact/config.toml`
/// - macOS: `~/Library/Application Support/fullcontact/config.toml`
/// - Windows: `%APPDATA%\fullcontact\config.toml`
pub mod config;

/// Re-export of the client facade.
pub use api::FullContactClient;

/// Re-export of the error and content types returned by every call.
pub use api::{ApiError, ResponseContent};

/// Re-export of the client options.
pub use config::ClientOptions;

/// Library name constant.
///
/// Used in the default `User-Agent` and the configuration directory.
///
/// # Value
///
/// `"fullcontact-client"`
pub const NAME: &str = "fullcontact-client";

/// Library version constant.
///
/// Derived from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use fullcontact_client::VERSION;
///
/// println!("fullcontact-client {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
