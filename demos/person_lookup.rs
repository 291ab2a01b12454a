//
//  fullcontact-client
//  demos/person_lookup.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Looks up a person by email address and prints the profile.
//!
//! ```text
//! FULLCONTACT_API_KEY=... cargo run --example person_lookup -- bart@fullcontact.com
//! FULLCONTACT_DEBUG=debug cargo run --example person_lookup -- bart@fullcontact.com
//! ```
//!
//! Without `FULLCONTACT_API_KEY` the `api_key` of the configuration file is
//! used.

use anyhow::{bail, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fullcontact_client::api::common::QueryParams;
use fullcontact_client::{ApiError, FullContactClient};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let Some(email) = std::env::args().nth(1) else {
        bail!("usage: person_lookup <email>");
    };

    let mut client = FullContactClient::from_config()?;
    if let Ok(key) = std::env::var("FULLCONTACT_API_KEY") {
        client.authenticate(Some(&key))?;
    }
    if !client.is_authenticated() {
        bail!("no API key: set FULLCONTACT_API_KEY or api_key in the config file");
    }

    match client.person().lookup_by_email(&email, QueryParams::new()).await {
        Ok(profile) => println!("{}", profile),
        Err(ApiError::ResourceNotFound(reason)) => println!("No profile for {} ({})", email, reason),
        Err(ApiError::RateLimitExceeded {
            message,
            reset_seconds,
        }) => {
            eprintln!("Rate limited: {}", message);
            if let Some(reset) = reset_seconds {
                eprintln!("Try again in {}s", reset);
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("FULLCONTACT_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
