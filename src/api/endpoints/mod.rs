//
//  fullcontact-client
//  api/endpoints/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # FullContact Endpoints
//!
//! One thin wrapper per API area. Each wrapper borrows the
//! [`FullContactClient`] it was obtained from and turns its typed arguments
//! into a query, then fetches every page through
//! [`FullContactClient::fetch_all`].
//!
//! | Name | Wrapper | Base path |
//! |------|---------|-----------|
//! | `person` | [`Person`] | `/person` |
//! | `company` | [`Company`] | `/company/lookup` |
//! | `card-reader` | [`CardReader`] | `/cardReader` |
//! | `email` | [`Email`] | `/email/disposable` |
//! | `name` | [`Name`] | `/name/*` |
//! | `location` | [`Location`] | `/address/*` |
//!
//! Every method takes an extra `options` map. Its entries are merged after
//! the required parameters, so an option with the same key replaces the
//! required value.

mod card_reader;
mod company;
mod email;
mod location;
mod name;
mod person;

pub use card_reader::CardReader;
pub use company::Company;
pub use email::Email;
pub use location::Location;
pub use name::Name;
pub use person::Person;

use std::fmt;
use std::str::FromStr;

use super::client::FullContactClient;
use super::common::{ApiError, QueryParams};

/// Names accepted by [`FullContactClient::resolve_endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Person,
    Company,
    CardReader,
    Email,
    Name,
    Location,
}

impl EndpointKind {
    /// Every endpoint, in lookup order.
    pub const ALL: [EndpointKind; 6] = [
        EndpointKind::Person,
        EndpointKind::Company,
        EndpointKind::CardReader,
        EndpointKind::Email,
        EndpointKind::Name,
        EndpointKind::Location,
    ];

    /// Lookup name of the endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Company => "company",
            Self::CardReader => "card-reader",
            Self::Email => "email",
            Self::Name => "name",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                ApiError::InvalidArgument(format!(
                    "Undefined api instance called: \"{}\"",
                    s
                ))
            })
    }
}

/// An endpoint wrapper resolved by name.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    Person(Person<'a>),
    Company(Company<'a>),
    CardReader(CardReader<'a>),
    Email(Email<'a>),
    Name(Name<'a>),
    Location(Location<'a>),
}

impl<'a> Endpoint<'a> {
    pub(crate) fn new(kind: EndpointKind, client: &'a FullContactClient) -> Self {
        match kind {
            EndpointKind::Person => Self::Person(Person::new(client)),
            EndpointKind::Company => Self::Company(Company::new(client)),
            EndpointKind::CardReader => Self::CardReader(CardReader::new(client)),
            EndpointKind::Email => Self::Email(Email::new(client)),
            EndpointKind::Name => Self::Name(Name::new(client)),
            EndpointKind::Location => Self::Location(Location::new(client)),
        }
    }

    /// Which endpoint this is.
    pub fn kind(&self) -> EndpointKind {
        match self {
            Self::Person(_) => EndpointKind::Person,
            Self::Company(_) => EndpointKind::Company,
            Self::CardReader(_) => EndpointKind::CardReader,
            Self::Email(_) => EndpointKind::Email,
            Self::Name(_) => EndpointKind::Name,
            Self::Location(_) => EndpointKind::Location,
        }
    }
}

/// Builds the query of an endpoint call.
///
/// Required parameters go in first, then `options`; on a key collision the
/// option wins.
///
/// # Example
///
/// ```rust
/// use fullcontact_client::api::common::QueryParams;
/// use fullcontact_client::api::endpoints::merge_params;
///
/// let mut options = QueryParams::new();
/// options.insert("style".to_string(), Some("dictionary".to_string()));
/// options.insert("email".to_string(), Some("other@example.com".to_string()));
///
/// let query = merge_params([("email", "bart@fullcontact.com")], options);
/// assert_eq!(query["email"].as_deref(), Some("other@example.com"));
/// assert_eq!(query["style"].as_deref(), Some("dictionary"));
/// ```
pub fn merge_params<const N: usize>(
    required: [(&str, &str); N],
    options: QueryParams,
) -> QueryParams {
    let mut query: QueryParams = required
        .into_iter()
        .map(|(key, value)| (key.to_string(), Some(value.to_string())))
        .collect();
    query.extend(options);
    query
}
