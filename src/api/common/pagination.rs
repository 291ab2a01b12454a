//
//  fullcontact-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for FullContact API Responses
//!
//! Multi-page endpoints answer with a JSON envelope:
//!
//! ```json
//! {"results": [...], "currentPage": 1, "totalPages": 3}
//! ```
//!
//! Later pages are requested by repeating the request with a `page=<n>` query
//! parameter. [`PagedResult`] reads that envelope; the loop itself lives in
//! [`FullContactClient::fetch_all`](crate::api::FullContactClient::fetch_all).
//!
//! Some responses also advertise navigation links in a `page` header using
//! the RFC 5988 `Link` syntax. [`parse_page_header`] turns that header into a
//! map from relation name to URL.
//!
//! # Notes
//!
//! - Page numbers are 1-indexed
//! - Page counters may be sent as numbers or numeric strings

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Matches one `<url>; rel="name"` token of a link header.
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<(.*)>;\s*rel="(.*)""#).unwrap());

/// One page of a multi-page response.
///
/// # Example
///
/// ```rust
/// use fullcontact_client::api::common::PagedResult;
/// use serde_json::json;
///
/// let page = PagedResult::from_value(json!({
///     "results": [1, 2],
///     "currentPage": 1,
///     "totalPages": 2
/// }))
/// .unwrap();
///
/// assert_eq!(page.results, vec![json!(1), json!(2)]);
/// assert_eq!(page.next_page(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult {
    /// Items of this page, in server order.
    #[serde(default, deserialize_with = "results_list")]
    pub results: Vec<Value>,

    /// Page this response holds, as reported by the server.
    #[serde(default, deserialize_with = "page_counter")]
    pub current_page: Option<u64>,

    /// Total number of pages, as reported by the server.
    #[serde(default, deserialize_with = "page_counter")]
    pub total_pages: Option<u64>,

    /// Page counter some endpoints send alongside `currentPage`.
    #[serde(default, deserialize_with = "page_counter")]
    pub page_number: Option<u64>,
}

impl PagedResult {
    /// Reads the pagination envelope out of a decoded response.
    ///
    /// Returns the value unchanged as `Err` when it has no `results` key,
    /// meaning the response is a single resource rather than a page. A
    /// `results` value that is not an array counts as a one-item page.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        if value.get("results").is_none() {
            return Err(value);
        }
        match Self::deserialize(&value) {
            Ok(page) => Ok(page),
            Err(_) => Err(value),
        }
    }

    /// True when the server reports pages beyond this one.
    ///
    /// Both `currentPage` and `totalPages` must be present.
    pub fn has_next(&self) -> bool {
        matches!(
            (self.current_page, self.total_pages),
            (Some(current), Some(total)) if current < total
        )
    }

    /// Number of the page to request next, if any.
    ///
    /// Counts from `pageNumber` when the server sends it, otherwise from
    /// `currentPage`. `None` when there is no next page or the counter
    /// cannot be incremented.
    pub fn next_page(&self) -> Option<u64> {
        if !self.has_next() {
            return None;
        }
        self.page_number
            .or(self.current_page)
            .and_then(|page| page.checked_add(1))
    }
}

// Counters may arrive as numbers or numeric strings; anything else reads as absent.
fn page_counter<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn results_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    })
}

/// Parses a `page` header of comma-separated `<url>; rel="name"` tokens.
///
/// Tokens that do not follow the syntax are skipped. When a relation occurs
/// twice the last URL wins.
///
/// # Example
///
/// ```rust
/// use fullcontact_client::api::common::parse_page_header;
///
/// let links = parse_page_header(
///     r#"<https://api.fullcontact.com/person.json?page=2>; rel="next", <https://api.fullcontact.com/person.json?page=5>; rel="last""#,
/// );
/// assert_eq!(links["next"], "https://api.fullcontact.com/person.json?page=2");
/// assert_eq!(links["last"], "https://api.fullcontact.com/person.json?page=5");
/// ```
pub fn parse_page_header(header: &str) -> BTreeMap<String, String> {
    header
        .split(',')
        .filter_map(|link| {
            let captures = LINK_PATTERN.captures(link.trim())?;
            Some((captures[2].to_string(), captures[1].to_string()))
        })
        .collect()
}
