use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::models::{InboundRequest, ADDRESS_FIELD};

/// Separator placed between the values of a repeated address header.
pub const MULTI_VALUE_SEPARATOR: &str = " and ";

/// Request location an address may be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSource {
    QueryString,
    MultiValueHeaders,
    Headers,
    Body,
}

impl fmt::Display for AddressSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueryString => write!(f, "queryStringParameters"),
            Self::MultiValueHeaders => write!(f, "multiValueHeaders"),
            Self::Headers => write!(f, "headers"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// Reads one source; `None` covers both a missing source and a missing field.
pub type Lookup = fn(&InboundRequest) -> Result<Option<String>>;

/// Sources in application order. Later entries overwrite earlier ones.
pub const ADDRESS_SOURCES: [(AddressSource, Lookup); 4] = [
    (AddressSource::QueryString, from_query),
    (AddressSource::MultiValueHeaders, from_multi_value_headers),
    (AddressSource::Headers, from_headers),
    (AddressSource::Body, from_body),
];

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn from_query(request: &InboundRequest) -> Result<Option<String>> {
    Ok(request
        .query_string_parameters
        .as_ref()
        .and_then(|params| params.get(ADDRESS_FIELD))
        .and_then(|value| non_empty(value)))
}

fn from_multi_value_headers(request: &InboundRequest) -> Result<Option<String>> {
    Ok(request
        .multi_value_headers
        .as_ref()
        .and_then(|headers| headers.get(ADDRESS_FIELD))
        .filter(|values| !values.is_empty())
        .map(|values| values.join(MULTI_VALUE_SEPARATOR)))
}

fn from_headers(request: &InboundRequest) -> Result<Option<String>> {
    Ok(request
        .headers
        .as_ref()
        .and_then(|headers| headers.get(ADDRESS_FIELD))
        .and_then(|value| non_empty(value)))
}

/// The only lookup that can fail: a non-empty body must be valid JSON.
/// Anything short of a non-empty string field is a miss.
fn from_body(request: &InboundRequest) -> Result<Option<String>> {
    let Some(body) = request.body.as_deref().filter(|b| !b.is_empty()) else {
        return Ok(None);
    };

    let parsed: Value = serde_json::from_str(body)?;
    Ok(parsed
        .get(ADDRESS_FIELD)
        .and_then(Value::as_str)
        .and_then(non_empty))
}

/// Resolve the object address, starting from `placeholder` and letting every
/// present source overwrite the running value.
pub fn resolve_address(request: &InboundRequest, placeholder: &str) -> Result<String> {
    resolve_with(&ADDRESS_SOURCES, request, placeholder)
}

pub fn resolve_with(
    sources: &[(AddressSource, Lookup)],
    request: &InboundRequest,
    placeholder: &str,
) -> Result<String> {
    sources
        .iter()
        .try_fold(placeholder.to_string(), |current, (source, lookup)| {
            match lookup(request)? {
                Some(address) => {
                    debug!(%source, %address, "Address found");
                    Ok(address)
                }
                None => {
                    debug!(%source, "No url");
                    Ok(current)
                }
            }
        })
}
