use std::collections::HashMap;

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Field name carrying the object address in every request location.
pub const ADDRESS_FIELD: &str = "s3_url";

/// The subset of an API Gateway proxy event this function reads.
///
/// Every location is optional. A location whose JSON shape does not match
/// (for example `headers` arriving as an array) is dropped to `None` instead
/// of failing the whole event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub multi_value_headers: Option<HashMap<String, Vec<String>>>,
    #[serde(default, deserialize_with = "lenient")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed request location");
            None
        }
    }))
}

impl InboundRequest {
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_multi_value_header(mut self, key: &str, values: &[&str]) -> Self {
        self.multi_value_headers
            .get_or_insert_with(HashMap::new)
            .insert(
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            );
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
