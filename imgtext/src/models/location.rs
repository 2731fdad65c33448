use std::fmt;

use url::Url;

use crate::error::{ImgtextError, Result};

/// Bucket and key of an object referenced by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Split a virtual-hosted-style object URL into bucket and key.
    ///
    /// The bucket is the host up to its first `.`. The key is the path exactly
    /// as written in `address`, with a single leading `/` removed: no
    /// percent-decoding and no dot-segment removal. The scheme is not checked
    /// and the object is not looked up.
    pub fn parse(address: &str) -> Result<Self> {
        let url = Url::parse(address)?;

        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ImgtextError::MissingBucket(address.to_string()))?;
        let bucket = host.split('.').next().unwrap_or(host);

        let path = raw_path(address, url.scheme().len());
        let key = path.strip_prefix('/').unwrap_or(&path);

        Ok(Self::new(bucket, key))
    }
}

/// Path component of `address` as written: after the scheme and authority,
/// before any `?` or `#`. Surrounding whitespace and embedded tabs or
/// newlines are dropped the same way the URL parser drops them.
fn raw_path(address: &str, scheme_len: usize) -> String {
    let cleaned: String = address
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();

    let rest = cleaned.get(scheme_len + 1..).unwrap_or_default();
    let rest = match rest.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find(['/', '?', '#'])
            .map_or("", |end| &authority_and_path[end..]),
        None => rest,
    };

    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    rest[..end].to_string()
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}
