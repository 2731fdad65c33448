use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::HeaderMap;

use crate::models::InboundRequest;

/// Builds the event API Gateway's proxy integration would have sent for
/// this request.
#[derive(Debug, Clone)]
pub struct GatewayEvent(pub InboundRequest);

impl<S> FromRequest<S> for GatewayEvent
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_string);
        let headers = req.headers().clone();
        let body = Bytes::from_request(req, state).await?;

        Ok(GatewayEvent(inbound_from_parts(
            query.as_deref(),
            &headers,
            &String::from_utf8_lossy(&body),
        )))
    }
}

/// Empty locations become `None`, as the gateway sends `null` for them.
/// Repeated query keys and headers keep their last value in the single-value
/// maps; `multiValueHeaders` keeps every header value in order.
///
/// Header names arrive here already lowercased by `http`, so a local
/// `S3_URL:` header is seen as `s3_url` and matches. API Gateway keeps the
/// client's casing, so the same request sent through the gateway does not.
pub fn inbound_from_parts(query: Option<&str>, headers: &HeaderMap, body: &str) -> InboundRequest {
    let query_string_parameters = query.filter(|q| !q.is_empty()).map(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect::<HashMap<String, String>>()
    });

    let mut single: HashMap<String, String> = HashMap::new();
    let mut multi: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            tracing::debug!(header = %name, "Skipping non-ASCII header value");
            continue;
        };
        single.insert(name.as_str().to_string(), value.to_string());
        multi
            .entry(name.as_str().to_string())
            .or_default()
            .push(value.to_string());
    }

    InboundRequest {
        query_string_parameters,
        multi_value_headers: (!multi.is_empty()).then_some(multi),
        headers: (!single.is_empty()).then_some(single),
        body: (!body.is_empty()).then(|| body.to_string()),
    }
}
