//! AWS Lambda entry point.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::info;

use crate::handler::RequestHandler;
use crate::models::{HttpResponse, InboundRequest};

/// Handle one invocation. Input errors surface as a failed invocation so the
/// gateway answers with its own error response.
pub async fn function_handler(
    event: LambdaEvent<InboundRequest>,
    handler: &RequestHandler,
) -> Result<HttpResponse, Error> {
    let (request, context) = event.into_parts();
    info!(request_id = %context.request_id, "Invocation received");

    Ok(handler.handle(&request).await?)
}

pub async fn run(handler: RequestHandler) -> Result<(), Error> {
    lambda_runtime::run(service_fn(|event| function_handler(event, &handler))).await
}
