//! HTTP metrics middleware for recording request/response metrics

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::infrastructure::observability::PrometheusMetrics;

/// Record count and latency once per request, after the final status is known
pub async fn metrics_middleware(
    State(metrics): State<PrometheusMetrics>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let endpoint = extract_endpoint(&request);

    let response = next.run(request).await;

    metrics.record_http_request(
        method.as_str(),
        &endpoint,
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}

fn extract_endpoint(request: &Request<Body>) -> String {
    // Route pattern keeps label cardinality bounded
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}
