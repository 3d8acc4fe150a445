// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs, creates one span per HTTP request, and records status and latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::FromRequestParts;
use http::request::Parts;
use http::{HeaderMap, HeaderName, HeaderValue, Request, Response};
use std::convert::Infallible;
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::{DefaultOnRequest, TraceLayer};
use tracing::field::Empty;
use tracing::{info, info_span, Span};
use uuid::Uuid;

/// Header carrying the request ID in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn new_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// Generates `req_<uuid>` IDs for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&new_request_id()).ok().map(RequestId::new)
    }
}

/// Assign a request ID unless the caller sent one
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<UuidRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), UuidRequestId)
}

/// Copy the request ID onto the response
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}

/// Request context that flows through a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Correlation ID from `x-request-id`
    pub request_id: String,
}

impl RequestContext {
    /// Read the context from request headers, generating an ID if absent
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map_or_else(new_request_id, str::to_owned);
        Self { request_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Create a tracing span for an HTTP request
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = Empty,
        duration_ms = Empty,
    )
}

fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let status = response.status().as_u16();
    let duration_ms = latency.as_millis() as u64;
    span.record("status_code", status);
    span.record("duration_ms", duration_ms);
    info!(status, duration_ms, "Request completed");
}

/// Span-producing function used by [`trace_layer`]
pub type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Response hook used by [`trace_layer`]
pub type RecordResponse = fn(&Response<Body>, Duration, &Span);

/// `TraceLayer` configured with the planner's span and response hooks
pub type PlannerTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan, DefaultOnRequest, RecordResponse>;

/// Build the HTTP trace layer
#[must_use]
pub fn trace_layer() -> PlannerTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(create_request_span as MakeRequestSpan)
        .on_response(record_response as RecordResponse)
}
