// ABOUTME: HTTP middleware for request tracing, request IDs, CORS, and timeouts
// ABOUTME: Layers are assembled once in the server and applied to every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

/// CORS configuration
pub mod cors;
/// Request IDs and request spans
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{
    create_request_span, propagate_request_id_layer, set_request_id_layer, trace_layer,
    RequestContext, UuidRequestId, REQUEST_ID_HEADER,
};
