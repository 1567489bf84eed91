//! Gateway namespace: HTTP and stdio entrypoints.

mod http;
mod stdio;

pub use http::{
    AskRequest, GatewayState, HealthResponse, RewriteRequest, SearchParams, SearchResponse,
    TrendingResponse, router, run_http, validate_rewrite_request,
};
pub use stdio::run_stdio;
