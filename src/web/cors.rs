// src/web/cors.rs

//! CORS response helpers shared by the API handlers.
//!
//! Every non-preflight response carries [`ALLOW_ORIGIN`]; preflight responses
//! additionally enumerate the allowed methods and cache for 24 hours.

use actix_web::HttpResponse;
use serde_json::json;

pub const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

/// Answers an OPTIONS preflight: 200, empty body, 24-hour cache.
pub fn preflight(allowed_methods: &'static str) -> HttpResponse {
  HttpResponse::Ok()
    .insert_header(ALLOW_ORIGIN)
    .insert_header(("Access-Control-Allow-Methods", allowed_methods))
    .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
    .insert_header(("Access-Control-Max-Age", "86400"))
    .finish()
}

/// The one explicitly reported error shape: 405 for unsupported methods.
pub fn method_not_allowed() -> HttpResponse {
  HttpResponse::MethodNotAllowed()
    .insert_header(ALLOW_ORIGIN)
    .json(json!({"error": "Method not allowed"}))
}
