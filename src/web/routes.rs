// src/web/routes.rs

use actix_web::web;

use super::handlers::{order_handlers, stats_handlers};

// Liveness probe; no DB round trip.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Order and stats endpoints take every method; dispatch (incl. OPTIONS
      // preflight and the 405 fallback) happens inside the handlers.
      .service(web::resource("/orders").route(web::route().to(order_handlers::orders_handler)))
      .service(web::resource("/stats").route(web::route().to(stats_handlers::stats_handler))),
  );
}
