// src/web/handlers/order_handlers.rs

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{OrderItem, OrderSummary, STATUS_PAID};
use crate::state::AppState;
use crate::web::cors;

/// Methods this endpoint answers preflight for.
const ALLOWED_METHODS: &str = "POST, GET, OPTIONS";
const RECENT_ORDERS_LIMIT: i64 = 50;

// --- Request DTO ---
// Both fields default so an empty body still produces a (zero-item) order.
#[derive(Deserialize, Debug, Default)]
pub struct CreateOrderRequest {
  #[serde(default)]
  pub items: Vec<OrderItem>,
  #[serde(default)]
  pub email: String,
}

// --- Handler Implementation ---

#[instrument(name = "handler::orders", skip(app_state, req, body), fields(method = %req.method()))]
pub async fn orders_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let method = req.method();

  if method == Method::OPTIONS {
    return Ok(cors::preflight(ALLOWED_METHODS));
  }
  if method == Method::POST {
    let payload: CreateOrderRequest = if body.is_empty() {
      CreateOrderRequest::default()
    } else {
      serde_json::from_slice(&body)?
    };
    return create_order(&app_state, payload).await;
  }
  if method == Method::GET {
    return list_recent_orders(&app_state).await;
  }

  Ok(cors::method_not_allowed())
}

/// Persists one order row plus one row per submitted line item. The order
/// and its items commit or roll back together.
async fn create_order(app_state: &AppState, payload: CreateOrderRequest) -> Result<HttpResponse, AppError> {
  let total: Decimal = payload.items.iter().map(|item| item.line_total()).sum();
  info!(
    "Creating order for '{}' with {} items, total {}.",
    payload.email,
    payload.items.len(),
    total
  );

  let mut tx = app_state.db_pool.begin().await?;

  let (order_id,): (i64,) =
    sqlx::query_as("INSERT INTO orders (customer_email, total_amount, status) VALUES ($1, $2, $3) RETURNING id")
      .bind(&payload.email)
      .bind(total)
      .bind(STATUS_PAID)
      .fetch_one(&mut *tx)
      .await?;

  for item in &payload.items {
    sqlx::query("INSERT INTO order_items (order_id, photo_id, quantity, price) VALUES ($1, $2, $3, $4)")
      .bind(order_id)
      .bind(item.photo_id)
      .bind(item.quantity)
      .bind(item.price)
      .execute(&mut *tx)
      .await?;
  }

  tx.commit().await?;
  info!("Order {} created.", order_id);

  Ok(HttpResponse::Ok().insert_header(cors::ALLOW_ORIGIN).json(json!({
    "order_id": order_id,
    "total": total,
    "status": "success"
  })))
}

/// The 50 most recent orders, newest first, each with its line-item count.
async fn list_recent_orders(app_state: &AppState) -> Result<HttpResponse, AppError> {
  let orders: Vec<OrderSummary> = sqlx::query_as(
    "SELECT o.id, o.customer_email, o.total_amount, o.status, o.created_at, \
            COUNT(oi.id) AS items_count \
     FROM orders o \
     LEFT JOIN order_items oi ON o.id = oi.order_id \
     GROUP BY o.id \
     ORDER BY o.created_at DESC \
     LIMIT $1",
  )
  .bind(RECENT_ORDERS_LIMIT)
  .fetch_all(&app_state.db_pool)
  .await?;

  info!("Fetched {} recent orders.", orders.len());

  Ok(HttpResponse::Ok().insert_header(cors::ALLOW_ORIGIN).json(orders))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn create_order_request_defaults_missing_fields() {
    let payload: CreateOrderRequest = serde_json::from_str("{}").unwrap();
    assert!(payload.items.is_empty());
    assert_eq!(payload.email, "");
  }

  #[test]
  fn create_order_request_parses_items_and_email() {
    let raw = r#"{"items":[{"photo_id":1,"quantity":2,"price":10.0}],"email":"a@b.com"}"#;
    let payload: CreateOrderRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(payload.items.len(), 1);
    assert_eq!(payload.email, "a@b.com");

    let total: Decimal = payload.items.iter().map(|item| item.line_total()).sum();
    assert_eq!(total, "20.0".parse::<Decimal>().unwrap());
  }
}
