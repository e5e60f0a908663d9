// src/web/handlers/stats_handlers.rs

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{PopularPhoto, STATUS_PAID};
use crate::state::AppState;
use crate::web::cors;

/// Methods this endpoint answers preflight for.
const ALLOWED_METHODS: &str = "GET, OPTIONS";
const TOP_PHOTOS_LIMIT: i64 = 5;

// --- Handler Implementation ---

#[instrument(name = "handler::stats", skip(app_state, req), fields(method = %req.method()))]
pub async fn stats_handler(app_state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
  let method = req.method();

  if method == Method::OPTIONS {
    return Ok(cors::preflight(ALLOWED_METHODS));
  }
  if method != Method::GET {
    return Ok(cors::method_not_allowed());
  }

  // Paid orders only; revenue is 0 (not NULL) when there are none.
  let (orders_count, total_revenue): (i64, Decimal) =
    sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(total_amount), 0) FROM orders WHERE status = $1")
      .bind(STATUS_PAID)
      .fetch_one(&app_state.db_pool)
      .await?;

  // Ties beyond the descending sold count are left in storage order.
  let popular_photos: Vec<PopularPhoto> = sqlx::query_as(
    "SELECT p.title, SUM(oi.quantity) AS sold \
     FROM order_items oi \
     JOIN photos p ON oi.photo_id = p.id \
     JOIN orders o ON oi.order_id = o.id \
     WHERE o.status = $1 \
     GROUP BY p.title \
     ORDER BY sold DESC \
     LIMIT $2",
  )
  .bind(STATUS_PAID)
  .bind(TOP_PHOTOS_LIMIT)
  .fetch_all(&app_state.db_pool)
  .await?;

  info!(
    "Stats computed: {} paid orders, revenue {}, {} best sellers.",
    orders_count,
    total_revenue,
    popular_photos.len()
  );

  Ok(HttpResponse::Ok().insert_header(cors::ALLOW_ORIGIN).json(json!({
    "total_revenue": total_revenue,
    "orders_count": orders_count,
    "popular_photos": popular_photos
  })))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn popular_photo_serializes_title_and_sold() {
    let row = PopularPhoto {
      title: "Sunrise over the bay".to_string(),
      sold: 12,
    };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value, json!({"title": "Sunrise over the bay", "sold": 12}));
  }
}
