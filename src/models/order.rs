// src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Status recorded on every order this system creates. Orders are
/// append-only; the status is never updated afterwards.
pub const STATUS_PAID: &str = "paid";

/// Row shape of the recent-orders listing: one order plus the count of its
/// line items (zero-item orders appear with a count of 0).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderSummary {
  pub id: i64,
  #[serde(rename = "email")]
  pub customer_email: String,
  #[serde(rename = "total")]
  pub total_amount: Decimal,
  pub status: String,
  #[serde(rename = "date")]
  pub created_at: DateTime<Utc>,
  pub items_count: i64,
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn serializes_with_wire_field_names() {
    let row = OrderSummary {
      id: 7,
      customer_email: "a@b.com".to_string(),
      total_amount: "20.0".parse().unwrap(),
      status: STATUS_PAID.to_string(),
      created_at: Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap(),
      items_count: 2,
    };

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["email"], "a@b.com");
    assert_eq!(value["total"], 20.0);
    assert_eq!(value["status"], "paid");
    assert_eq!(value["items_count"], 2);
    assert!(value["date"].is_string());
  }
}
