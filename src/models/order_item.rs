// src/models/order_item.rs

use rust_decimal::Decimal;
use serde::Deserialize;

/// A line item as submitted by the client; persisted verbatim alongside its
/// order. The submitted price is trusted, not re-checked against the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItem {
  pub photo_id: i64,
  pub quantity: i32,
  pub price: Decimal,
}

impl OrderItem {
  /// Price × quantity for this line.
  pub fn line_total(&self) -> Decimal {
    self.price * Decimal::from(self.quantity)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(photo_id: i64, quantity: i32, price: &str) -> OrderItem {
    OrderItem {
      photo_id,
      quantity,
      price: price.parse().unwrap(),
    }
  }

  #[test]
  fn line_total_multiplies_price_by_quantity() {
    assert_eq!(item(1, 2, "10.0").line_total(), "20.0".parse::<Decimal>().unwrap());
  }

  #[test]
  fn order_total_sums_line_totals() {
    let items = vec![item(1, 2, "10.0"), item(2, 1, "5.5")];
    let total: Decimal = items.iter().map(|i| i.line_total()).sum();
    assert_eq!(total, "25.5".parse::<Decimal>().unwrap());
  }

  #[test]
  fn empty_item_list_totals_zero() {
    let items: Vec<OrderItem> = Vec::new();
    let total: Decimal = items.iter().map(|i| i.line_total()).sum();
    assert_eq!(total, Decimal::ZERO);
  }

  #[test]
  fn deserializes_from_wire_shape() {
    let parsed: OrderItem = serde_json::from_str(r#"{"photo_id":1,"quantity":2,"price":10.0}"#).unwrap();
    assert_eq!(parsed.photo_id, 1);
    assert_eq!(parsed.quantity, 2);
    assert_eq!(parsed.price, "10.0".parse::<Decimal>().unwrap());
  }
}
