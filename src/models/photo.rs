// src/models/photo.rs

use serde::Serialize;
use sqlx::FromRow;

/// Best-seller row: a photo title and the total quantity sold across paid
/// orders. Photos themselves live in the externally-owned catalog; this
/// system only references them by id and title.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PopularPhoto {
  pub title: String,
  pub sold: i64,
}
