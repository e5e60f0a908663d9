// src/db.rs

//! Schema bootstrap and demo catalog seeding, gated by `AppConfig::seed_db`.

use crate::errors::Result;
use sqlx::PgPool;
use tracing::info;

/// Applies the idempotent DDL in `schema.sql`.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
  sqlx::raw_sql(include_str!("../schema.sql")).execute(pool).await?;
  info!("Database schema applied.");
  Ok(())
}

/// Inserts a handful of catalog photos so the best-seller queries have
/// titles to join against. Safe to re-run; existing rows are kept.
pub async fn seed_photos(pool: &PgPool) -> Result<()> {
  let titles: [(i64, &str); 6] = [
    (1, "Sunrise over the bay"),
    (2, "Mountain ridge at dusk"),
    (3, "City lights in the rain"),
    (4, "Forest path in autumn"),
    (5, "Waves on black sand"),
    (6, "Old town rooftops"),
  ];

  for (id, title) in titles {
    sqlx::query("INSERT INTO photos (id, title) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
      .bind(id)
      .bind(title)
      .execute(pool)
      .await?;
  }

  // Keep the id sequence ahead of the fixed demo ids.
  sqlx::query("SELECT setval('photos_id_seq', (SELECT MAX(id) FROM photos))")
    .execute(pool)
    .await?;

  info!("Demo photo catalog seeded.");
  Ok(())
}
