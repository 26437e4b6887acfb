//! Schema bootstrap.
//!
//! `ensure_schema` is called once at startup and may be called again at any
//! time: applied migrations are skipped and each statement is `IF NOT EXISTS`.

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use crate::errors::ModelError;

#[instrument(skip(db))]
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), ModelError> {
    migration::Migrator::up(db, None).await?;
    info!(event = "schema_ready", "advertisement schema ensured");
    Ok(())
}
