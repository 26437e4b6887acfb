/// Schema bootstrap and storage-level constraint tests
pub mod schema_tests;

use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::{db, schema};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connection to the database named by `DATABASE_URL`, or `None` when the
/// tests should be skipped.
pub(crate) async fn test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL not set or SKIP_DB_TESTS set");
        return None;
    }
    MIGRATED
        .get_or_init(|| async {
            let db = db::connect().await.expect("connect db for migration");
            schema::ensure_schema(&db).await.expect("ensure schema");
            drop(db);
        })
        .await;
    Some(db::connect().await.expect("connect db"))
}
