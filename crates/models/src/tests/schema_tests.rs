use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, EntityTrait, QueryFilter, Set,
    Statement, TransactionTrait,
};
use sea_orm::prelude::Decimal;

use super::test_db;
use crate::{advertisement, photo, schema};

fn ad(name: &str, price: i64) -> advertisement::ActiveModel {
    advertisement::ActiveModel {
        name: Set(name.to_string()),
        description: Set("schema test".to_string()),
        price: Set(Decimal::from(price)),
        ..Default::default()
    }
}

/// Running the bootstrap again must be a no-op
#[tokio::test]
async fn ensure_schema_is_idempotent() -> Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    schema::ensure_schema(&db).await?;
    schema::ensure_schema(&db).await?;

    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT count(*) AS n FROM pg_indexes WHERE indexname IN \
             ('adv_id_idx', 'adv_price_idx', 'adv_date_idx', 'photos_adv_id_idx')"
                .to_string(),
        ))
        .await?
        .expect("count row");
    let n: i64 = row.try_get("", "n")?;
    assert_eq!(n, 4);

    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT count(*) AS n FROM information_schema.tables \
             WHERE table_name IN ('advertisement', 'photos')"
                .to_string(),
        ))
        .await?
        .expect("count row");
    let n: i64 = row.try_get("", "n")?;
    assert_eq!(n, 2);
    Ok(())
}

/// The created_at column is filled by the database
#[tokio::test]
async fn created_at_defaults_to_today() -> Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let txn = db.begin().await?;
    let created = ad("dated", 10).insert(&txn).await?;
    assert!(created.id > 0);
    // database and test process may sit in different time zones
    let today = chrono::Utc::now().date_naive();
    let drift = (created.created_at - today).num_days().abs();
    assert!(drift <= 1, "created_at {} far from {}", created.created_at, today);
    txn.rollback().await?;
    Ok(())
}

/// CHECK constraints reject rows that bypass request validation
#[tokio::test]
async fn storage_rejects_empty_name_and_non_positive_price() -> Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let txn = db.begin().await?;
    assert!(ad("", 10).insert(&txn).await.is_err());
    txn.rollback().await?;

    let txn = db.begin().await?;
    assert!(ad("free", 0).insert(&txn).await.is_err());
    txn.rollback().await?;

    let txn = db.begin().await?;
    let created = ad("linked", 5).insert(&txn).await?;
    let blank = photo::ActiveModel {
        adv_id: Set(created.id),
        link: Set(String::new()),
        ..Default::default()
    };
    assert!(blank.insert(&txn).await.is_err());
    txn.rollback().await?;
    Ok(())
}

/// Photos reference an existing advertisement and disappear with it
#[tokio::test]
async fn photos_cascade_with_advertisement() -> Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let orphan = photo::ActiveModel {
        adv_id: Set(i64::MAX),
        link: Set("orphan.jpg".to_string()),
        ..Default::default()
    };
    assert!(orphan.insert(&db).await.is_err());

    let created = ad("cascade", 7).insert(&db).await?;
    for link in ["a.jpg", "b.jpg"] {
        photo::ActiveModel {
            adv_id: Set(created.id),
            link: Set(link.to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    advertisement::Entity::delete_by_id(created.id).exec(&db).await?;
    let left = photo::Entity::find()
        .filter(photo::Column::AdvId.eq(created.id))
        .all(&db)
        .await?;
    assert!(left.is_empty());
    Ok(())
}
