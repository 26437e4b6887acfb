//! Transactional persistence operations.
//!
//! Each operation runs inside exactly one transaction. A `DatabaseTransaction`
//! that is dropped without `commit` rolls back, so every early return below
//! leaves no trace in the database.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseBackend, DatabaseConnection, FromQueryResult, Set, Statement,
    TransactionTrait, Value,
};
use tracing::{info, instrument, warn};

use models::{advertisement, photo};

use super::domain::{AdvertisementDetails, AdvertisementView, NewAdvertisement, PageEntry, SortKey};
use crate::errors::ServiceError;
use crate::pagination::PageWindow;

const EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM advertisement WHERE id = $1) AS found";

// Photos are ordered by id so the first supplied link is the main one.
const MAIN_PHOTO_SQL: &str = r#"
    SELECT a.name, p.link, a.price
    FROM advertisement a INNER JOIN photos p ON p.adv_id = a.id
    WHERE a.id = $1
    ORDER BY p.id
    LIMIT 1"#;

const ALL_PHOTOS_SQL: &str = r#"
    SELECT a.name, p.link, a.price, a.description
    FROM advertisement a INNER JOIN photos p ON p.adv_id = a.id
    WHERE a.id = $1
    ORDER BY p.id"#;

#[derive(Debug, FromQueryResult)]
struct ExistsRow {
    found: bool,
}

#[derive(Debug, FromQueryResult)]
struct MainRow {
    name: String,
    link: String,
    price: Decimal,
}

#[derive(Debug, FromQueryResult)]
struct DetailRow {
    name: String,
    link: String,
    price: Decimal,
    description: String,
}

#[derive(Debug, FromQueryResult)]
struct PageRow {
    name: String,
    link: String,
    price: Decimal,
}

impl From<PageRow> for PageEntry {
    fn from(r: PageRow) -> Self {
        PageEntry { name: r.name, link: r.link, price: r.price }
    }
}

fn statement(sql: &str, values: impl IntoIterator<Item = Value>) -> Statement {
    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
}

/// One SELECT per distinct advertisement in the window, keeping its main photo.
fn page_sql(sort: SortKey) -> String {
    format!(
        r#"
    SELECT name, link, price FROM (
        SELECT DISTINCT ON (a.id) a.id, a.name, p.link, a.price, a.created_at
        FROM advertisement a INNER JOIN photos p ON p.adv_id = a.id
        WHERE a.id BETWEEN $1 AND $2
        ORDER BY a.id, p.id
    ) page
    ORDER BY {}, id ASC"#,
        sort.order_by_sql()
    )
}

/// Insert the advertisement and one photo per link; all or nothing.
#[instrument(skip(db, input), fields(links = input.links.len()))]
pub async fn create_advertisement(
    db: &DatabaseConnection,
    input: &NewAdvertisement,
) -> Result<i64, ServiceError> {
    let txn = db.begin().await?;

    let am = advertisement::ActiveModel {
        name: Set(input.name.clone()),
        description: Set(input.description.clone()),
        price: Set(input.price),
        ..Default::default()
    };
    let created = am.insert(&txn).await?;

    for link in &input.links {
        let photo = photo::ActiveModel {
            adv_id: Set(created.id),
            link: Set(link.clone()),
            ..Default::default()
        };
        if let Err(e) = photo.insert(&txn).await {
            warn!(adv_id = created.id, error = %e, "photo insert failed, rolling back");
            if let Err(rb) = txn.rollback().await {
                warn!(adv_id = created.id, error = %rb, "rollback failed");
            }
            return Err(e.into());
        }
    }

    txn.commit().await?;
    info!(id = created.id, "advertisement created");
    Ok(created.id)
}

#[instrument(skip(db))]
pub async fn get_advertisement(
    db: &DatabaseConnection,
    id: i64,
    with_details: bool,
) -> Result<AdvertisementView, ServiceError> {
    let txn = db.begin().await?;

    let exists = ExistsRow::find_by_statement(statement(EXISTS_SQL, [Value::from(id)]))
        .one(&txn)
        .await?
        .is_some_and(|r| r.found);
    if !exists {
        return Err(ServiceError::advertisement_not_found(id));
    }

    let view = if with_details {
        let rows = DetailRow::find_by_statement(statement(ALL_PHOTOS_SQL, [Value::from(id)]))
            .all(&txn)
            .await?;
        let mut rows = rows.into_iter();
        let first = rows
            .next()
            .ok_or_else(|| ServiceError::Db(format!("advertisement {id} has no photos")))?;
        let mut all_links = vec![first.link];
        all_links.extend(rows.map(|r| r.link));
        AdvertisementView {
            name: first.name,
            price: first.price,
            main_link: all_links[0].clone(),
            details: Some(AdvertisementDetails { description: first.description, all_links }),
        }
    } else {
        let row = MainRow::find_by_statement(statement(MAIN_PHOTO_SQL, [Value::from(id)]))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::Db(format!("advertisement {id} has no photos")))?;
        AdvertisementView { name: row.name, price: row.price, main_link: row.link, details: None }
    };

    txn.commit().await?;
    Ok(view)
}

#[instrument(skip(db), fields(first = window.first(), last = window.last(), sort = %sort))]
pub async fn list_page(
    db: &DatabaseConnection,
    window: PageWindow,
    sort: SortKey,
) -> Result<Vec<PageEntry>, ServiceError> {
    let txn = db.begin().await?;
    let sql = page_sql(sort);
    let rows = PageRow::find_by_statement(statement(
        &sql,
        [Value::from(window.first()), Value::from(window.last())],
    ))
    .all(&txn)
    .await?;
    txn.commit().await?;
    info!(count = rows.len(), "page listed");
    Ok(rows.into_iter().map(PageEntry::from).collect())
}
