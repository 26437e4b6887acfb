use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::domain::{AdvertisementView, NewAdvertisement, PageEntry, SortKey};
use crate::errors::ServiceError;
use crate::pagination::PageWindow;

/// Persistence operations the HTTP layer depends on.
#[async_trait]
pub trait AdvertisementRepository: Send + Sync {
    /// Store a validated advertisement with its photos; returns the new id.
    async fn create(&self, input: &NewAdvertisement) -> Result<i64, ServiceError>;
    /// `ServiceError::NotFound` when no advertisement has this id.
    async fn get_one(&self, id: i64, with_details: bool) -> Result<AdvertisementView, ServiceError>;
    async fn get_page(&self, window: PageWindow, sort: SortKey) -> Result<Vec<PageEntry>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmAdvertisementRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAdvertisementRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl AdvertisementRepository for SeaOrmAdvertisementRepository {
    async fn create(&self, input: &NewAdvertisement) -> Result<i64, ServiceError> {
        super::store::create_advertisement(&self.db, input).await
    }

    async fn get_one(&self, id: i64, with_details: bool) -> Result<AdvertisementView, ServiceError> {
        super::store::get_advertisement(&self.db, id, with_details).await
    }

    async fn get_page(&self, window: PageWindow, sort: SortKey) -> Result<Vec<PageEntry>, ServiceError> {
        super::store::list_page(&self.db, window, sort).await
    }
}

/// Simple in-memory mock repository for tests and local runs without Postgres
pub mod mock {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use crate::advertisement::domain::AdvertisementDetails;

    #[derive(Debug, Clone)]
    struct StoredAdvertisement {
        name: String,
        description: String,
        price: Decimal,
        created_at: NaiveDate,
        links: Vec<String>,
    }

    #[derive(Default)]
    pub struct MockAdvertisementRepository {
        ads: Mutex<BTreeMap<i64, StoredAdvertisement>>,
        fail_next: Mutex<Option<String>>,
    }

    impl MockAdvertisementRepository {
        pub fn new() -> Self { Self::default() }

        /// Make the next call fail with `ServiceError::Db(message)`.
        pub fn fail_next(&self, message: impl Into<String>) {
            *self.fail_next.lock().unwrap() = Some(message.into());
        }

        /// Insert with an explicit creation date; ids keep increasing.
        pub fn insert_dated(&self, input: &NewAdvertisement, created_at: NaiveDate) -> i64 {
            let mut ads = self.ads.lock().unwrap();
            let id = ads.keys().next_back().copied().unwrap_or(0) + 1;
            ads.insert(
                id,
                StoredAdvertisement {
                    name: input.name.clone(),
                    description: input.description.clone(),
                    price: input.price,
                    created_at,
                    links: input.links.clone(),
                },
            );
            id
        }

        pub fn len(&self) -> usize { self.ads.lock().unwrap().len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        fn take_failure(&self) -> Result<(), ServiceError> {
            match self.fail_next.lock().unwrap().take() {
                Some(msg) => Err(ServiceError::Db(msg)),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl AdvertisementRepository for MockAdvertisementRepository {
        async fn create(&self, input: &NewAdvertisement) -> Result<i64, ServiceError> {
            self.take_failure()?;
            Ok(self.insert_dated(input, chrono::Utc::now().date_naive()))
        }

        async fn get_one(&self, id: i64, with_details: bool) -> Result<AdvertisementView, ServiceError> {
            self.take_failure()?;
            let ads = self.ads.lock().unwrap();
            let ad = ads.get(&id).ok_or_else(|| ServiceError::advertisement_not_found(id))?;
            let main_link = ad
                .links
                .first()
                .cloned()
                .ok_or_else(|| ServiceError::Db(format!("advertisement {id} has no photos")))?;
            Ok(AdvertisementView {
                name: ad.name.clone(),
                price: ad.price,
                main_link,
                details: with_details.then(|| AdvertisementDetails {
                    description: ad.description.clone(),
                    all_links: ad.links.clone(),
                }),
            })
        }

        async fn get_page(&self, window: PageWindow, sort: SortKey) -> Result<Vec<PageEntry>, ServiceError> {
            self.take_failure()?;
            let ads = self.ads.lock().unwrap();
            let mut rows: Vec<(i64, &StoredAdvertisement)> = ads
                .range(window.first()..=window.last())
                .filter(|(_, ad)| !ad.links.is_empty())
                .map(|(id, ad)| (*id, ad))
                .collect();
            rows.sort_by(|(ia, a), (ib, b)| {
                let primary = match sort {
                    SortKey::PriceAsc => a.price.cmp(&b.price),
                    SortKey::PriceDesc => b.price.cmp(&a.price),
                    SortKey::DateAsc => a.created_at.cmp(&b.created_at),
                    SortKey::DateDesc => b.created_at.cmp(&a.created_at),
                };
                primary.then(ia.cmp(ib))
            });
            Ok(rows
                .into_iter()
                .map(|(_, ad)| PageEntry { name: ad.name.clone(), link: ad.links[0].clone(), price: ad.price })
                .collect())
        }
    }

}
