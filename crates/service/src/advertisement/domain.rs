use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use models::{advertisement, photo};

use crate::errors::ServiceError;

/// Create input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdvertisement {
    pub name: String,
    pub description: String,
    /// First link is the main photo.
    pub links: Vec<String>,
    pub price: Decimal,
}

impl NewAdvertisement {
    /// Check field constraints and round the price to the stored scale.
    pub fn validate(mut self) -> Result<Self, ServiceError> {
        advertisement::validate_name(&self.name)?;
        advertisement::validate_description(&self.description)?;
        photo::validate_links(&self.links)?;
        self.price = advertisement::normalize_price(self.price)?;
        Ok(self)
    }
}

/// Fetch-one result. `details` is only filled when requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementView {
    pub name: String,
    pub price: Decimal,
    pub main_link: String,
    pub details: Option<AdvertisementDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementDetails {
    pub description: String,
    /// Every link in insertion order; the first equals `main_link`.
    pub all_links: Vec<String>,
}

/// One row of a page: the advertisement with its main photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    pub name: String,
    pub link: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    DateAsc,
    DateDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::PriceAsc, SortKey::PriceDesc, SortKey::DateAsc, SortKey::DateDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::DateAsc => "date_asc",
            SortKey::DateDesc => "date_desc",
        }
    }

    /// ORDER BY fragment over the page subquery columns.
    pub fn order_by_sql(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price ASC",
            SortKey::PriceDesc => "price DESC",
            SortKey::DateAsc => "created_at ASC",
            SortKey::DateDesc => "created_at DESC",
        }
    }
}

impl FromStr for SortKey {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ServiceError::Validation(format!(
                "sort must be one of price_asc, price_desc, date_asc, date_desc (got {s:?})"
            )))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
