//! Advertisement module: domain types, sea-orm store and the repository seam.

pub mod domain;
pub mod repository;
pub mod store;

pub use domain::{AdvertisementDetails, AdvertisementView, NewAdvertisement, PageEntry, SortKey};
pub use repository::{AdvertisementRepository, SeaOrmAdvertisementRepository};
