use std::sync::Arc;

use service::advertisement::AdvertisementRepository;

/// Shared handler state. Cloned per request; the repository owns the pool.
#[derive(Clone)]
pub struct AppState {
    pub ads: Arc<dyn AdvertisementRepository>,
    /// Map a missing advertisement on `/getone` to 404 instead of 500.
    pub strict_not_found: bool,
}

impl AppState {
    pub fn new(ads: Arc<dyn AdvertisementRepository>, strict_not_found: bool) -> Self {
        Self { ads, strict_not_found }
    }
}
