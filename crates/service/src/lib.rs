//! Service layer for advertisements.
//! - `advertisement::store`: transactional sea-orm operations (create, fetch one, fetch page).
//! - `advertisement::repository`: the trait handlers depend on, plus SeaORM and in-memory implementations.
//! - `pagination`: the fixed id window used by page queries.

pub mod errors;
pub mod pagination;
pub mod advertisement;
#[cfg(test)]
pub mod test_support;
