//! Migrator for the advertising schema.
//! Tables are created first (photos depends on advertisement); indexes last.
//! Every statement is `IF NOT EXISTS`, so running `up` against a database
//! created by hand is also safe.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_advertisement;
mod m20240101_000002_create_photos;
mod m20240101_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_advertisement::Migration),
            Box::new(m20240101_000002_create_photos::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000003_add_indexes::Migration),
        ]
    }
}
