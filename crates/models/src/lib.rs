//! Storage boundary of the advertising service: sea-orm entities for the
//! `advertisement` and `photos` tables, field validation shared with the
//! request layer, pool construction and schema bootstrap.

pub mod errors;
pub mod db;
pub mod schema;
pub mod advertisement;
pub mod photo;

#[cfg(test)]
mod tests;
