use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, photo};

pub const NAME_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "advertisement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub price: Decimal,
    pub created_at: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Photos }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Photos => Entity::has_many(photo::Entity).into(),
        }
    }
}

impl Related<photo::Entity> for Entity {
    fn to() -> RelationDef { Relation::Photos.def() }
}

impl ActiveModelBehavior for ActiveModel {}

fn validate_text(field: &str, value: &str, max_chars: usize) -> Result<(), errors::ModelError> {
    if value.is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    if value.chars().count() > max_chars {
        return Err(errors::ModelError::Validation(format!("{field} longer than {max_chars} characters")));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    validate_text("name", name, NAME_MAX_CHARS)
}

pub fn validate_description(description: &str) -> Result<(), errors::ModelError> {
    validate_text("description", description, DESCRIPTION_MAX_CHARS)
}

/// Upper bound (exclusive) of a NUMERIC(16, 2) value.
fn price_limit() -> Decimal {
    Decimal::from(100_000_000_000_000_i64)
}

/// Round to the stored scale and check the result is storable and positive.
pub fn normalize_price(price: Decimal) -> Result<Decimal, errors::ModelError> {
    let rounded = price.round_dp(2);
    if rounded <= Decimal::ZERO {
        return Err(errors::ModelError::Validation("price must be greater than 0".into()));
    }
    if rounded >= price_limit() {
        return Err(errors::ModelError::Validation("price exceeds 16 digits".into()));
    }
    Ok(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn name_must_not_be_empty() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_ok());
        assert!(validate_name("Bike").is_ok());
    }

    #[test]
    fn length_limits_count_characters() {
        assert!(validate_name(&"я".repeat(200)).is_ok());
        assert!(validate_name(&"я".repeat(201)).is_err());
        assert!(validate_description(&"d".repeat(1000)).is_ok());
        assert!(validate_description(&"d".repeat(1001)).is_err());
    }

    #[test]
    fn price_is_rounded_to_cents() {
        let p = normalize_price(Decimal::from_str("10.456").unwrap()).unwrap();
        assert_eq!(p, Decimal::from_str("10.46").unwrap());
    }

    #[test]
    fn price_rejects_non_positive_and_overflow() {
        assert!(normalize_price(Decimal::ZERO).is_err());
        assert!(normalize_price(Decimal::from(-5)).is_err());
        assert!(normalize_price(Decimal::from_str("0.004").unwrap()).is_err());
        assert!(normalize_price(Decimal::from_str("99999999999999.99").unwrap()).is_ok());
        assert!(normalize_price(Decimal::from(100_000_000_000_000_i64)).is_err());
    }
}
