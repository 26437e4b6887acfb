use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{advertisement, errors};

pub const MIN_LINKS: usize = 1;
pub const MAX_LINKS: usize = 3;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub adv_id: i64,
    #[sea_orm(column_type = "Text")]
    pub link: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Advertisement }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Advertisement => Entity::belongs_to(advertisement::Entity)
                .from(Column::AdvId)
                .to(advertisement::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<advertisement::Entity> for Entity {
    fn to() -> RelationDef { Relation::Advertisement.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_links(links: &[String]) -> Result<(), errors::ModelError> {
    if links.len() < MIN_LINKS || links.len() > MAX_LINKS {
        return Err(errors::ModelError::Validation(format!(
            "links must contain {MIN_LINKS} to {MAX_LINKS} entries"
        )));
    }
    if links.iter().any(|l| l.is_empty()) {
        return Err(errors::ModelError::Validation("links must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{i}.jpg")).collect()
    }

    #[test]
    fn accepts_one_to_three_links() {
        for n in 1..=3 {
            assert!(validate_links(&links(n)).is_ok(), "n = {n}");
        }
    }

    #[test]
    fn rejects_zero_or_four_links() {
        assert!(validate_links(&links(0)).is_err());
        assert!(validate_links(&links(4)).is_err());
    }

    #[test]
    fn rejects_empty_link_but_keeps_whitespace() {
        assert!(validate_links(&["a.jpg".into(), "".into()]).is_err());
        assert!(validate_links(&[" ".into()]).is_ok());
    }
}
