use async_trait::async_trait;
use depot::database::{Repo, Result};
use model::{locomotive::Locomotive, WithId};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::locomotive::{count, delete, get_all, insert};
use crate::PgDatabase;

use super::{with_id, DatabaseRow};

#[derive(Debug, Clone, FromRow)]
pub struct LocomotiveRow {
    pub reg_number: i32,
    pub depot: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub year: i32,
}

impl DatabaseRow for LocomotiveRow {
    type Model = Locomotive;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.reg_number)
    }

    fn to_model(self) -> Self::Model {
        Locomotive {
            depot: self.depot,
            kind: self.kind.into(),
            year: self.year,
        }
    }
}

impl From<LocomotiveRow> for WithId<Locomotive> {
    fn from(row: LocomotiveRow) -> Self {
        with_id(row)
    }
}

#[async_trait]
impl Repo<Locomotive> for PgDatabase {
    async fn insert(&mut self, element: Locomotive) -> Result<WithId<Locomotive>> {
        insert(self.connection(), element).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Locomotive>>> {
        get_all(self.connection()).await
    }

    async fn delete(&mut self, id: Id<Locomotive>) -> Result<bool> {
        delete(self.connection(), id).await
    }

    async fn count(&mut self) -> Result<i64> {
        count(self.connection()).await
    }
}

#[cfg(test)]
mod tests {
    use model::locomotive::LocomotiveKind;

    use super::*;

    #[test]
    fn row_maps_type_column_to_kind() {
        let row = LocomotiveRow {
            reg_number: 3,
            depot: "Piatykhatky".to_owned(),
            kind: "freight".to_owned(),
            year: 2008,
        };
        let locomotive: WithId<Locomotive> = row.into();
        assert_eq!(locomotive.id, Id::new(3));
        assert_eq!(locomotive.content.kind, LocomotiveKind::Freight);
        assert_eq!(locomotive.content.depot, "Piatykhatky");
    }
}
