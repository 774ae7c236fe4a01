use async_trait::async_trait;
use chrono::NaiveDate;
use depot::database::{Repo, Result};
use model::{repair::Repair, WithId};
use rust_decimal::Decimal;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::repair::{count, delete, get_all, insert};
use crate::PgDatabase;

use super::{with_id, DatabaseRow};

#[derive(Debug, Clone, FromRow)]
pub struct RepairRow {
    pub repair_id: i32,
    pub reg_number: i32,
    pub repair_type: String,
    pub start_date: NaiveDate,
    pub days_needed: i32,
    pub daily_cost: Decimal,
    pub team_number: Option<i32>,
}

impl DatabaseRow for RepairRow {
    type Model = Repair;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.repair_id)
    }

    fn to_model(self) -> Self::Model {
        Repair {
            locomotive: Id::new(self.reg_number),
            repair_type: self.repair_type,
            start_date: self.start_date,
            days_needed: self.days_needed,
            daily_cost: self.daily_cost,
            team: self.team_number.map(Id::new),
        }
    }
}

impl From<RepairRow> for WithId<Repair> {
    fn from(row: RepairRow) -> Self {
        with_id(row)
    }
}

#[async_trait]
impl Repo<Repair> for PgDatabase {
    async fn insert(&mut self, element: Repair) -> Result<WithId<Repair>> {
        insert(self.connection(), element).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Repair>>> {
        get_all(self.connection()).await
    }

    async fn delete(&mut self, id: Id<Repair>) -> Result<bool> {
        delete(self.connection(), id).await
    }

    async fn count(&mut self) -> Result<i64> {
        count(self.connection()).await
    }
}
