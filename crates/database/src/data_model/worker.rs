use async_trait::async_trait;
use chrono::NaiveDate;
use depot::database::{Repo, Result};
use model::{worker::Worker, WithId};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::worker::{count, delete, get_all, insert};
use crate::PgDatabase;

use super::{with_id, DatabaseRow};

#[derive(Debug, Clone, FromRow)]
pub struct WorkerRow {
    pub worker_id: i32,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub team_number: i32,
    pub is_leader: bool,
    pub birth_date: NaiveDate,
}

impl DatabaseRow for WorkerRow {
    type Model = Worker;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.worker_id)
    }

    fn to_model(self) -> Self::Model {
        Worker {
            last_name: self.last_name,
            first_name: self.first_name,
            middle_name: self.middle_name,
            team: Id::new(self.team_number),
            is_leader: self.is_leader,
            birth_date: self.birth_date,
        }
    }
}

impl From<WorkerRow> for WithId<Worker> {
    fn from(row: WorkerRow) -> Self {
        with_id(row)
    }
}

#[async_trait]
impl Repo<Worker> for PgDatabase {
    async fn insert(&mut self, element: Worker) -> Result<WithId<Worker>> {
        insert(self.connection(), element).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Worker>>> {
        get_all(self.connection()).await
    }

    async fn delete(&mut self, id: Id<Worker>) -> Result<bool> {
        delete(self.connection(), id).await
    }

    async fn count(&mut self) -> Result<i64> {
        count(self.connection()).await
    }
}
