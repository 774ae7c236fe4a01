use async_trait::async_trait;
use depot::database::{Repo, Result};
use model::{team::Team, WithId};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::team::{count, delete, get_all, insert};
use crate::PgDatabase;

use super::{with_id, DatabaseRow};

#[derive(Debug, Clone, FromRow)]
pub struct TeamRow {
    pub team_number: i32,
    pub phone: String,
}

impl DatabaseRow for TeamRow {
    type Model = Team;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.team_number)
    }

    fn to_model(self) -> Self::Model {
        Team { phone: self.phone }
    }
}

impl From<TeamRow> for WithId<Team> {
    fn from(row: TeamRow) -> Self {
        with_id(row)
    }
}

#[async_trait]
impl Repo<Team> for PgDatabase {
    async fn insert(&mut self, element: Team) -> Result<WithId<Team>> {
        insert(self.connection(), element).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Team>>> {
        get_all(self.connection()).await
    }

    async fn delete(&mut self, id: Id<Team>) -> Result<bool> {
        delete(self.connection(), id).await
    }

    async fn count(&mut self) -> Result<i64> {
        count(self.connection()).await
    }
}
