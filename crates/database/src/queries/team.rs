use depot::database::Result;
use model::{team::Team, WithId};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{team::TeamRow, with_ids};

use super::convert_error;

pub async fn insert<'c, E>(executor: E, team: Team) -> Result<WithId<Team>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO teams(phone)
        VALUES ($1)
        RETURNING team_number, phone;
        ",
    )
    .bind(&team.phone)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: TeamRow| row.into())
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Team>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as("SELECT team_number, phone FROM teams ORDER BY team_number;")
        .fetch_all(executor)
        .await
        .map_err(convert_error)?
        .let_owned(|rows: Vec<TeamRow>| Ok(with_ids(rows)))
}

/// Deletes the team. Its workers go with it, its repairs lose their team.
pub async fn delete<'c, E>(executor: E, id: Id<Team>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM teams WHERE team_number = $1;")
        .bind(id.raw())
        .execute(executor)
        .await
        .map_err(convert_error)
        .map(|result| result.rows_affected() > 0)
}

pub async fn count<'c, E>(executor: E) -> Result<i64>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("SELECT COUNT(*) FROM teams;")
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}
