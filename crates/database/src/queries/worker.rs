use depot::database::Result;
use model::{worker::Worker, WithId};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{with_ids, worker::WorkerRow};

use super::convert_error;

pub async fn insert<'c, E>(executor: E, worker: Worker) -> Result<WithId<Worker>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO workers(
            last_name,
            first_name,
            middle_name,
            team_number,
            is_leader,
            birth_date
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING worker_id, last_name, first_name, middle_name, team_number, is_leader, birth_date;
        ",
    )
    .bind(&worker.last_name)
    .bind(&worker.first_name)
    .bind(&worker.middle_name)
    .bind(worker.team.raw())
    .bind(worker.is_leader)
    .bind(worker.birth_date)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: WorkerRow| row.into())
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Worker>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT worker_id, last_name, first_name, middle_name, team_number, is_leader, birth_date
        FROM workers
        ORDER BY worker_id;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<WorkerRow>| Ok(with_ids(rows)))
}

pub async fn delete<'c, E>(executor: E, id: Id<Worker>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM workers WHERE worker_id = $1;")
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
    sqlx::query_scalar("SELECT COUNT(*) FROM workers;")
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}
