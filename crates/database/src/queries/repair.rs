use depot::database::Result;
use model::{repair::Repair, WithId};
use sqlx::{Executor, Postgres};
use utility::{
    id::{Id, IdWrapper},
    let_also::LetAlso,
};

use crate::data_model::{repair::RepairRow, with_ids};

use super::convert_error;

pub async fn insert<'c, E>(executor: E, repair: Repair) -> Result<WithId<Repair>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO repairs(
            reg_number,
            repair_type,
            start_date,
            days_needed,
            daily_cost,
            team_number
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING repair_id, reg_number, repair_type, start_date, days_needed, daily_cost, team_number;
        ",
    )
    .bind(repair.locomotive.raw())
    .bind(&repair.repair_type)
    .bind(repair.start_date)
    .bind(repair.days_needed)
    .bind(repair.daily_cost)
    .bind(repair.team.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: RepairRow| row.into())
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Repair>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT repair_id, reg_number, repair_type, start_date, days_needed, daily_cost, team_number
        FROM repairs
        ORDER BY repair_id;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<RepairRow>| Ok(with_ids(rows)))
}

pub async fn delete<'c, E>(executor: E, id: Id<Repair>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM repairs WHERE repair_id = $1;")
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
    sqlx::query_scalar("SELECT COUNT(*) FROM repairs;")
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}
