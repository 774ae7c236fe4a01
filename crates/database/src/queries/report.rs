//! The fixed reporting queries. Each one is a single statement; ordering is
//! done by the database.

use depot::database::Result;
use model::report::{
    LocomotiveRepairCost, RepairEndDate, TeamRepairCount, TeamRepairTypeCount,
};
use sqlx::{Executor, Postgres};
use utility::let_also::LetAlso;

use crate::data_model::report::{
    LocomotiveRepairCostRow, RepairEndDateRow, TeamRepairCountRow, TeamRepairTypeCountRow,
};

use super::convert_error;

pub async fn repair_end_dates<'c, E>(executor: E) -> Result<Vec<RepairEndDate>>
where
    E: Executor<'c, Database = Postgres>,
{
    // date + integer stays a date, no time component sneaks in
    sqlx::query_as(
        "
        SELECT
            r.repair_id,
            l.reg_number,
            r.start_date,
            r.start_date + r.days_needed AS end_date
        FROM repairs r
        JOIN locomotives l ON r.reg_number = l.reg_number
        ORDER BY r.repair_id;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<RepairEndDateRow>| Ok(rows.into_iter().map(Into::into).collect()))
}

pub async fn repairs_per_team<'c, E>(executor: E) -> Result<Vec<TeamRepairCount>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT team_number, COUNT(*) AS repairs
        FROM repairs
        GROUP BY team_number
        ORDER BY team_number;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<TeamRepairCountRow>| Ok(rows.into_iter().map(Into::into).collect()))
}

pub async fn repair_cost_per_locomotive<'c, E>(executor: E) -> Result<Vec<LocomotiveRepairCost>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT l.reg_number, SUM(r.days_needed * r.daily_cost) AS total_cost
        FROM repairs r
        JOIN locomotives l ON r.reg_number = l.reg_number
        GROUP BY l.reg_number
        ORDER BY l.reg_number;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<LocomotiveRepairCostRow>| {
        Ok(rows.into_iter().map(Into::into).collect())
    })
}

pub async fn repair_types_per_team<'c, E>(executor: E) -> Result<Vec<TeamRepairTypeCount>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT team_number, repair_type, COUNT(*) AS repairs
        FROM repairs
        GROUP BY team_number, repair_type
        ORDER BY team_number, repair_type;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<TeamRepairTypeCountRow>| {
        Ok(rows.into_iter().map(Into::into).collect())
    })
}
