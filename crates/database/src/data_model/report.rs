use chrono::NaiveDate;
use model::report::{
    LocomotiveRepairCost, RepairEndDate, TeamRepairCount, TeamRepairTypeCount,
};
use rust_decimal::Decimal;
use sqlx::prelude::FromRow;
use utility::id::Id;

#[derive(Debug, Clone, FromRow)]
pub struct RepairEndDateRow {
    pub repair_id: i32,
    pub reg_number: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<RepairEndDateRow> for RepairEndDate {
    fn from(row: RepairEndDateRow) -> Self {
        Self {
            repair_id: Id::new(row.repair_id),
            reg_number: Id::new(row.reg_number),
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct TeamRepairCountRow {
    pub team_number: Option<i32>,
    pub repairs: i64,
}

impl From<TeamRepairCountRow> for TeamRepairCount {
    fn from(row: TeamRepairCountRow) -> Self {
        Self {
            team_number: row.team_number.map(Id::new),
            repairs: row.repairs,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct LocomotiveRepairCostRow {
    pub reg_number: i32,
    pub total_cost: Decimal,
}

impl From<LocomotiveRepairCostRow> for LocomotiveRepairCost {
    fn from(row: LocomotiveRepairCostRow) -> Self {
        Self {
            reg_number: Id::new(row.reg_number),
            total_cost: row.total_cost,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct TeamRepairTypeCountRow {
    pub team_number: Option<i32>,
    pub repair_type: String,
    pub repairs: i64,
}

impl From<TeamRepairTypeCountRow> for TeamRepairTypeCount {
    fn from(row: TeamRepairTypeCountRow) -> Self {
        Self {
            team_number: row.team_number.map(Id::new),
            repair_type: row.repair_type,
            repairs: row.repairs,
        }
    }
}
