//! Row types returned by the fixed reporting queries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utility::id::Id;

use crate::{locomotive::Locomotive, repair::Repair, team::Team};

/// When a repair started and when it is due to finish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairEndDate {
    pub repair_id: Id<Repair>,
    pub reg_number: Id<Locomotive>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Number of repairs per team. Repairs without a team are counted under
/// `team_number: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRepairCount {
    pub team_number: Option<Id<Team>>,
    pub repairs: i64,
}

/// Sum of `days_needed * daily_cost` over all repairs of a locomotive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocomotiveRepairCost {
    pub reg_number: Id<Locomotive>,
    pub total_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRepairTypeCount {
    pub team_number: Option<Id<Team>>,
    pub repair_type: String,
    pub repairs: i64,
}
