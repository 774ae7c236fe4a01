use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{locomotive::Locomotive, team::Team};

/// A maintenance event on one locomotive, optionally carried out by a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repair {
    pub locomotive: Id<Locomotive>,
    pub repair_type: String,
    pub start_date: NaiveDate,
    pub days_needed: i32,
    pub daily_cost: Decimal,
    pub team: Option<Id<Team>>,
}

impl HasId for Repair {
    type IdType = i32;
}

impl Repair {
    /// The day the locomotive is expected back, `start_date + days_needed`.
    /// `None` if the result falls outside the representable date range.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.start_date
            .checked_add_signed(Duration::days(i64::from(self.days_needed)))
    }

    pub fn total_cost(&self) -> Decimal {
        Decimal::from(self.days_needed) * self.daily_cost
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn repair(start: NaiveDate, days_needed: i32, daily_cost: Decimal) -> Repair {
        Repair {
            locomotive: Id::new(1),
            repair_type: "current".to_owned(),
            start_date: start,
            days_needed,
            daily_cost,
            team: Some(Id::new(1)),
        }
    }

    #[test]
    fn end_date_adds_whole_days() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            repair(start, 5, dec!(1500.00)).end_date(),
            NaiveDate::from_ymd_opt(2024, 1, 6)
        );
    }

    #[test]
    fn end_date_crosses_month_and_leap_day() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        assert_eq!(
            repair(start, 3, dec!(1.00)).end_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn end_date_overflow_is_none() {
        assert_eq!(repair(NaiveDate::MAX, 1, dec!(1.00)).end_date(), None);
    }

    #[test]
    fn total_cost_is_days_times_daily_cost() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(repair(start, 7, dec!(1800.00)).total_cost(), dec!(12600.00));
        assert_eq!(repair(start, 0, dec!(1800.00)).total_cost(), Decimal::ZERO);
    }
}
