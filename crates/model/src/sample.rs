//! The fixed data set a fresh depot database is seeded with.
//!
//! Repairs and workers refer to locomotives and teams by their position in
//! [`locomotives`] and [`teams`]; the seeding code resolves those positions to
//! the keys the database hands out.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use utility::id::Id;

use crate::{
    locomotive::{Locomotive, LocomotiveKind},
    repair::Repair,
    team::Team,
    worker::Worker,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRepair {
    /// Index into [`locomotives`].
    pub locomotive: usize,
    /// Index into [`teams`].
    pub team: usize,
    pub repair_type: &'static str,
    pub start_date: NaiveDate,
    pub days_needed: i32,
    pub daily_cost: Decimal,
}

impl SampleRepair {
    pub fn resolve(&self, locomotive: Id<Locomotive>, team: Option<Id<Team>>) -> Repair {
        Repair {
            locomotive,
            repair_type: self.repair_type.to_owned(),
            start_date: self.start_date,
            days_needed: self.days_needed,
            daily_cost: self.daily_cost,
            team,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleWorker {
    /// Index into [`teams`].
    pub team: usize,
    pub last_name: &'static str,
    pub first_name: &'static str,
    pub middle_name: &'static str,
    pub is_leader: bool,
    pub birth_date: NaiveDate,
}

impl SampleWorker {
    pub fn resolve(&self, team: Id<Team>) -> Worker {
        Worker {
            last_name: self.last_name.to_owned(),
            first_name: self.first_name.to_owned(),
            middle_name: self.middle_name.to_owned(),
            team,
            is_leader: self.is_leader,
            birth_date: self.birth_date,
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid")
}

pub fn locomotives() -> Vec<Locomotive> {
    vec![
        Locomotive::new("Fastiv", LocomotiveKind::Freight, 2010),
        Locomotive::new("Koziatyn", LocomotiveKind::Passenger, 2015),
        Locomotive::new("Piatykhatky", LocomotiveKind::Freight, 2008),
    ]
}

pub fn teams() -> Vec<Team> {
    vec![
        Team::new("123-456-7890"),
        Team::new("987-654-3210"),
        Team::new("555-555-5555"),
    ]
}

pub fn repairs() -> Vec<SampleRepair> {
    vec![
        SampleRepair {
            locomotive: 0,
            team: 0,
            repair_type: "current",
            start_date: date(2024, 1, 1),
            days_needed: 5,
            daily_cost: Decimal::new(1500_00, 2),
        },
        SampleRepair {
            locomotive: 1,
            team: 1,
            repair_type: "maintenance",
            start_date: date(2024, 1, 5),
            days_needed: 3,
            daily_cost: Decimal::new(2000_00, 2),
        },
        SampleRepair {
            locomotive: 2,
            team: 2,
            repair_type: "unscheduled",
            start_date: date(2024, 1, 10),
            days_needed: 7,
            daily_cost: Decimal::new(1800_00, 2),
        },
    ]
}

pub fn workers() -> Vec<SampleWorker> {
    vec![
        SampleWorker {
            team: 0,
            last_name: "Ivanenko",
            first_name: "Ivan",
            middle_name: "Ivanovych",
            is_leader: true,
            birth_date: date(1980, 5, 15),
        },
        SampleWorker {
            team: 0,
            last_name: "Petrenko",
            first_name: "Petro",
            middle_name: "Petrovych",
            is_leader: false,
            birth_date: date(1990, 6, 20),
        },
        SampleWorker {
            team: 1,
            last_name: "Sydorenko",
            first_name: "Sydir",
            middle_name: "Sydorovych",
            is_leader: false,
            birth_date: date(1985, 7, 30),
        },
    ]
}
