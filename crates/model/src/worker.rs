use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::team::Team;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub team: Id<Team>,
    pub is_leader: bool,
    pub birth_date: NaiveDate,
}

impl HasId for Worker {
    type IdType = i32;
}

impl Worker {
    /// "Last First Middle", the way names are listed on crew rosters.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_starts_with_last_name() {
        let worker = Worker {
            last_name: "Ivanenko".to_owned(),
            first_name: "Ivan".to_owned(),
            middle_name: "Ivanovych".to_owned(),
            team: Id::new(1),
            is_leader: true,
            birth_date: NaiveDate::from_ymd_opt(1980, 5, 15).unwrap(),
        };
        assert_eq!(worker.full_name(), "Ivanenko Ivan Ivanovych");
    }
}
