//! An in-memory stand-in for the database, so seeding and the report runner
//! can be tested without a running Postgres.

use std::collections::BTreeMap;

use async_trait::async_trait;
use model::{
    locomotive::{Locomotive, LocomotiveKind},
    repair::Repair,
    report::{LocomotiveRepairCost, RepairEndDate, TeamRepairCount, TeamRepairTypeCount},
    team::Team,
    worker::Worker,
    WithId,
};
use rust_decimal::Decimal;
use utility::id::Id;

use crate::{
    database::{DatabaseError, DepotOperations, Repo, Result},
    seed,
};

#[derive(Debug, Default)]
pub(crate) struct MemoryDepot {
    pub enforce_references: bool,
    /// Operations that fail with a query error when called.
    pub fail_on: Vec<&'static str>,
    /// Every operation in the order it was called.
    pub calls: Vec<&'static str>,
    pub tables_created: bool,
    locomotives: Vec<WithId<Locomotive>>,
    repairs: Vec<WithId<Repair>>,
    teams: Vec<WithId<Team>>,
    workers: Vec<WithId<Worker>>,
    sequences: [i32; 4],
}

impl MemoryDepot {
    pub fn failing_on(operations: &[&'static str]) -> Self {
        Self {
            fail_on: operations.to_vec(),
            ..Default::default()
        }
    }

    fn call(&mut self, operation: &'static str) -> Result<()> {
        self.calls.push(operation);
        if self.fail_on.contains(&operation) {
            return Err(DatabaseError::Query(
                format!("{} failed", operation).into(),
            ));
        }
        Ok(())
    }

    fn next_id(&mut self, table: usize) -> i32 {
        self.sequences[table] += 1;
        self.sequences[table]
    }

    fn has_team(&self, team: Id<Team>) -> bool {
        self.teams.iter().any(|t| t.id == team)
    }
}

#[async_trait]
impl Repo<Locomotive> for MemoryDepot {
    async fn insert(&mut self, element: Locomotive) -> Result<WithId<Locomotive>> {
        self.call("insert_locomotive")?;
        let row = WithId::new(Id::new(self.next_id(0)), element);
        self.locomotives.push(row.clone());
        Ok(row)
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Locomotive>>> {
        Ok(self.locomotives.clone())
    }

    async fn delete(&mut self, id: Id<Locomotive>) -> Result<bool> {
        let before = self.locomotives.len();
        self.locomotives.retain(|l| l.id != id);
        self.repairs.retain(|r| r.content.locomotive != id);
        Ok(self.locomotives.len() != before)
    }

    async fn count(&mut self) -> Result<i64> {
        Ok(self.locomotives.len() as i64)
    }
}

#[async_trait]
impl Repo<Repair> for MemoryDepot {
    async fn insert(&mut self, element: Repair) -> Result<WithId<Repair>> {
        self.call("insert_repair")?;
        if self.enforce_references {
            let team_missing = element.team.is_some_and(|team| !self.has_team(team));
            let locomotive_missing = !self
                .locomotives
                .iter()
                .any(|l| l.id == element.locomotive);
            if team_missing || locomotive_missing {
                return Err(DatabaseError::Query("foreign key violation".into()));
            }
        }
        let row = WithId::new(Id::new(self.next_id(1)), element);
        self.repairs.push(row.clone());
        Ok(row)
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Repair>>> {
        Ok(self.repairs.clone())
    }

    async fn delete(&mut self, id: Id<Repair>) -> Result<bool> {
        let before = self.repairs.len();
        self.repairs.retain(|r| r.id != id);
        Ok(self.repairs.len() != before)
    }

    async fn count(&mut self) -> Result<i64> {
        Ok(self.repairs.len() as i64)
    }
}

#[async_trait]
impl Repo<Team> for MemoryDepot {
    async fn insert(&mut self, element: Team) -> Result<WithId<Team>> {
        self.call("insert_team")?;
        let row = WithId::new(Id::new(self.next_id(2)), element);
        self.teams.push(row.clone());
        Ok(row)
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Team>>> {
        Ok(self.teams.clone())
    }

    async fn delete(&mut self, id: Id<Team>) -> Result<bool> {
        let before = self.teams.len();
        self.teams.retain(|t| t.id != id);
        self.workers.retain(|w| w.content.team != id);
        for repair in self.repairs.iter_mut() {
            if repair.content.team == Some(id) {
                repair.content.team = None;
            }
        }
        Ok(self.teams.len() != before)
    }

    async fn count(&mut self) -> Result<i64> {
        Ok(self.teams.len() as i64)
    }
}

#[async_trait]
impl Repo<Worker> for MemoryDepot {
    async fn insert(&mut self, element: Worker) -> Result<WithId<Worker>> {
        self.call("insert_worker")?;
        if self.enforce_references && !self.has_team(element.team) {
            return Err(DatabaseError::Query("foreign key violation".into()));
        }
        let row = WithId::new(Id::new(self.next_id(3)), element);
        self.workers.push(row.clone());
        Ok(row)
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Worker>>> {
        Ok(self.workers.clone())
    }

    async fn delete(&mut self, id: Id<Worker>) -> Result<bool> {
        let before = self.workers.len();
        self.workers.retain(|w| w.id != id);
        Ok(self.workers.len() != before)
    }

    async fn count(&mut self) -> Result<i64> {
        Ok(self.workers.len() as i64)
    }
}

#[async_trait]
impl DepotOperations for MemoryDepot {
    async fn create_tables(&mut self) -> Result<()> {
        self.call("create_tables")?;
        self.tables_created = true;
        Ok(())
    }

    async fn drop_tables(&mut self) -> Result<()> {
        self.call("drop_tables")?;
        *self = Self {
            enforce_references: self.enforce_references,
            fail_on: std::mem::take(&mut self.fail_on),
            calls: std::mem::take(&mut self.calls),
            ..Default::default()
        };
        Ok(())
    }

    async fn insert_sample_data(&mut self) -> Result<()> {
        self.call("insert_sample_data")?;
        seed::insert_sample_data(self).await
    }

    async fn freight_locomotives(&mut self) -> Result<Vec<WithId<Locomotive>>> {
        self.call("freight_locomotives")?;
        let mut rows = self
            .locomotives
            .iter()
            .filter(|l| l.content.kind == LocomotiveKind::Freight)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|l| (l.content.year, l.id));
        Ok(rows)
    }

    async fn repair_end_dates(&mut self) -> Result<Vec<RepairEndDate>> {
        self.call("repair_end_dates")?;
        self.repairs
            .iter()
            .map(|repair| {
                let end_date = repair
                    .content
                    .end_date()
                    .ok_or_else(|| DatabaseError::Query("date out of range".into()))?;
                Ok(RepairEndDate {
                    repair_id: repair.id,
                    reg_number: repair.content.locomotive,
                    start_date: repair.content.start_date,
                    end_date,
                })
            })
            .collect()
    }

    async fn repairs_per_team(&mut self) -> Result<Vec<TeamRepairCount>> {
        self.call("repairs_per_team")?;
        let mut counts: BTreeMap<(bool, Option<Id<Team>>), i64> = BTreeMap::new();
        for repair in &self.repairs {
            let team = repair.content.team;
            *counts.entry((team.is_none(), team)).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|((_, team_number), repairs)| TeamRepairCount {
                team_number,
                repairs,
            })
            .collect())
    }

    async fn repair_cost_per_locomotive(&mut self) -> Result<Vec<LocomotiveRepairCost>> {
        self.call("repair_cost_per_locomotive")?;
        let mut costs: BTreeMap<Id<Locomotive>, Decimal> = BTreeMap::new();
        for repair in &self.repairs {
            *costs.entry(repair.content.locomotive).or_default() += repair.content.total_cost();
        }
        Ok(costs
            .into_iter()
            .map(|(reg_number, total_cost)| LocomotiveRepairCost {
                reg_number,
                total_cost,
            })
            .collect())
    }

    async fn repair_types_per_team(&mut self) -> Result<Vec<TeamRepairTypeCount>> {
        self.call("repair_types_per_team")?;
        let mut counts: BTreeMap<(bool, Option<Id<Team>>, String), i64> = BTreeMap::new();
        for repair in &self.repairs {
            let team = repair.content.team;
            *counts
                .entry((team.is_none(), team, repair.content.repair_type.clone()))
                .or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|((_, team_number, repair_type), repairs)| TeamRepairTypeCount {
                team_number,
                repair_type,
                repairs,
            })
            .collect())
    }

    async fn locomotives_by_depot(&mut self, depot: &str) -> Result<Vec<WithId<Locomotive>>> {
        self.call("locomotives_by_depot")?;
        Ok(self
            .locomotives
            .iter()
            .filter(|l| l.content.depot == depot)
            .cloned()
            .collect())
    }
}
