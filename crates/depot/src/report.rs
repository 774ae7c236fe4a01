//! The fixed report sequence and its plain-text rendering.

use std::{borrow::Cow, fmt, str::FromStr};

use log::{error, info};
use model::{
    locomotive::Locomotive,
    report::{LocomotiveRepairCost, RepairEndDate, TeamRepairCount, TeamRepairTypeCount},
    team::Team,
    WithId,
};
use utility::id::Id;

use crate::database::{DatabaseError, DepotOperations, Result};

/// What to do when one step of the run fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failure and hand the error to the caller.
    #[default]
    Abort,
    /// Log the failure, skip the step and carry on with the next one.
    Continue,
}

impl FromStr for ErrorPolicy {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "continue" => Ok(Self::Continue),
            other => Err(DatabaseError::Config(format!(
                "unknown error policy `{}`, expected `abort` or `continue`",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    FreightLocomotives,
    RepairEndDates,
    RepairsPerTeam,
    RepairCostPerLocomotive,
    RepairTypesPerTeam,
    LocomotivesByDepot,
}

impl Report {
    pub const ALL: [Report; 6] = [
        Report::FreightLocomotives,
        Report::RepairEndDates,
        Report::RepairsPerTeam,
        Report::RepairCostPerLocomotive,
        Report::RepairTypesPerTeam,
        Report::LocomotivesByDepot,
    ];

    pub fn title(&self, depot: &str) -> Cow<'static, str> {
        match self {
            Report::FreightLocomotives => "Freight locomotives:".into(),
            Report::RepairEndDates => "Repair end dates:".into(),
            Report::RepairsPerTeam => "Repairs per team:".into(),
            Report::RepairCostPerLocomotive => "Total repair cost per locomotive:".into(),
            Report::RepairTypesPerTeam => "Repair types per team:".into(),
            Report::LocomotivesByDepot => format!("Locomotives of depot '{}':", depot).into(),
        }
    }
}

/// A single step of [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    DropTables,
    CreateTables,
    InsertSampleData,
    Report(Report),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::DropTables => f.write_str("drop tables"),
            Step::CreateTables => f.write_str("create tables"),
            Step::InsertSampleData => f.write_str("insert sample data"),
            Step::Report(report) => write!(f, "report {:?}", report),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Depot name for [`Report::LocomotivesByDepot`].
    pub depot: String,
    pub error_policy: ErrorPolicy,
    /// Drop existing tables before creating them.
    pub reset: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            depot: "Fastiv".to_owned(),
            error_policy: ErrorPolicy::Abort,
            reset: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps that failed and were skipped under [`ErrorPolicy::Continue`].
    pub failed: Vec<Step>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The rows of one report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRows {
    Locomotives(Vec<WithId<Locomotive>>),
    EndDates(Vec<RepairEndDate>),
    TeamCounts(Vec<TeamRepairCount>),
    Costs(Vec<LocomotiveRepairCost>),
    TypeCounts(Vec<TeamRepairTypeCount>),
}

pub async fn fetch<D: DepotOperations>(db: &mut D, report: Report, depot: &str) -> Result<ReportRows> {
    Ok(match report {
        Report::FreightLocomotives => ReportRows::Locomotives(db.freight_locomotives().await?),
        Report::RepairEndDates => ReportRows::EndDates(db.repair_end_dates().await?),
        Report::RepairsPerTeam => ReportRows::TeamCounts(db.repairs_per_team().await?),
        Report::RepairCostPerLocomotive => {
            ReportRows::Costs(db.repair_cost_per_locomotive().await?)
        }
        Report::RepairTypesPerTeam => ReportRows::TypeCounts(db.repair_types_per_team().await?),
        Report::LocomotivesByDepot => {
            ReportRows::Locomotives(db.locomotives_by_depot(depot).await?)
        }
    })
}

/// Connects the steps: optional reset, schema, sample data, then every
/// report in [`Report::ALL`] order, printed to stdout.
pub async fn run<D: DepotOperations>(db: &mut D, options: &RunOptions) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    if options.reset {
        let result = db.drop_tables().await;
        settle(Step::DropTables, result, options, &mut summary)?;
    }

    let result = db.create_tables().await;
    settle(Step::CreateTables, result, options, &mut summary)?;

    let result = db.insert_sample_data().await;
    settle(Step::InsertSampleData, result, options, &mut summary)?;

    for report in Report::ALL {
        let result = fetch(db, report, &options.depot).await;
        if let Some(rows) = settle(Step::Report(report), result, options, &mut summary)? {
            println!("\n{}", render(&report.title(&options.depot), &rows));
        }
    }

    if summary.is_success() {
        info!("all reports done");
    } else {
        error!("{} step(s) failed", summary.failed.len());
    }
    Ok(summary)
}

fn settle<T>(
    step: Step,
    result: Result<T>,
    options: &RunOptions,
    summary: &mut RunSummary,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(why) => match options.error_policy {
            ErrorPolicy::Abort => Err(why),
            ErrorPolicy::Continue => {
                error!("{} failed, continuing: {}", step, why);
                summary.failed.push(step);
                Ok(None)
            }
        },
    }
}

pub fn render(title: &str, rows: &ReportRows) -> String {
    let lines = match rows {
        ReportRows::Locomotives(rows) => rows.iter().map(render_locomotive).collect::<Vec<_>>(),
        ReportRows::EndDates(rows) => rows.iter().map(render_end_date).collect(),
        ReportRows::TeamCounts(rows) => rows.iter().map(render_team_count).collect(),
        ReportRows::Costs(rows) => rows.iter().map(render_cost).collect(),
        ReportRows::TypeCounts(rows) => rows.iter().map(render_type_count).collect(),
    };

    let mut out = title.to_owned();
    if lines.is_empty() {
        out.push_str("\n  (no rows)");
    }
    for line in lines {
        out.push_str("\n  ");
        out.push_str(&line);
    }
    out
}

fn team_label(team: &Option<Id<Team>>) -> String {
    match team {
        Some(team) => format!("team {}", team),
        None => "no team".to_owned(),
    }
}

pub fn render_locomotive(row: &WithId<Locomotive>) -> String {
    format!(
        "#{:<4} {:<14} {:<10} {}",
        row.id.raw(),
        row.content.depot,
        row.content.kind,
        row.content.year
    )
}

pub fn render_end_date(row: &RepairEndDate) -> String {
    format!(
        "repair {} of #{}: {} -> {}",
        row.repair_id, row.reg_number, row.start_date, row.end_date
    )
}

pub fn render_team_count(row: &TeamRepairCount) -> String {
    format!("{}: {}", team_label(&row.team_number), row.repairs)
}

pub fn render_cost(row: &LocomotiveRepairCost) -> String {
    format!("#{}: {}", row.reg_number, row.total_cost)
}

pub fn render_type_count(row: &TeamRepairTypeCount) -> String {
    format!(
        "{}, {}: {}",
        team_label(&row.team_number),
        row.repair_type,
        row.repairs
    )
}
