use log::{debug, info};
use model::{
    locomotive::Locomotive,
    repair::Repair,
    sample::{self, SampleRepair},
    team::Team,
    worker::Worker,
};
use utility::id::{HasId, Id};

use crate::database::{DatabaseError, Repo, Result};

/// Inserts the sample data set in foreign key order: locomotives and teams
/// first, then the repairs and workers that point at them.
pub async fn insert_sample_data<D>(db: &mut D) -> Result<()>
where
    D: Repo<Locomotive> + Repo<Team> + Repo<Repair> + Repo<Worker> + Send,
{
    let mut locomotives: Vec<Id<Locomotive>> = Vec::new();
    for locomotive in sample::locomotives() {
        let inserted = <D as Repo<Locomotive>>::insert(db, locomotive).await?;
        debug!("inserted locomotive {}", inserted.id);
        locomotives.push(inserted.id);
    }

    let mut teams: Vec<Id<Team>> = Vec::new();
    for team in sample::teams() {
        let inserted = <D as Repo<Team>>::insert(db, team).await?;
        debug!("inserted team {}", inserted.id);
        teams.push(inserted.id);
    }

    for repair in sample::repairs() {
        let repair = resolve_repair(&repair, &locomotives, &teams)?;
        let inserted = <D as Repo<Repair>>::insert(db, repair).await?;
        debug!("inserted repair {}", inserted.id);
    }

    for worker in sample::workers() {
        let team = resolve(&teams, worker.team)?;
        let inserted = <D as Repo<Worker>>::insert(db, worker.resolve(team)).await?;
        debug!("inserted worker {}", inserted.id);
    }

    info!("sample data inserted");
    Ok(())
}

fn resolve_repair(
    repair: &SampleRepair,
    locomotives: &[Id<Locomotive>],
    teams: &[Id<Team>],
) -> Result<Repair> {
    let locomotive = resolve(locomotives, repair.locomotive)?;
    let team = resolve(teams, repair.team)?;
    Ok(repair.resolve(locomotive, Some(team)))
}

fn resolve<T>(ids: &[Id<T>], index: usize) -> Result<Id<T>>
where
    T: HasId,
    T::IdType: Copy,
{
    ids.get(index).copied().ok_or(DatabaseError::NotFound)
}

#[cfg(test)]
mod tests {
    use model::{locomotive::LocomotiveKind, WithId};

    use super::*;
    use crate::{database::DepotOperations, testing::MemoryDepot};

    #[tokio::test]
    async fn seeds_three_rows_per_table() {
        let mut db = MemoryDepot::default();
        insert_sample_data(&mut db).await.unwrap();

        assert_eq!(Repo::<Locomotive>::count(&mut db).await.unwrap(), 3);
        assert_eq!(Repo::<Team>::count(&mut db).await.unwrap(), 3);
        assert_eq!(Repo::<Repair>::count(&mut db).await.unwrap(), 3);
        assert_eq!(Repo::<Worker>::count(&mut db).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn teams_exist_before_repairs_reference_them() {
        let mut db = MemoryDepot::default();
        db.enforce_references = true;
        insert_sample_data(&mut db).await.unwrap();

        let teams: Vec<WithId<Team>> = Repo::<Team>::get_all(&mut db).await.unwrap();
        let repairs: Vec<WithId<Repair>> = Repo::<Repair>::get_all(&mut db).await.unwrap();
        for repair in repairs {
            let team = repair.content.team.unwrap();
            assert!(teams.iter().any(|t| t.id == team));
        }
    }

    #[test]
    fn unknown_sample_positions_are_not_found() {
        let repairs = sample::repairs();
        let repair = &repairs[0];
        let locomotives = [Id::new(10)];
        let teams = [Id::new(20)];

        let resolved = resolve_repair(repair, &locomotives, &teams).unwrap();
        assert_eq!(resolved.locomotive, Id::new(10));
        assert_eq!(resolved.team, Some(Id::new(20)));

        assert!(matches!(
            resolve_repair(repair, &locomotives, &[]),
            Err(DatabaseError::NotFound)
        ));
        assert!(matches!(
            resolve_repair(repair, &[], &teams),
            Err(DatabaseError::NotFound)
        ));
    }

    #[tokio::test]
    async fn references_use_assigned_keys() {
        let mut db = MemoryDepot::default();
        // shift the key sequences so positions and keys differ
        <MemoryDepot as Repo<Locomotive>>::insert(
            &mut db,
            Locomotive::new("Lviv", LocomotiveKind::Passenger, 1999),
        )
        .await
        .unwrap();
        <MemoryDepot as Repo<Team>>::insert(&mut db, Team::new("000")).await.unwrap();

        db.insert_sample_data().await.unwrap();

        let repairs = Repo::<Repair>::get_all(&mut db).await.unwrap();
        let locomotives = repairs
            .iter()
            .map(|repair| repair.content.locomotive.raw())
            .collect::<Vec<_>>();
        assert_eq!(locomotives, vec![2, 3, 4]);

        let workers = Repo::<Worker>::get_all(&mut db).await.unwrap();
        let teams = workers
            .iter()
            .map(|worker| worker.content.team.raw())
            .collect::<Vec<_>>();
        assert_eq!(teams, vec![2, 2, 3]);
    }
}
