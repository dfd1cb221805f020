use alcancia_core::contributions::{
    Contribution, ContributionRepositoryTrait, NewContribution,
};
use alcancia_core::Result;

use super::model::ContributionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::contributions;
use crate::schema::contributions::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct ContributionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ContributionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ContributionRepository { pool, writer }
    }
}

#[async_trait]
impl ContributionRepositoryTrait for ContributionRepository {
    fn load_by_goal(&self, goal_id_filter: &str) -> Result<Vec<Contribution>> {
        let mut conn = get_connection(&self.pool)?;
        let contributions_db = contributions
            .filter(goal_id.eq(goal_id_filter))
            .load::<ContributionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(contributions_db
            .into_iter()
            .map(Contribution::from)
            .collect())
    }

    async fn insert_new_contribution(
        &self,
        new_contribution: NewContribution,
    ) -> Result<Contribution> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<Contribution> {
                    let new_contribution_db: ContributionDB = new_contribution.into();

                    let result_db = diesel::insert_into(contributions::table)
                        .values(&new_contribution_db)
                        .returning(ContributionDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    Ok(Contribution::from(result_db))
                },
            )
            .await
    }

    async fn delete_contribution(&self, contribution_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(contributions.find(contribution_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn delete_all_by_goal(&self, goal_id_filter: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(contributions.filter(goal_id.eq(goal_id_filter)))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
