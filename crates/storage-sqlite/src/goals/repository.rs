use alcancia_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use alcancia_core::Result;

use super::model::GoalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use crate::schema::goals::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Goal::from(goal_db))
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let new_goal_db: GoalDB = new_goal.into();

                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal(&self, goal_id: String, update: GoalUpdate) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                // Read-merge-write so unsupplied fields keep their values.
                let mut goal_db = goals
                    .find(goal_id.clone())
                    .first::<GoalDB>(conn)
                    .map_err(StorageError::from)?;

                if let Some(new_title) = update.title {
                    goal_db.title = new_title;
                }
                if let Some(new_target) = update.target_amount {
                    goal_db.target_amount = new_target;
                }
                if let Some(new_image_url) = update.image_url {
                    goal_db.image_url = Some(new_image_url);
                }
                goal_db.updated_at = Utc::now().to_rfc3339();

                diesel::update(goals.find(goal_id))
                    .set(&goal_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(goal_db))
            })
            .await
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(goals.find(goal_id_to_delete))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
