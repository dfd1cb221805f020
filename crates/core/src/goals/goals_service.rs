use std::sync::Arc;

use log::debug;

use crate::contributions::ContributionRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;

/// Service for managing savings goals.
///
/// Holds the contribution repository as well, because deleting a goal
/// cascades to every contribution that references it.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    contribution_repository: Arc<dyn ContributionRepositoryTrait>,
}

impl GoalService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        contribution_repository: Arc<dyn ContributionRepositoryTrait>,
    ) -> Self {
        GoalService {
            goal_repository,
            contribution_repository,
        }
    }

    fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        Ok(())
    }

    fn validate_target_amount(target_amount: f64) -> Result<()> {
        if !target_amount.is_finite() || target_amount <= 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "targetAmount must be a positive number, got {}",
                target_amount
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repository.load_goals()
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repository.get_goal(goal_id)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        Self::validate_title(&new_goal.title)?;
        Self::validate_target_amount(new_goal.target_amount)?;
        self.goal_repository.insert_new_goal(new_goal).await
    }

    async fn update_goal(&self, goal_id: String, update: GoalUpdate) -> Result<Goal> {
        if let Some(title) = update.title.as_deref() {
            Self::validate_title(title)?;
        }
        if let Some(target_amount) = update.target_amount {
            Self::validate_target_amount(target_amount)?;
        }
        self.goal_repository.update_goal(goal_id, update).await
    }

    /// Deletes a goal and cascades to its contributions.
    ///
    /// The two deletes run as separate writer jobs; the single-writer storage
    /// backend keeps other writes from interleaving, but a concurrent read may
    /// briefly observe contributions whose goal is already gone.
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<()> {
        let deleted = self
            .goal_repository
            .delete_goal(goal_id_to_delete.clone())
            .await?;
        if deleted == 0 {
            return Err(Error::not_found(format!("goal {}", goal_id_to_delete)));
        }

        let removed = self
            .contribution_repository
            .delete_all_by_goal(goal_id_to_delete.clone())
            .await?;
        debug!(
            "Deleted goal {} and {} contribution(s)",
            goal_id_to_delete, removed
        );
        Ok(())
    }
}
