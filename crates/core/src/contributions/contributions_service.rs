use std::sync::Arc;

use crate::contributions::contributions_model::{Contribution, NewContribution};
use crate::contributions::contributions_traits::{
    ContributionRepositoryTrait, ContributionServiceTrait,
};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::GoalRepositoryTrait;
use async_trait::async_trait;

/// Service for managing contributions.
///
/// Creation checks that the referenced goal exists before inserting. The sum
/// of contributions is deliberately allowed to exceed the goal's target; the
/// progress view clamps the displayed percentage instead.
pub struct ContributionService {
    contribution_repository: Arc<dyn ContributionRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl ContributionService {
    pub fn new(
        contribution_repository: Arc<dyn ContributionRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        ContributionService {
            contribution_repository,
            goal_repository,
        }
    }

    fn validate_amount(amount: f64) -> Result<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "amount must be a positive number, got {}",
                amount
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl ContributionServiceTrait for ContributionService {
    fn get_contributions_by_goal(&self, goal_id: &str) -> Result<Vec<Contribution>> {
        self.contribution_repository.load_by_goal(goal_id)
    }

    async fn create_contribution(
        &self,
        new_contribution: NewContribution,
    ) -> Result<Contribution> {
        Self::validate_amount(new_contribution.amount)?;

        // Existence check before insert. A goal deleted between this check
        // and the insert leaves an orphaned contribution; see delete_goal.
        self.goal_repository.get_goal(&new_contribution.goal_id)?;

        self.contribution_repository
            .insert_new_contribution(new_contribution)
            .await
    }

    async fn delete_contribution(&self, contribution_id: String) -> Result<()> {
        let deleted = self
            .contribution_repository
            .delete_contribution(contribution_id.clone())
            .await?;
        if deleted == 0 {
            return Err(Error::not_found(format!(
                "contribution {}",
                contribution_id
            )));
        }
        Ok(())
    }
}
