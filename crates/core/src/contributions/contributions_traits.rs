use crate::contributions::contributions_model::{Contribution, NewContribution};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for contribution repository operations
#[async_trait]
pub trait ContributionRepositoryTrait: Send + Sync {
    fn load_by_goal(&self, goal_id: &str) -> Result<Vec<Contribution>>;
    async fn insert_new_contribution(
        &self,
        new_contribution: NewContribution,
    ) -> Result<Contribution>;
    async fn delete_contribution(&self, contribution_id: String) -> Result<usize>;
    async fn delete_all_by_goal(&self, goal_id: String) -> Result<usize>;
}

/// Trait for contribution service operations
#[async_trait]
pub trait ContributionServiceTrait: Send + Sync {
    fn get_contributions_by_goal(&self, goal_id: &str) -> Result<Vec<Contribution>>;
    async fn create_contribution(
        &self,
        new_contribution: NewContribution,
    ) -> Result<Contribution>;
    async fn delete_contribution(&self, contribution_id: String) -> Result<()>;
}
