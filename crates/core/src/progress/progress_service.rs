use std::sync::Arc;

use crate::contributions::ContributionRepositoryTrait;
use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::progress::progress_model::GoalProgress;

/// Rounds to two decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Trait for progress calculation.
pub trait ProgressServiceTrait: Send + Sync {
    fn get_progress(&self, goal_id: &str) -> Result<GoalProgress>;
}

/// Computes aggregate progress for a goal.
///
/// The goal and its contributions are read independently, without a
/// transaction. Under concurrent inserts the total may be transiently
/// stale, which is acceptable for a display metric.
pub struct ProgressService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    contribution_repository: Arc<dyn ContributionRepositoryTrait>,
}

impl ProgressService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        contribution_repository: Arc<dyn ContributionRepositoryTrait>,
    ) -> Self {
        ProgressService {
            goal_repository,
            contribution_repository,
        }
    }
}

impl ProgressServiceTrait for ProgressService {
    fn get_progress(&self, goal_id: &str) -> Result<GoalProgress> {
        let goal = self.goal_repository.get_goal(goal_id)?;
        let contributions = self.contribution_repository.load_by_goal(goal_id)?;

        let total_contributed: f64 = contributions.iter().map(|c| c.amount).sum();
        // targetAmount > 0 is enforced at goal creation, so the division is safe.
        let percent_complete =
            round2((total_contributed / goal.target_amount * 100.0).min(100.0));

        Ok(GoalProgress {
            goal_id: goal.id,
            title: goal.title,
            total_contributed,
            target_amount: goal.target_amount,
            percent_complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contributions::{Contribution, NewContribution};
    use crate::errors::Error;
    use crate::goals::{Goal, GoalUpdate, NewGoal};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockGoalRepository {
        goals: Vec<Goal>,
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.clone())
        }

        fn get_goal(&self, goal_id: &str) -> Result<Goal> {
            self.goals
                .iter()
                .find(|g| g.id == goal_id)
                .cloned()
                .ok_or_else(|| Error::not_found(format!("goal {}", goal_id)))
        }

        async fn insert_new_goal(&self, _: NewGoal) -> Result<Goal> {
            unimplemented!()
        }
        async fn update_goal(&self, _: String, _: GoalUpdate) -> Result<Goal> {
            unimplemented!()
        }
        async fn delete_goal(&self, _: String) -> Result<usize> {
            unimplemented!()
        }
    }

    struct MockContributionRepository {
        contributions: Vec<Contribution>,
    }

    #[async_trait]
    impl ContributionRepositoryTrait for MockContributionRepository {
        fn load_by_goal(&self, goal_id: &str) -> Result<Vec<Contribution>> {
            Ok(self
                .contributions
                .iter()
                .filter(|c| c.goal_id == goal_id)
                .cloned()
                .collect())
        }

        async fn insert_new_contribution(&self, _: NewContribution) -> Result<Contribution> {
            unimplemented!()
        }
        async fn delete_contribution(&self, _: String) -> Result<usize> {
            unimplemented!()
        }
        async fn delete_all_by_goal(&self, _: String) -> Result<usize> {
            unimplemented!()
        }
    }

    fn build_service(target_amount: f64, amounts: &[f64]) -> ProgressService {
        let goal = Goal {
            id: "g1".to_string(),
            title: "Bike".to_string(),
            target_amount,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let contributions = amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| Contribution {
                id: format!("c{}", i),
                goal_id: "g1".to_string(),
                amount: *amount,
                note: None,
                date: Utc::now(),
            })
            .collect();
        ProgressService::new(
            Arc::new(MockGoalRepository { goals: vec![goal] }),
            Arc::new(MockContributionRepository { contributions }),
        )
    }

    #[test]
    fn progress_sums_contributions_exactly() {
        // Scenario A: 50 + 150 toward a 200 target.
        let service = build_service(200.0, &[50.0, 150.0]);
        let progress = service.get_progress("g1").unwrap();
        assert_eq!(progress.total_contributed, 200.0);
        assert_eq!(progress.percent_complete, 100.0);
        assert_eq!(progress.title, "Bike");
        assert_eq!(progress.target_amount, 200.0);
    }

    #[test]
    fn progress_clamps_percent_but_not_total() {
        // Scenario B: 150 toward a 100 target.
        let service = build_service(100.0, &[150.0]);
        let progress = service.get_progress("g1").unwrap();
        assert_eq!(progress.total_contributed, 150.0);
        assert_eq!(progress.percent_complete, 100.0);
    }

    #[test]
    fn progress_of_unknown_goal_is_not_found() {
        // Scenario C.
        let service = build_service(100.0, &[]);
        assert!(service.get_progress("ghost").unwrap_err().is_not_found());
    }

    #[test]
    fn progress_without_contributions_is_zero() {
        let service = build_service(100.0, &[]);
        let progress = service.get_progress("g1").unwrap();
        assert_eq!(progress.total_contributed, 0.0);
        assert_eq!(progress.percent_complete, 0.0);
    }

    #[test]
    fn progress_rounds_to_two_decimals() {
        // 1/3 of the target: 33.333... -> 33.33
        let service = build_service(300.0, &[100.0]);
        let progress = service.get_progress("g1").unwrap();
        assert_eq!(progress.percent_complete, 33.33);
    }

    #[test]
    fn progress_is_idempotent_without_writes() {
        let service = build_service(200.0, &[25.0, 75.0]);
        let first = service.get_progress("g1").unwrap();
        let second = service.get_progress("g1").unwrap();
        assert_eq!(first, second);
    }
}
