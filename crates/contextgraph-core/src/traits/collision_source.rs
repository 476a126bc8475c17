use async_trait::async_trait;

use crate::errors::GraphResult;
use crate::models::Collision;

#[async_trait]
pub trait CollisionDataSource: Send + Sync {
    /// All collisions between two branches.
    async fn list_collisions(&self, branch_a: &str, branch_b: &str) -> GraphResult<Vec<Collision>>;
}
