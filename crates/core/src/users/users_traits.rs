//! User profile query contract.

use async_trait::async_trait;

use super::users_model::UserLimits;
use crate::errors::Result;

/// Read-only queries over user profiles.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// The user's budget targets.
    ///
    /// Fails with [`crate::Error::NotFound`] if no such user exists.
    async fn get_user_limits(&self, user_id: i64) -> Result<UserLimits>;
}
