use super::{dto::Enrollment, error::Error};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentsRepository: Send + Sync {
    ///
    /// Finds enrollment that belongs to the user
    ///
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Enrollment>, Error>;
}
