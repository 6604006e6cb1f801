use super::{dto::Ticket, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Finds ticket bought within the enrollment together with its type.
    ///
    /// Ticket that references a missing ticket type is treated as non-existent.
    ///
    async fn find_by_enrollment_id(&self, enrollment_id: i64) -> Result<Option<Ticket>, Error>;
}
