use crate::error::Error;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntitlementService: Send + Sync {
    ///
    /// Checks whether user may see hotels and their rooms.
    ///
    /// Checks are evaluated in order and the first failed one is reported:
    /// enrollment, ticket and its type, payment.
    ///
    /// ### Errors
    /// - [Error::Forbidden] when
    ///     - user has no enrollment
    ///     - enrollment has no ticket
    ///     - ticket type does not include hotel
    /// - [Error::PaymentRequired] when
    ///     - ticket includes hotel but is not paid
    ///
    async fn check_entitlement(&self, user_id: Uuid) -> Result<(), Error>;
}
