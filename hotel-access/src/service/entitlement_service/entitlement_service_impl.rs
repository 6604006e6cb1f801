use super::{EntitlementService, Rejection};
use crate::{
    error::Error,
    repository::{self, EnrollmentsRepository, TicketStatus, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct EntitlementServiceImpl {
    enrollments_repository: Arc<dyn EnrollmentsRepository>,
    tickets_repository: Arc<dyn TicketsRepository>,
}

impl EntitlementServiceImpl {
    pub fn new(
        enrollments_repository: Arc<dyn EnrollmentsRepository>,
        tickets_repository: Arc<dyn TicketsRepository>,
    ) -> Self {
        Self {
            enrollments_repository,
            tickets_repository,
        }
    }

    async fn find_rejection(&self, user_id: Uuid) -> Result<Option<Rejection>, repository::Error> {
        let Some(enrollment) = self.enrollments_repository.find_by_user_id(user_id).await? else {
            return Ok(Some(Rejection::NoEnrollment));
        };
        tracing::debug!(enrollment_id = enrollment.id, "found enrollment");

        let Some(ticket) = self
            .tickets_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
        else {
            return Ok(Some(Rejection::NoTicket));
        };
        tracing::debug!(ticket_id = ticket.id, status = ?ticket.status, "found ticket");

        if !ticket.ticket_type.includes_hotel {
            return Ok(Some(Rejection::TicketWithoutHotel));
        }
        if ticket.status != TicketStatus::Paid {
            return Ok(Some(Rejection::PaymentPending));
        }

        Ok(None)
    }
}

#[async_trait]
impl EntitlementService for EntitlementServiceImpl {
    async fn check_entitlement(&self, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("checking entitlement");

        match self.find_rejection(user_id).await? {
            None => {
                tracing::info!("entitlement granted");
                Ok(())
            }
            Some(rejection) => {
                tracing::info!(%rejection, "entitlement rejected");
                Err(rejection.into())
            }
        }
    }
}
