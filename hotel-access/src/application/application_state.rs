use super::ApplicationEnv;
use crate::{
    repository::{EnrollmentsRepositoryImpl, HotelsRepositoryImpl, TicketsRepositoryImpl},
    service::{
        entitlement_service::EntitlementServiceImpl,
        hotels_service::{HotelsService, HotelsServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub hotels_service: Arc<dyn HotelsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let enrollments_repository = Arc::new(EnrollmentsRepositoryImpl::new(db.clone()));
    let tickets_repository = Arc::new(TicketsRepositoryImpl::new(db.clone()));
    let hotels_repository = Arc::new(HotelsRepositoryImpl::new(db));

    tracing::info!("creating services");
    let entitlement_service =
        EntitlementServiceImpl::new(enrollments_repository, tickets_repository);
    let entitlement_service = Arc::new(entitlement_service);

    let hotels_service = HotelsServiceImpl::new(entitlement_service, hotels_repository);
    let hotels_service = Arc::new(hotels_service);

    Ok((
        ApplicationState { hotels_service },
        ApplicationStateToClose { db_client },
    ))
}
