use super::HotelsService;
use crate::{
    dto::output, error::Error, repository::HotelsRepository,
    service::entitlement_service::EntitlementService,
};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct HotelsServiceImpl {
    entitlement_service: Arc<dyn EntitlementService>,
    repository: Arc<dyn HotelsRepository>,
}

impl HotelsServiceImpl {
    pub fn new(
        entitlement_service: Arc<dyn EntitlementService>,
        repository: Arc<dyn HotelsRepository>,
    ) -> Self {
        Self {
            entitlement_service,
            repository,
        }
    }
}

#[async_trait]
impl HotelsService for HotelsServiceImpl {
    async fn find_hotels(&self, user_id: Uuid) -> Result<Vec<output::Hotel>, Error> {
        self.entitlement_service.check_entitlement(user_id).await?;

        tracing::info!("finding hotels");

        let hotels = self.repository.find_all().await?;
        tracing::info!(count = hotels.len(), "found hotels");

        let hotels = hotels.into_iter().map(output::Hotel::from).collect();

        Ok(hotels)
    }

    async fn find_hotel_with_rooms(
        &self,
        user_id: Uuid,
        hotel_id: i64,
    ) -> Result<output::HotelWithRooms, Error> {
        tracing::info!(hotel_id, "finding hotel");

        // must stay before entitlement check
        self.repository
            .find_by_id(hotel_id)
            .await?
            .ok_or(Error::HotelNotExist)?;

        self.entitlement_service.check_entitlement(user_id).await?;

        let hotel_with_rooms = self
            .repository
            .find_with_rooms(hotel_id)
            .await?
            .ok_or(Error::HotelNotExist)?;

        tracing::info!(rooms = hotel_with_rooms.rooms.len(), "found hotel");

        Ok(hotel_with_rooms.into())
    }
}
