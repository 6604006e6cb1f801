use crate::{dto::output, error::Error};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelsService: Send + Sync {
    ///
    /// Find all hotels available to the user.
    ///
    /// ### Returns
    /// Vec of hotels, empty when no hotel exists
    ///
    /// ### Errors
    /// - [Error::Forbidden] when
    ///     - user has no enrollment
    ///     - enrollment has no ticket
    ///     - ticket type does not include hotel
    /// - [Error::PaymentRequired] when
    ///     - ticket is not paid
    ///
    async fn find_hotels(&self, user_id: Uuid) -> Result<Vec<output::Hotel>, Error>;

    ///
    /// Find hotel together with its rooms.
    ///
    /// Existence of the hotel is checked before user's entitlement,
    /// so missing hotel is always reported as [Error::HotelNotExist].
    ///
    /// ### Errors
    /// - [Error::HotelNotExist] when
    ///     - hotel with id does not exist
    /// - [Error::Forbidden] and [Error::PaymentRequired]
    ///   same as in [HotelsService::find_hotels]
    ///
    async fn find_hotel_with_rooms(
        &self,
        user_id: Uuid,
        hotel_id: i64,
    ) -> Result<output::HotelWithRooms, Error>;
}
