use super::{
    dto::{Hotel, HotelWithRooms},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelsRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Hotel>, Error>;

    async fn find_by_id(&self, hotel_id: i64) -> Result<Option<Hotel>, Error>;

    ///
    /// Finds hotel together with all of its rooms.
    /// Hotel without rooms has an empty `rooms` vec.
    ///
    async fn find_with_rooms(&self, hotel_id: i64) -> Result<Option<HotelWithRooms>, Error>;
}
