use crate::repository::entity::{HotelFindEntity, HotelWithRoomsFindEntity, RoomFindEntity};
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl From<HotelFindEntity> for Hotel {
    fn from(value: HotelFindEntity) -> Self {
        Self {
            id: value._id,
            name: value.name,
            image: value.image,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}

impl From<RoomFindEntity> for Room {
    fn from(value: RoomFindEntity) -> Self {
        Self {
            id: value._id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}

impl From<HotelWithRoomsFindEntity> for HotelWithRooms {
    fn from(value: HotelWithRoomsFindEntity) -> Self {
        let hotel = Hotel {
            id: value._id,
            name: value.name,
            image: value.image,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        };
        let rooms = value.rooms.into_iter().map(Room::from).collect();

        Self { hotel, rooms }
    }
}
