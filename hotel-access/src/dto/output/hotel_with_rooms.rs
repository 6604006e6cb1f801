use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRooms {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::HotelWithRooms> for HotelWithRooms {
    fn from(value: repository::HotelWithRooms) -> Self {
        let repository::HotelWithRooms { hotel, rooms } = value;

        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
            rooms: rooms.into_iter().map(Room::from).collect(),
        }
    }
}

impl From<repository::Room> for Room {
    fn from(value: repository::Room) -> Self {
        Self {
            id: value.id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
