use bson::DateTime;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct HotelFindEntity {
    pub _id: i64,
    pub name: String,
    pub image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

///
/// Hotel joined with its rooms by `$lookup`
///
#[derive(Deserialize)]
pub struct HotelWithRoomsFindEntity {
    pub _id: i64,
    pub name: String,
    pub image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,

    #[serde(default)]
    pub rooms: Vec<RoomFindEntity>,
}

#[derive(Deserialize)]
pub struct RoomFindEntity {
    pub _id: i64,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
