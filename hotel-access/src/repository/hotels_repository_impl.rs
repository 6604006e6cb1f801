use super::{
    dto::{Hotel, HotelWithRooms},
    entity::{HotelFindEntity, HotelWithRoomsFindEntity},
    Error, HotelsRepository, HOTELS, ROOMS,
};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::Database;

pub struct HotelsRepositoryImpl {
    database: Database,
}

impl HotelsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl HotelsRepository for HotelsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Hotel>, Error> {
        let hotels = self
            .database
            .collection::<HotelFindEntity>(HOTELS)
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(Hotel::from)
            .try_collect()
            .await?;

        Ok(hotels)
    }

    async fn find_by_id(&self, hotel_id: i64) -> Result<Option<Hotel>, Error> {
        let hotel = self
            .database
            .collection::<HotelFindEntity>(HOTELS)
            .find_one(doc! {
                "_id": hotel_id,
            })
            .await?
            .map(Hotel::from);

        Ok(hotel)
    }

    async fn find_with_rooms(&self, hotel_id: i64) -> Result<Option<HotelWithRooms>, Error> {
        let mut cursor = self
            .database
            .collection::<Document>(HOTELS)
            .aggregate([
                doc! {
                    "$match": { "_id": hotel_id }
                },
                doc! {
                    "$lookup": {
                        "from": ROOMS,
                        "localField": "_id",
                        "foreignField": "hotel_id",
                        "as": "rooms",
                    }
                },
            ])
            .await?;

        let Some(document) = cursor.try_next().await? else {
            return Ok(None);
        };
        let entity = bson::from_document::<HotelWithRoomsFindEntity>(document)?;

        Ok(Some(entity.into()))
    }
}
