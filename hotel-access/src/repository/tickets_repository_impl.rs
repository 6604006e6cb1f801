use super::{
    dto::Ticket, entity::TicketFindEntity, Error, TicketsRepository, TICKETS, TICKET_TYPES,
};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::Database;

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn find_by_enrollment_id(&self, enrollment_id: i64) -> Result<Option<Ticket>, Error> {
        let mut cursor = self
            .database
            .collection::<Document>(TICKETS)
            .aggregate([
                doc! {
                    "$match": { "enrollment_id": enrollment_id }
                },
                doc! {
                    "$limit": 1
                },
                doc! {
                    "$lookup": {
                        "from": TICKET_TYPES,
                        "localField": "ticket_type_id",
                        "foreignField": "_id",
                        "as": "ticket_type",
                    }
                },
                doc! {
                    "$unwind": "$ticket_type"
                },
            ])
            .await?;

        let Some(document) = cursor.try_next().await? else {
            return Ok(None);
        };
        let entity = bson::from_document::<TicketFindEntity>(document)?;

        Ok(Some(entity.into()))
    }
}
