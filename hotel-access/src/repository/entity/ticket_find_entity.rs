use serde::Deserialize;

///
/// Ticket joined with its type by `$lookup`
///
#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: i64,
    pub enrollment_id: i64,
    pub status: String,
    pub ticket_type: TicketTypeFindEntity,
}

#[derive(Deserialize)]
pub struct TicketTypeFindEntity {
    pub _id: i64,
    pub name: String,
    pub price: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
}
