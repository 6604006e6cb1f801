use crate::repository::entity::{TicketFindEntity, TicketTypeFindEntity};
use strum::EnumString;

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: i64,
    pub enrollment_id: i64,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

#[derive(Debug, Clone)]
pub struct TicketType {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

///
/// Payment status of the ticket.
///
/// Statuses unknown to this service are kept in [TicketStatus::Other]
/// and are never considered paid.
///
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
    #[strum(disabled)]
    Other(String),
}

impl From<String> for TicketStatus {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| TicketStatus::Other(value))
    }
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id,
            enrollment_id: value.enrollment_id,
            status: value.status.into(),
            ticket_type: value.ticket_type.into(),
        }
    }
}

impl From<TicketTypeFindEntity> for TicketType {
    fn from(value: TicketTypeFindEntity) -> Self {
        Self {
            id: value._id,
            name: value.name,
            price: value.price,
            is_remote: value.is_remote,
            includes_hotel: value.includes_hotel,
        }
    }
}
