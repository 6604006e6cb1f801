mod enrollment_find_entity;
mod hotel_find_entity;
mod ticket_find_entity;

pub use enrollment_find_entity::*;
pub use hotel_find_entity::*;
pub use ticket_find_entity::*;
