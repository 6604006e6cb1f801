mod dto;
mod enrollments_repository;
mod enrollments_repository_impl;
mod entity;
mod error;
mod hotels_repository;
mod hotels_repository_impl;
mod tickets_repository;
mod tickets_repository_impl;

pub use dto::*;
pub use enrollments_repository::*;
pub use enrollments_repository_impl::*;
pub use error::*;
pub use hotels_repository::*;
pub use hotels_repository_impl::*;
pub use tickets_repository::*;
pub use tickets_repository_impl::*;

const ENROLLMENTS: &str = "enrollments";
const TICKETS: &str = "tickets";
const TICKET_TYPES: &str = "ticket_types";
const HOTELS: &str = "hotels";
const ROOMS: &str = "rooms";
