mod hotel;
mod hotel_with_rooms;

pub use hotel::*;
pub use hotel_with_rooms::*;
