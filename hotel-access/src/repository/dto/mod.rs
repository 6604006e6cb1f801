mod enrollment;
mod hotel;
mod ticket;

pub use enrollment::*;
pub use hotel::*;
pub use ticket::*;
