mod dto;
mod jwt_keys;
mod middleware;

pub use dto::User;
pub use jwt_keys::*;
pub use middleware::JwtAuthLayer;
