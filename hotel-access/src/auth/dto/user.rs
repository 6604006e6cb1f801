use uuid::Uuid;

///
/// Authenticated user retrieved from the JWT.
///
/// Inserted into request extensions by [crate::auth::JwtAuthLayer].
///
#[derive(Debug, Clone, Copy)]
pub struct User {
    pub id: Uuid,
}

impl User {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
