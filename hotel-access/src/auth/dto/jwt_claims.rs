use serde::Deserialize;
use uuid::Uuid;

///
/// Claims required by the service.
/// `exp` is verified by [jsonwebtoken::Validation].
///
#[derive(Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
}
