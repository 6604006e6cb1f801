use bson::Uuid;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct EnrollmentFindEntity {
    pub _id: i64,
    pub user_id: Uuid,
}
