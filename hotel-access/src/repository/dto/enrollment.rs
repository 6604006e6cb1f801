use crate::repository::entity::EnrollmentFindEntity;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: Uuid,
}

impl From<EnrollmentFindEntity> for Enrollment {
    fn from(value: EnrollmentFindEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id.into(),
        }
    }
}
