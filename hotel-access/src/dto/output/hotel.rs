use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Hotel> for Hotel {
    fn from(value: repository::Hotel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn hotel_json_serialize_ok() {
        let hotel = Hotel {
            id: 3,
            name: "Grand Plaza".to_string(),
            image: "https://images.example/grand-plaza.jpg".to_string(),
            created_at: datetime!(2024-06-01 10:00:00 UTC),
            updated_at: datetime!(2024-06-02 11:30:00 UTC),
        };

        let json = serde_json::to_value(&hotel).unwrap();

        assert_eq!(
            json,
            json!({
                "id": 3,
                "name": "Grand Plaza",
                "image": "https://images.example/grand-plaza.jpg",
                "createdAt": "2024-06-01T10:00:00Z",
                "updatedAt": "2024-06-02T11:30:00Z",
            })
        );
    }
}
