#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("document deserialization error: {0}")]
    Deserialization(#[from] bson::de::Error),
}
