#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid canvas config: {message}")]
    InvalidConfig { message: String },
    #[error("duplicate entity id: {id}")]
    DuplicateEntity { id: String },
    #[error("invalid entity {id}: {message}")]
    InvalidEntity { id: String, message: String },
    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
