use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonMapError {
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("partial update requires a JSON object, got {0}")]
    UpdateShape(&'static str),
}

pub type Result<T> = std::result::Result<T, JsonMapError>;
