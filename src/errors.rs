use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("Face recognition failed: {0}")]
    Recognition(String),

    #[error("Object storage failed: {0}")]
    Storage(String),

    #[error("Message bus failed: {0}")]
    Bus(String),

    #[error("Rate table failed: {0}")]
    RateTable(String),

    #[error("Webhook delivery failed: {0}")]
    Delivery(String),

    #[error("Thumbnail generation failed: {0}")]
    Thumbnail(String),

    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

impl From<reqwest::Error> for GateError {
    fn from(error: reqwest::Error) -> Self {
        GateError::Delivery(error.to_string())
    }
}

impl From<image::ImageError> for GateError {
    fn from(error: image::ImageError) -> Self {
        GateError::Thumbnail(error.to_string())
    }
}
