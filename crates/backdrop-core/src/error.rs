use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackdropError {
    #[error("invalid hex colour `{0}`")]
    InvalidHexColor(String),
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, BackdropError>;
