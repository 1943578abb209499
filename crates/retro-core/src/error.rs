use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetroError>;

#[derive(Debug, Error)]
pub enum RetroError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("scene format error: {0}")]
    SceneFormat(String),

    #[error("trajectory format error: {0}")]
    TrajectoryFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
