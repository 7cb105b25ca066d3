use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiverForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Mask Parsing Error: {0}")]
    MaskParse(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("the grid mask has no usable cell")]
    EmptyMask,

    #[error("no usable border cell to start the river from")]
    NoStartCell,
}

pub type RfResult<T> = Result<T, RiverForgeError>;
