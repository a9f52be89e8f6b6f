use thiserror::Error;

/// Errors reported by the grid and the engine.
///
/// `tick` never fails; everything here comes from construction or from
/// caller-supplied coordinates.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cell ({row}, {col}) is outside the {width}x{height} field")]
    OutOfRange {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    #[error("cell index {idx} is outside the field of {len} cells")]
    IndexOutOfRange { idx: usize, len: usize },

    #[error("expected {expected} cell states, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("field dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("fill rate {0} is not in [0, 1]")]
    InvalidDensity(f64),

    #[error("RLE error: {0}")]
    Rle(String),

    #[error("seed config error: {0}")]
    Seed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
