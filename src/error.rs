use thiserror::Error;

pub type SplashResult<T> = Result<T, SplashError>;

#[derive(Debug, Error)]
pub enum SplashError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("csv parse error at record {record}: {message}")]
    CsvParse { record: usize, message: String },

    #[error("dataset fetch failed: {0}")]
    Fetch(String),
}
