use thiserror::Error;

pub type Result<T, E = CoordinateError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Malformed sexagesimal value: {0:?}")]
    Malformed(String),

    #[error("{component} out of range: {value}")]
    OutOfRange { component: &'static str, value: f64 },
}

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Over {limit} products found ({count}); use the archive site to download this data")]
    TooManyProducts { count: u64, limit: u64 },

    #[error("Invalid archive config: {0}")]
    Config(#[from] toml::de::Error),
}
