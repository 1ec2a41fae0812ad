use crate::scorer::types::Slot;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontaineError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("{slot} has no main stat")]
    MissingMainStat { slot: Slot },

    #[error("{slot} has {count} main stats, expected exactly one")]
    MultipleMainStats { slot: Slot, count: usize },

    #[error("{slot} has {count} substats, at most 4 are possible")]
    TooManySubstats { slot: Slot, count: usize },

    #[error("{slot} substat '{name}' has no rolls")]
    ZeroRollSubstat { slot: Slot, name: String },

    #[error("{slot} lists substat '{name}' more than once")]
    DuplicateSubstat { slot: Slot, name: String },

    #[error("Cannot compute percentiles of an empty cohort")]
    EmptyCohort,
}

pub type FResult<T> = Result<T, FontaineError>;
