use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("user {0} is not in the friend graph")]
    UnknownUser(usize),
    #[error("Invalid tree: {0}")]
    InvalidTree(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
