pub mod adjacency_lists;
pub mod chip_cost;
pub mod data_cleaning;
pub mod error;
pub mod path_sum;
pub mod video_search;

pub use error::{ExerciseError, Result};
