pub mod exercise;
pub mod log_id;
pub mod stored_row;
pub mod templates;
pub mod training;

pub use exercise::ExerciseRecord;
pub use log_id::LogId;
pub use stored_row::StoredSetRow;
pub use training::{TrainingEntry, TrainingLog, TrainingSet};
