pub mod labels;
pub mod normalizer;
pub mod stream;

pub use crate::domain::model::{ClassificationTrainRecord, GenerationTrainRecord, TrainRecord};
pub use crate::domain::ports::HasLabels;
pub use crate::utils::error::Result;
