pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{LogFormat, LoggingConfig};
pub use crate::core::{
    labels::get_sorted_unique_class_labels,
    normalizer::{
        convert_to_generation_record, convert_value_to_generation_record, IntoGenerationRecord,
    },
    stream::DataStream,
};
pub use domain::model::{ClassificationTrainRecord, GenerationTrainRecord, TrainRecord};
pub use domain::ports::HasLabels;
pub use utils::error::{RecordError, Result};
