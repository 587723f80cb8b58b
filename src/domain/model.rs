use crate::utils::error::{RecordError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record whose target is one or more discrete class labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationTrainRecord<L = String> {
    pub text: String,
    pub labels: Vec<L>,
}

impl<L> ClassificationTrainRecord<L> {
    pub fn new(text: impl Into<String>, labels: Vec<L>) -> Self {
        Self {
            text: text.into(),
            labels,
        }
    }
}

/// A record whose target is free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationTrainRecord {
    pub input: String,
    pub output: String,
}

impl GenerationTrainRecord {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// The closed set of training record shapes accepted by the normalizer.
///
/// Deserializes untagged: a JSON object with `input`/`output` is a generation
/// record, one with `text`/`labels` is a classification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrainRecord<L = String> {
    Generation(GenerationTrainRecord),
    Classification(ClassificationTrainRecord<L>),
}

impl<L> From<GenerationTrainRecord> for TrainRecord<L> {
    fn from(record: GenerationTrainRecord) -> Self {
        TrainRecord::Generation(record)
    }
}

impl<L> From<ClassificationTrainRecord<L>> for TrainRecord<L> {
    fn from(record: ClassificationTrainRecord<L>) -> Self {
        TrainRecord::Classification(record)
    }
}

impl<L> TrainRecord<L> {
    /// Convert the label type of a classification record, leaving generation records as is.
    pub fn map_labels<M>(self, f: impl FnMut(L) -> M) -> TrainRecord<M> {
        match self {
            TrainRecord::Generation(record) => TrainRecord::Generation(record),
            TrainRecord::Classification(record) => {
                TrainRecord::Classification(ClassificationTrainRecord {
                    text: record.text,
                    labels: record.labels.into_iter().map(f).collect(),
                })
            }
        }
    }
}

impl<L: DeserializeOwned> TrainRecord<L> {
    /// Parse a record from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::try_from(value)
    }
}

impl<L: DeserializeOwned> TryFrom<serde_json::Value> for TrainRecord<L> {
    type Error = RecordError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        let found = describe_value(&value);
        serde_json::from_value(value).map_err(|_| RecordError::UnsupportedRecordType { found })
    }
}

fn describe_value(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) => format!("number {}", n),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => format!("array of {} items", items.len()),
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            format!("object with fields [{}]", keys.join(", "))
        }
    }
}
