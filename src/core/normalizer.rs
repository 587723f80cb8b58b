use crate::core::{ClassificationTrainRecord, GenerationTrainRecord, Result, TrainRecord};
use std::fmt::Display;

const LABEL_SEPARATOR: &str = ",";

/// Conversion into the canonical generation record shape.
pub trait IntoGenerationRecord {
    fn into_generation_record(self) -> GenerationTrainRecord;
}

impl IntoGenerationRecord for GenerationTrainRecord {
    fn into_generation_record(self) -> GenerationTrainRecord {
        self
    }
}

impl<L: Display> IntoGenerationRecord for ClassificationTrainRecord<L> {
    fn into_generation_record(self) -> GenerationTrainRecord {
        GenerationTrainRecord {
            output: join_labels(&self.labels),
            input: self.text,
        }
    }
}

impl<L: Display> IntoGenerationRecord for TrainRecord<L> {
    fn into_generation_record(self) -> GenerationTrainRecord {
        match self {
            TrainRecord::Generation(record) => record.into_generation_record(),
            TrainRecord::Classification(record) => record.into_generation_record(),
        }
    }
}

/// Convert any supported training record into a generation record.
///
/// Generation records pass through untouched. Classification records become
/// `input = text`, `output = labels` joined with `,` in their original order.
pub fn convert_to_generation_record(record: impl IntoGenerationRecord) -> GenerationTrainRecord {
    record.into_generation_record()
}

/// Same as [`convert_to_generation_record`] for records that arrive as untyped JSON.
///
/// Fails with `RecordError::UnsupportedRecordType` when `value` is neither record
/// shape. Logging the failure is left to the caller via `RecordError::log`.
pub fn convert_value_to_generation_record(
    value: serde_json::Value,
) -> Result<GenerationTrainRecord> {
    let record: TrainRecord<serde_json::Value> = TrainRecord::try_from(value)?;
    Ok(convert_to_generation_record(record.map_labels(JsonLabel)))
}

fn join_labels<L: Display>(labels: &[L]) -> String {
    labels
        .iter()
        .map(|label| label.to_string())
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

// Strings print bare; everything else prints as compact JSON.
struct JsonLabel(serde_json::Value);

impl Display for JsonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RecordError;
    use serde_json::json;

    #[test]
    fn test_generation_record_passes_through() {
        let record = GenerationTrainRecord::new("translate: bonjour", "hello");
        let converted = convert_to_generation_record(record.clone());
        assert_eq!(converted, record);
    }

    #[test]
    fn test_classification_labels_joined_in_order() {
        let record = ClassificationTrainRecord::new(
            "hello",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        );
        assert_eq!(
            convert_to_generation_record(record),
            GenerationTrainRecord::new("hello", "a,b,c")
        );
    }

    #[test]
    fn test_duplicate_labels_are_kept() {
        let record = ClassificationTrainRecord::new("x", vec!["b", "a", "b"]);
        assert_eq!(convert_to_generation_record(record).output, "b,a,b");
    }

    #[test]
    fn test_numeric_labels_are_stringified() {
        let record = ClassificationTrainRecord::new("x", vec![10, 2]);
        assert_eq!(convert_to_generation_record(record).output, "10,2");
    }

    #[test]
    fn test_empty_labels_give_empty_output() {
        let record = ClassificationTrainRecord::<String>::new("no labels", vec![]);
        let converted = convert_to_generation_record(record);
        assert_eq!(converted.input, "no labels");
        assert_eq!(converted.output, "");
    }

    #[test]
    fn test_enum_dispatch_matches_direct_conversion() {
        let record = ClassificationTrainRecord::new("t", vec!["x", "y"]);
        let via_enum = convert_to_generation_record(TrainRecord::Classification(record.clone()));
        assert_eq!(via_enum, convert_to_generation_record(record));
    }

    #[test]
    fn test_value_with_mixed_labels() {
        let converted =
            convert_value_to_generation_record(json!({"text": "t", "labels": ["spam", 1, true]}))
                .unwrap();
        assert_eq!(converted.output, "spam,1,true");
    }

    #[test]
    fn test_value_rejects_plain_string() {
        let err = convert_value_to_generation_record(json!("just text")).unwrap_err();
        assert!(matches!(err, RecordError::UnsupportedRecordType { .. }));
        assert_eq!(err.code(), Some("NLP12517812E"));
    }
}
