use std::io::Write;
use tempfile::NamedTempFile;
use train_records::utils::validation::Validate;
use train_records::{LogFormat, LoggingConfig, RecordError};

#[test]
fn test_logging_config_file_round_trip_to_logger() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"level = \"debug\"\nformat = \"json\"\n")
        .unwrap();

    let config = LoggingConfig::from_file(temp_file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.format, LogFormat::Json);

    // Only one global subscriber per test binary; this file installs it.
    assert!(train_records::utils::logger::init_logger(&config));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = LoggingConfig::from_file("/nonexistent/train-records/logging.toml").unwrap_err();
    assert!(matches!(err, RecordError::IoError(_)));
}
