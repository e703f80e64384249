use std::io::Write;

use ride_cli::{load_config, run_file};
use ride_core::engine::EngineConfig;
use tempfile::NamedTempFile;

const REFERENCE_SCRIPT: &str = "\
ADD_DRIVER D1 2 1
ADD_DRIVER D2 3 5
ADD_DRIVER D4 4 4
ADD_DRIVER D5 5 4
ADD_DRIVER D6 6 3
ADD_DRIVER D7 7 2
ADD_RIDER R1 5 5
ADD_RIDER R2 0 1
MATCH R2
START_RIDE RIDE-101 1 R2
MATCH R1
BILL RIDE-101
STOP_RIDE RIDE-101 6 7 32
BILL RIDE-101
MATCH R1
";

#[test]
fn reference_script_produces_expected_lines() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(REFERENCE_SCRIPT.as_bytes()).expect("write script");

    let outputs = run_file(file.path(), EngineConfig::default()).expect("run script");
    assert_eq!(
        outputs,
        vec![
            "DRIVERS_MATCHED D1 D2 D4",
            "RIDE_STARTED RIDE-101",
            "DRIVERS_MATCHED D5 D4 D2 D6 D7",
            "RIDE_NOT_COMPLETED",
            "RIDE_STOPPED RIDE-101",
            "BILL RIDE-101 D1 203.02",
            "DRIVERS_MATCHED D5 D4 D2 D6 D7 D1",
        ]
    );
}

#[test]
fn missing_script_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.txt");
    assert!(run_file(&missing, EngineConfig::default()).is_err());
}

#[test]
fn config_file_overrides_pricing() {
    let mut config_file = NamedTempFile::new().expect("temp file");
    config_file
        .write_all(br#"{"pricing": {"base_fare": 100.0}}"#)
        .expect("write config");

    let config = load_config(config_file.path()).expect("load config");
    assert_eq!(config.pricing.base_fare, 100.0);
    // Unspecified fields keep their defaults.
    assert_eq!(config.pricing.per_km_rate, 6.5);
    assert_eq!(config.match_radius_km, 5.0);

    let mut script = NamedTempFile::new().expect("temp file");
    script
        .write_all(b"ADD_DRIVER D1 0 0\nADD_RIDER R1 0 0\nMATCH R1\nSTART_RIDE RIDE-1 1 R1\nSTOP_RIDE RIDE-1 0 0 0\nBILL RIDE-1\n")
        .expect("write script");

    let outputs = run_file(script.path(), config).expect("run script");
    // (100 + 0 + 0) * 1.2 = 120.00
    assert_eq!(outputs.last().map(String::as_str), Some("BILL RIDE-1 D1 120.00"));
}
