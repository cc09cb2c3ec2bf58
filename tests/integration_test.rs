use std::fs::File;
use std::io::Write;
use trebuchet::calibration::{evaluate_line, scan_line, CalibrationError, LineError, TokenSet};
use trebuchet::driver::{format_sum, run};
use trebuchet::input::INPUT_PATH;

#[test]
fn end_to_end_calibration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(INPUT_PATH);
    let mut file = File::create(&path).unwrap();
    file.write_all(
        b"two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen\n",
    )
    .unwrap();

    let tokens = scan_line("zoneight234", TokenSet::DigitsAndWords);
    assert_eq!(tokens.first().unwrap().text, "one");
    assert_eq!(tokens.last().unwrap().text, "4");
    assert_eq!(evaluate_line("zoneight234", TokenSet::DigitsAndWords).unwrap(), 14);

    let total = run(&path).expect("Should sum input successfully");
    assert_eq!(format_sum(total), "The sum is 281");
}

#[test]
fn undecodable_input_fails_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(INPUT_PATH);
    let mut file = File::create(&path).unwrap();
    file.write_all(b"two1nine\n\xff\xfe7\n").unwrap();

    let err = run(&path).unwrap_err();
    assert!(matches!(err, CalibrationError::InvalidEncoding { .. }));
    assert!(err.line_error().is_none());
}

#[test]
fn malformed_line_fails_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(INPUT_PATH);
    let mut file = File::create(&path).unwrap();
    file.write_all(b"two1nine\neightwothree\nxyz\n").unwrap();

    let err = run(&path).unwrap_err();
    assert!(matches!(err, CalibrationError::Line { line_number: 3, .. }));
    assert!(matches!(
        err.line_error(),
        Some(LineError::MalformedLine(line)) if line == "xyz"
    ));
}
