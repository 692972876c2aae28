use matrix_core::{DenseMatrix, ResultLog};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_append_then_read_contains_label_and_dims() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let log = ResultLog::new(dir.path().join("results.txt"));

    let m = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    log.append_result(&m, "A^T (Transponovanje A)").unwrap();

    let text = log.read_all().unwrap().expect("log file should exist");
    assert!(text.contains("Operacija: A^T (Transponovanje A)"));
    assert!(text.contains("Dimenzije: 2x3"));
    assert!(text.contains("    4.00     5.00     6.00 "));

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "========================================");
    assert!(lines[2].starts_with("Vreme: "));
    assert!(lines[2].len() > "Vreme: ".len());
    assert_eq!(lines[3], "Dimenzije: 2x3");
    assert_eq!(lines[4], "========================================");
    assert!(text.ends_with("\n\n"));
}

#[test]
fn test_append_keeps_previous_records() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultLog::new(dir.path().join("results.txt"));
    let m = DenseMatrix::from_rows(&[vec![14.0]]).unwrap();

    log.append_result(&m, "A * B").unwrap();
    log.append_result(&m, "A + B").unwrap();

    let text = log.read_all().unwrap().unwrap();
    let first = text.find("Operacija: A * B").unwrap();
    let second = text.find("Operacija: A + B").unwrap();
    assert!(first < second);
    assert_eq!(text.matches("Dimenzije: 1x1").count(), 2);
}

#[test]
fn test_read_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultLog::new(dir.path().join("never_written.txt"));
    assert_eq!(log.read_all().unwrap(), None);
}

#[test]
fn test_clear_all_yields_empty_not_absent() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultLog::new(dir.path().join("results.txt"));

    // Clearing creates the file even if it never existed.
    log.clear_all().unwrap();
    assert_eq!(log.read_all().unwrap(), Some(String::new()));

    let m = DenseMatrix::<f64>::zeros(2, 2).unwrap();
    log.append_result(&m, "A - B").unwrap();
    assert!(!log.read_all().unwrap().unwrap().is_empty());

    log.clear_all().unwrap();
    assert_eq!(log.read_all().unwrap(), Some(String::new()));
}

#[test]
fn test_unwritable_target_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a log file.
    let log = ResultLog::new(dir.path());
    let m = DenseMatrix::<f64>::zeros(1, 1).unwrap();
    assert!(matches!(
        log.append_result(&m, "A + B"),
        Err(matrix_core::MatrixCoreError::Io(_))
    ));
    assert!(log.clear_all().is_err());
    assert!(log.read_all().is_err());
}
