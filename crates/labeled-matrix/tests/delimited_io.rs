//! Integration tests for reading and writing delimited text.

use labeled_matrix::io::{read_matrix, write_matrix};
use labeled_matrix::{DelimitedFormat, Delimiter, Matrix, MatrixError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn features() -> Matrix<f64> {
    Matrix::from_rows(vec![
        vec![1.5, -2.0, 0.1],
        vec![0.0, 3.25, 1e-7],
        vec![42.0, 0.333, -0.5],
    ])
    .unwrap()
    .with_row_labels(vec!["psm_1", "psm_2", "psm_3"])
    .unwrap()
    .with_column_labels(vec!["score", "delta", "ratio"])
    .unwrap()
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

#[test]
fn read_tsv_with_both_label_axes() {
    init_logger();
    let text = "id\ta\tb\nr1\t1\t2\nr2\t3\t4\n";
    let m: Matrix<f64> = read_matrix(text.as_bytes(), &DelimitedFormat::tsv()).unwrap();
    assert_eq!(m.dimensions(), (2, 2));
    assert_eq!(m.column_labels(), &["a", "b"]);
    assert_eq!(m.row_labels(), &["r1", "r2"]);
    assert_eq!(m.flatten(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn read_skips_blank_lines() {
    let text = "id\ta\n\nr1\t1\n   \nr2\t2\n\n";
    let m: Matrix<f64> = read_matrix(text.as_bytes(), &DelimitedFormat::tsv()).unwrap();
    assert_eq!(m.column(0), vec![1.0, 2.0]);
}

#[test]
fn read_unlabeled_integers() {
    let text = "1,2,3\n4,5,6\n";
    let m: Matrix<i64> =
        read_matrix(text.as_bytes(), &DelimitedFormat::unlabeled(Delimiter::Comma)).unwrap();
    assert_eq!(m.dimensions(), (2, 3));
    assert!(!m.has_row_labels());
    assert!(!m.has_column_labels());
    assert_eq!(m.row(1), &[4, 5, 6]);
}

#[test]
fn read_column_labels_only() {
    let text = "a;b\n1;2\n";
    let format = DelimitedFormat::new(Delimiter::Semicolon, true, false);
    let m: Matrix<f64> = read_matrix(text.as_bytes(), &format).unwrap();
    assert_eq!(m.column_labels(), &["a", "b"]);
    assert!(!m.has_row_labels());
}

#[test]
fn read_parse_fault_reports_position() {
    let text = "id\ta\tb\nr1\t1\t2\nr2\t3\toops\n";
    let err = read_matrix::<f64, _>(text.as_bytes(), &DelimitedFormat::tsv()).unwrap_err();
    match err {
        MatrixError::ParseFault {
            line, field, value, ..
        } => {
            assert_eq!(line, 3);
            assert_eq!(field, 3);
            assert_eq!(value, "oops");
        }
        other => panic!("expected ParseFault, got {:?}", other),
    }
}

#[test]
fn read_integer_type_rejects_decimals() {
    let text = "1\t2.5\n";
    let result = read_matrix::<i32, _>(text.as_bytes(), &DelimitedFormat::unlabeled(Delimiter::Tab));
    assert!(matches!(result, Err(MatrixError::ParseFault { .. })));
}

#[test]
fn read_ragged_rows() {
    let text = "1\t2\n3\n";
    let result = read_matrix::<f64, _>(text.as_bytes(), &DelimitedFormat::unlabeled(Delimiter::Tab));
    assert!(matches!(result, Err(MatrixError::DimensionMismatch(_))));
}

#[test]
fn read_header_width_mismatch() {
    let text = "id\ta\nr1\t1\t2\n";
    let result = read_matrix::<f64, _>(text.as_bytes(), &DelimitedFormat::tsv());
    assert!(matches!(result, Err(MatrixError::DimensionMismatch(_))));
}

#[test]
fn read_empty_input() {
    let m: Matrix<f64> = read_matrix("".as_bytes(), &DelimitedFormat::tsv()).unwrap();
    assert_eq!(m.dimensions(), (0, 0));
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

#[test]
fn write_tsv_layout() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.5]])
        .unwrap()
        .with_row_labels(vec!["r1"])
        .unwrap()
        .with_column_labels(vec!["a", "b"])
        .unwrap();
    let format = DelimitedFormat::tsv().with_corner_label("id");
    let text = m.to_delimited_string(&format).unwrap();
    assert_eq!(text, "id\ta\tb\nr1\t1\t2.5\n");
}

#[test]
fn write_without_labels() {
    let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let mut buffer = Vec::new();
    write_matrix(&m, &mut buffer, &DelimitedFormat::unlabeled(Delimiter::Comma)).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "1,2\n3,4\n");
}

#[test]
fn write_requires_requested_labels() {
    let m = Matrix::from_rows(vec![vec![1.0]]).unwrap();
    assert!(matches!(
        m.to_delimited_string(&DelimitedFormat::tsv()),
        Err(MatrixError::PreconditionViolation(_))
    ));
}

// ---------------------------------------------------------------------------
// Round trips through files
// ---------------------------------------------------------------------------

#[test]
fn save_then_load_reproduces_matrix() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("features.tsv");
    let m = features();

    m.save(&path, &DelimitedFormat::tsv()).unwrap();
    let loaded: Matrix<f64> = Matrix::load(&path, &DelimitedFormat::tsv()).unwrap();
    assert_eq!(loaded, m);
}

#[test]
fn csv_round_trip_with_corner_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("features.csv");
    let format = DelimitedFormat::csv().with_corner_label("SpecId");
    let m = features();

    m.save(&path, &format).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("SpecId,score,delta,ratio\n"));

    let loaded = Matrix::<f64>::load(&path, &format).unwrap();
    assert_eq!(loaded, m);
}

#[test]
fn labels_keep_surrounding_whitespace() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
        .unwrap()
        .with_row_labels(vec![" r1", "r2 "])
        .unwrap()
        .with_column_labels(vec!["a", " b"])
        .unwrap();
    let format = DelimitedFormat::tsv();

    let text = m.to_delimited_string(&format).unwrap();
    let back: Matrix<f64> = read_matrix(text.as_bytes(), &format).unwrap();
    assert_eq!(back.row_labels(), &[" r1", "r2 "]);
    assert_eq!(back.column_labels(), &["a", " b"]);
    assert_eq!(back, m);
}

#[test]
fn read_trims_numeric_fields() {
    let text = "id\ta\nr1\t 1.5 \n";
    let m: Matrix<f64> = read_matrix(text.as_bytes(), &DelimitedFormat::tsv()).unwrap();
    assert_eq!(m.flatten(), vec![1.5]);
}

#[test]
fn load_into_replaces_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.tsv");
    features().save(&path, &DelimitedFormat::tsv()).unwrap();

    let mut m: Matrix<f64> = Matrix::zeros(1, 1);
    m.load_into(&path, &DelimitedFormat::tsv()).unwrap();
    assert_eq!(m, features());
}

#[test]
fn load_into_failure_keeps_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.tsv");
    std::fs::write(&path, "id\ta\nr1\tnot-a-number\n").unwrap();

    let mut m: Matrix<f64> = Matrix::filled(1, 1, 9.0);
    assert!(m.load_into(&path, &DelimitedFormat::tsv()).is_err());
    assert_eq!(m, Matrix::filled(1, 1, 9.0));
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Matrix::<f64>::load(dir.path().join("absent.tsv"), &DelimitedFormat::tsv());
    assert!(matches!(result, Err(MatrixError::Io(_))));
}
