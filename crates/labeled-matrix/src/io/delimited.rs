//! Delimited text reader and writer for `Matrix`.
//!
//! Layout, with both label axes enabled:
//!
//! ```text
//! <corner>\t<col 1>\t<col 2>
//! <row 1>\t1.5\t2
//! <row 2>\t0\t-3.25
//! ```
//!
//! The header line is present only when `DelimitedFormat::column_labels` is
//! set, the leading label field only when `DelimitedFormat::row_labels` is
//! set. Blank lines are skipped on read. Labels are kept verbatim; only the
//! numeric fields are trimmed before parsing.
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use crate::config::DelimitedFormat;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Parse a matrix from delimited text. Values are converted with `T::from_str`.
///
/// # Errors
///
/// * `ParseFault` for the first field that does not parse as `T`.
/// * `DimensionMismatch` when data lines differ in width or the header does
///   not match the data width.
/// * `Csv` / `Io` when the underlying stream fails.
pub fn read_matrix<T, R>(reader: R, format: &DelimitedFormat) -> Result<Matrix<T>>
where
    T: FromStr,
    T::Err: Display,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut header: Option<StringRecord> = None;
    let mut values: Vec<T> = Vec::new();
    let mut row_labels: Vec<String> = Vec::new();
    let mut width: Option<usize> = None;
    let mut n_rows = 0;

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line() as usize);

        if format.column_labels && header.is_none() {
            header = Some(record);
            continue;
        }

        let mut fields = record.iter().enumerate();
        if format.row_labels {
            let (_, label) = fields.next().unwrap_or((0, ""));
            row_labels.push(label.to_string());
        }

        let start = values.len();
        for (idx, value) in fields {
            let parsed = value.trim().parse::<T>().map_err(|e| MatrixError::ParseFault {
                line,
                field: idx + 1,
                value: value.to_string(),
                message: e.to_string(),
            })?;
            values.push(parsed);
        }

        let row_width = values.len() - start;
        match width {
            None => width = Some(row_width),
            Some(expected) if expected != row_width => {
                return Err(MatrixError::DimensionMismatch(format!(
                    "line {} has {} values, expected {}",
                    line, row_width, expected
                )));
            }
            Some(_) => {}
        }
        n_rows += 1;
    }

    let column_labels = match header {
        Some(record) => column_labels_from_header(&record, format),
        None => Vec::new(),
    };
    let n_cols = match width {
        Some(w) => {
            if format.column_labels && column_labels.len() != w {
                return Err(MatrixError::DimensionMismatch(format!(
                    "header has {} column labels for {} data columns",
                    column_labels.len(),
                    w
                )));
            }
            w
        }
        None => column_labels.len(),
    };

    let mut matrix = Matrix::from_shape_vec((n_rows, n_cols), values)?;
    matrix.set_row_labels(row_labels)?;
    matrix.set_column_labels(column_labels)?;

    log::debug!("parsed {}x{} matrix", n_rows, n_cols);
    Ok(matrix)
}

/// Write a matrix as delimited text.
///
/// # Errors
///
/// `PreconditionViolation` if `format` asks for labels the matrix does not
/// carry.
pub fn write_matrix<T, W>(matrix: &Matrix<T>, writer: W, format: &DelimitedFormat) -> Result<()>
where
    T: Display,
    W: Write,
{
    if format.row_labels && !matrix.is_empty() && !matrix.has_row_labels() {
        return Err(MatrixError::PreconditionViolation(
            "format writes row labels but the matrix has none".to_string(),
        ));
    }
    if format.column_labels && matrix.column_count() > 0 && !matrix.has_column_labels() {
        return Err(MatrixError::PreconditionViolation(
            "format writes column labels but the matrix has none".to_string(),
        ));
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter.as_byte())
        .from_writer(writer);

    if format.column_labels {
        let mut header: Vec<&str> = Vec::with_capacity(matrix.column_count() + 1);
        if format.row_labels {
            header.push(&format.corner_label);
        }
        header.extend(matrix.column_labels().iter().map(String::as_str));
        writer.write_record(&header)?;
    }

    for (r, row) in matrix.rows().enumerate() {
        let mut record: Vec<String> = Vec::with_capacity(row.len() + 1);
        if format.row_labels {
            record.push(matrix.row_labels()[r].clone());
        }
        record.extend(row.iter().map(ToString::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn column_labels_from_header(record: &StringRecord, format: &DelimitedFormat) -> Vec<String> {
    let skip = usize::from(format.row_labels);
    record.iter().skip(skip).map(str::to_string).collect()
}

impl<T> Matrix<T> {
    /// Parse a matrix from any reader. See [`read_matrix`].
    pub fn read_delimited<R: Read>(reader: R, format: &DelimitedFormat) -> Result<Self>
    where
        T: FromStr,
        T::Err: Display,
    {
        read_matrix(reader, format)
    }

    /// Load a matrix from a delimited text file.
    pub fn load<P: AsRef<Path>>(path: P, format: &DelimitedFormat) -> Result<Self>
    where
        T: FromStr,
        T::Err: Display,
    {
        let file = File::open(&path)?;
        let matrix = read_matrix(BufReader::new(file), format)?;
        log::info!(
            "Loaded {}x{} matrix from {}",
            matrix.row_count(),
            matrix.column_count(),
            path.as_ref().display()
        );
        Ok(matrix)
    }

    /// Replace the contents of `self` with a matrix loaded from `path`.
    /// `self` is left untouched if loading fails.
    pub fn load_into<P: AsRef<Path>>(&mut self, path: P, format: &DelimitedFormat) -> Result<()>
    where
        T: FromStr,
        T::Err: Display,
    {
        *self = Self::load(path, format)?;
        Ok(())
    }

    pub fn write_delimited<W: Write>(&self, writer: W, format: &DelimitedFormat) -> Result<()>
    where
        T: Display,
    {
        write_matrix(self, writer, format)
    }

    /// Save to a delimited text file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: &DelimitedFormat) -> Result<()>
    where
        T: Display,
    {
        let file = File::create(&path)?;
        write_matrix(self, BufWriter::new(file), format)?;
        log::info!(
            "Saved {}x{} matrix to {}",
            self.row_count(),
            self.column_count(),
            path.as_ref().display()
        );
        Ok(())
    }

    pub fn to_delimited_string(&self, format: &DelimitedFormat) -> Result<String>
    where
        T: Display,
    {
        let mut buffer = Vec::new();
        write_matrix(self, &mut buffer, format)?;
        String::from_utf8(buffer).map_err(|e| {
            MatrixError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}
