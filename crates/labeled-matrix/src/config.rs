use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::Result;

/// Layout of the delimited text files read and written by `Matrix`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DelimitedFormat {
    pub delimiter: Delimiter,
    /// First line holds the column labels.
    pub column_labels: bool,
    /// First field of every data line holds the row label.
    pub row_labels: bool,
    /// Header cell above the row-label column. Written on save, discarded on load.
    pub corner_label: String,
}

/// Supported field separators.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    #[default]
    Tab,
    Comma,
    Semicolon,
    Pipe,
    Space,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Pipe => b'|',
            Delimiter::Space => b' ',
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tab" | "tsv" | "\t" => Ok(Delimiter::Tab),
            "comma" | "csv" | "," => Ok(Delimiter::Comma),
            "semicolon" | ";" => Ok(Delimiter::Semicolon),
            "pipe" | "|" => Ok(Delimiter::Pipe),
            "space" | " " => Ok(Delimiter::Space),
            _ => Err(format!(
                "Unknown delimiter: {:?}. Expected one of tab, comma, semicolon, pipe or space",
                s
            )),
        }
    }
}

impl DelimitedFormat {
    pub fn new(delimiter: Delimiter, column_labels: bool, row_labels: bool) -> Self {
        Self {
            delimiter,
            column_labels,
            row_labels,
            corner_label: String::new(),
        }
    }

    /// Tab separated with both label axes.
    pub fn tsv() -> Self {
        Self::new(Delimiter::Tab, true, true)
    }

    /// Comma separated with both label axes.
    pub fn csv() -> Self {
        Self::new(Delimiter::Comma, true, true)
    }

    /// Bare values, no header line and no row-label field.
    pub fn unlabeled(delimiter: Delimiter) -> Self {
        Self::new(delimiter, false, false)
    }

    pub fn with_corner_label(mut self, corner_label: impl Into<String>) -> Self {
        self.corner_label = corner_label.into();
        self
    }
}

impl Default for DelimitedFormat {
    fn default() -> Self {
        Self::tsv()
    }
}

/// Read a `DelimitedFormat` from a JSON file. Missing keys take their defaults.
pub fn load_format_config<P: AsRef<Path>>(path: P) -> Result<DelimitedFormat> {
    let content = std::fs::read_to_string(&path)?;
    let config: DelimitedFormat = serde_json::from_str(&content)?;
    log::debug!(
        "Loaded delimited format from {}: {:?}",
        path.as_ref().display(),
        config
    );
    Ok(config)
}
