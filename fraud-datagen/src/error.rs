use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatagenError {
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("Both datasets would be written to {0}")]
    SameDestination(PathBuf),
    #[error("Output filenames must not be empty")]
    EmptyFilename,
}
