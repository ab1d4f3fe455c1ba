use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("APKG file not found: {}", .0.display())]
    ApkgNotFound(PathBuf),

    #[error("APKG collection not found")]
    MissingCollection,

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Zip error: {0}")]
    Zip(Box<zip::result::ZipError>),

    #[error("Database error: {0}")]
    Sqlite(Box<rusqlite::Error>),
}

impl From<std::io::Error> for DeckError {
    fn from(error: std::io::Error) -> Self {
        DeckError::Io(Box::new(error))
    }
}

impl From<zip::result::ZipError> for DeckError {
    fn from(error: zip::result::ZipError) -> Self {
        DeckError::Zip(Box::new(error))
    }
}

impl From<rusqlite::Error> for DeckError {
    fn from(error: rusqlite::Error) -> Self {
        DeckError::Sqlite(Box::new(error))
    }
}
