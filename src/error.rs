use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Could not read or write movie file")]
    Csv(#[from] csv::Error),

    #[error("Could not replace movie file {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
