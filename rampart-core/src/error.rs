// Error types for Rampart core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
