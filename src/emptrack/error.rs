use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Could not connect to the database: {0}")]
    Connection(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Session interrupted")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TrackerError {
    /// Errors that end the interactive session instead of aborting a single flow.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TrackerError::Interrupted | TrackerError::Connection(_) | TrackerError::Io(_)
        )
    }
}

/// Maps a driver error to a query error carrying the operation name.
pub(crate) fn map_sqlx_error(operation: &str, err: sqlx::Error) -> TrackerError {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err
                .code()
                .map(|c| format!(" [{}]", c))
                .unwrap_or_default();
            TrackerError::Query(format!("{}{}: {}", operation, code, db_err.message()))
        }
        sqlx::Error::Io(io) => {
            TrackerError::Query(format!("connection lost during {}: {}", operation, io))
        }
        other => TrackerError::Query(format!("{}: {}", operation, other)),
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
