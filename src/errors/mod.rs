use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    /// The store could not be opened or no connection could be checked out.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] r2d2::Error),

    /// A statement against the store failed.
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TournamentError>;

/// Attach a short description to a failed store statement
pub trait StoreContext<T> {
    fn store_context(self, context: &str) -> Result<T>;
}

impl<T> StoreContext<T> for rusqlite::Result<T> {
    fn store_context(self, context: &str) -> Result<T> {
        self.map_err(|source| TournamentError::Store {
            context: context.to_string(),
            source,
        })
    }
}
