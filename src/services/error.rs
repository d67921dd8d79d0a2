use thiserror::Error;

/// Failure of a repository call.
///
/// A lookup that matches nothing is not an error; repositories return
/// `Ok(None)` or an empty list for that.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage engine rejected or failed the statement.
    #[error("query failed: {0}")]
    Query(String),

    /// A returned row did not fit the expected shape. Fatal for the whole call.
    #[error("row mapping failed: {0}")]
    Mapping(String),

    /// Only raised when cart inserts require an existing movie.
    #[error("Movie {0} not found")]
    MovieNotFound(i32),
}

impl RepositoryError {
    pub(crate) fn query(err: &sea_orm::DbErr) -> Self {
        Self::Query(err.to_string())
    }

    pub(crate) fn mapping(err: &sea_orm::DbErr) -> Self {
        Self::Mapping(err.to_string())
    }
}
