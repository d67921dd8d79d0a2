//! Read access to the movie catalog.

use crate::db::MovieFilter;
use crate::models::Movie;
use crate::services::RepositoryError;

/// Catalog queries used by the HTTP handlers and the CLI.
///
/// Implemented by [`SeaOrmMovieRepository`](crate::services::SeaOrmMovieRepository)
/// for production and by in-memory doubles in tests.
#[async_trait::async_trait]
pub trait MovieRepository: Send + Sync {
    /// Lists movies matching every specified filter, in storage order.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::Query`] if the statement fails
    /// - [`RepositoryError::Mapping`] if any row cannot be read as a [`Movie`];
    ///   no partial list is returned
    async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, RepositoryError>;

    /// Looks up one movie. `Ok(None)` when nothing matches.
    ///
    /// The identifier is passed to the engine as given; a malformed value is
    /// whatever the engine makes of it (no match, or a `Query` error).
    async fn get_movie_by_id(&self, id: &str) -> Result<Option<Movie>, RepositoryError>;
}
