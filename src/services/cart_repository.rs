//! Per-user cart storage.

use crate::models::Movie;
use crate::services::RepositoryError;

#[async_trait::async_trait]
pub trait CartRepository: Send + Sync {
    /// Records one association row. Adding the same movie twice yields two rows.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::Query`] if the insert fails
    /// - [`RepositoryError::MovieNotFound`] when the repository is configured to
    ///   require an existing movie and none matches
    async fn add_to_cart(&self, user_id: &str, movie_id: i32) -> Result<(), RepositoryError>;

    /// Movies in the user's cart. An unknown user has an empty cart.
    async fn get_cart_items(&self, user_id: &str) -> Result<Vec<Movie>, RepositoryError>;
}
