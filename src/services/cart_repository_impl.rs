//! `SeaORM` implementation of [`CartRepository`].

use crate::config::MovieReferencePolicy;
use crate::db::{Store, query};
use crate::models::Movie;
use crate::services::movie_repository_impl::map_movie_rows;
use crate::services::{CartRepository, RepositoryError};
use sea_orm::ConnectionTrait;
use tracing::{info, instrument};

pub struct SeaOrmCartRepository {
    store: Store,
    movie_reference: MovieReferencePolicy,
}

impl SeaOrmCartRepository {
    #[must_use]
    pub const fn new(store: Store, movie_reference: MovieReferencePolicy) -> Self {
        Self {
            store,
            movie_reference,
        }
    }

    async fn movie_exists(&self, movie_id: i32) -> Result<bool, RepositoryError> {
        let row = self
            .store
            .conn
            .query_one(query::movie_exists(self.store.backend(), movie_id))
            .await
            .map_err(|e| RepositoryError::query(&e))?;
        Ok(row.is_some())
    }
}

#[async_trait::async_trait]
impl CartRepository for SeaOrmCartRepository {
    #[instrument(skip(self))]
    async fn add_to_cart(&self, user_id: &str, movie_id: i32) -> Result<(), RepositoryError> {
        if self.movie_reference == MovieReferencePolicy::RequireExisting
            && !self.movie_exists(movie_id).await?
        {
            return Err(RepositoryError::MovieNotFound(movie_id));
        }

        self.store
            .conn
            .execute(query::insert_cart_entry(
                self.store.backend(),
                user_id,
                movie_id,
            ))
            .await
            .map_err(|e| RepositoryError::query(&e))?;

        info!("Added movie {} to cart of user {}", movie_id, user_id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_cart_items(&self, user_id: &str) -> Result<Vec<Movie>, RepositoryError> {
        let rows = self
            .store
            .conn
            .query_all(query::cart_items(self.store.backend(), user_id))
            .await
            .map_err(|e| RepositoryError::query(&e))?;

        map_movie_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::temp_store;
    use crate::models::NewMovie;
    use sea_orm::{DbBackend, Statement};

    fn seed(movie_id: i32, title: &str) -> NewMovie {
        NewMovie {
            movie_id: Some(movie_id),
            title: title.to_string(),
            year: 2020 + movie_id,
            plot: format!("Plot {movie_id}"),
            genre: "Action".to_string(),
            imdbid: format!("tt{movie_id:07}"),
            actors: "Actor A, Actor B".to_string(),
        }
    }

    async fn cart_with(policy: MovieReferencePolicy) -> (Store, SeaOrmCartRepository) {
        let store = temp_store().await;
        store
            .insert_movies(&[seed(1, "Movie 1"), seed(2, "Movie 2")])
            .await
            .unwrap();
        (store.clone(), SeaOrmCartRepository::new(store, policy))
    }

    #[tokio::test]
    async fn empty_cart_is_an_empty_list() {
        let (_, cart) = cart_with(MovieReferencePolicy::Unchecked).await;

        let items = cart.get_cart_items("1").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn added_movie_shows_up_in_cart() {
        let (_, cart) = cart_with(MovieReferencePolicy::Unchecked).await;

        cart.add_to_cart("1", 2).await.unwrap();

        let items = cart.get_cart_items("1").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].movie_id, 2);
        assert_eq!(items[0].title, "Movie 2");
        assert_eq!(items[0].actors, "Actor A, Actor B");
    }

    #[tokio::test]
    async fn carts_are_per_user() {
        let (_, cart) = cart_with(MovieReferencePolicy::Unchecked).await;

        cart.add_to_cart("1", 1).await.unwrap();
        cart.add_to_cart("2", 2).await.unwrap();

        let items = cart.get_cart_items("2").await.unwrap();
        assert_eq!(items.iter().map(|m| m.movie_id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn duplicate_adds_keep_both_rows() {
        let (_, cart) = cart_with(MovieReferencePolicy::Unchecked).await;

        cart.add_to_cart("1", 1).await.unwrap();
        cart.add_to_cart("1", 1).await.unwrap();

        let items = cart.get_cart_items("1").await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn unchecked_policy_accepts_unknown_movie() {
        let (_, cart) = cart_with(MovieReferencePolicy::Unchecked).await;

        cart.add_to_cart("1", 999).await.unwrap();

        // The dangling row is invisible through the join.
        assert!(cart.get_cart_items("1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn require_existing_rejects_unknown_movie() {
        let (store, cart) = cart_with(MovieReferencePolicy::RequireExisting).await;

        let err = cart.add_to_cart("1", 999).await.unwrap_err();
        assert!(matches!(err, RepositoryError::MovieNotFound(999)));

        let count = store
            .conn
            .query_one(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM cart".to_string(),
            ))
            .await
            .unwrap()
            .unwrap()
            .try_get::<i64>("", "n")
            .unwrap();
        assert_eq!(count, 0);

        cart.add_to_cart("1", 1).await.unwrap();
        assert_eq!(cart.get_cart_items("1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_failure_is_a_query_error() {
        let (store, cart) = cart_with(MovieReferencePolicy::Unchecked).await;

        store
            .conn
            .execute(Statement::from_string(
                DbBackend::Sqlite,
                "DROP TABLE cart".to_string(),
            ))
            .await
            .unwrap();

        let err = cart.add_to_cart("1", 2).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)), "{err}");

        let err = cart.get_cart_items("1").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)), "{err}");
    }
}
