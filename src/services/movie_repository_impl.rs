//! `SeaORM` implementation of [`MovieRepository`].

use crate::db::{MovieFilter, MovieQuery, Store, query};
use crate::models::Movie;
use crate::services::{MovieRepository, RepositoryError};
use sea_orm::{ConnectionTrait, FromQueryResult, QueryResult};
use tracing::{debug, instrument};

/// Maps every row or none. The first row that does not fit aborts the call.
pub(crate) fn map_movie_rows(rows: Vec<QueryResult>) -> Result<Vec<Movie>, RepositoryError> {
    rows.iter()
        .map(|row| Movie::from_query_result(row, "").map_err(|e| RepositoryError::mapping(&e)))
        .collect()
}

pub struct SeaOrmMovieRepository {
    store: Store,
}

impl SeaOrmMovieRepository {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    #[instrument(skip(self))]
    async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, RepositoryError> {
        let stmt = MovieQuery::from_filter(self.store.backend(), filter).build();
        debug!(sql = %stmt.sql, "Listing movies");

        let rows = self
            .store
            .conn
            .query_all(stmt)
            .await
            .map_err(|e| RepositoryError::query(&e))?;

        map_movie_rows(rows)
    }

    #[instrument(skip(self))]
    async fn get_movie_by_id(&self, id: &str) -> Result<Option<Movie>, RepositoryError> {
        let stmt = query::movie_by_id(self.store.backend(), id);

        let row = self
            .store
            .conn
            .query_one(stmt)
            .await
            .map_err(|e| RepositoryError::query(&e))?;

        row.map(|row| Movie::from_query_result(&row, "").map_err(|e| RepositoryError::mapping(&e)))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::temp_store;
    use crate::models::NewMovie;
    use sea_orm::{DbBackend, Statement};

    fn seed(movie_id: i32, title: &str, year: i32, genre: &str, actors: &str) -> NewMovie {
        NewMovie {
            movie_id: Some(movie_id),
            title: title.to_string(),
            year,
            plot: format!("Plot {movie_id}"),
            genre: genre.to_string(),
            imdbid: format!("tt{movie_id:07}"),
            actors: actors.to_string(),
        }
    }

    async fn repo_with(movies: &[NewMovie]) -> (Store, SeaOrmMovieRepository) {
        let store = temp_store().await;
        store.insert_movies(movies).await.unwrap();
        (store.clone(), SeaOrmMovieRepository::new(store))
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[tokio::test]
    async fn round_trip_through_list_and_lookup() {
        let inserted = NewMovie {
            movie_id: Some(1),
            title: "Movie 1".to_string(),
            year: 2020,
            plot: "Plot 1".to_string(),
            genre: "Action".to_string(),
            imdbid: "tt1234567".to_string(),
            actors: "Actor A".to_string(),
        };
        let (_, repo) = repo_with(std::slice::from_ref(&inserted)).await;

        let expected = Movie {
            movie_id: 1,
            title: "Movie 1".to_string(),
            year: 2020,
            plot: "Plot 1".to_string(),
            genre: "Action".to_string(),
            imdbid: "tt1234567".to_string(),
            actors: "Actor A".to_string(),
        };

        let listed = repo.list_movies(&MovieFilter::default()).await.unwrap();
        assert_eq!(listed, vec![expected.clone()]);

        let found = repo.get_movie_by_id("1").await.unwrap();
        assert_eq!(found, Some(expected));
    }

    #[tokio::test]
    async fn unfiltered_equals_blank_filter() {
        let (_, repo) = repo_with(&[
            seed(1, "Movie 1", 2020, "Action", "Actor A"),
            seed(2, "Movie 2", 2021, "Drama", "Actor B"),
        ])
        .await;

        let mut all = repo.list_movies(&MovieFilter::default()).await.unwrap();
        let mut blank = repo
            .list_movies(&MovieFilter::new("", "", ""))
            .await
            .unwrap();
        all.sort_by_key(|m| m.movie_id);
        blank.sort_by_key(|m| m.movie_id);

        assert_eq!(all.len(), 2);
        assert_eq!(all, blank);
    }

    #[tokio::test]
    async fn genre_filter_keeps_only_matching_rows() {
        let (_, repo) = repo_with(&[
            seed(1, "Movie 1", 2020, "Action", "Actor A"),
            seed(2, "Movie 2", 2021, "Drama", "Actor B"),
        ])
        .await;

        let movies = repo
            .list_movies(&MovieFilter::new("Action", "", ""))
            .await
            .unwrap();
        assert_eq!(titles(&movies), vec!["Movie 1"]);

        let movies = repo
            .list_movies(&MovieFilter::new("act", "", ""))
            .await
            .unwrap();
        assert_eq!(titles(&movies), vec!["Movie 1"], "substring, any case");
    }

    #[tokio::test]
    async fn actor_and_year_are_combined_with_and() {
        let (_, repo) = repo_with(&[
            seed(4, "Movie 4", 2023, "Thriller", "Actor G, Actor H"),
            seed(5, "Movie 5", 2022, "Thriller", "Actor G"),
            seed(6, "Movie 6", 2023, "Comedy", "Actor K"),
        ])
        .await;

        let movies = repo
            .list_movies(&MovieFilter::new("", "Actor G", "2023"))
            .await
            .unwrap();
        assert_eq!(titles(&movies), vec!["Movie 4"]);
    }

    #[tokio::test]
    async fn unmatched_filters_return_empty_list() {
        let (_, repo) = repo_with(&[seed(1, "Movie 1", 2020, "Action", "Actor A")]).await;

        let movies = repo
            .list_movies(&MovieFilter::new("Western", "", ""))
            .await
            .unwrap();
        assert!(movies.is_empty());

        let movies = repo
            .list_movies(&MovieFilter::new("", "", "not-a-year"))
            .await
            .unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn percent_in_filter_acts_as_wildcard() {
        let (_, repo) = repo_with(&[
            seed(1, "Movie 1", 2020, "Action", "Actor A"),
            seed(2, "Movie 2", 2021, "Drama", "Actor B"),
        ])
        .await;

        let movies = repo
            .list_movies(&MovieFilter::new("%", "", ""))
            .await
            .unwrap();
        assert_eq!(movies.len(), 2);
    }

    #[tokio::test]
    async fn missing_id_is_absent_not_error() {
        let (_, repo) = repo_with(&[seed(1, "Movie 1", 2020, "Action", "Actor A")]).await;

        assert_eq!(repo.get_movie_by_id("99").await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_row_fails_whole_listing() {
        let (store, repo) = repo_with(&[seed(1, "Movie 1", 2020, "Action", "Actor A")]).await;

        // SQLite keeps text that cannot be coerced into an INTEGER column.
        store
            .conn
            .execute(Statement::from_string(
                DbBackend::Sqlite,
                "INSERT INTO movies (movie_id, title, year, plot, genre, imdbid, actors) \
                 VALUES (2, 'Title', 'not-a-year', 'Plot', 'Genre', 'imdbid', 'Actors')"
                    .to_string(),
            ))
            .await
            .unwrap();

        let err = repo
            .list_movies(&MovieFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Mapping(_)), "{err}");
    }

    #[tokio::test]
    async fn failed_statement_is_a_query_error() {
        let (store, repo) = repo_with(&[]).await;

        store
            .conn
            .execute(Statement::from_string(
                DbBackend::Sqlite,
                "DROP TABLE movies".to_string(),
            ))
            .await
            .unwrap();

        let err = repo
            .list_movies(&MovieFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)), "{err}");

        let err = repo.get_movie_by_id("1").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)), "{err}");
    }
}
