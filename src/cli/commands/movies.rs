//! List movies command handler

use crate::config::Config;
use crate::db::{MovieFilter, Store};
use crate::services::{MovieRepository, SeaOrmMovieRepository};

pub async fn cmd_list_movies(config: &Config, filter: &MovieFilter) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    let repo = SeaOrmMovieRepository::new(store);
    let movies = repo.list_movies(filter).await?;

    if movies.is_empty() {
        println!("No movies found.");
        if filter.is_empty() {
            println!();
            println!("Load a catalog with: movie-rental seed movies.json");
        }
        return Ok(());
    }

    println!("Movies ({} total)", movies.len());
    println!("{:-<70}", "");

    for movie in movies {
        println!("{} ({}) [{}]", movie.title, movie.year, movie.genre);
        println!(
            "  ID: {} | IMDb: {} | Cast: {}",
            movie.movie_id, movie.imdbid, movie.actors
        );
    }

    Ok(())
}
