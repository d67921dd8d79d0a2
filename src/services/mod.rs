pub mod error;
pub use error::RepositoryError;

pub mod movie_repository;
pub use movie_repository::MovieRepository;

pub mod movie_repository_impl;
pub use movie_repository_impl::SeaOrmMovieRepository;

pub mod cart_repository;
pub use cart_repository::CartRepository;

pub mod cart_repository_impl;
pub use cart_repository_impl::SeaOrmCartRepository;
