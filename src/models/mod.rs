pub mod movie;

pub use movie::{AddToCartRequest, Movie, NewMovie};
