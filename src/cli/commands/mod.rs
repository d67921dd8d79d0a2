mod movies;
mod seed;
mod serve;

pub use movies::cmd_list_movies;
pub use seed::{cmd_seed, read_seed_file};
pub use serve::cmd_serve;
