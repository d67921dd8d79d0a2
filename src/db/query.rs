//! Parameterized statements for the catalog and cart tables.
//!
//! Every statement binds user input positionally. The movie listing is
//! assembled from zero or more [`Predicate`]s; each appended predicate takes
//! the next placeholder, so the value list always lines up with the SQL text.
//!
//! Substring filters are not escaped: `%` and `_` inside a filter value act
//! as pattern metacharacters.

use sea_orm::{DbBackend, Statement, Value};

const MOVIE_COLUMNS: &str = "movie_id, title, year, plot, genre, imdbid, actors";

/// Optional filters for `GET /movies`. An empty string means "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub genre: String,
    pub actor: String,
    pub year: String,
}

impl MovieFilter {
    #[must_use]
    pub fn new(
        genre: impl Into<String>,
        actor: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            genre: genre.into(),
            actor: actor.into(),
            year: year.into(),
        }
    }

    /// Builds a filter from decoded query-string pairs. The first occurrence
    /// of a repeated key wins; unknown keys are ignored.
    #[must_use]
    pub fn from_query_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut genre = None;
        let mut actor = None;
        let mut year = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "genre" => &mut genre,
                "actor" => &mut actor,
                "year" => &mut year,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        Self {
            genre: genre.unwrap_or_default(),
            actor: actor.unwrap_or_default(),
            year: year.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genre.is_empty() && self.actor.is_empty() && self.year.is_empty()
    }

    /// Specified filters in binding order: genre, actor, year.
    fn predicates(&self) -> impl Iterator<Item = (Predicate, &str)> {
        [
            (Predicate::GenreContains, self.genre.as_str()),
            (Predicate::ActorsContain, self.actor.as_str()),
            (Predicate::YearEquals, self.year.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }
}

/// One filter condition on the `movies` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring match on `genre`.
    GenreContains,
    /// Case-insensitive substring match on `actors`.
    ActorsContain,
    /// Exact match on `year`, bound as the caller's raw text.
    YearEquals,
}

impl Predicate {
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::GenreContains => "genre",
            Self::ActorsContain => "actors",
            Self::YearEquals => "year",
        }
    }

    fn render(self, backend: DbBackend, position: usize) -> String {
        match self {
            Self::GenreContains | Self::ActorsContain => {
                contains_ignore_case(backend, self.column(), position)
            }
            Self::YearEquals => integer_equals(backend, self.column(), position),
        }
    }
}

fn placeholder(backend: DbBackend, position: usize) -> String {
    match backend {
        DbBackend::Postgres => format!("${position}"),
        DbBackend::MySql | DbBackend::Sqlite => "?".to_string(),
    }
}

fn contains_ignore_case(backend: DbBackend, column: &str, position: usize) -> String {
    let param = placeholder(backend, position);
    match backend {
        DbBackend::Postgres => format!("{column} ILIKE '%' || {param} || '%'"),
        DbBackend::MySql => format!("{column} LIKE CONCAT('%', {param}, '%')"),
        // SQLite LIKE folds ASCII case.
        DbBackend::Sqlite => format!("{column} LIKE '%' || {param} || '%'"),
    }
}

/// Compares an integer column against a text parameter, leaving coercion
/// (and rejection of malformed text) to the engine.
fn integer_equals(backend: DbBackend, column: &str, position: usize) -> String {
    let param = placeholder(backend, position);
    match backend {
        DbBackend::Postgres => format!("{column} = CAST({param} AS INTEGER)"),
        DbBackend::MySql | DbBackend::Sqlite => format!("{column} = {param}"),
    }
}

/// Builder for the movie listing statement.
#[derive(Debug, Clone)]
pub struct MovieQuery {
    backend: DbBackend,
    clauses: Vec<String>,
    values: Vec<Value>,
}

impl MovieQuery {
    #[must_use]
    pub const fn new(backend: DbBackend) -> Self {
        Self {
            backend,
            clauses: Vec::new(),
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_filter(backend: DbBackend, filter: &MovieFilter) -> Self {
        filter
            .predicates()
            .fold(Self::new(backend), |query, (predicate, value)| {
                query.and(predicate, value)
            })
    }

    /// Appends `predicate`, binding `value` to the next placeholder.
    #[must_use]
    pub fn and(mut self, predicate: Predicate, value: &str) -> Self {
        let position = self.values.len() + 1;
        self.clauses.push(predicate.render(self.backend, position));
        self.values.push(Value::from(value.to_string()));
        self
    }

    #[must_use]
    pub fn sql(&self) -> String {
        let mut sql = format!("SELECT {MOVIE_COLUMNS} FROM movies");
        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
        }
        sql
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn build(self) -> Statement {
        Statement::from_sql_and_values(self.backend, self.sql(), self.values)
    }
}

/// Lookup of a single movie. `id` is bound as raw text, unvalidated.
#[must_use]
pub fn movie_by_id(backend: DbBackend, id: &str) -> Statement {
    let sql = format!(
        "SELECT {MOVIE_COLUMNS} FROM movies WHERE {}",
        integer_equals(backend, "movie_id", 1)
    );
    Statement::from_sql_and_values(backend, sql, [Value::from(id.to_string())])
}

#[must_use]
pub fn movie_exists(backend: DbBackend, movie_id: i32) -> Statement {
    let sql = format!(
        "SELECT 1 AS present FROM movies WHERE movie_id = {}",
        placeholder(backend, 1)
    );
    Statement::from_sql_and_values(backend, sql, [Value::from(movie_id)])
}

#[must_use]
pub fn insert_cart_entry(backend: DbBackend, user_id: &str, movie_id: i32) -> Statement {
    let sql = format!(
        "INSERT INTO cart (user_id, movie_id) VALUES ({}, {})",
        placeholder(backend, 1),
        placeholder(backend, 2)
    );
    Statement::from_sql_and_values(
        backend,
        sql,
        [Value::from(user_id.to_string()), Value::from(movie_id)],
    )
}

#[must_use]
pub fn cart_items(backend: DbBackend, user_id: &str) -> Statement {
    let sql = format!(
        "SELECT m.movie_id, m.title, m.year, m.plot, m.genre, m.imdbid, m.actors \
         FROM cart c JOIN movies m ON c.movie_id = m.movie_id \
         WHERE c.user_id = {}",
        placeholder(backend, 1)
    );
    Statement::from_sql_and_values(backend, sql, [Value::from(user_id.to_string())])
}
