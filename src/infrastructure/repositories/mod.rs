// src/infrastructure/repositories/mod.rs
mod aggregate;
mod error;
mod sqlite_category;
mod sqlite_post;

pub use error::map_sqlx;
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
