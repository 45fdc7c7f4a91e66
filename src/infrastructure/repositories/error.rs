use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports unique violations as "UNIQUE constraint failed: <table>.<column>".
const CNT_POST_SLUG: &str = "posts.slug";
const CNT_CATEGORY_SLUG: &str = "categories.slug";
const CNT_POST_CATEGORY_PAIR: &str = "post_categories.post_id, post_categories.category_id";
const MSG_FOREIGN_KEY: &str = "FOREIGN KEY constraint failed";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    if message.contains(CNT_POST_SLUG) {
                        DomainError::Conflict("a post with this slug already exists".into())
                    } else if message.contains(CNT_CATEGORY_SLUG) {
                        DomainError::Conflict("a category with this slug already exists".into())
                    } else if message.contains(CNT_POST_CATEGORY_PAIR) {
                        DomainError::Conflict("post is already in this category".into())
                    } else {
                        DomainError::Conflict("unique constraint violated".into())
                    }
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced category not found".into())
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    DomainError::Validation(message.to_string())
                }
                // Connections without extended result codes only report the message.
                _ if message.contains(MSG_FOREIGN_KEY) => {
                    DomainError::NotFound("referenced category not found".into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
