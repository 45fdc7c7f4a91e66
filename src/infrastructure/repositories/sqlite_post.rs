// src/infrastructure/repositories/sqlite_post.rs
use super::aggregate::{PostCategoryRow, PostRow, aggregate_posts};
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostId, PostListFilter, PostReadRepository, PostUpdate, PostWriteRepository,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::sync::Arc;

const POST_COLUMNS: &str =
    "id, title, slug, content, published, image_url, created_at, updated_at";

const JOINED_SELECT: &str = "SELECT p.id, p.title, p.slug, p.content, p.published, p.image_url, \
     p.created_at, p.updated_at, c.id AS category_id, c.name AS category_name \
     FROM posts p \
     LEFT JOIN post_categories pc ON pc.post_id = p.id \
     LEFT JOIN categories c ON c.id = pc.category_id";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

async fn insert_associations(
    conn: &mut SqliteConnection,
    post_id: PostId,
    category_ids: &[CategoryId],
) -> DomainResult<()> {
    for category_id in category_ids {
        sqlx::query("INSERT INTO post_categories (post_id, category_id) VALUES (?, ?)")
            .bind(i64::from(post_id))
            .bind(i64::from(*category_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

async fn delete_associations(conn: &mut SqliteConnection, post_id: PostId) -> DomainResult<()> {
    sqlx::query("DELETE FROM post_categories WHERE post_id = ?")
        .bind(i64::from(post_id))
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            published,
            image_url,
            categories,
            created_at,
            updated_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts \
             (title, slug, content, published, image_url, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(published)
        .bind(image_url.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let created = Post::try_from(row)?;
        insert_associations(&mut *tx, created.id, categories.ids()).await?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            published,
            image_url,
            categories,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET title = ?, slug = ?, content = ?, published = ?, \
             image_url = COALESCE(?, image_url), updated_at = ? \
             WHERE id = ? RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(published)
        .bind(image_url.as_ref().map(|url| url.as_str()))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("post not found"))?;

        let updated = Post::try_from(row)?;
        delete_associations(&mut *tx, id).await?;
        insert_associations(&mut *tx, id, categories.ids()).await?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(updated)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        delete_associations(&mut *tx, id).await?;
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("post not found"));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}

impl SqlitePostReadRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Sqlite>, filter: PostListFilter) {
        let mut has_where = false;

        if let Some(category_id) = filter.category_id {
            // Filter on membership, not on the joined row, so matching posts
            // keep their full category list.
            builder.push(
                " WHERE p.id IN (SELECT post_id FROM post_categories WHERE category_id = ",
            );
            builder.push_bind(i64::from(category_id));
            builder.push(")");
            has_where = true;
        }

        if let Some(published) = filter.published {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("p.published = ");
            builder.push_bind(published);
        }
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let rows = sqlx::query_as::<_, PostCategoryRow>(&format!(
            "{JOINED_SELECT} WHERE p.slug = ? ORDER BY pc.id"
        ))
        .bind(slug.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(aggregate_posts(rows)?.into_iter().next())
    }

    async fn list(&self, filter: PostListFilter) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(JOINED_SELECT);
        Self::apply_conditions(&mut builder, filter);
        builder.push(" ORDER BY p.created_at ASC, p.id ASC, pc.id ASC");

        let rows = builder
            .build_query_as::<PostCategoryRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        aggregate_posts(rows)
    }
}
