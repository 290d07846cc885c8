use crate::utils::{
    database::DatabaseConnection,
    pagination::{Page, Pagination},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

#[cfg(test)]
mod memory;
#[cfg(test)]
pub use memory::{MemoryPlaceRepository, UnavailablePlaceRepository};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Filters {
    pub name: Option<String>,
}

impl Filters {
    /// The name filter, treating an empty value as absent.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

pub struct CreatePlacePayload {
    pub name: String,
    pub city: String,
    pub state: String,
    pub slug: String,
}

pub struct UpdatePlacePayload {
    pub name: String,
    pub city: String,
    pub state: String,
    pub slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The write hit the unique constraint on `places.slug`.
    DuplicateSlug,
    UnexpectedError,
}

/// Storage of places.
///
/// Implementations must reject any write that would leave two places with
/// the same slug, reporting it as [`Error::DuplicateSlug`].
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    async fn find_many(
        &self,
        filters: &Filters,
        pagination: &Pagination,
    ) -> Result<Page<Place>, Error>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Place>, Error>;

    async fn find_by_slug_excluding_id(
        &self,
        slug: &str,
        excluded_id: Option<&str>,
    ) -> Result<Option<Place>, Error>;

    async fn create(&self, payload: CreatePlacePayload) -> Result<Place, Error>;

    /// Returns `None` when no place has `id`.
    async fn update_by_id(
        &self,
        id: &str,
        payload: UpdatePlacePayload,
    ) -> Result<Option<Place>, Error>;

    /// Returns the removed place, or `None` when no place has `id`.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Place>, Error>;
}

pub struct PgPlaceRepository {
    db_conn: DatabaseConnection,
}

impl PgPlaceRepository {
    pub fn new(db_conn: DatabaseConnection) -> Self {
        Self { db_conn }
    }
}

/// Escapes `LIKE` metacharacters so the filter matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn write_error(err: sqlx::Error) -> Error {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => Error::DuplicateSlug,
        _ => Error::UnexpectedError,
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    async fn find_many(
        &self,
        filters: &Filters,
        pagination: &Pagination,
    ) -> Result<Page<Place>, Error> {
        let name = filters.name().map(escape_like);

        let total = sqlx::query_scalar::<_, i64>(
            "
            SELECT COUNT(id)
            FROM places
            WHERE $1::VARCHAR IS NULL OR name ILIKE '%' || $1 || '%'
            ",
        )
        .bind(name.as_deref())
        .fetch_one(&self.db_conn.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count places: {}", err);
            Error::UnexpectedError
        })?;

        let items = sqlx::query_as::<_, Place>(
            "
            SELECT *
            FROM places
            WHERE $1::VARCHAR IS NULL OR name ILIKE '%' || $1 || '%'
            ORDER BY created_at, id
            LIMIT $2
            OFFSET $3
            ",
        )
        .bind(name.as_deref())
        .bind(pagination.per_page() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(&self.db_conn.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many places: {}", err);
            Error::UnexpectedError
        })?;

        Ok(Page {
            items,
            total: total as u64,
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Place>, Error> {
        sqlx::query_as::<_, Place>("SELECT * FROM places WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_conn.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching place with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn find_by_slug_excluding_id(
        &self,
        slug: &str,
        excluded_id: Option<&str>,
    ) -> Result<Option<Place>, Error> {
        sqlx::query_as::<_, Place>(
            "
            SELECT *
            FROM places
            WHERE slug = $1 AND ($2::VARCHAR IS NULL OR id <> $2)
            LIMIT 1
            ",
        )
        .bind(slug)
        .bind(excluded_id)
        .fetch_optional(&self.db_conn.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching place with slug {}: {}", slug, err);
            Error::UnexpectedError
        })
    }

    async fn create(&self, payload: CreatePlacePayload) -> Result<Place, Error> {
        sqlx::query_as::<_, Place>(
            "
            INSERT INTO places
            (id, name, city, state, slug)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            ",
        )
        .bind(Ulid::new().to_string())
        .bind(payload.name)
        .bind(payload.city)
        .bind(payload.state)
        .bind(&payload.slug)
        .fetch_one(&self.db_conn.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to create place with slug {}: {}",
                payload.slug,
                err
            );
            write_error(err)
        })
    }

    async fn update_by_id(
        &self,
        id: &str,
        payload: UpdatePlacePayload,
    ) -> Result<Option<Place>, Error> {
        sqlx::query_as::<_, Place>(
            "
            UPDATE places SET
                name = $1,
                city = $2,
                state = $3,
                slug = $4,
                updated_at = NOW()
            WHERE
                id = $5
            RETURNING *
            ",
        )
        .bind(payload.name)
        .bind(payload.city)
        .bind(payload.state)
        .bind(payload.slug)
        .bind(id)
        .fetch_optional(&self.db_conn.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update a place by id {}: {}",
                id,
                err
            );
            write_error(err)
        })
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Place>, Error> {
        sqlx::query_as::<_, Place>("DELETE FROM places WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.db_conn.pool)
            .await
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to delete a place by id {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }
}
