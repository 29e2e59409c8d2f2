use async_trait::async_trait;
use jiff::Timestamp;
use linkbio_core::error::StorageError;
use linkbio_core::repository::{LinkRepository, Result};
use linkbio_core::{Link, LinkId, NewLink};
use sqlx::error::ErrorKind;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::debug;

/// PostgreSQL implementation of the repository contract.
///
/// `created_at` is read back as microseconds since the Unix epoch so that it
/// maps onto [`Timestamp`] without a driver-side time integration.
#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a repository from an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new connection pool.
    pub async fn connect(options: PgConnectOptions, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Query(format!("migration failed: {e}")))?;
        debug!("database migrations applied");
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes every pooled connection. Pending acquires fail afterwards.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn parse_created_at(micros: i64) -> Result<Timestamp> {
    Timestamp::from_microsecond(micros).map_err(|e| {
        StorageError::InvalidData(format!("invalid created_at timestamp '{micros}': {e}"))
    })
}

fn link_from_row(row: &PgRow) -> Result<Link> {
    let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
    let title: String = row.try_get("title").map_err(map_sqlx_error)?;
    let url: String = row.try_get("url").map_err(map_sqlx_error)?;
    let created_at: i64 = row.try_get("created_at_us").map_err(map_sqlx_error)?;

    Ok(Link {
        id: LinkId::new(id),
        title,
        url,
        created_at: parse_created_at(created_at)?,
    })
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    if let Some(db_err) = err.as_database_error() {
        if matches!(
            db_err.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        ) {
            return StorageError::Conflict(message);
        }
    }

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl LinkRepository for PostgresRepository {
    async fn list_all(&self) -> Result<Vec<Link>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, url,
                   (EXTRACT(EPOCH FROM created_at) * 1000000)::BIGINT AS created_at_us
            FROM links
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(link_from_row).collect()
    }

    async fn get_by_id(&self, id: LinkId) -> Result<Link> {
        let row = sqlx::query(
            r#"
            SELECT id, title, url,
                   (EXTRACT(EPOCH FROM created_at) * 1000000)::BIGINT AS created_at_us
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Err(StorageError::NotFound(id));
        };

        link_from_row(&row)
    }

    async fn create(&self, link: NewLink) -> Result<Link> {
        let row = sqlx::query(
            r#"
            INSERT INTO links (title, url)
            VALUES ($1, $2)
            RETURNING id, (EXTRACT(EPOCH FROM created_at) * 1000000)::BIGINT AS created_at_us
            "#,
        )
        .bind(link.title())
        .bind(link.url())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
        let created_at: i64 = row.try_get("created_at_us").map_err(map_sqlx_error)?;

        Ok(link.into_link(LinkId::new(id), parse_created_at(created_at)?))
    }

    async fn update(&self, id: LinkId, link: NewLink) -> Result<Link> {
        let row = sqlx::query(
            r#"
            UPDATE links
            SET title = $1, url = $2
            WHERE id = $3
            RETURNING id, title, url,
                      (EXTRACT(EPOCH FROM created_at) * 1000000)::BIGINT AS created_at_us
            "#,
        )
        .bind(link.title())
        .bind(link.url())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Err(StorageError::NotFound(id));
        };

        link_from_row(&row)
    }

    async fn delete(&self, id: LinkId) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM links
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }

        Ok(())
    }
}
