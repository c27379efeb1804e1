use crate::db::models::{AstCheck, DwellingRecord, UpsertKind};
use crate::db::schema::AST_CHECK_INIT;
use crate::error::AstError;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlx::{Any, Pool};
use tracing::debug;

pub type DbPool = Pool<Any>;

#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect to `url` (`postgres://...` or `sqlite:...`).
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, AstError> {
        install_default_drivers();
        let pool = AnyPoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Provision `SHMASTCheck` and its key index. Safe to run repeatedly.
    pub async fn migrate(&self) -> Result<(), AstError> {
        // sqlx::query runs one statement at a time
        for stmt in AST_CHECK_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Read the whole dwelling directory in query order.
    pub async fn list_dwellings(&self) -> Result<Vec<DwellingRecord>, AstError> {
        let rows = sqlx::query_as::<_, DwellingRecord>(
            r#"SELECT CAST(Dwelling_ID AS TEXT) AS dwelling_id,
                   COALESCE(CAST(flat_number AS TEXT), '') AS flat_number,
                   COALESCE(CAST(property_address AS TEXT), '') AS address,
                   COALESCE(CAST(city AS TEXT), '') AS city
               FROM SHMDwellingInfo
               WHERE Dwelling_ID IS NOT NULL"#,
        )
        .fetch_all(&self.pool)
        .await?;
        debug!(count = rows.len(), "loaded dwelling directory");
        Ok(rows)
    }

    /// Insert or update the check for `(dwelling_id, academic_year)`.
    ///
    /// The write itself is a single `INSERT ... ON CONFLICT DO UPDATE`
    /// against the unique key index, so concurrent submissions for the same
    /// key cannot produce two rows. The preceding count only classifies the
    /// outcome for the caller.
    pub async fn upsert_ast_check(&self, check: &AstCheck) -> Result<UpsertKind, AstError> {
        let mut tx = self.pool.begin().await?;

        let (existing,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM SHMASTCheck WHERE Dwelling_ID = $1 AND Academic_Year = $2",
        )
        .bind(check.dwelling_id.as_str())
        .bind(check.academic_year.as_str())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO SHMASTCheck (Dwelling_ID, Academic_Year, Checked_By, Comment)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (Dwelling_ID, Academic_Year) DO UPDATE SET
                Checked_By = excluded.Checked_By,
                Comment = excluded.Comment
            "#,
        )
        .bind(check.dwelling_id.as_str())
        .bind(check.academic_year.as_str())
        .bind(check.checked_by.as_str())
        .bind(check.comment.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(if existing > 0 {
            UpsertKind::Updated
        } else {
            UpsertKind::Inserted
        })
    }

    pub async fn find_ast_check(
        &self,
        dwelling_id: &str,
        academic_year: &str,
    ) -> Result<Option<AstCheck>, AstError> {
        let row = sqlx::query_as::<_, AstCheck>(
            r#"SELECT Dwelling_ID AS dwelling_id, Academic_Year AS academic_year,
                   Checked_By AS checked_by, Comment AS comment
               FROM SHMASTCheck WHERE Dwelling_ID = $1 AND Academic_Year = $2"#,
        )
        .bind(dwelling_id)
        .bind(academic_year)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn count_ast_checks(
        &self,
        dwelling_id: &str,
        academic_year: &str,
    ) -> Result<i64, AstError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM SHMASTCheck WHERE Dwelling_ID = $1 AND Academic_Year = $2",
        )
        .bind(dwelling_id)
        .bind(academic_year)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
