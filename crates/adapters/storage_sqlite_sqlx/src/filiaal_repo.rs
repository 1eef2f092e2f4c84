//! `SQLite` implementation of [`FiliaalRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use filialen_app::ports::FiliaalRepository;
use filialen_domain::error::FilialenError;
use filialen_domain::filiaal::{Filiaal, NewFiliaal};
use filialen_domain::id::FiliaalId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Filiaal`].
struct Wrapper(Filiaal);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Filiaal> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Filiaal {
            id: FiliaalId::new(row.try_get("id")?),
            naam: row.try_get("naam")?,
            gemeente: row.try_get("gemeente")?,
            omzet: row.try_get("omzet")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO filialen (naam, gemeente, omzet) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM filialen WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM filialen ORDER BY id";
const UPDATE: &str = "UPDATE filialen SET naam = ?, gemeente = ?, omzet = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM filialen WHERE id = ?";

/// `SQLite`-backed filiaal repository.
pub struct SqliteFiliaalRepository {
    pool: SqlitePool,
}

impl SqliteFiliaalRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FiliaalRepository for SqliteFiliaalRepository {
    fn create(
        &self,
        filiaal: NewFiliaal,
    ) -> impl Future<Output = Result<Filiaal, FilialenError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&filiaal.naam)
                .bind(&filiaal.gemeente)
                .bind(filiaal.omzet)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = FiliaalId::new(result.last_insert_rowid());
            Ok(Filiaal::from_new(id, filiaal))
        }
    }

    fn get_by_id(
        &self,
        id: FiliaalId,
    ) -> impl Future<Output = Result<Option<Filiaal>, FilialenError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Filiaal>, FilialenError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        filiaal: Filiaal,
    ) -> impl Future<Output = Result<Option<Filiaal>, FilialenError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&filiaal.naam)
                .bind(&filiaal.gemeente)
                .bind(filiaal.omzet)
                .bind(filiaal.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok((result.rows_affected() > 0).then_some(filiaal))
        }
    }

    fn delete(&self, id: FiliaalId) -> impl Future<Output = Result<bool, FilialenError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
