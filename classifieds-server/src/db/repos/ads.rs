//! Advertisement repository
//!
//! Single-row operations against the advertisements table. Uniqueness of
//! `title` is enforced by the store; a unique violation surfaces as
//! `DbError::DuplicateTitle` so the HTTP layer can answer 409.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{AdPatch, CreateAd};

/// Advertisement record from the database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Ad {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub creation_time: DateTime<Utc>,
}

impl Ad {
    /// Explicit merge for partial update: overwrite the fields the patch
    /// carries, leave everything else (including `creation_time`) from
    /// the snapshot untouched.
    pub fn patched(&self, patch: &AdPatch) -> Ad {
        Ad {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            owner: patch.owner.clone().unwrap_or_else(|| self.owner.clone()),
            creation_time: self.creation_time,
        }
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("advertisement {id} not found")]
    NotFound { id: i64 },

    #[error("title '{title}' already exists")]
    DuplicateTitle { title: String },
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

const SELECT_AD: &str =
    "SELECT id, title, description, owner, creation_time FROM advertisements WHERE id = $1";

/// Advertisement repository
pub struct AdRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AdRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new advertisement, returning its generated id.
    ///
    /// Single statement, so the store's implicit transaction covers it:
    /// on a duplicate title nothing is persisted.
    pub async fn create(&self, ad: &CreateAd) -> Result<i64, DbError> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO advertisements (title, description, owner)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&ad.title)
        .bind(&ad.description)
        .bind(&ad.owner)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DbError::DuplicateTitle {
                    title: ad.title.clone(),
                }
            } else {
                e.into()
            }
        })?;

        Ok(row.0)
    }

    /// Fetch a single advertisement by id.
    pub async fn get(&self, id: i64) -> Result<Ad, DbError> {
        sqlx::query_as::<_, Ad>(SELECT_AD)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound { id })
    }

    /// Apply a partial update inside one transaction: fetch the current
    /// row with a lock, merge the present fields, persist, commit.
    ///
    /// On a duplicate title the transaction is dropped uncommitted (an
    /// implicit rollback), so no partial state is ever observable.
    pub async fn update(&self, id: i64, patch: &AdPatch) -> Result<Ad, DbError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Ad>(
            "SELECT id, title, description, owner, creation_time \
             FROM advertisements WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound { id })?;

        let next = current.patched(patch);

        let result = sqlx::query(
            "UPDATE advertisements SET title = $1, description = $2, owner = $3 WHERE id = $4",
        )
        .bind(&next.title)
        .bind(&next.description)
        .bind(&next.owner)
        .bind(id)
        .execute(&mut *tx)
        .await;

        match result {
            Ok(_) => {
                tx.commit().await?;
                Ok(next)
            }
            Err(e) if is_unique_violation(&e) => Err(DbError::DuplicateTitle { title: next.title }),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete an advertisement by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM advertisements WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_ad() -> Ad {
        Ad {
            id: 1,
            title: "Sale".into(),
            description: "50% off".into(),
            owner: "alice".into(),
            creation_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn patched_overwrites_only_present_fields() {
        let ad = sample_ad();
        let patch = AdPatch {
            description: Some("70% off".into()),
            ..Default::default()
        };

        let next = ad.patched(&patch);
        assert_eq!(next.description, "70% off");
        assert_eq!(next.title, ad.title);
        assert_eq!(next.owner, ad.owner);
        assert_eq!(next.creation_time, ad.creation_time);
    }

    #[test]
    fn patched_with_empty_patch_is_identity() {
        let ad = sample_ad();
        assert_eq!(ad.patched(&AdPatch::default()), ad);
    }

    #[test]
    fn patched_never_touches_id_or_creation_time() {
        let ad = sample_ad();
        let patch = AdPatch {
            owner: Some("bob".into()),
            title: Some("Clearance".into()),
            description: Some("everything".into()),
        };

        let next = ad.patched(&patch);
        assert_eq!(next.id, ad.id);
        assert_eq!(next.creation_time, ad.creation_time);
        assert_eq!(next.owner, "bob");
        assert_eq!(next.title, "Clearance");
    }
}
