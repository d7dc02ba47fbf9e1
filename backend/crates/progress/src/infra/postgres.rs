//! PostgreSQL Repository Implementation
//!
//! Progress is one JSONB record per user with a `version` column for
//! compare-and-swap. The aggregate travels as serialized JSON text and is
//! cast with `::jsonb` in SQL, so queries can still index into it (the
//! leaderboard does).

use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entities::Progress;
use crate::domain::repository::{
    LeaderboardRow, ProgressRepository, VersionedProgress,
};
use crate::error::{ProgressError, ProgressResult};

/// PostgreSQL-backed progress repository
#[derive(Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn user_exists(&self, user_id: &UserId) -> ProgressResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)")
                .bind(user_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

impl ProgressRepository for PgProgressRepository {
    async fn load(&self, user_id: &UserId) -> ProgressResult<Option<VersionedProgress>> {
        let row = sqlx::query_as::<_, ProgressRow>(
            r#"
            SELECT
                data::TEXT AS data,
                version
            FROM user_progress
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row.into_versioned()?)),
            None => {
                if self.user_exists(user_id).await? {
                    Ok(None)
                } else {
                    Err(ProgressError::UserNotFound)
                }
            }
        }
    }

    async fn load_or_init(&self, user_id: &UserId) -> ProgressResult<VersionedProgress> {
        let zero = serde_json::to_string(&Progress::default())?;

        // The SELECT guard ties the insert to an existing user; concurrent
        // callers converge on one record via ON CONFLICT DO NOTHING.
        sqlx::query(
            r#"
            INSERT INTO user_progress (user_id, data, version, created_at, updated_at)
            SELECT u.user_id, $2::jsonb, 0, NOW(), NOW()
            FROM users u
            WHERE u.user_id = $1
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(zero)
        .execute(&self.pool)
        .await?;

        self.load(user_id).await?.ok_or(ProgressError::UserNotFound)
    }

    async fn store(
        &self,
        user_id: &UserId,
        progress: &Progress,
        expected_version: i64,
    ) -> ProgressResult<()> {
        let data = serde_json::to_string(progress)?;

        let affected = sqlx::query(
            r#"
            UPDATE user_progress SET
                data = $2::jsonb,
                version = version + 1,
                updated_at = NOW()
            WHERE user_id = $1 AND version = $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(data)
        .bind(expected_version)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(ProgressError::Conflict);
        }

        Ok(())
    }

    async fn leaderboard(&self, limit: i64) -> ProgressResult<Vec<LeaderboardRow>> {
        let rows = sqlx::query_as::<_, LeaderboardRowRaw>(
            r#"
            SELECT
                u.email,
                COALESCE((p.data->>'points')::BIGINT, 0) AS points,
                COALESCE((p.data->>'level')::BIGINT, 1) AS level,
                COALESCE(jsonb_array_length(p.data->'badges'), 0)::BIGINT AS badge_count
            FROM users u
            LEFT JOIN user_progress p ON p.user_id = u.user_id
            ORDER BY points DESC, u.created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LeaderboardRowRaw::into_row).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProgressRow {
    data: String,
    version: i64,
}

impl ProgressRow {
    fn into_versioned(self) -> ProgressResult<VersionedProgress> {
        let progress: Progress = serde_json::from_str(&self.data)?;

        Ok(VersionedProgress {
            progress,
            version: self.version,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LeaderboardRowRaw {
    email: String,
    points: i64,
    level: i64,
    badge_count: i64,
}

impl LeaderboardRowRaw {
    fn into_row(self) -> LeaderboardRow {
        LeaderboardRow {
            email: self.email,
            points: self.points,
            level: self.level,
            badge_count: self.badge_count,
        }
    }
}
