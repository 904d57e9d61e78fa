//! PostgreSQL implementation of ParticipantRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use chatroom_core::{DomainError, Participant, ParticipantName, ParticipantRepository, RepoResult};

use crate::models::ParticipantModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ParticipantRepository
#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    /// Create a new PgParticipantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantModel>(
            r#"
            SELECT name, last_active
            FROM participants
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Participant::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &ParticipantName) -> RepoResult<Option<Participant>> {
        let row = sqlx::query_as::<_, ParticipantModel>(
            r#"
            SELECT name, last_active
            FROM participants
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Participant::try_from).transpose()
    }

    #[instrument(skip(self), fields(name = %participant.name))]
    async fn create(&self, participant: &Participant) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO participants (name, last_active)
            VALUES ($1, $2)
            "#,
        )
        .bind(participant.name.as_str())
        .bind(participant.last_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ParticipantNameTaken(participant.name.to_string())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn touch(&self, name: &ParticipantName, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE participants
            SET last_active = $2
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_if_inactive(
        &self,
        name: &ParticipantName,
        last_active: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM participants
            WHERE name = $1 AND last_active = $2
            "#,
        )
        .bind(name.as_str())
        .bind(last_active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
