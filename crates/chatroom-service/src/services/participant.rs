//! Participant service
//!
//! Handles joining the room, listing participants, and heartbeats.

use chatroom_core::{DomainError, NewMessage, Participant, ParticipantName};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::{CreateParticipantRequest, ParticipantResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Participant service
pub struct ParticipantService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ParticipantService<'a> {
    /// Create a new ParticipantService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List everyone currently in the room
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ParticipantResponse>> {
        let participants = self.ctx.participant_repo().find_all().await?;
        Ok(participants.into_iter().map(ParticipantResponse::from).collect())
    }

    /// Join the room
    ///
    /// The store's insert decides uniqueness, so concurrent registrations of
    /// one name admit exactly one. The arrival notice is appended afterwards;
    /// if that append fails the participant stays registered.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn register(
        &self,
        request: CreateParticipantRequest,
    ) -> ServiceResult<ParticipantResponse> {
        let name = ParticipantName::parse(&request.name)
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let now = Utc::now();
        let participant = Participant::new(name, now);

        self.ctx.participant_repo().create(&participant).await?;

        info!(name = %participant.name, "Participant joined");

        if let Err(e) = self
            .ctx
            .message_repo()
            .append(NewMessage::arrival(&participant.name, now))
            .await
        {
            warn!(name = %participant.name, error = %e, "Failed to append arrival message");
        }

        Ok(ParticipantResponse::from(participant))
    }

    /// Record a heartbeat for `user`
    ///
    /// A single conditional update: an unknown name is reported as not found
    /// and nothing is written.
    #[instrument(skip(self))]
    pub async fn heartbeat(&self, user: Option<&str>) -> ServiceResult<()> {
        let raw = user.unwrap_or_default();
        let name = ParticipantName::parse(raw)
            .map_err(|_| DomainError::ParticipantNotFound(raw.to_string()))?;

        if !self.ctx.participant_repo().touch(&name, Utc::now()).await? {
            return Err(DomainError::ParticipantNotFound(name.into_inner()).into());
        }

        Ok(())
    }
}
