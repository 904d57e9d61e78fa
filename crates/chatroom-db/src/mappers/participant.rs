//! Participant entity <-> model mapper

use chatroom_core::{DomainError, Participant, ParticipantName};

use crate::models::ParticipantModel;

impl TryFrom<ParticipantModel> for Participant {
    type Error = DomainError;

    fn try_from(model: ParticipantModel) -> Result<Self, Self::Error> {
        let name = ParticipantName::parse(&model.name).map_err(|e| {
            DomainError::InternalError(format!("invalid participant row {:?}: {e}", model.name))
        })?;
        Ok(Participant::new(name, model.last_active))
    }
}
