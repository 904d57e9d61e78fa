//! Domain entities - core business objects

mod message;
mod participant;

pub use message::{Message, NewMessage, ARRIVAL_TEXT, DEPARTURE_TEXT, TIME_FORMAT};
pub use participant::Participant;
