//! Row to entity mappers
//!
//! Rows are converted with `TryFrom` because the database may hold values
//! the domain types reject (blank names, unknown message kinds).

mod message;
mod participant;
