//! Entity ↔ model mappers

mod credential;
mod notification;
mod user;

pub use credential::challenge_columns;
