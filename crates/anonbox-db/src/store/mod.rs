//! MessageStore implementations

mod error;
mod message;

pub use message::PgMessageStore;
