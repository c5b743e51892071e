//! Domain entities

mod message;

pub use message::{Attachment, MessageRecord, NewMessage};
