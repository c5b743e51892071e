//! Database models

mod message;

pub use message::{InsertedRow, MessageModel};
