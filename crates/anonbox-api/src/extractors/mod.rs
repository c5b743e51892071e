//! Request extractors

mod admin_auth;
mod client_meta;

pub use admin_auth::AdminAuth;
pub use client_meta::{client_ip, Client};
