//! # anonbox-blob
//!
//! Blob-store layer implementing the `BlobStore` trait against the GitHub
//! contents API: one authenticated write per file, public raw URL back.

mod github;
mod object_name;

pub use github::GithubBlobStore;
