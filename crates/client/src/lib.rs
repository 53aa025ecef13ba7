//! logistix_client - CLI client for the Unitas LogistiX public API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::LogistixClient;
pub use error::{ClientError, Result};
