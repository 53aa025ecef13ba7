//! Functional core for the Unitas LogistiX portal.
//!
//! Pure data types, request payloads, validation rules, and repository
//! traits. Nothing in this crate performs I/O; the server and auth crates
//! provide the imperative shell.

pub mod api;
pub mod auth;
pub mod inquiry;
pub mod portal;
pub mod serde;
pub mod storage;
pub mod tracking;
pub mod validation;
