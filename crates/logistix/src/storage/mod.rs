//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `logistix_core::storage`. Only the in-memory backend exists today; a
//! database backend would live next to it and implement the same traits.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
