//! In-memory storage backend.
//!
//! Stores every record in HashMaps wrapped in `Arc<RwLock<_>>`, standing in
//! for the tables a database backend would provide. Nothing is persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use logistix::storage::InMemoryRepository;
//!
//! let repo = Arc::new(InMemoryRepository::new());
//! let state = AppState::with_repository(repo, &config, auth_config);
//! ```

mod repository;

pub use repository::InMemoryRepository;
