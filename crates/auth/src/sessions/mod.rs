//! Session storage.

mod inmemory;
mod sweeper;

pub use inmemory::SessionStore;
pub use sweeper::spawn_session_sweeper;
