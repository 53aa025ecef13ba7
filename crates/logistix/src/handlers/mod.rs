pub mod dashboard;
pub mod error;
pub mod health;
pub mod inquiries;
pub mod pages;
pub mod portal;
pub mod static_files;
pub mod tracking;

pub use error::{ApiError, ApiJson, ApiQuery};
