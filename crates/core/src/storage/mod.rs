mod error;
mod traits;

pub use error::{Record, RepositoryError, Result};
pub use traits::{
    BillRepository, InquiryRepository, JobRepository, ShipmentRepository,
    SupportRequestRepository, UserRepository,
};
