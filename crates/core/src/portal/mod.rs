//! Customer dashboard domain: jobs, bills, and support requests.

mod error;
mod filters;
mod mock_data;
mod money;
mod operations;
mod requests;
mod types;

pub use error::RecordFilterError;
pub use filters::{filter_bills, filter_jobs, RecordFilter, RecordFilterQuery};
pub use mock_data::{generate_seed_portal, SeedPortal};
pub use money::{Money, MoneyParseError};
pub use operations::{
    dashboard_stats, summarize_bills, sort_requests_newest_first, DashboardStats, InvoiceSummary,
};
pub use requests::SendRequest;
pub use types::{Bill, BillStatus, Job, JobFile, JobStatus, RequestStatus, SupportRequest};
