use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::User;
use crate::inquiry::{Contact, Quote, QuoteLead};
use crate::portal::{Bill, Job, JobFile, SupportRequest};
use crate::tracking::{Shipment, TrackingEvent};

use super::Result;

/// Repository for customer accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Gets a user by their normalized email address.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Creates a new user. Fails with `AlreadyExists` if the email is taken.
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Updates an existing user.
    async fn update_user(&self, user: &User) -> Result<()>;
}

/// Repository for public enquiries.
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn create_contact(&self, contact: &Contact) -> Result<()>;

    async fn create_quote(&self, quote: &Quote) -> Result<()>;

    async fn create_quote_lead(&self, lead: &QuoteLead) -> Result<()>;

    /// Adds an address to the newsletter list.
    ///
    /// Returns `true` when the address was not subscribed before.
    async fn subscribe_newsletter(&self, email: &str) -> Result<bool>;
}

/// Repository for shipments and their tracking history.
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Gets a shipment by its normalized tracking number.
    async fn get_shipment_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>>;

    /// Gets all events for a shipment in the order they were recorded.
    async fn get_tracking_events(&self, shipment_id: Uuid) -> Result<Vec<TrackingEvent>>;

    async fn create_shipment(&self, shipment: &Shipment) -> Result<()>;

    /// Records an event. Fails with `NotFound` for an unknown shipment.
    async fn add_tracking_event(&self, event: &TrackingEvent) -> Result<()>;
}

/// Repository for freight jobs and their documents.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn get_jobs_for_user(&self, user_id: Uuid) -> Result<Vec<Job>>;

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>>;

    async fn get_job_files(&self, job_id: Uuid) -> Result<Vec<JobFile>>;

    async fn create_job(&self, job: &Job) -> Result<()>;

    /// Attaches a document. Fails with `NotFound` for an unknown job.
    async fn add_job_file(&self, file: &JobFile) -> Result<()>;
}

/// Repository for bills.
#[async_trait]
pub trait BillRepository: Send + Sync {
    async fn get_bills_for_user(&self, user_id: Uuid) -> Result<Vec<Bill>>;

    async fn create_bill(&self, bill: &Bill) -> Result<()>;
}

/// Repository for support requests.
#[async_trait]
pub trait SupportRequestRepository: Send + Sync {
    async fn get_requests_for_user(&self, user_id: Uuid) -> Result<Vec<SupportRequest>>;

    async fn create_request(&self, request: &SupportRequest) -> Result<()>;
}
