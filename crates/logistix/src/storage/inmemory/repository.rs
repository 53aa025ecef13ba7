//! In-memory repository implementation.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use logistix_core::auth::User;
use logistix_core::inquiry::{Contact, Quote, QuoteLead};
use logistix_core::portal::{Bill, Job, JobFile, SupportRequest};
use logistix_core::storage::{
    BillRepository, InquiryRepository, JobRepository, Record, RepositoryError, Result,
    ShipmentRepository, SupportRequestRepository, UserRepository,
};
use logistix_core::tracking::{Shipment, TrackingEvent};

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    contacts: Arc<RwLock<HashMap<Uuid, Contact>>>,
    quotes: Arc<RwLock<HashMap<Uuid, Quote>>>,
    quote_leads: Arc<RwLock<HashMap<Uuid, QuoteLead>>>,
    newsletter: Arc<RwLock<BTreeSet<String>>>,
    shipments: Arc<RwLock<HashMap<Uuid, Shipment>>>,
    /// Events per shipment, in the order they were recorded.
    tracking_events: Arc<RwLock<HashMap<Uuid, Vec<TrackingEvent>>>>,
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
    job_files: Arc<RwLock<HashMap<Uuid, Vec<JobFile>>>>,
    bills: Arc<RwLock<HashMap<Uuid, Bill>>>,
    requests: Arc<RwLock<HashMap<Uuid, SupportRequest>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            contacts: Arc::new(RwLock::new(HashMap::new())),
            quotes: Arc::new(RwLock::new(HashMap::new())),
            quote_leads: Arc::new(RwLock::new(HashMap::new())),
            newsletter: Arc::new(RwLock::new(BTreeSet::new())),
            shipments: Arc::new(RwLock::new(HashMap::new())),
            tracking_events: Arc::new(RwLock::new(HashMap::new())),
            jobs: Arc::new(RwLock::new(HashMap::new())),
            job_files: Arc::new(RwLock::new(HashMap::new())),
            bills: Arc::new(RwLock::new(HashMap::new())),
            requests: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) || users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::duplicate(Record::User, &user.email));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(RepositoryError::missing(Record::User, user.id));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }
}

#[async_trait]
impl InquiryRepository for InMemoryRepository {
    async fn create_contact(&self, contact: &Contact) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        if contacts.contains_key(&contact.id) {
            return Err(RepositoryError::duplicate(Record::Contact, contact.id));
        }
        contacts.insert(contact.id, contact.clone());
        Ok(())
    }

    async fn create_quote(&self, quote: &Quote) -> Result<()> {
        let mut quotes = self.quotes.write().await;
        if quotes.contains_key(&quote.id) {
            return Err(RepositoryError::duplicate(Record::Quote, quote.id));
        }
        quotes.insert(quote.id, quote.clone());
        Ok(())
    }

    async fn create_quote_lead(&self, lead: &QuoteLead) -> Result<()> {
        let mut leads = self.quote_leads.write().await;
        if leads.contains_key(&lead.id) {
            return Err(RepositoryError::duplicate(Record::QuoteLead, lead.id));
        }
        leads.insert(lead.id, lead.clone());
        Ok(())
    }

    async fn subscribe_newsletter(&self, email: &str) -> Result<bool> {
        let mut newsletter = self.newsletter.write().await;
        Ok(newsletter.insert(email.to_string()))
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryRepository {
    async fn get_shipment_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>> {
        let shipments = self.shipments.read().await;
        Ok(shipments
            .values()
            .find(|s| s.tracking_number == tracking_number)
            .cloned())
    }

    async fn get_tracking_events(&self, shipment_id: Uuid) -> Result<Vec<TrackingEvent>> {
        let events = self.tracking_events.read().await;
        Ok(events.get(&shipment_id).cloned().unwrap_or_default())
    }

    async fn create_shipment(&self, shipment: &Shipment) -> Result<()> {
        let mut shipments = self.shipments.write().await;
        if shipments.contains_key(&shipment.id)
            || shipments
                .values()
                .any(|s| s.tracking_number == shipment.tracking_number)
        {
            return Err(RepositoryError::duplicate(
                Record::Shipment,
                &shipment.tracking_number,
            ));
        }
        shipments.insert(shipment.id, shipment.clone());
        Ok(())
    }

    async fn add_tracking_event(&self, event: &TrackingEvent) -> Result<()> {
        let shipments = self.shipments.read().await;
        if !shipments.contains_key(&event.shipment_id) {
            return Err(RepositoryError::missing(Record::Shipment, event.shipment_id));
        }
        let mut events = self.tracking_events.write().await;
        events
            .entry(event.shipment_id)
            .or_default()
            .push(event.clone());
        Ok(())
    }
}

#[async_trait]
impl JobRepository for InMemoryRepository {
    async fn get_jobs_for_user(&self, user_id: Uuid) -> Result<Vec<Job>> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .values()
            .filter(|job| job.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn get_job_files(&self, job_id: Uuid) -> Result<Vec<JobFile>> {
        let files = self.job_files.read().await;
        Ok(files.get(&job_id).cloned().unwrap_or_default())
    }

    async fn create_job(&self, job: &Job) -> Result<()> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(RepositoryError::duplicate(Record::Job, job.id));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn add_job_file(&self, file: &JobFile) -> Result<()> {
        let jobs = self.jobs.read().await;
        if !jobs.contains_key(&file.job_id) {
            return Err(RepositoryError::missing(Record::Job, file.job_id));
        }
        let mut files = self.job_files.write().await;
        files.entry(file.job_id).or_default().push(file.clone());
        Ok(())
    }
}

#[async_trait]
impl BillRepository for InMemoryRepository {
    async fn get_bills_for_user(&self, user_id: Uuid) -> Result<Vec<Bill>> {
        let bills = self.bills.read().await;
        Ok(bills
            .values()
            .filter(|bill| bill.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_bill(&self, bill: &Bill) -> Result<()> {
        let mut bills = self.bills.write().await;
        if bills.contains_key(&bill.id) {
            return Err(RepositoryError::duplicate(Record::Bill, bill.id));
        }
        bills.insert(bill.id, bill.clone());
        Ok(())
    }
}

#[async_trait]
impl SupportRequestRepository for InMemoryRepository {
    async fn get_requests_for_user(&self, user_id: Uuid) -> Result<Vec<SupportRequest>> {
        let requests = self.requests.read().await;
        Ok(requests
            .values()
            .filter(|request| request.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_request(&self, request: &SupportRequest) -> Result<()> {
        let mut requests = self.requests.write().await;
        if requests.contains_key(&request.id) {
            return Err(RepositoryError::duplicate(Record::SupportRequest, request.id));
        }
        requests.insert(request.id, request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use logistix_core::portal::{BillStatus, JobStatus, Money, SendRequest};

    // Helper to create test dates
    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn user(email: &str) -> User {
        User::new(email, "hash", "Asha", "Acme Imports", "5551234567")
    }

    // ==================== User Tests ====================

    #[tokio::test]
    async fn test_user_create_and_get_by_email() {
        let repo = InMemoryRepository::new();
        let user = user("ops@acme.example.com");

        repo.create_user(&user).await.unwrap();

        let by_id = repo.get_user(user.id).await.unwrap().unwrap();
        let by_email = repo
            .get_user_by_email("ops@acme.example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_id, user);
        assert_eq!(by_email.id, user.id);
    }

    #[tokio::test]
    async fn test_user_duplicate_email_rejected() {
        let repo = InMemoryRepository::new();
        repo.create_user(&user("ops@acme.example.com")).await.unwrap();

        let result = repo.create_user(&user("OPS@acme.example.com")).await;

        assert!(matches!(
            result,
            Err(RepositoryError::Duplicate {
                record: Record::User,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_user_update_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.update_user(&user("ghost@acme.example.com")).await;

        assert!(matches!(result, Err(RepositoryError::Missing { .. })));
    }

    // ==================== Inquiry Tests ====================

    #[tokio::test]
    async fn test_newsletter_subscription_is_idempotent() {
        let repo = InMemoryRepository::new();

        assert!(repo.subscribe_newsletter("news@acme.example.com").await.unwrap());
        assert!(!repo.subscribe_newsletter("news@acme.example.com").await.unwrap());
        assert!(repo.subscribe_newsletter("other@acme.example.com").await.unwrap());
    }

    // ==================== Shipment Tests ====================

    #[tokio::test]
    async fn test_shipment_lookup_and_events_keep_insertion_order() {
        let repo = InMemoryRepository::new();
        let shipment = Shipment::new("ulx555", "Air Freight", "In Transit", "Oslo", "Paris");
        repo.create_shipment(&shipment).await.unwrap();

        let now = Utc::now();
        let first = TrackingEvent::new(shipment.id, "Picked Up", "Collected", now);
        let second = TrackingEvent::new(shipment.id, "In Transit", "Departed", now);
        repo.add_tracking_event(&first).await.unwrap();
        repo.add_tracking_event(&second).await.unwrap();

        let found = repo
            .get_shipment_by_tracking_number("ULX555")
            .await
            .unwrap()
            .unwrap();
        let events = repo.get_tracking_events(found.id).await.unwrap();
        assert_eq!(events, vec![first, second]);
    }

    #[tokio::test]
    async fn test_shipment_duplicate_tracking_number_rejected() {
        let repo = InMemoryRepository::new();
        repo.create_shipment(&Shipment::new("ULX1", "Air Freight", "Pending", "A", "B"))
            .await
            .unwrap();

        let result = repo
            .create_shipment(&Shipment::new("ulx1", "Ocean Freight", "Pending", "C", "D"))
            .await;

        assert!(matches!(result, Err(RepositoryError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn test_event_for_unknown_shipment() {
        let repo = InMemoryRepository::new();
        let event = TrackingEvent::new(Uuid::new_v4(), "Delivered", "Done", Utc::now());

        let result = repo.add_tracking_event(&event).await;

        assert!(matches!(result, Err(RepositoryError::Missing { .. })));
    }

    #[tokio::test]
    async fn test_unknown_tracking_number() {
        let repo = InMemoryRepository::new();
        assert!(repo
            .get_shipment_by_tracking_number("NOPE")
            .await
            .unwrap()
            .is_none());
        assert!(repo.get_tracking_events(Uuid::new_v4()).await.unwrap().is_empty());
    }

    // ==================== Portal Tests ====================

    #[tokio::test]
    async fn test_jobs_are_scoped_to_user() {
        let repo = InMemoryRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let job = Job::new(alice, "J-1", date(2024, 12, 1), "Hamburg", JobStatus::Pending);
        repo.create_job(&job).await.unwrap();
        repo.create_job(&Job::new(bob, "J-2", date(2024, 12, 2), "Oslo", JobStatus::Pending))
            .await
            .unwrap();

        let jobs = repo.get_jobs_for_user(alice).await.unwrap();

        assert_eq!(jobs, vec![job]);
    }

    #[tokio::test]
    async fn test_job_files() {
        let repo = InMemoryRepository::new();
        let job = Job::new(Uuid::new_v4(), "J-1", date(2024, 12, 1), "Hamburg", JobStatus::Completed);
        repo.create_job(&job).await.unwrap();

        let file = JobFile::new(job.id, "packing-list.pdf", "pdf", "/files/packing-list.pdf");
        repo.add_job_file(&file).await.unwrap();

        assert_eq!(repo.get_job_files(job.id).await.unwrap(), vec![file]);
        assert!(repo
            .add_job_file(&JobFile::new(Uuid::new_v4(), "x.pdf", "pdf", "/x.pdf"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_bills_and_requests_are_scoped_to_user() {
        let repo = InMemoryRepository::new();
        let user_id = Uuid::new_v4();
        let bill = Bill::new(
            user_id,
            "B-1",
            date(2024, 12, 1),
            Money::from_cents(125_000),
            BillStatus::Pending,
        );
        repo.create_bill(&bill).await.unwrap();
        let request = SendRequest {
            subject: "Missing document".to_string(),
            description: "Please upload the packing list".to_string(),
            attachment_url: None,
        }
        .into_support_request(user_id);
        repo.create_request(&request).await.unwrap();

        assert_eq!(repo.get_bills_for_user(user_id).await.unwrap(), vec![bill]);
        assert_eq!(repo.get_requests_for_user(user_id).await.unwrap(), vec![request]);
        assert!(repo
            .get_bills_for_user(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }
}
