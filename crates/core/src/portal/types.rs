use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Money;

/// Lifecycle of a freight job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Pending,
    InTransit,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in-transit",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A freight shipment record tracked by job number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_no: String,
    pub job_date: NaiveDate,
    pub client_invoice_no: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub destination: String,
    /// Master bill of lading number.
    pub mbl: Option<String>,
    pub mbl_date: Option<NaiveDate>,
    /// Package count.
    pub pkg: Option<u32>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(
        user_id: Uuid,
        job_no: impl Into<String>,
        job_date: NaiveDate,
        destination: impl Into<String>,
        status: JobStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            job_no: job_no.into(),
            job_date,
            client_invoice_no: None,
            invoice_date: None,
            destination: destination.into(),
            mbl: None,
            mbl_date: None,
            pkg: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_invoice(mut self, invoice_no: impl Into<String>, date: NaiveDate) -> Self {
        self.client_invoice_no = Some(invoice_no.into());
        self.invoice_date = Some(date);
        self
    }

    pub fn with_mbl(mut self, mbl: impl Into<String>, date: NaiveDate) -> Self {
        self.mbl = Some(mbl.into());
        self.mbl_date = Some(date);
        self
    }

    pub fn with_packages(mut self, pkg: u32) -> Self {
        self.pkg = Some(pkg);
        self
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A document attached to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFile {
    pub id: Uuid,
    pub job_id: Uuid,
    pub file_name: String,
    /// Short type tag such as `pdf` or `image`.
    pub file_type: String,
    pub file_url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl JobFile {
    pub fn new(
        job_id: Uuid,
        file_name: impl Into<String>,
        file_type: impl Into<String>,
        file_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            file_name: file_name.into(),
            file_type: file_type.into(),
            file_url: file_url.into(),
            uploaded_at: Utc::now(),
        }
    }
}

/// Payment state of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// An invoice issued to a customer, optionally for a specific job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: Option<Uuid>,
    pub bill_no: String,
    pub bill_date: NaiveDate,
    pub client_invoice_no: Option<String>,
    pub amount: Money,
    pub status: BillStatus,
    pub due_date: Option<NaiveDate>,
}

impl Bill {
    pub fn new(
        user_id: Uuid,
        bill_no: impl Into<String>,
        bill_date: NaiveDate,
        amount: Money,
        status: BillStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            job_id: None,
            bill_no: bill_no.into(),
            bill_date,
            client_invoice_no: None,
            amount,
            status,
            due_date: None,
        }
    }

    pub fn for_job(mut self, job: &Job) -> Self {
        self.job_id = Some(job.id);
        self.client_invoice_no = job.client_invoice_no.clone();
        self
    }

    pub fn with_client_invoice_no(mut self, invoice_no: impl Into<String>) -> Self {
        self.client_invoice_no = Some(invoice_no.into());
        self
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }
}

/// State of a support request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A support ticket filed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject: String,
    pub description: String,
    pub attachment_url: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
