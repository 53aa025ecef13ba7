//! Demonstration jobs, bills, and requests for a customer account.
//!
//! Pure functions with no side effects, used both by the server's demo seed
//! and by tests.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use super::{
    Bill, BillStatus, Job, JobFile, JobStatus, Money, RequestStatus, SendRequest, SupportRequest,
};

/// Everything the dashboard shows for one customer.
#[derive(Debug, Clone, Default)]
pub struct SeedPortal {
    pub jobs: Vec<Job>,
    pub files: Vec<JobFile>,
    pub bills: Vec<Bill>,
    pub requests: Vec<SupportRequest>,
}

/// Generate a customer's jobs, documents, bills, and support requests.
///
/// Dates are laid out backwards from `today`, so the dashboard always looks
/// current.
///
/// ```
/// use chrono::NaiveDate;
/// use logistix_core::portal::generate_seed_portal;
/// use uuid::Uuid;
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 18).unwrap();
/// let seed = generate_seed_portal(Uuid::new_v4(), today);
///
/// assert_eq!(seed.jobs.len(), 5);
/// assert!(seed.files.iter().all(|f| seed.jobs.iter().any(|j| j.id == f.job_id)));
/// ```
pub fn generate_seed_portal(user_id: Uuid, today: NaiveDate) -> SeedPortal {
    let ago = |days: i64| today - Duration::days(days);

    let specs: [(&str, i64, &str, JobStatus, u32, Option<&str>); 5] = [
        ("ULX-J-24051", 45, "Rotterdam, NL", JobStatus::Completed, 24, Some("ACME-INV-1001")),
        ("ULX-J-24063", 30, "Hamburg, DE", JobStatus::Completed, 8, Some("ACME-INV-1017")),
        ("ULX-J-24078", 14, "Dubai, AE", JobStatus::InTransit, 40, Some("ACME-INV-1032")),
        ("ULX-J-24085", 6, "Singapore, SG", JobStatus::InTransit, 12, None),
        ("ULX-J-24091", 1, "Felixstowe, UK", JobStatus::Pending, 3, None),
    ];

    let mut seed = SeedPortal::default();

    for (i, (job_no, days, destination, status, pkg, invoice)) in specs.into_iter().enumerate() {
        let job_date = ago(days);
        let mut job = Job::new(user_id, job_no, job_date, destination, status).with_packages(pkg);
        if let Some(invoice) = invoice {
            job = job.with_invoice(invoice, job_date + Duration::days(2));
        }
        if status != JobStatus::Pending {
            job = job.with_mbl(format!("MBL{:07}", 4_410_250 + i * 137), job_date + Duration::days(1));
        }

        seed.files.push(JobFile::new(
            job.id,
            format!("{job_no}-commercial-invoice.pdf"),
            "pdf",
            format!("/files/{job_no}/commercial-invoice.pdf"),
        ));
        if job.mbl.is_some() {
            seed.files.push(JobFile::new(
                job.id,
                format!("{job_no}-bill-of-lading.pdf"),
                "pdf",
                format!("/files/{job_no}/bill-of-lading.pdf"),
            ));
        }
        if status == JobStatus::Completed {
            seed.files.push(JobFile::new(
                job.id,
                format!("{job_no}-proof-of-delivery.jpg"),
                "image",
                format!("/files/{job_no}/proof-of-delivery.jpg"),
            ));
        }

        seed.jobs.push(job);
    }

    let bill_specs: [(usize, &str, i64, BillStatus); 4] = [
        (0, "ULX-B-7001", 1_284_050, BillStatus::Paid),
        (1, "ULX-B-7019", 462_500, BillStatus::Paid),
        (2, "ULX-B-7034", 918_075, BillStatus::Pending),
        (3, "ULX-B-7040", 215_000, BillStatus::Overdue),
    ];
    for (job_index, bill_no, cents, status) in bill_specs {
        let job = &seed.jobs[job_index];
        let bill_date = job.job_date + Duration::days(3);
        seed.bills.push(
            Bill::new(user_id, bill_no, bill_date, Money::from_cents(cents), status)
                .for_job(job)
                .with_due_date(bill_date + Duration::days(30)),
        );
    }
    // Storage fee with no job behind it.
    seed.bills.push(
        Bill::new(
            user_id,
            "ULX-B-7046",
            ago(2),
            Money::from_cents(37_500),
            BillStatus::Pending,
        )
        .with_client_invoice_no("ACME-WH-0042")
        .with_due_date(ago(2) + Duration::days(14)),
    );

    let request_specs = [
        (
            "Update delivery address for ULX-J-24085",
            "Please deliver to our new warehouse at 12 Jurong Port Road.",
            RequestStatus::Pending,
            2,
        ),
        (
            "Copy of bill of lading",
            "Could you resend the bill of lading for ULX-J-24063?",
            RequestStatus::Completed,
            20,
        ),
    ];
    for (subject, description, status, days) in request_specs {
        let mut request = SendRequest {
            subject: subject.to_string(),
            description: description.to_string(),
            attachment_url: None,
        }
        .into_support_request(user_id);
        request.status = status;
        let at = ago(days)
            .and_hms_opt(10, 0, 0)
            .map(|dt| Utc.from_utc_datetime(&dt))
            .unwrap_or(request.created_at);
        request.created_at = at;
        request.updated_at = at;
        seed.requests.push(request);
    }

    seed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::{dashboard_stats, summarize_bills};

    fn seed() -> SeedPortal {
        generate_seed_portal(Uuid::nil(), NaiveDate::from_ymd_opt(2024, 12, 18).unwrap())
    }

    #[test]
    fn test_every_record_belongs_to_the_user() {
        let seed = seed();

        assert!(seed.jobs.iter().all(|j| j.user_id == Uuid::nil()));
        assert!(seed.bills.iter().all(|b| b.user_id == Uuid::nil()));
        assert!(seed.requests.iter().all(|r| r.user_id == Uuid::nil()));
    }

    #[test]
    fn test_seed_covers_every_dashboard_figure() {
        let seed = seed();

        let stats = dashboard_stats(&seed.jobs, &seed.requests);
        assert_eq!(stats.total_jobs, 5);
        assert_eq!(stats.completed_jobs, 2);
        assert_eq!(stats.pending_requests, 1);

        let summary = summarize_bills(&seed.bills);
        assert_eq!(summary.paid_count, 2);
        assert_eq!(summary.overdue_count, 1);
        assert!(summary.outstanding > Money::ZERO);
    }

    #[test]
    fn test_job_numbers_are_unique() {
        let seed = seed();
        let mut numbers: Vec<_> = seed.jobs.iter().map(|j| j.job_no.clone()).collect();
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), seed.jobs.len());
    }
}
