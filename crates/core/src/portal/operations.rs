//! Pure aggregations behind the dashboard overview and invoice screens.

use serde::{Deserialize, Serialize};

use super::{Bill, BillStatus, Job, JobStatus, Money, RequestStatus, SupportRequest};

/// Counters shown on the dashboard overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub pending_requests: usize,
    pub completed_jobs: usize,
}

/// Per-status counts and totals for a customer's bills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub paid_count: usize,
    pub pending_count: usize,
    pub overdue_count: usize,
    pub paid: Money,
    pub pending: Money,
    pub overdue: Money,
    /// Pending plus overdue.
    pub outstanding: Money,
}

pub fn dashboard_stats(jobs: &[Job], requests: &[SupportRequest]) -> DashboardStats {
    DashboardStats {
        total_jobs: jobs.len(),
        pending_requests: requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count(),
        completed_jobs: jobs
            .iter()
            .filter(|j| j.status == JobStatus::Completed)
            .count(),
    }
}

/// Totals bills by status. Cancelled bills are ignored.
pub fn summarize_bills(bills: &[Bill]) -> InvoiceSummary {
    let mut summary = InvoiceSummary::default();
    for bill in bills {
        match bill.status {
            BillStatus::Paid => {
                summary.paid_count += 1;
                summary.paid = summary.paid + bill.amount;
            }
            BillStatus::Pending => {
                summary.pending_count += 1;
                summary.pending = summary.pending + bill.amount;
            }
            BillStatus::Overdue => {
                summary.overdue_count += 1;
                summary.overdue = summary.overdue + bill.amount;
            }
            BillStatus::Cancelled => {}
        }
    }
    summary.outstanding = summary.pending + summary.overdue;
    summary
}

/// Orders requests newest first, using the ID as a stable tie-breaker.
pub fn sort_requests_newest_first(requests: &mut [SupportRequest]) {
    requests.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
