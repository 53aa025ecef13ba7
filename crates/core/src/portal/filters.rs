//! Invoice-number and date-range filtering for jobs and bills.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_string;

use super::{Bill, Job, RecordFilterError};

/// Raw filter parameters as they arrive in a query string.
///
/// Dates stay as strings here so that a malformed date is reported through
/// [`RecordFilterError`] rather than as an opaque query rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilterQuery {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_invoice_no: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub from_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub to_date: Option<String>,
}

impl RecordFilterQuery {
    pub fn is_empty(&self) -> bool {
        self.client_invoice_no.is_none() && self.from_date.is_none() && self.to_date.is_none()
    }
}

/// A validated filter over jobs or bills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Lowercased needle for the case-insensitive substring match.
    client_invoice_no: Option<String>,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, RecordFilterError> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(|_| RecordFilterError::InvalidDate {
                field,
                value: v.to_string(),
            })
        })
        .transpose()
}

impl TryFrom<&RecordFilterQuery> for RecordFilter {
    type Error = RecordFilterError;

    fn try_from(query: &RecordFilterQuery) -> Result<Self, Self::Error> {
        let from_date = parse_date("fromDate", query.from_date.as_deref())?;
        let to_date = parse_date("toDate", query.to_date.as_deref())?;

        if let (Some(from), Some(to)) = (from_date, to_date) {
            if from > to {
                return Err(RecordFilterError::InvalidDateRange);
            }
        }

        Ok(Self {
            client_invoice_no: query.client_invoice_no.as_deref().map(str::to_lowercase),
            from_date,
            to_date,
        })
    }
}

impl RecordFilter {
    /// True when a record with this invoice number and date passes the filter.
    pub fn matches(&self, client_invoice_no: Option<&str>, date: NaiveDate) -> bool {
        if let Some(needle) = &self.client_invoice_no {
            match client_invoice_no {
                Some(invoice) if invoice.to_lowercase().contains(needle.as_str()) => {}
                _ => return false,
            }
        }
        if self.from_date.is_some_and(|from| date < from) {
            return false;
        }
        if self.to_date.is_some_and(|to| date > to) {
            return false;
        }
        true
    }
}

fn newest_first(a: (NaiveDate, &str), b: (NaiveDate, &str)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| b.1.cmp(a.1))
}

/// Applies the filter to a customer's jobs, newest job date first.
pub fn filter_jobs(jobs: Vec<Job>, filter: &RecordFilter) -> Vec<Job> {
    let mut jobs: Vec<Job> = jobs
        .into_iter()
        .filter(|j| filter.matches(j.client_invoice_no.as_deref(), j.job_date))
        .collect();
    jobs.sort_by(|a, b| newest_first((a.job_date, &a.job_no), (b.job_date, &b.job_no)));
    jobs
}

/// Applies the filter to a customer's bills, newest bill date first.
pub fn filter_bills(bills: Vec<Bill>, filter: &RecordFilter) -> Vec<Bill> {
    let mut bills: Vec<Bill> = bills
        .into_iter()
        .filter(|b| filter.matches(b.client_invoice_no.as_deref(), b.bill_date))
        .collect();
    bills.sort_by(|a, b| newest_first((a.bill_date, &a.bill_no), (b.bill_date, &b.bill_no)));
    bills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::{BillStatus, JobStatus, Money};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn job(no: &str, day: u32, invoice: Option<&str>) -> Job {
        let job = Job::new(Uuid::nil(), no, date(2024, 12, day), "Hamburg", JobStatus::Pending);
        match invoice {
            Some(inv) => job.with_invoice(inv, date(2024, 12, day)),
            None => job,
        }
    }

    fn query(invoice: Option<&str>, from: Option<&str>, to: Option<&str>) -> RecordFilterQuery {
        RecordFilterQuery {
            client_invoice_no: invoice.map(String::from),
            from_date: from.map(String::from),
            to_date: to.map(String::from),
        }
    }

    fn numbers(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.job_no.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything_newest_first() {
        let jobs = vec![job("J-1", 1, None), job("J-3", 3, None), job("J-2", 2, None)];

        let result = filter_jobs(jobs, &RecordFilter::default());

        assert_eq!(numbers(&result), ["J-3", "J-2", "J-1"]);
    }

    #[test]
    fn test_same_date_ties_break_by_number_descending() {
        let jobs = vec![job("J-10", 5, None), job("J-11", 5, None)];

        let result = filter_jobs(jobs, &RecordFilter::default());

        assert_eq!(numbers(&result), ["J-11", "J-10"]);
    }

    #[test]
    fn test_invoice_filter_is_case_insensitive_substring() {
        let filter = RecordFilter::try_from(&query(Some("inv-7"), None, None)).unwrap();
        let jobs = vec![
            job("J-1", 1, Some("INV-700")),
            job("J-2", 2, Some("INV-800")),
            job("J-3", 3, None),
        ];

        let result = filter_jobs(jobs, &filter);

        assert_eq!(numbers(&result), ["J-1"]);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let filter =
            RecordFilter::try_from(&query(None, Some("2024-12-02"), Some("2024-12-04"))).unwrap();
        let jobs = (1..=5).map(|d| job(&format!("J-{d}"), d, None)).collect();

        let result = filter_jobs(jobs, &filter);

        assert_eq!(numbers(&result), ["J-4", "J-3", "J-2"]);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = RecordFilter::try_from(&query(None, Some("2024-12-05"), Some("2024-12-01")))
            .unwrap_err();

        assert_eq!(err, RecordFilterError::InvalidDateRange);
    }

    #[test]
    fn test_malformed_date_names_the_field() {
        let err = RecordFilter::try_from(&query(None, None, Some("12/01/2024"))).unwrap_err();

        assert_eq!(err.field(), "toDate");
    }

    #[test]
    fn test_blank_query_values_deserialize_as_absent() {
        let parsed: RecordFilterQuery =
            serde_json::from_str(r#"{"clientInvoiceNo":"","fromDate":" ","toDate":null}"#)
                .unwrap();

        assert!(parsed.is_empty());
    }

    #[test]
    fn test_filter_bills_by_invoice_and_date() {
        let bill = |no: &str, day: u32, invoice: &str| {
            Bill::new(
                Uuid::nil(),
                no,
                date(2024, 11, day),
                Money::from_cents(100),
                BillStatus::Pending,
            )
            .with_client_invoice_no(invoice)
        };
        let bills = vec![
            bill("B-1", 1, "ACME-1"),
            bill("B-2", 15, "ACME-2"),
            bill("B-3", 20, "OTHER-3"),
        ];
        let filter =
            RecordFilter::try_from(&query(Some("acme"), Some("2024-11-10"), None)).unwrap();

        let result = filter_bills(bills, &filter);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].bill_no, "B-2");
    }
}
