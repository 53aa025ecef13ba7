use std::fmt;

use thiserror::Error;

/// Kind of stored record named in a [`RepositoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    User,
    Contact,
    Quote,
    QuoteLead,
    Shipment,
    Job,
    Bill,
    SupportRequest,
}

impl Record {
    pub fn as_str(self) -> &'static str {
        match self {
            Record::User => "user",
            Record::Contact => "contact submission",
            Record::Quote => "quote request",
            Record::QuoteLead => "quote lead",
            Record::Shipment => "shipment",
            Record::Job => "job",
            Record::Bill => "bill",
            Record::SupportRequest => "support request",
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a repository write.
///
/// Reads never fail on their own; an absent record is `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The key (id, email or tracking number) is already taken.
    #[error("{record} {key} is already stored")]
    Duplicate { record: Record, key: String },

    /// An update or child record points at something that is not stored.
    #[error("no {record} stored under {key}")]
    Missing { record: Record, key: String },
}

impl RepositoryError {
    pub fn duplicate(record: Record, key: impl fmt::Display) -> Self {
        RepositoryError::Duplicate {
            record,
            key: key.to_string(),
        }
    }

    pub fn missing(record: Record, key: impl fmt::Display) -> Self {
        RepositoryError::Missing {
            record,
            key: key.to_string(),
        }
    }

    /// The record kind involved in the failure.
    pub fn record(&self) -> Record {
        match self {
            RepositoryError::Duplicate { record, .. } | RepositoryError::Missing { record, .. } => {
                *record
            }
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names_record_and_key() {
        let error = RepositoryError::duplicate(Record::User, "ops@example.com");
        assert_eq!(error.to_string(), "user ops@example.com is already stored");
        assert_eq!(error.record(), Record::User);
    }

    #[test]
    fn test_missing_names_record_and_key() {
        let error = RepositoryError::missing(Record::Shipment, "ULX000000000");
        assert_eq!(error.to_string(), "no shipment stored under ULX000000000");
    }

    #[test]
    fn test_support_request_label() {
        assert_eq!(Record::SupportRequest.to_string(), "support request");
    }
}
