use thiserror::Error;

/// Errors that can occur when building a job or bill filter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordFilterError {
    #[error("Invalid {field}: expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("fromDate must be on or before toDate")]
    InvalidDateRange,
}

impl RecordFilterError {
    /// Wire name of the offending query parameter.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidDate { field, .. } => field,
            Self::InvalidDateRange => "fromDate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = RecordFilterError::InvalidDate {
            field: "toDate",
            value: "yesterday".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid toDate: expected YYYY-MM-DD");
        assert_eq!(err.field(), "toDate");
        assert_eq!(
            RecordFilterError::InvalidDateRange.to_string(),
            "fromDate must be on or before toDate"
        );
    }
}
