use thiserror::Error;

/// Dashboard errors
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The remote fetch failed or the payload is unusable (malformed CSV,
    /// missing source column). Not retried; the panel renders the failure.
    #[error("dataset unavailable: {reason}")]
    DataUnavailable { reason: String },

    /// A numeric column declared for range filtering has no non-null
    /// values, so no `(min, max)` default can be derived.
    #[error("no non-null values to derive a range for column '{0}'")]
    NoDataForRange(String),
}

impl DashboardError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        DashboardError::DataUnavailable {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::unavailable("request timed out");
        assert!(err.to_string().contains("dataset unavailable"));

        let err = DashboardError::NoDataForRange("kelly".to_string());
        assert!(err.to_string().contains("kelly"));
    }
}
