//! Submission payload and sink

use crate::state::FormValues;
use anyhow::Result;
use serde::Serialize;

/// Payload handed to the sink after a fully valid submission.
///
/// The confirm-password field is dropped; it exists only to gate submission.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub country: String,
}

impl OutputRecord {
    /// Build the payload from the current form values.
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
            country: values.country.clone(),
        }
    }
}

/// Consumer of validated submissions, abstracted for mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait SubmitSink {
    /// Accept one validated registration.
    fn submit(&mut self, record: &OutputRecord) -> Result<()>;
}

/// Logs the payload as JSON, the terminal counterpart of a network submit.
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmitSink for LogSink {
    fn submit(&mut self, record: &OutputRecord) -> Result<()> {
        let payload = serde_json::to_string(record)?;
        tracing::info!(%payload, "registration submitted");
        Ok(())
    }
}
