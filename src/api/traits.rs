//! Trait abstraction for the demo request transport to enable mocking in tests

use crate::error::SubmissionError;
use crate::state::{DemoRequestFields, SubmissionReceipt};
use async_trait::async_trait;

/// Sends a demo request to the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DemoRequestTransport: Send + Sync {
    /// Write one demo request.
    ///
    /// `Ok(None)` means the backend accepted the request but its answer did
    /// not contain a readable record.
    async fn send_demo_request(
        &self,
        fields: &DemoRequestFields,
    ) -> Result<Option<SubmissionReceipt>, SubmissionError>;
}
