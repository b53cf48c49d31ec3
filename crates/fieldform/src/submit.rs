//! Submission seam
//!
//! The HTTP client lives outside this crate. A [`Submitter`] receives the
//! destination and the payload and is never asked for a result.

use crate::payload::SubmitPayload;

/// Hands a submitted payload to whatever transport the host uses.
pub trait Submitter {
    /// Fire and forget. Errors belong to the implementation.
    fn submit(&self, destination: &str, payload: &SubmitPayload);
}

impl<F> Submitter for F
where
    F: Fn(&str, &SubmitPayload),
{
    fn submit(&self, destination: &str, payload: &SubmitPayload) {
        self(destination, payload)
    }
}

/// Submitter that only records the submission in the trace log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&self, destination: &str, payload: &SubmitPayload) {
        tracing::info!(
            destination,
            fields = payload.len(),
            body = %payload.to_form_urlencoded(),
            "form submitted"
        );
    }
}
