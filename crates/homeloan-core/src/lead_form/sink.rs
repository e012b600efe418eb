//! Where accepted submissions go. Nothing is sent over the network.

use tracing::info;

use super::form::LeadSubmission;

pub const SUBMITTED_ACK: &str = "Form submitted successfully!";

pub trait SubmissionSink {
    /// Take ownership of an accepted record and return the acknowledgement
    /// shown to the user.
    fn accept(&mut self, submission: &LeadSubmission) -> String;
}

/// Logs each submission at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl SubmissionSink for LoggingSink {
    fn accept(&mut self, submission: &LeadSubmission) -> String {
        info!(
            first_name = %submission.first_name,
            last_name = %submission.last_name,
            phone = %submission.phone,
            property_location = %submission.property_location,
            preferred_office = %submission.preferred_office,
            "lead form submitted"
        );
        SUBMITTED_ACK.to_string()
    }
}

/// Keeps every submission in memory.
impl SubmissionSink for Vec<LeadSubmission> {
    fn accept(&mut self, submission: &LeadSubmission) -> String {
        self.push(submission.clone());
        SUBMITTED_ACK.to_string()
    }
}
