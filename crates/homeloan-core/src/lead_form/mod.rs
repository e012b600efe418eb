//! Lead-capture form: per-field validators, touched tracking and submission.

pub mod form;
pub mod phone;
pub mod select;
pub mod sink;
pub mod validators;

pub use form::{
    FieldName, FieldState, FieldValue, LeadForm, LeadFormValues, LeadSubmission, SubmitOutcome,
};
pub use sink::{LoggingSink, SubmissionSink};
