//! Touched/error tracking for the six lead-form fields.
//!
//! A field's error is always recomputed from its current value; the touched
//! set only decides whether that error is shown. Submission depends on the
//! errors alone.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::phone::{E164Pattern, PhoneValidator};
use super::sink::SubmissionSink;
use super::validators::{validate_name, validate_phone_with, validate_select, validate_terms};
use crate::config::FormConfig;
use crate::error::HomeLoanError;
use crate::HomeLoanResult;

pub const TERMS_NOTICE: &str = "Please accept the terms and conditions to submit the form.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Phone,
    PropertyLocation,
    PreferredOffice,
    Terms,
}

impl FieldName {
    /// Form order.
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Phone,
        FieldName::PropertyLocation,
        FieldName::PreferredOffice,
        FieldName::Terms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Phone => "phone",
            FieldName::PropertyLocation => "propertyLocation",
            FieldName::PreferredOffice => "preferredOffice",
            FieldName::Terms => "terms",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = HomeLoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| HomeLoanError::InvalidInput {
                field: "field".into(),
                reason: format!("unknown form field '{s}'"),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Checked(b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    Untouched,
    TouchedValid,
    TouchedInvalid,
}

/// Current values of every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadFormValues {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub property_location: String,
    pub preferred_office: String,
    pub terms: bool,
}

/// The record handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub property_location: String,
    pub preferred_office: String,
    pub terms: bool,
}

impl From<&LeadFormValues> for LeadSubmission {
    fn from(v: &LeadFormValues) -> Self {
        Self {
            first_name: v.first_name.trim().to_string(),
            last_name: v.last_name.trim().to_string(),
            phone: v.phone.clone(),
            property_location: v.property_location.clone(),
            preferred_office: v.preferred_office.clone(),
            terms: v.terms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted {
        submission: LeadSubmission,
        acknowledgement: String,
    },
    Rejected {
        /// Failing fields only.
        errors: BTreeMap<FieldName, String>,
        /// Set when the terms checkbox in particular is unchecked.
        terms_notice: Option<String>,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

#[derive(Debug, Clone)]
pub struct LeadForm<P: PhoneValidator = E164Pattern> {
    values: LeadFormValues,
    touched: BTreeSet<FieldName>,
    config: FormConfig,
    phone_policy: P,
}

impl LeadForm<E164Pattern> {
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    pub fn with_config(config: FormConfig) -> Self {
        let policy = E164Pattern::from_config(&config);
        Self::with_phone_policy(config, policy)
    }
}

impl Default for LeadForm<E164Pattern> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PhoneValidator> LeadForm<P> {
    pub fn with_phone_policy(config: FormConfig, phone_policy: P) -> Self {
        Self {
            values: LeadFormValues::default(),
            touched: BTreeSet::new(),
            config,
            phone_policy,
        }
    }

    pub fn values(&self) -> &LeadFormValues {
        &self.values
    }

    /// Replace all values at once, e.g. when restoring a draft. Touched
    /// state is left as it is.
    pub fn load(&mut self, values: LeadFormValues) {
        self.values = values;
    }

    pub fn value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Terms => FieldValue::Checked(self.values.terms),
            _ => FieldValue::Text(self.text(field).to_string()),
        }
    }

    fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.values.first_name,
            FieldName::LastName => &self.values.last_name,
            FieldName::Phone => &self.values.phone,
            FieldName::PropertyLocation => &self.values.property_location,
            FieldName::PreferredOffice => &self.values.preferred_office,
            FieldName::Terms => "",
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.values.first_name),
            FieldName::LastName => Some(&mut self.values.last_name),
            FieldName::Phone => Some(&mut self.values.phone),
            FieldName::PropertyLocation => Some(&mut self.values.property_location),
            FieldName::PreferredOffice => Some(&mut self.values.preferred_office),
            FieldName::Terms => None,
        }
    }

    /// Replace a field's value. Touched state is left as it is.
    pub fn edit(&mut self, field: FieldName, value: impl Into<FieldValue>) -> HomeLoanResult<()> {
        match (field, value.into()) {
            (FieldName::Terms, FieldValue::Checked(b)) => self.values.terms = b,
            (FieldName::Terms, FieldValue::Text(_)) => {
                return Err(HomeLoanError::InvalidInput {
                    field: field.to_string(),
                    reason: "expected a checkbox value".into(),
                })
            }
            (_, FieldValue::Text(s)) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = s;
                }
            }
            (_, FieldValue::Checked(_)) => {
                return Err(HomeLoanError::InvalidInput {
                    field: field.to_string(),
                    reason: "expected a text value".into(),
                })
            }
        }
        Ok(())
    }

    /// Mark a field touched and report its resulting state.
    pub fn blur(&mut self, field: FieldName) -> FieldState {
        self.touched.insert(field);
        self.state(field)
    }

    /// Error for the field's current value; empty when valid.
    pub fn error(&self, field: FieldName) -> String {
        match field {
            FieldName::FirstName | FieldName::LastName => validate_name(self.text(field)),
            FieldName::Phone => validate_phone_with(self.text(field), &self.phone_policy),
            FieldName::PropertyLocation => {
                validate_select(self.text(field), &self.config.property_location_label)
            }
            FieldName::PreferredOffice => {
                validate_select(self.text(field), &self.config.preferred_office_label)
            }
            FieldName::Terms => validate_terms(self.values.terms),
        }
    }

    /// Errors for every field, keyed by name, empty strings included.
    pub fn errors(&self) -> BTreeMap<FieldName, String> {
        FieldName::ALL.into_iter().map(|f| (f, self.error(f))).collect()
    }

    pub fn is_valid(&self) -> bool {
        FieldName::ALL.into_iter().all(|f| self.error(f).is_empty())
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> &BTreeSet<FieldName> {
        &self.touched
    }

    pub fn state(&self, field: FieldName) -> FieldState {
        if !self.is_touched(field) {
            FieldState::Untouched
        } else if self.error(field).is_empty() {
            FieldState::TouchedValid
        } else {
            FieldState::TouchedInvalid
        }
    }

    /// The error to display, only once the field has been touched.
    pub fn visible_error(&self, field: FieldName) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        let error = self.error(field);
        (!error.is_empty()).then_some(error)
    }

    /// `valid` / `invalid` class for touched fields.
    pub fn presentation_class(&self, field: FieldName) -> Option<&'static str> {
        match self.state(field) {
            FieldState::Untouched => None,
            FieldState::TouchedValid => Some("valid"),
            FieldState::TouchedInvalid => Some("invalid"),
        }
    }

    /// Validate everything. On success hand the record to `sink` and reset
    /// the form; otherwise mark every field touched.
    pub fn submit(&mut self, sink: &mut impl SubmissionSink) -> SubmitOutcome {
        if self.is_valid() {
            let submission = LeadSubmission::from(&self.values);
            let acknowledgement = sink.accept(&submission);
            self.reset();
            return SubmitOutcome::Accepted {
                submission,
                acknowledgement,
            };
        }

        self.touched.extend(FieldName::ALL);
        let errors: BTreeMap<FieldName, String> = self
            .errors()
            .into_iter()
            .filter(|(_, e)| !e.is_empty())
            .collect();
        debug!(failing = errors.len(), "lead form submission rejected");
        SubmitOutcome::Rejected {
            errors,
            terms_notice: (!self.values.terms).then(|| TERMS_NOTICE.to_string()),
        }
    }

    /// Back to empty values with nothing touched.
    pub fn reset(&mut self) {
        self.values = LeadFormValues::default();
        self.touched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::new();
        form.edit(FieldName::FirstName, "  Asha ").unwrap();
        form.edit(FieldName::LastName, "Rao").unwrap();
        form.edit(FieldName::Phone, "+91 98765 43210").unwrap();
        form.edit(FieldName::PropertyLocation, "Mumbai").unwrap();
        form.edit(FieldName::PreferredOffice, "Pune").unwrap();
        form.edit(FieldName::Terms, true).unwrap();
        form
    }

    #[test]
    fn test_field_name_round_trips_through_str() {
        for f in FieldName::ALL {
            assert_eq!(f.as_str().parse::<FieldName>().unwrap(), f);
        }
        assert!("email".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_blur_transitions() {
        let mut form = LeadForm::new();
        assert_eq!(form.state(FieldName::FirstName), FieldState::Untouched);
        assert_eq!(form.blur(FieldName::FirstName), FieldState::TouchedInvalid);
        form.edit(FieldName::FirstName, "Asha").unwrap();
        assert_eq!(form.state(FieldName::FirstName), FieldState::TouchedValid);
        form.edit(FieldName::FirstName, "").unwrap();
        assert_eq!(form.state(FieldName::FirstName), FieldState::TouchedInvalid);
    }

    #[test]
    fn test_edit_does_not_touch() {
        let mut form = LeadForm::new();
        form.edit(FieldName::Phone, "12").unwrap();
        assert_eq!(form.state(FieldName::Phone), FieldState::Untouched);
        assert_eq!(form.visible_error(FieldName::Phone), None);
        assert_eq!(form.error(FieldName::Phone), "Please enter a valid phone number");
    }

    #[test]
    fn test_edit_rejects_mismatched_value_kind() {
        let mut form = LeadForm::new();
        assert!(form.edit(FieldName::Terms, "yes").is_err());
        assert!(form.edit(FieldName::Phone, true).is_err());
    }

    #[test]
    fn test_presentation_class() {
        let mut form = filled_form();
        assert_eq!(form.presentation_class(FieldName::LastName), None);
        form.blur(FieldName::LastName);
        assert_eq!(form.presentation_class(FieldName::LastName), Some("valid"));
        form.edit(FieldName::LastName, "R2").unwrap();
        assert_eq!(form.presentation_class(FieldName::LastName), Some("invalid"));
    }

    #[test]
    fn test_submit_empty_form() {
        let mut form = LeadForm::new();
        let mut sink: Vec<LeadSubmission> = Vec::new();
        match form.submit(&mut sink) {
            SubmitOutcome::Rejected {
                errors,
                terms_notice,
            } => {
                assert_eq!(errors.len(), 6);
                assert!(errors.values().all(|e| !e.is_empty()));
                assert_eq!(terms_notice.as_deref(), Some(TERMS_NOTICE));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(sink.is_empty());
        assert_eq!(form.touched().len(), 6);
    }

    #[test]
    fn test_rejection_without_terms_notice() {
        let mut form = filled_form();
        form.edit(FieldName::Phone, "12345").unwrap();
        let outcome = form.submit(&mut Vec::<LeadSubmission>::new());
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                errors: BTreeMap::from([(
                    FieldName::Phone,
                    "Please enter a valid phone number".to_string()
                )]),
                terms_notice: None,
            }
        );
    }

    #[test]
    fn test_accepted_submission_is_trimmed_and_form_resets() {
        let mut form = filled_form();
        form.blur(FieldName::FirstName);
        let mut sink: Vec<LeadSubmission> = Vec::new();
        let outcome = form.submit(&mut sink);
        assert!(outcome.is_accepted());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].first_name, "Asha");
        assert_eq!(sink[0].phone, "+91 98765 43210");
        assert_eq!(form.values(), &LeadFormValues::default());
        assert!(form.touched().is_empty());
    }

    #[test]
    fn test_custom_labels_flow_into_messages() {
        let config = FormConfig {
            preferred_office_label: "Preferred Area Office".into(),
            ..FormConfig::default()
        };
        let form = LeadForm::with_config(config);
        assert_eq!(
            form.error(FieldName::PreferredOffice),
            "Preferred Area Office is required"
        );
    }
}
