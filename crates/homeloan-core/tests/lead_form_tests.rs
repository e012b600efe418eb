#![cfg(feature = "lead_form")]

use std::collections::BTreeMap;

use homeloan_core::cities::fallback_cities;
use homeloan_core::config::FormConfig;
use homeloan_core::lead_form::phone::PhoneValidator;
use homeloan_core::lead_form::select::ControlledSelect;
use homeloan_core::lead_form::validators::{
    validate_name, validate_phone, validate_select, validate_terms,
};
use homeloan_core::lead_form::{
    FieldName, FieldState, LeadForm, LeadFormValues, LeadSubmission, LoggingSink, SubmitOutcome,
};
use pretty_assertions::assert_eq;

// ===========================================================================
// Validator table
// ===========================================================================

#[test]
fn test_validator_literal_cases() {
    assert_eq!(validate_name(""), "Name is required");
    assert_eq!(validate_name("A"), "Name must be at least 2 characters");
    assert_eq!(validate_name("John2"), "Name cannot contain numbers");
    assert_eq!(validate_name("John_Doe"), "Name can only contain letters and spaces");
    assert_eq!(validate_name("John Doe"), "");

    assert_eq!(validate_phone(""), "Phone number is required");
    assert_eq!(validate_phone("12345"), "Please enter a valid phone number");
    assert_eq!(validate_phone("+919876543210"), "");

    assert_eq!(validate_select("", "Property Location"), "Property Location is required");
    assert_eq!(validate_select("Mumbai", "Property Location"), "");

    assert_eq!(validate_terms(false), "You must accept the terms and conditions");
    assert_eq!(validate_terms(true), "");
}

// ===========================================================================
// State machine
// ===========================================================================

#[test]
fn test_empty_submit_surfaces_six_errors() {
    let mut form = LeadForm::new();
    let outcome = form.submit(&mut LoggingSink);
    let SubmitOutcome::Rejected {
        errors,
        terms_notice,
    } = outcome
    else {
        panic!("empty form must not be accepted");
    };
    assert_eq!(errors.len(), 6);
    for field in FieldName::ALL {
        assert_eq!(form.state(field), FieldState::TouchedInvalid);
        assert!(form.visible_error(field).is_some());
    }
    assert!(terms_notice.is_some());
}

#[test]
fn test_errors_do_not_depend_on_touched() {
    let mut form = LeadForm::new();
    form.edit(FieldName::LastName, "Rao").unwrap();
    let before = form.errors();
    form.blur(FieldName::LastName);
    form.blur(FieldName::Phone);
    assert_eq!(form.errors(), before);
    assert_eq!(before[&FieldName::LastName], "");
}

#[test]
fn test_selects_feed_the_form() {
    let mut location =
        ControlledSelect::loading("Property Location", "Select Property Location");
    let mut office = ControlledSelect::loading("Preferred Office", "Select Preferred Area Office");
    let mut form = LeadForm::new();

    // Nothing to pick yet, but the form still validates.
    form.edit(FieldName::PropertyLocation, location.value()).unwrap();
    assert_eq!(
        form.error(FieldName::PropertyLocation),
        "Property Location is required"
    );

    let cities = fallback_cities();
    location.set_options(cities.clone());
    office.set_options(cities);
    location.select("Mumbai").unwrap();
    office.select("Thane").unwrap();
    form.edit(FieldName::PropertyLocation, location.value()).unwrap();
    form.edit(FieldName::PreferredOffice, office.value()).unwrap();
    assert_eq!(form.error(FieldName::PropertyLocation), "");
    assert_eq!(form.error(FieldName::PreferredOffice), "");
}

#[test]
fn test_full_journey_with_collecting_sink() {
    let mut form = LeadForm::new();
    let mut sink: Vec<LeadSubmission> = Vec::new();

    // First attempt: only names typed.
    form.edit(FieldName::FirstName, " Priya ").unwrap();
    form.edit(FieldName::LastName, "Sharma").unwrap();
    let first = form.submit(&mut sink);
    assert!(!first.is_accepted());
    assert_eq!(form.state(FieldName::FirstName), FieldState::TouchedValid);

    // Fix the rest.
    form.edit(FieldName::Phone, "98765 43210").unwrap();
    assert_eq!(form.state(FieldName::Phone), FieldState::TouchedValid);
    form.edit(FieldName::PropertyLocation, "Pune").unwrap();
    form.edit(FieldName::PreferredOffice, "Pune").unwrap();
    form.edit(FieldName::Terms, true).unwrap();

    let second = form.submit(&mut sink);
    assert_eq!(
        second,
        SubmitOutcome::Accepted {
            submission: LeadSubmission {
                first_name: "Priya".into(),
                last_name: "Sharma".into(),
                phone: "98765 43210".into(),
                property_location: "Pune".into(),
                preferred_office: "Pune".into(),
                terms: true,
            },
            acknowledgement: "Form submitted successfully!".into(),
        }
    );
    assert_eq!(sink.len(), 1);
    assert_eq!(form.values(), &LeadFormValues::default());
    assert!(FieldName::ALL
        .iter()
        .all(|f| form.state(*f) == FieldState::Untouched));
}

#[test]
fn test_load_values_and_serialize_errors() {
    let mut form = LeadForm::new();
    let values: LeadFormValues = serde_json::from_str(
        r#"{"firstName": "Asha", "phone": "+91 98765 43210", "terms": true}"#,
    )
    .unwrap();
    form.load(values);
    let errors: BTreeMap<FieldName, String> = form
        .errors()
        .into_iter()
        .filter(|(_, e)| !e.is_empty())
        .collect();
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "lastName": "Name is required",
            "propertyLocation": "Property Location is required",
            "preferredOffice": "Preferred Office is required",
        })
    );
}

#[test]
fn test_widget_backed_phone_policy() {
    /// Stand-in for a phone widget that only knows Indian mobile numbers.
    struct IndianMobile;
    impl PhoneValidator for IndianMobile {
        fn is_valid(&self, number: &str) -> bool {
            let national = number.strip_prefix("+91").unwrap_or(number);
            national.len() == 10
                && national.starts_with(|c: char| ('6'..='9').contains(&c))
                && national.bytes().all(|b| b.is_ascii_digit())
        }
    }

    let mut form = LeadForm::with_phone_policy(FormConfig::default(), IndianMobile);
    form.edit(FieldName::Phone, "+1 415 555 2671").unwrap();
    assert_eq!(form.error(FieldName::Phone), "Please enter a valid phone number");
    form.edit(FieldName::Phone, "+91 98765 43210").unwrap();
    assert_eq!(form.error(FieldName::Phone), "");
}
