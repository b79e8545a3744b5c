use crate::model::draft::LeadDraft;
use crate::model::options::{Attendance, YesNo};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Payload key -> message. Empty means valid.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn validate_services(selected: usize) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if selected == 0 {
        errors.insert("services", "Please select at least one service");
    }
    errors
}

pub fn validate_contact(draft: &LeadDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if blank(&draft.first_name) {
        errors.insert("firstName", "First Name is required");
    }
    if blank(&draft.last_name) {
        errors.insert("lastName", "Last Name is required");
    }
    if blank(&draft.email) {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&draft.email) {
        errors.insert("email", "Invalid email");
    }
    if blank(&draft.phone) {
        errors.insert("phone", "Phone is required");
    }
    if draft.preferred_contact.is_none() {
        errors.insert("preferredCommunication", "Required");
    }
    if blank(&draft.address1) {
        errors.insert("address1", "Address is required");
    }
    if blank(&draft.city) {
        errors.insert("city", "City is required");
    }
    if blank(&draft.zip) {
        errors.insert("zip", "Zip is required");
    }
    if draft.roles.is_empty() {
        errors.insert("roles", "Select a role");
    }
    if draft.is_project_location.is_none() {
        errors.insert("isProjectLocation", "Required");
    }
    errors
}

pub fn validate_business(draft: &LeadDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !draft.is_business_lead() {
        return errors;
    }
    let business = &draft.business;
    if blank(&business.company_name) {
        errors.insert("companyName", "Company Name is required");
    }
    if business.industry.is_none() {
        errors.insert("industry", "Please select an industry");
    }
    if blank(&business.phone) {
        errors.insert("businessPhone", "Business Phone is required");
    }
    if blank(&business.address) {
        errors.insert("businessAddress", "Business Address is required");
    }
    if blank(&business.city) {
        errors.insert("businessCity", "City is required");
    }
    if blank(&business.zip) {
        errors.insert("businessZip", "Zip is required");
    }
    errors
}

pub fn validate_scheduling(draft: &LeadDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let visit = &draft.site_visit;

    match visit.want_visit {
        None => {
            errors.insert("wantsSiteVisit", "Please choose whether you want a site visit");
            return errors;
        }
        Some(YesNo::No) => return errors,
        Some(YesNo::Yes) => {}
    }

    if visit.time_block.is_none() {
        errors.insert("date", "Please select a date");
    }
    if visit.attendance.is_none() {
        errors.insert("availability", "Please tell us who will be there");
    }
    if visit.attendance != Some(Attendance::DelegatePresent) {
        return errors;
    }

    let delegate = &visit.delegate;
    if blank(&delegate.first_name) {
        errors.insert("siteVisitOtherFirstName", "First Name is required");
    }

    if delegate.is_professional() {
        if blank(&delegate.last_name) {
            errors.insert(
                "siteVisitOtherLastName",
                "Last Name is required for business contacts",
            );
        }
        if blank(&delegate.phone) {
            errors.insert("siteVisitOtherPhone", "Phone is required for business contacts");
        }
        if blank(&delegate.company) {
            errors.insert("siteVisitOtherCompany", "Company Name is required");
        }
        match delegate.want_contact {
            None => {
                errors.insert(
                    "siteVisitOtherWantContact",
                    "Please choose if you want Brad to contact them",
                );
            }
            Some(YesNo::Yes) if visit.contact_method.is_none() => {
                errors.insert("siteVisitContactMethod", "Please select a contact method");
            }
            _ => {}
        }
    } else {
        match delegate.provide_phone {
            None => {
                errors.insert("siteVisitOtherProvidePhone", "Please choose an option");
            }
            Some(YesNo::Yes) => {
                if blank(&delegate.phone) {
                    errors.insert(
                        "siteVisitOtherPhone",
                        "Phone is required if you want Brad to contact them",
                    );
                }
                if visit.contact_method.is_none() {
                    errors.insert("siteVisitContactMethod", "Please select a contact method");
                }
            }
            Some(YesNo::No) => {}
        }
    }
    errors
}
