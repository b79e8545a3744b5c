use crate::model::draft::{BusinessDetails, LeadDraft, RoleSet};
use crate::model::options::{Attendance, ContactChannel, Industry, UsState, YesNo};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

static NO_BUSINESS: BusinessDetails = BusinessDetails {
    company_name: String::new(),
    industry: None,
    phone: String::new(),
    address: String::new(),
    city: String::new(),
    state: UsState::Idaho,
    zip: String::new(),
    website: String::new(),
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaOverride {
    pub area: String,
    pub county: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    #[serde(rename = "preferredCommunication")]
    pub preferred_contact: Option<ContactChannel>,
    pub address1: &'a str,
    pub address2: &'a str,
    pub city: &'a str,
    pub state: UsState,
    pub zip: &'a str,
    pub roles: &'a RoleSet,
    pub is_project_location: Option<YesNo>,
    pub project_description: &'a str,
    pub county: &'a str,
    pub area: &'a str,

    pub company_name: &'a str,
    pub industry: Option<Industry>,
    pub business_phone: &'a str,
    pub business_address: &'a str,
    pub business_city: &'a str,
    pub business_state: UsState,
    pub business_zip: &'a str,
    pub website: &'a str,

    pub site_visit_availability: Option<Attendance>,
    pub site_visit_contact_method: Option<ContactChannel>,
    pub site_visit_other_first_name: &'a str,
    pub site_visit_other_last_name: &'a str,
    pub site_visit_other_phone: &'a str,
    pub site_visit_other_email: &'a str,
    pub site_visit_other_roles: &'a RoleSet,
    pub site_visit_other_provide_phone: Option<YesNo>,
    pub site_visit_other_want_contact: Option<YesNo>,
    pub site_visit_other_company: &'a str,
    pub site_visit_other_company_phone: &'a str,
    pub site_visit_other_company_address: &'a str,
    pub site_visit_instructions: &'a str,

    pub services: &'a [String],
    pub service_names: Vec<String>,
    pub wants_site_visit: Option<YesNo>,
    pub site_visit_date: Option<&'a str>,
    #[serde(rename = "siteVisitISO", serialize_with = "iso_millis")]
    pub site_visit_iso: Option<DateTime<Utc>>,
}

impl<'a> SubmissionPayload<'a> {
    /// An override wins over the draft unless it is blank.
    pub fn build(
        draft: &'a LeadDraft,
        services: &'a [String],
        service_names: Vec<String>,
        overrides: Option<&'a AreaOverride>,
    ) -> SubmissionPayload<'a> {
        let business = if draft.is_business_lead() {
            &draft.business
        } else {
            &NO_BUSINESS
        };
        let area = overrides
            .map(|o| o.area.as_str())
            .filter(|a| !a.is_empty())
            .unwrap_or(draft.area.as_str());
        let county = overrides
            .map(|o| o.county.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or(draft.county.as_str());
        let visit = &draft.site_visit;
        let delegate = &visit.delegate;

        SubmissionPayload {
            first_name: &draft.first_name,
            last_name: &draft.last_name,
            email: &draft.email,
            phone: &draft.phone,
            preferred_contact: draft.preferred_contact,
            address1: &draft.address1,
            address2: &draft.address2,
            city: &draft.city,
            state: draft.state,
            zip: &draft.zip,
            roles: &draft.roles,
            is_project_location: draft.is_project_location,
            project_description: &draft.project_description,
            county,
            area,

            company_name: &business.company_name,
            industry: business.industry,
            business_phone: &business.phone,
            business_address: &business.address,
            business_city: &business.city,
            business_state: business.state,
            business_zip: &business.zip,
            website: &business.website,

            site_visit_availability: visit.attendance,
            site_visit_contact_method: visit.contact_method,
            site_visit_other_first_name: &delegate.first_name,
            site_visit_other_last_name: &delegate.last_name,
            site_visit_other_phone: &delegate.phone,
            site_visit_other_email: &delegate.email,
            site_visit_other_roles: &delegate.roles,
            site_visit_other_provide_phone: delegate.provide_phone,
            site_visit_other_want_contact: delegate.want_contact,
            site_visit_other_company: &delegate.company,
            site_visit_other_company_phone: &delegate.company_phone,
            site_visit_other_company_address: &delegate.company_address,
            site_visit_instructions: &visit.access_instructions,

            services,
            service_names,
            wants_site_visit: visit.want_visit,
            site_visit_date: visit.time_block.as_ref().map(|b| b.display.as_str()),
            site_visit_iso: visit.time_block.as_ref().and_then(|b| b.normalized),
        }
    }
}

fn iso_millis<S: Serializer>(value: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => s.serialize_none(),
    }
}
