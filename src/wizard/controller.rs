use crate::config::Config;
use crate::error::Error;
use crate::model::catalog::Catalog;
use crate::model::data::Acknowledgment;
use crate::model::draft::{LeadDraft, PhoneField, TimeBlock, format_us_phone};
use crate::model::options::{Attendance, Role, YesNo};
use crate::model::payload::{AreaOverride, SubmissionPayload};
use crate::model::schedule::fallback_time_blocks;
use crate::webhook::LeadServices;
use crate::wizard::validate::FieldErrors;
use crate::wizard::{AreaCheck, Context, Event, Step, Transition, transition};
use log::{debug, error, info, warn};
use std::fmt::{Display, Formatter};

const INITIALIZING: &str = "Initializing Secure Portal...";
const CHECKING_AREA: &str = "Checking Service Area...";
const RETRIEVING_DATES: &str = "Retrieving available site visit dates...";
const CREATING_PROJECT: &str = "Creating Project...";

const SUBMISSION_FAILED: &str = "We encountered an issue submitting your project. \
    If this persists, please contact us directly.";

/// The draft and the current step are left as they were.
#[derive(Debug)]
pub struct SubmissionFailure {
    pub message: &'static str,
    pub technical: String,
}

impl From<Error> for SubmissionFailure {
    fn from(value: Error) -> Self {
        SubmissionFailure {
            message: SUBMISSION_FAILED,
            technical: value.to_string(),
        }
    }
}

impl Display for SubmissionFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nTechnical Details: {}", self.message, self.technical)
    }
}

impl std::error::Error for SubmissionFailure {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipField {
    Contact,
    Business,
}

pub struct WizardController<S> {
    services: S,
    serviceable_area: String,
    catalog_fallback: bool,

    step: Step,
    loading: Option<&'static str>,
    catalog: Catalog,
    selected: Vec<String>,
    draft: LeadDraft,
    time_blocks: Vec<String>,
    errors: FieldErrors,
    confirmation: Option<Acknowledgment>,
}

impl<S: LeadServices> WizardController<S> {
    pub fn new(services: S, config: &Config) -> Self {
        WizardController {
            services,
            serviceable_area: config.SERVICEABLE_AREA.clone(),
            catalog_fallback: config.CATALOG_FALLBACK,
            step: Step::Services,
            loading: Some(INITIALIZING),
            catalog: Catalog::default(),
            selected: vec![],
            draft: LeadDraft::default(),
            time_blocks: vec![],
            errors: FieldErrors::new(),
            confirmation: None,
        }
    }

    // region:    --- Accessors

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn loading(&self) -> Option<&'static str> {
        self.loading
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_services(&self) -> &[String] {
        &self.selected
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn time_blocks(&self) -> &[String] {
        &self.time_blocks
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn confirmation(&self) -> Option<&Acknowledgment> {
        self.confirmation.as_ref()
    }

    pub fn services(&self) -> &S {
        &self.services
    }

    // endregion: --- Accessors

    /// Falls back to the built-in catalog unless `CATALOG_FALLBACK` is off.
    pub async fn load(&mut self) {
        self.loading = Some(INITIALIZING);
        match self.services.load_catalog().await {
            Ok(catalog) => {
                debug!("catalog loaded with {} services", catalog.services.len());
                self.catalog = catalog;
                if matches!(self.step, Step::Error(_)) {
                    self.step = Step::Services;
                }
            }
            Err(e) if self.catalog_fallback => {
                warn!("catalog webhook failed, using built-in services: {}", e);
                self.catalog = Catalog::fallback();
            }
            Err(e) => {
                error!("catalog webhook failed: {}", e);
                self.step = Step::Error(e.to_string());
            }
        }
        self.loading = None;
    }

    pub async fn restart(&mut self) {
        info!("restarting intake");
        self.step = Step::Services;
        self.selected.clear();
        self.draft = LeadDraft::default();
        self.time_blocks.clear();
        self.errors.clear();
        self.confirmation = None;
        self.load().await;
    }

    // region:    --- Edits

    pub fn toggle_service(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else if self.catalog.contains(id) {
            self.selected.push(id.to_string());
        } else {
            debug!("ignoring unknown service {}", id);
        }
    }

    pub fn edit(&mut self, apply: impl FnOnce(&mut LeadDraft)) {
        apply(&mut self.draft);
    }

    pub fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn toggle_role(&mut self, role: Role) {
        self.draft.roles.toggle(role);
        self.errors.remove("roles");
    }

    pub fn toggle_delegate_role(&mut self, role: Role) {
        self.draft.site_visit.delegate.roles.toggle(role);
    }

    pub fn set_phone(&mut self, field: PhoneField, raw: &str) {
        *field.slot(&mut self.draft) = format_us_phone(raw);
    }

    pub async fn zip_entered(&mut self, field: ZipField, zip: &str) {
        let zip = zip.trim().to_string();
        match field {
            ZipField::Contact => self.draft.zip = zip.clone(),
            ZipField::Business => self.draft.business.zip = zip.clone(),
        }
        if let AreaCheck::Resolved(resolved) = self.lookup_area(&zip).await {
            debug!("zip {} is in {:?}", zip, resolved.area);
        }
    }

    pub async fn choose_site_visit(&mut self, choice: YesNo) {
        self.draft.site_visit.set_want_visit(choice);
        if choice == YesNo::Yes {
            self.fetch_time_blocks().await;
        }
    }

    pub fn select_time_block(&mut self, display: &str) {
        let block = TimeBlock::new(display);
        if block.normalized.is_none() {
            warn!("time block {:?} could not be normalized", display);
        }
        self.draft.site_visit.time_block = Some(block);
        self.errors.remove("date");
    }

    pub fn set_attendance(&mut self, mode: Attendance) {
        self.draft.site_visit.set_attendance(mode);
        self.errors.remove("availability");
    }

    // endregion: --- Edits

    // region:    --- Navigation

    /// Only a failed submission is returned as an error.
    pub async fn next(&mut self) -> Result<Step, SubmissionFailure> {
        let to = transition(&self.step, Event::Next, &self.context());
        match to {
            Transition::Goto(step) => {
                self.errors.clear();
                self.go_to(step);
            }
            Transition::Blocked(errors) => {
                debug!("step {:?} blocked: {:?}", self.step, errors);
                self.errors = errors;
            }
            Transition::Reopen(step, errors) => {
                warn!("{} no longer validates, reopening it", step.header());
                self.go_to(step);
                self.errors = errors;
            }
            Transition::CheckArea => {
                self.errors.clear();
                return self.complete_profile().await;
            }
            Transition::Submit(overrides) => {
                self.errors.clear();
                return self.submit(overrides).await;
            }
            Transition::Stay => {}
        }
        Ok(self.step.clone())
    }

    pub fn back(&mut self) -> Step {
        let to = transition(&self.step, Event::Back, &self.context());
        if let Transition::Goto(step) = to {
            self.go_to(step);
        }
        self.step.clone()
    }

    // endregion: --- Navigation

    fn context(&self) -> Context<'_> {
        Context {
            draft: &self.draft,
            selected_services: self.selected.len(),
            serviceable_area: &self.serviceable_area,
        }
    }

    fn go_to(&mut self, step: Step) {
        info!("{} -> {}", self.step.header(), step.header());
        debug!("step {:?} -> {:?}", self.step, step);
        self.step = step;
        self.loading = None;
    }

    async fn complete_profile(&mut self) -> Result<Step, SubmissionFailure> {
        self.loading = Some(CHECKING_AREA);
        let zip = self.draft.zip_to_check().to_string();
        let check = self.lookup_area(&zip).await;

        let to = transition(&self.step, Event::AreaChecked(check), &self.context());
        match to {
            Transition::Goto(step) => {
                self.go_to(step);
                Ok(self.step.clone())
            }
            Transition::Submit(overrides) => self.submit(overrides).await,
            _ => {
                self.loading = None;
                Ok(self.step.clone())
            }
        }
    }

    // Short zips are never sent.
    async fn lookup_area(&mut self, zip: &str) -> AreaCheck {
        if zip.chars().count() < 5 {
            debug!("zip {:?} too short for an area lookup", zip);
            return AreaCheck::Unresolved;
        }
        match self.services.resolve_area(zip).await {
            Ok(Some(info)) => {
                let resolved = AreaOverride {
                    area: info.area.unwrap_or_default(),
                    county: info.county.unwrap_or_default(),
                };
                self.draft.area = resolved.area.clone();
                self.draft.county = resolved.county.clone();
                AreaCheck::Resolved(resolved)
            }
            Ok(None) => AreaCheck::Unresolved,
            Err(e) => {
                warn!("area lookup for {} failed: {}", zip, e);
                AreaCheck::Unresolved
            }
        }
    }

    async fn fetch_time_blocks(&mut self) {
        self.loading = Some(RETRIEVING_DATES);
        self.time_blocks = match self.services.available_time_blocks().await {
            Ok(blocks) if !blocks.is_empty() => blocks,
            Ok(_) => {
                warn!("availability webhook returned no blocks, using built-in slots");
                fallback_time_blocks()
            }
            Err(e) => {
                warn!("availability webhook failed, using built-in slots: {}", e);
                fallback_time_blocks()
            }
        };
        self.loading = None;
    }

    async fn submit(&mut self, overrides: Option<AreaOverride>) -> Result<Step, SubmissionFailure> {
        self.loading = Some(CREATING_PROJECT);
        let service_names = self.catalog.names_of(&self.selected);
        let payload =
            SubmissionPayload::build(&self.draft, &self.selected, service_names, overrides.as_ref());
        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "submission payload: {}",
                serde_json::to_string(&payload).unwrap_or_default()
            );
        }
        let result = self.services.submit(&payload).await;
        self.loading = None;

        match result {
            Ok(ack) => {
                info!("lead accepted, project {:?}", ack.project_id);
                if let Some(id) = &ack.calendar_id {
                    info!("calendar event created with id {}", id);
                }
                self.confirmation = Some(ack);
                let to = transition(&self.step, Event::Acknowledged, &self.context());
                if let Transition::Goto(step) = to {
                    self.go_to(step);
                }
                Ok(self.step.clone())
            }
            Err(e) => {
                error!("submission failed on {:?}: {}", self.step, e);
                Err(SubmissionFailure::from(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::model::data::AreaInfo;
    use crate::model::draft::RoleSet;
    use crate::model::options::{ContactChannel, Industry};
    use crate::wizard::testing::homeowner_draft;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    /// In-memory stand-in for the four workflows. Records what was asked.
    #[derive(Default)]
    struct FakeServices {
        catalog_fails: bool,
        area: Option<AreaInfo>,
        area_fails: bool,
        blocks: Option<Vec<String>>,
        submit_fails: bool,
        area_calls: Mutex<Vec<String>>,
        submitted: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl LeadServices for FakeServices {
        async fn load_catalog(&self) -> Result<Catalog> {
            if self.catalog_fails {
                Err(Error::EmptyResponse)
            } else {
                Ok(Catalog::fallback())
            }
        }

        async fn resolve_area(&self, zip: &str) -> Result<Option<AreaInfo>> {
            self.area_calls.lock().unwrap().push(zip.to_string());
            if self.area_fails {
                return Err(Error::Timeout {
                    service: "area resolver",
                    secs: 10,
                });
            }
            Ok(self.area.clone())
        }

        async fn available_time_blocks(&self) -> Result<Vec<String>> {
            self.blocks.clone().ok_or(Error::EmptyResponse)
        }

        async fn submit(&self, payload: &SubmissionPayload<'_>) -> Result<Acknowledgment> {
            self.submitted
                .lock()
                .unwrap()
                .push(serde_json::to_value(payload).unwrap());
            if self.submit_fails {
                return Err(Error::NotAcknowledged);
            }
            Ok(Acknowledgment {
                project_id: Some("recP1".to_string()),
                message: "Your project has been successfully created!".to_string(),
                calendar_id: None,
            })
        }
    }

    fn in_area(area: &str) -> FakeServices {
        FakeServices {
            area: Some(AreaInfo {
                area: Some(area.to_string()),
                county: Some("Canyon".to_string()),
            }),
            ..Default::default()
        }
    }

    async fn started(services: FakeServices) -> WizardController<FakeServices> {
        let config = Config::for_base_url("http://localhost");
        let mut wizard = WizardController::new(services, &config);
        wizard.load().await;
        wizard
    }

    /// Picks a service and fills in the contact step.
    async fn at_contact(wizard: &mut WizardController<FakeServices>, draft: LeadDraft) {
        wizard.toggle_service("rec1");
        assert_eq!(wizard.next().await.unwrap(), Step::Contact);
        wizard.edit(|d| *d = draft);
    }

    fn submitted(wizard: &WizardController<FakeServices>) -> Vec<Value> {
        wizard.services().submitted.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn homeowner_in_service_area_reaches_scheduling() {
        let mut wizard = started(in_area("Area 1")).await;
        at_contact(&mut wizard, homeowner_draft()).await;

        assert_eq!(wizard.next().await.unwrap(), Step::Scheduling);
        assert_eq!(wizard.draft().area, "Area 1");
        assert_eq!(wizard.draft().county, "Canyon");
        assert!(submitted(&wizard).is_empty());
        assert_eq!(wizard.loading(), None);
    }

    #[tokio::test]
    async fn contractor_goes_through_business_details() {
        let mut wizard = started(in_area("Area 1")).await;
        let mut draft = homeowner_draft();
        draft.roles = RoleSet::new([Role::GeneralContractor]);
        at_contact(&mut wizard, draft).await;

        assert_eq!(wizard.next().await.unwrap(), Step::BusinessDetails);
        assert!(wizard.services().area_calls.lock().unwrap().is_empty());

        assert_eq!(wizard.next().await.unwrap(), Step::BusinessDetails);
        assert!(wizard.errors().contains_key("companyName"));

        wizard.edit(|d| {
            d.business.company_name = "Acme Corp".to_string();
            d.business.industry = Some(Industry::GeneralContractor);
            d.business.address = "999 Business Way".to_string();
            d.business.city = "Boise".to_string();
            d.business.zip = "83702".to_string();
        });
        wizard.set_phone(PhoneField::Business, "2085550199");
        assert_eq!(wizard.next().await.unwrap(), Step::Scheduling);
        assert!(wizard.errors().is_empty());
    }

    #[tokio::test]
    async fn outside_area_skips_scheduling_with_overrides() {
        let mut wizard = started(in_area("Area 2")).await;
        at_contact(&mut wizard, homeowner_draft()).await;

        assert_eq!(wizard.next().await.unwrap(), Step::Success);
        let sent = submitted(&wizard);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["area"], "Area 2");
        assert_eq!(sent[0]["county"], "Canyon");
        assert_eq!(sent[0]["services"], serde_json::json!(["rec1"]));
        assert_eq!(sent[0]["serviceNames"], serde_json::json!(["New Masonry Installation"]));
        assert_eq!(
            wizard.confirmation().and_then(|a| a.project_id.as_deref()),
            Some("recP1")
        );
    }

    #[tokio::test]
    async fn failed_area_check_still_submits() {
        let services = FakeServices {
            area_fails: true,
            ..Default::default()
        };
        let mut wizard = started(services).await;
        at_contact(&mut wizard, homeowner_draft()).await;

        assert_eq!(wizard.next().await.unwrap(), Step::Success);
        let sent = submitted(&wizard);
        assert_eq!(sent[0]["area"], "");
        assert_eq!(sent[0]["county"], "");
    }

    #[tokio::test]
    async fn project_elsewhere_checks_business_zip() {
        let mut wizard = started(in_area("Area 1")).await;
        let mut draft = homeowner_draft();
        draft.is_project_location = Some(YesNo::No);
        draft.business.zip = "83702".to_string();
        at_contact(&mut wizard, draft).await;

        wizard.next().await.unwrap();
        assert_eq!(
            *wizard.services().area_calls.lock().unwrap(),
            vec!["83702".to_string()]
        );
    }

    #[tokio::test]
    async fn short_zip_never_reaches_resolver() {
        let mut wizard = started(in_area("Area 1")).await;
        for zip in ["", "8", "836", "8365", " 8365 "] {
            wizard.zip_entered(ZipField::Contact, zip).await;
        }
        assert!(wizard.services().area_calls.lock().unwrap().is_empty());
        assert_eq!(wizard.draft().area, "");

        wizard.zip_entered(ZipField::Contact, "83651").await;
        assert_eq!(wizard.draft().area, "Area 1");
        assert_eq!(wizard.draft().zip, "83651");
    }

    #[tokio::test]
    async fn failed_zip_lookup_keeps_previous_area() {
        let mut wizard = started(in_area("Area 1")).await;
        wizard.zip_entered(ZipField::Contact, "83651").await;
        assert_eq!(wizard.draft().area, "Area 1");

        let mut broken = started(FakeServices {
            area: None,
            ..Default::default()
        })
        .await;
        broken.edit(|d| d.area = "Area 3".to_string());
        broken.zip_entered(ZipField::Business, "83702").await;
        assert_eq!(broken.draft().area, "Area 3");
        assert_eq!(broken.draft().business.zip, "83702");
    }

    #[tokio::test]
    async fn scheduling_with_delegate_submits_normalized_block() {
        let services = FakeServices {
            blocks: Some(vec![
                "Saturday December 6th, 2025 - 10:00 A.M. to 5:00 P.M.".to_string(),
            ]),
            ..in_area("Area 1")
        };
        let mut wizard = started(services).await;
        at_contact(&mut wizard, homeowner_draft()).await;
        assert_eq!(wizard.next().await.unwrap(), Step::Scheduling);

        wizard.choose_site_visit(YesNo::Yes).await;
        assert_eq!(wizard.time_blocks().len(), 1);
        let block = wizard.time_blocks()[0].clone();
        wizard.select_time_block(&block);
        wizard.set_attendance(Attendance::DelegatePresent);
        wizard.toggle_delegate_role(Role::DesignProfessional);
        wizard.edit(|d| d.site_visit.delegate.first_name = "Jane".to_string());

        assert_eq!(wizard.next().await.unwrap(), Step::Scheduling);
        assert!(wizard.errors().contains_key("siteVisitOtherLastName"));
        assert!(wizard.errors().contains_key("siteVisitOtherPhone"));

        wizard.edit(|d| {
            let delegate = &mut d.site_visit.delegate;
            delegate.last_name = "Doe".to_string();
            delegate.company = "Doe Architecture Firm".to_string();
            delegate.want_contact = Some(YesNo::Yes);
            d.site_visit.contact_method = Some(ContactChannel::Text);
        });
        wizard.set_phone(PhoneField::Delegate, "208 999 8888");

        assert_eq!(wizard.next().await.unwrap(), Step::Success);
        let sent = submitted(&wizard);
        assert_eq!(sent[0]["siteVisitISO"], "2025-12-06T00:00:00.000Z");
        assert_eq!(sent[0]["siteVisitAvailability"], "SomeoneElse");
        assert_eq!(sent[0]["siteVisitOtherPhone"], "(208) 999-8888");
        assert_eq!(sent[0]["wantsSiteVisit"], "Yes");
    }

    #[tokio::test]
    async fn availability_failure_uses_builtin_slots() {
        let mut wizard = started(in_area("Area 1")).await;
        wizard.choose_site_visit(YesNo::Yes).await;
        assert_eq!(wizard.time_blocks().len(), 8);
        assert_eq!(wizard.loading(), None);
    }

    #[tokio::test]
    async fn submission_failure_keeps_step_and_data() {
        let services = FakeServices {
            submit_fails: true,
            ..in_area("Area 1")
        };
        let mut wizard = started(services).await;
        at_contact(&mut wizard, homeowner_draft()).await;
        assert_eq!(wizard.next().await.unwrap(), Step::Scheduling);
        wizard.choose_site_visit(YesNo::No).await;

        let failure = wizard.next().await.unwrap_err();
        assert_eq!(failure.technical, "Server did not return a Project ID.");
        assert!(failure.to_string().contains("Technical Details:"));
        assert_eq!(*wizard.step(), Step::Scheduling);
        assert_eq!(wizard.draft().first_name, "Test");
        assert!(wizard.confirmation().is_none());
    }

    #[tokio::test]
    async fn back_target_follows_current_roles() {
        let mut wizard = started(in_area("Area 1")).await;
        at_contact(&mut wizard, homeowner_draft()).await;
        assert_eq!(wizard.next().await.unwrap(), Step::Scheduling);

        wizard.toggle_role(Role::RealEstate);
        assert_eq!(wizard.back(), Step::BusinessDetails);
        assert_eq!(wizard.back(), Step::Contact);
        assert_eq!(wizard.back(), Step::Services);
    }

    #[tokio::test]
    async fn clearing_roles_on_scheduling_reopens_contact() {
        let mut wizard = started(in_area("Area 1")).await;
        at_contact(&mut wizard, homeowner_draft()).await;
        assert_eq!(wizard.next().await.unwrap(), Step::Scheduling);

        wizard.toggle_role(Role::Homeowner);
        wizard.choose_site_visit(YesNo::No).await;
        assert_eq!(wizard.next().await.unwrap(), Step::Contact);
        assert!(wizard.errors().contains_key("roles"));
        assert!(submitted(&wizard).is_empty());
    }

    #[tokio::test]
    async fn professional_role_added_on_scheduling_reopens_business_details() {
        let mut wizard = started(in_area("Area 1")).await;
        at_contact(&mut wizard, homeowner_draft()).await;
        assert_eq!(wizard.next().await.unwrap(), Step::Scheduling);

        wizard.toggle_role(Role::GeneralContractor);
        wizard.choose_site_visit(YesNo::No).await;
        assert_eq!(wizard.next().await.unwrap(), Step::BusinessDetails);
        assert!(wizard.errors().contains_key("companyName"));
        assert!(submitted(&wizard).is_empty());
        assert!(wizard.confirmation().is_none());
    }

    #[tokio::test]
    async fn short_project_zip_skips_resolver_and_scheduling() {
        let mut wizard = started(in_area("Area 1")).await;
        let mut draft = homeowner_draft();
        draft.is_project_location = Some(YesNo::No);
        draft.business.zip = "836".to_string();
        at_contact(&mut wizard, draft).await;

        assert_eq!(wizard.next().await.unwrap(), Step::Success);
        assert!(wizard.services().area_calls.lock().unwrap().is_empty());
        let sent = submitted(&wizard);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["area"], "");
        assert_eq!(sent[0]["county"], "");
    }

    #[tokio::test]
    async fn catalog_failure_degrades_or_errors() {
        let services = FakeServices {
            catalog_fails: true,
            ..Default::default()
        };
        let wizard = started(services).await;
        assert_eq!(*wizard.step(), Step::Services);
        assert_eq!(wizard.catalog().services.len(), 5);

        let mut config = Config::for_base_url("http://localhost");
        config.CATALOG_FALLBACK = false;
        let services = FakeServices {
            catalog_fails: true,
            ..Default::default()
        };
        let mut strict = WizardController::new(services, &config);
        strict.load().await;
        assert!(matches!(strict.step(), Step::Error(_)));
    }

    #[tokio::test]
    async fn restart_discards_the_draft() {
        let mut wizard = started(in_area("Area 2")).await;
        at_contact(&mut wizard, homeowner_draft()).await;
        assert_eq!(wizard.next().await.unwrap(), Step::Success);

        wizard.restart().await;
        assert_eq!(*wizard.step(), Step::Services);
        assert_eq!(*wizard.draft(), LeadDraft::default());
        assert!(wizard.selected_services().is_empty());
        assert!(wizard.confirmation().is_none());
    }

    #[tokio::test]
    async fn unknown_services_cannot_be_selected() {
        let mut wizard = started(FakeServices::default()).await;
        wizard.toggle_service("recX");
        assert!(matches!(wizard.next().await, Ok(Step::Services)));
        assert!(wizard.errors().contains_key("services"));
    }
}
