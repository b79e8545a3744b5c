use crate::model::options::{Attendance, ContactChannel, Industry, Role, UsState, YesNo};
use crate::model::schedule::normalize_time_block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kept in pick order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut set = RoleSet::default();
        for role in roles {
            if !set.contains(role) {
                set.0.push(role);
            }
        }
        set
    }

    pub fn toggle(&mut self, role: Role) {
        if self.contains(role) {
            self.0.retain(|r| *r != role);
        } else {
            self.0.push(role);
        }
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }

    pub fn has_professional(&self) -> bool {
        self.0.iter().any(Role::is_professional)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub display: String,
    pub normalized: Option<DateTime<Utc>>,
}

impl TimeBlock {
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let normalized = normalize_time_block(&display);
        TimeBlock {
            display,
            normalized,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessDetails {
    pub company_name: String,
    pub industry: Option<Industry>,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: UsState,
    pub zip: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delegate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub roles: RoleSet,
    pub provide_phone: Option<YesNo>,
    pub want_contact: Option<YesNo>,
    pub company: String,
    pub company_phone: String,
    pub company_address: String,
}

impl Delegate {
    pub fn is_professional(&self) -> bool {
        self.roles.has_professional()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteVisit {
    pub want_visit: Option<YesNo>,
    pub time_block: Option<TimeBlock>,
    pub attendance: Option<Attendance>,
    /// Belongs to the active attendance mode.
    pub contact_method: Option<ContactChannel>,
    pub delegate: Delegate,
    pub access_instructions: String,
}

impl SiteVisit {
    /// Re-selecting the active mode changes nothing.
    pub fn set_attendance(&mut self, mode: Attendance) {
        if self.attendance == Some(mode) {
            return;
        }
        self.contact_method = None;
        match mode {
            Attendance::SelfPresent => {
                self.delegate = Delegate::default();
                self.access_instructions.clear();
            }
            Attendance::DelegatePresent => {
                self.access_instructions.clear();
            }
            Attendance::NoOnePresent => {
                self.delegate = Delegate::default();
            }
        }
        self.attendance = Some(mode);
    }

    pub fn set_want_visit(&mut self, choice: YesNo) {
        self.want_visit = Some(choice);
        if choice == YesNo::No {
            self.time_block = None;
            self.attendance = None;
            self.contact_method = None;
            self.delegate = Delegate::default();
            self.access_instructions.clear();
        }
    }

    pub fn wants_visit(&self) -> bool {
        self.want_visit == Some(YesNo::Yes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact: Option<ContactChannel>,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: UsState,
    pub zip: String,
    /// Assigned by the area resolver.
    pub area: String,
    /// Assigned by the area resolver.
    pub county: String,
    pub is_project_location: Option<YesNo>,
    pub roles: RoleSet,
    pub project_description: String,
    pub business: BusinessDetails,
    pub site_visit: SiteVisit,
}

impl LeadDraft {
    pub fn is_business_lead(&self) -> bool {
        self.roles.has_professional()
    }

    pub fn zip_to_check(&self) -> &str {
        if self.is_project_location == Some(YesNo::Yes) {
            &self.zip
        } else {
            &self.business.zip
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneField {
    Contact,
    Business,
    Delegate,
    DelegateCompany,
}

impl PhoneField {
    pub fn slot<'a>(&self, draft: &'a mut LeadDraft) -> &'a mut String {
        match self {
            PhoneField::Contact => &mut draft.phone,
            PhoneField::Business => &mut draft.business.phone,
            PhoneField::Delegate => &mut draft.site_visit.delegate.phone,
            PhoneField::DelegateCompany => &mut draft.site_visit.delegate.company_phone,
        }
    }
}

/// `(208) 123-1234`, as far as the digits go.
pub fn format_us_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(10).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
