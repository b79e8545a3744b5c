//! Step machine of the intake wizard. Business-lead status is read from
//! the live roles on every call.

pub mod controller;
pub mod validate;

use crate::model::draft::LeadDraft;
use crate::model::payload::AreaOverride;
use validate::{
    FieldErrors, validate_business, validate_contact, validate_scheduling, validate_services,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Services,
    Contact,
    BusinessDetails,
    Scheduling,
    Success,
    Error(String),
}

impl Step {
    pub fn ordinal(&self) -> &'static str {
        match self {
            Step::Services | Step::Error(_) => "1",
            Step::Contact => "2",
            Step::BusinessDetails => "2.5",
            Step::Scheduling | Step::Success => "3",
        }
    }

    pub fn header(&self) -> String {
        format!("Step {} of 3", self.ordinal())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Success)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AreaCheck {
    Resolved(AreaOverride),
    Unresolved,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Next,
    Back,
    AreaChecked(AreaCheck),
    Acknowledged,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Goto(Step),
    Blocked(FieldErrors),
    /// An earlier step no longer validates; go back to it and show these.
    Reopen(Step, FieldErrors),
    CheckArea,
    /// Resolver values, when present, replace the draft's area and county.
    Submit(Option<AreaOverride>),
    Stay,
}

pub struct Context<'a> {
    pub draft: &'a LeadDraft,
    pub selected_services: usize,
    pub serviceable_area: &'a str,
}

pub fn transition(step: &Step, event: Event, ctx: &Context) -> Transition {
    let draft = ctx.draft;
    match (step, event) {
        (Step::Success | Step::Error(_), _) => Transition::Stay,

        (_, Event::Acknowledged) => Transition::Goto(Step::Success),

        (Step::Services, Event::Next) => {
            guarded(validate_services(ctx.selected_services), || {
                Transition::Goto(Step::Contact)
            })
        }
        (Step::Contact, Event::Next) => guarded(validate_contact(draft), || {
            if draft.is_business_lead() {
                Transition::Goto(Step::BusinessDetails)
            } else {
                Transition::CheckArea
            }
        }),
        (Step::BusinessDetails, Event::Next) => {
            guarded(validate_business(draft), || Transition::CheckArea)
        }
        (Step::Scheduling, Event::Next) => {
            let contact = validate_contact(draft);
            if !contact.is_empty() {
                return Transition::Reopen(Step::Contact, contact);
            }
            let business = validate_business(draft);
            if !business.is_empty() {
                return Transition::Reopen(Step::BusinessDetails, business);
            }
            guarded(validate_scheduling(draft), || Transition::Submit(None))
        }

        (Step::Contact | Step::BusinessDetails, Event::AreaChecked(check)) => match check {
            AreaCheck::Resolved(resolved) if resolved.area == ctx.serviceable_area => {
                Transition::Goto(Step::Scheduling)
            }
            AreaCheck::Resolved(resolved) => Transition::Submit(Some(resolved)),
            AreaCheck::Unresolved => Transition::Submit(None),
        },

        (Step::Scheduling, Event::Back) if draft.is_business_lead() => {
            Transition::Goto(Step::BusinessDetails)
        }
        (Step::Scheduling, Event::Back) => Transition::Goto(Step::Contact),
        (Step::BusinessDetails, Event::Back) => Transition::Goto(Step::Contact),
        (Step::Contact, Event::Back) => Transition::Goto(Step::Services),

        _ => Transition::Stay,
    }
}

fn guarded(errors: FieldErrors, pass: impl FnOnce() -> Transition) -> Transition {
    if errors.is_empty() {
        pass()
    } else {
        Transition::Blocked(errors)
    }
}
