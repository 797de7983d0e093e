//! State of the RSVP form, independent of rendering.
//!
//! `RsvpForm` owns the answers typed so far, the last validation result and
//! the submission status:
//!
//! ```text
//! Editing --invalid--> Editing (errors shown)
//! Editing --valid----> Submitting --stored--> Submitted
//!                      Submitting --failed--> Editing (submit error shown)
//! ```
//!
//! Inputs are ignored outside `Editing`, so a response landing late can never
//! mix with edits made while the request was in flight.

use api::types::{GuestRsvp, MenuChoice, PlusOne, MAX_PLUS_ONES};
use api::validation::{self, ValidationErrors};
use uuid::Uuid;

use crate::store::{GuestStore, StoreError};

/// How long validation errors stay on screen after the last failed attempt.
pub const ERROR_DISPLAY_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    /// `"yes"`, `"no"` or empty for unset.
    Attendance,
    /// `"regular"`, `"vegetarian"` or empty for unset.
    Menu,
    DietaryRestrictions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlusOneField {
    FirstName,
    LastName,
    Menu,
    DietaryRestrictions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// What `begin_submit` decided.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// Errors are stored; expire them with this generation.
    Invalid { generation: u64 },
    /// Send this normalised record, then call `finish_submit`.
    Send(GuestRsvp),
    /// Already submitting or submitted.
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Invalid { generation: u64 },
    Stored(Uuid),
    Failed(StoreError),
    Busy,
}

fn parse_attendance(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Some(true),
        "no" | "false" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RsvpForm {
    rsvp: GuestRsvp,
    errors: ValidationErrors,
    error_generation: u64,
    status: SubmitStatus,
    submit_error: Option<StoreError>,
}

impl RsvpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rsvp(&self) -> &GuestRsvp {
        &self.rsvp
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn submit_error(&self) -> Option<&StoreError> {
        self.submit_error.as_ref()
    }

    pub fn plus_one_count(&self) -> usize {
        self.rsvp.plus_ones.len()
    }

    fn editable(&self) -> bool {
        self.status == SubmitStatus::Editing
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        if !self.editable() {
            return;
        }
        match field {
            FormField::FirstName => self.rsvp.first_name = value.to_string(),
            FormField::LastName => self.rsvp.last_name = value.to_string(),
            FormField::Email => self.rsvp.email = value.to_string(),
            FormField::DietaryRestrictions => self.rsvp.dietary_restrictions = value.to_string(),
            FormField::Menu => self.rsvp.menu = MenuChoice::parse(value),
            FormField::Attendance => self.set_attendance(parse_attendance(value)),
        }
    }

    /// A negative answer also clears the menu and every plus-one.
    pub fn set_attendance(&mut self, attendance: Option<bool>) {
        if !self.editable() {
            return;
        }
        self.rsvp.attendance = attendance;
        if attendance == Some(false) {
            self.rsvp.menu = None;
            self.rsvp.plus_ones.clear();
        }
    }

    /// Resize the plus-one list to `count`, clamped to `0..=MAX_PLUS_ONES`.
    /// Existing entries keep their index; new ones start empty.
    pub fn set_plus_one_count(&mut self, count: usize) {
        if !self.editable() {
            return;
        }
        self.rsvp
            .plus_ones
            .resize_with(count.min(MAX_PLUS_ONES), PlusOne::default);
    }

    /// Out-of-range indices are ignored.
    pub fn set_plus_one_field(&mut self, index: usize, field: PlusOneField, value: &str) {
        if !self.editable() {
            return;
        }
        let Some(plus_one) = self.rsvp.plus_ones.get_mut(index) else {
            return;
        };
        match field {
            PlusOneField::FirstName => plus_one.first_name = value.to_string(),
            PlusOneField::LastName => plus_one.last_name = value.to_string(),
            PlusOneField::Menu => plus_one.menu = MenuChoice::parse(value),
            PlusOneField::DietaryRestrictions => plus_one.dietary_restrictions = value.to_string(),
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        validation::validate(&self.rsvp)
    }

    pub fn begin_submit(&mut self) -> SubmitStart {
        if !self.editable() {
            return SubmitStart::Busy;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            self.error_generation += 1;
            return SubmitStart::Invalid {
                generation: self.error_generation,
            };
        }

        self.errors = ValidationErrors::default();
        self.submit_error = None;
        self.status = SubmitStatus::Submitting;
        SubmitStart::Send(self.rsvp.clone().normalized())
    }

    /// Apply the store's answer. Success resets the answers; failure keeps them
    /// so the guest can retry.
    pub fn finish_submit(&mut self, result: Result<Uuid, StoreError>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        match result {
            Ok(_) => {
                self.rsvp = GuestRsvp::default();
                self.status = SubmitStatus::Submitted;
            }
            Err(e) => {
                self.submit_error = Some(e);
                self.status = SubmitStatus::Editing;
            }
        }
    }

    /// Clear displayed errors unless a newer validation pass replaced them.
    pub fn expire_errors(&mut self, generation: u64) {
        if generation == self.error_generation {
            self.errors = ValidationErrors::default();
        }
    }

    pub async fn submit<S: GuestStore + ?Sized>(&mut self, store: &S) -> SubmitOutcome {
        let rsvp = match self.begin_submit() {
            SubmitStart::Busy => return SubmitOutcome::Busy,
            SubmitStart::Invalid { generation } => return SubmitOutcome::Invalid { generation },
            SubmitStart::Send(rsvp) => rsvp,
        };

        let result = store.insert_guest(rsvp).await;
        let outcome = match &result {
            Ok(id) => SubmitOutcome::Stored(*id),
            Err(e) => SubmitOutcome::Failed(e.clone()),
        };
        self.finish_submit(result);
        outcome
    }
}
