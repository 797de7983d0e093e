//! RSVP validation shared by the browser form and the server.
//!
//! `validate` is a pure function of the submitted record: it never looks at
//! previous errors and always recomputes the whole map.

use crate::types::GuestRsvp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifies one input of the RSVP form. Plus-one fields carry the 0-based
/// position of the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Attendance,
    Menu,
    PlusOneFirstName(usize),
    PlusOneLastName(usize),
    PlusOneMenu(usize),
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::FirstName => f.write_str("firstName"),
            FieldId::LastName => f.write_str("lastName"),
            FieldId::Email => f.write_str("email"),
            FieldId::Attendance => f.write_str("attendance"),
            FieldId::Menu => f.write_str("menu"),
            FieldId::PlusOneFirstName(idx) => write!(f, "plusOneFirstName{idx}"),
            FieldId::PlusOneLastName(idx) => write!(f, "plusOneLastName{idx}"),
            FieldId::PlusOneMenu(idx) => write!(f, "plusOneMenu{idx}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    Required,
    InvalidEmail,
}

impl ValidationError {
    /// Translation key of the message shown next to `field`.
    pub fn message_key(&self, field: FieldId) -> &'static str {
        match (self, field) {
            (ValidationError::InvalidEmail, _) => "guest_view.errors.email_invalid",
            (ValidationError::Required, FieldId::FirstName)
            | (ValidationError::Required, FieldId::PlusOneFirstName(_)) => {
                "guest_view.errors.first_name_required"
            }
            (ValidationError::Required, FieldId::LastName)
            | (ValidationError::Required, FieldId::PlusOneLastName(_)) => {
                "guest_view.errors.last_name_required"
            }
            (ValidationError::Required, FieldId::Email) => "guest_view.errors.email_required",
            (ValidationError::Required, FieldId::Attendance) => {
                "guest_view.errors.attendance_required"
            }
            (ValidationError::Required, FieldId::Menu)
            | (ValidationError::Required, FieldId::PlusOneMenu(_)) => {
                "guest_view.errors.menu_required"
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldId) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, ValidationError)> + '_ {
        self.errors.iter().map(|(k, v)| (*k, *v))
    }

    fn insert(&mut self, field: FieldId, error: ValidationError) {
        self.errors.insert(field, error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self.fields().map(|field| field.to_string()).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Accepts `text@text.text`: one `@`, no whitespace, a dot inside the domain
/// with text on both sides of the last one.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate(rsvp: &GuestRsvp) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if rsvp.first_name.trim().is_empty() {
        errors.insert(FieldId::FirstName, ValidationError::Required);
    }
    if rsvp.last_name.trim().is_empty() {
        errors.insert(FieldId::LastName, ValidationError::Required);
    }
    if rsvp.email.trim().is_empty() {
        errors.insert(FieldId::Email, ValidationError::Required);
    } else if !is_valid_email(&rsvp.email) {
        errors.insert(FieldId::Email, ValidationError::InvalidEmail);
    }

    match rsvp.attendance {
        None => errors.insert(FieldId::Attendance, ValidationError::Required),
        Some(false) => {}
        Some(true) => {
            if rsvp.menu.is_none() {
                errors.insert(FieldId::Menu, ValidationError::Required);
            }
            for (idx, p) in rsvp.plus_ones.iter().enumerate() {
                if p.first_name.trim().is_empty() {
                    errors.insert(FieldId::PlusOneFirstName(idx), ValidationError::Required);
                }
                if p.last_name.trim().is_empty() {
                    errors.insert(FieldId::PlusOneLastName(idx), ValidationError::Required);
                }
                if p.menu.is_none() {
                    errors.insert(FieldId::PlusOneMenu(idx), ValidationError::Required);
                }
            }
        }
    }

    errors
}
