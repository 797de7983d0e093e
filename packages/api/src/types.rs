use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Most companions a single RSVP may bring.
pub const MAX_PLUS_ONES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    Regular,
    Vegetarian,
}

impl MenuChoice {
    pub fn as_db(&self) -> &'static str {
        match self {
            MenuChoice::Regular => "regular",
            MenuChoice::Vegetarian => "vegetarian",
        }
    }

    /// Parse a form or database value. Blank and unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "regular" => Some(MenuChoice::Regular),
            "vegetarian" => Some(MenuChoice::Vegetarian),
            _ => None,
        }
    }
}

/// Which non-login view a visitor is allowed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    Couple,
}

pub fn attendance_as_db(attending: bool) -> &'static str {
    if attending {
        "yes"
    } else {
        "no"
    }
}

pub fn attendance_from_db(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1"
    )
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlusOne {
    pub first_name: String,
    pub last_name: String,
    pub menu: Option<MenuChoice>,
    pub dietary_restrictions: String,
}

/// An RSVP as typed by a guest, before it is stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestRsvp {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub attendance: Option<bool>,
    pub menu: Option<MenuChoice>,
    pub dietary_restrictions: String,
    pub plus_ones: Vec<PlusOne>,
}

impl GuestRsvp {
    /// Trim free-text identity fields and drop answers that only matter when attending.
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.dietary_restrictions = self.dietary_restrictions.trim().to_string();

        if self.attendance != Some(true) {
            self.menu = None;
            self.plus_ones.clear();
        }
        for p in &mut self.plus_ones {
            p.first_name = p.first_name.trim().to_string();
            p.last_name = p.last_name.trim().to_string();
            p.dietary_restrictions = p.dietary_restrictions.trim().to_string();
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlusOneRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub menu_choice: Option<String>,
    pub dietary_restrictions: String,
}

/// A stored RSVP. Menu values are kept as the raw strings the store returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub attendance: bool,
    pub menu_choice: Option<String>,
    pub dietary_restrictions: String,
    pub created_at: Option<DateTime<Utc>>,
    pub plus_ones: Vec<PlusOneRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicConfig {
    /// When false the landing page offers plain role buttons.
    pub password_gate: bool,
}
