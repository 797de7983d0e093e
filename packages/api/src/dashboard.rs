//! Summary counts for the couple dashboard.

use crate::types::{GuestRecord, MenuChoice};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTotals {
    pub regular: usize,
    pub vegetarian: usize,
    /// Attending people whose menu value is blank or not one we know.
    pub other: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTotals {
    pub rsvps: usize,
    pub guests: usize,
    pub declined: usize,
    pub meals: MealTotals,
}

impl MealTotals {
    fn count(&mut self, menu_choice: Option<&str>) {
        match menu_choice.and_then(MenuChoice::parse) {
            Some(MenuChoice::Regular) => self.regular += 1,
            Some(MenuChoice::Vegetarian) => self.vegetarian += 1,
            None => self.other += 1,
        }
    }
}

/// Single pass over the stored records. Meals are only counted for parties
/// that are attending.
pub fn summarize(records: &[GuestRecord]) -> DashboardTotals {
    let mut totals = DashboardTotals {
        rsvps: records.len(),
        ..DashboardTotals::default()
    };

    for record in records {
        if !record.attendance {
            totals.declined += 1;
            continue;
        }
        totals.guests += 1 + record.plus_ones.len();
        totals.meals.count(record.menu_choice.as_deref());
        for p in &record.plus_ones {
            totals.meals.count(p.menu_choice.as_deref());
        }
    }

    totals
}
