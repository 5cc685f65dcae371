//! Charge and frequent renter point rules per movie category.
//!
//! Every rule is total over `i64` days: zero and negative durations are
//! priced literally and nothing is clamped.

use crate::common::compound_types::MovieCategory;
use crate::common::simple_types::{DaysRented, FrequentRenterPoints, Price};

const REGULAR_BASE_CHARGE: f64 = 2.0;
const REGULAR_INCLUDED_DAYS: i64 = 2;
const CHILDRENS_BASE_CHARGE: f64 = 1.5;
const CHILDRENS_INCLUDED_DAYS: i64 = 3;
const EXTRA_DAY_CHARGE: f64 = 1.5;
const NEW_RELEASE_DAILY_CHARGE: f64 = 3.0;
const NEW_RELEASE_BONUS_AFTER_DAYS: i64 = 1;

/// Base charge plus `EXTRA_DAY_CHARGE` for each day past `included_days`.
fn base_plus_extra_days(base: f64, included_days: i64, days: i64) -> f64 {
    if days > included_days {
        // Cannot overflow: days > included_days >= 0.
        base + (days - included_days) as f64 * EXTRA_DAY_CHARGE
    } else {
        base
    }
}

pub fn charge_for(category: MovieCategory, days_rented: DaysRented) -> Price {
    let days = days_rented.value();
    let amount = match category {
        MovieCategory::Regular => {
            base_plus_extra_days(REGULAR_BASE_CHARGE, REGULAR_INCLUDED_DAYS, days)
        }
        MovieCategory::NewRelease => days as f64 * NEW_RELEASE_DAILY_CHARGE,
        MovieCategory::Childrens => {
            base_plus_extra_days(CHILDRENS_BASE_CHARGE, CHILDRENS_INCLUDED_DAYS, days)
        }
    };
    if days <= 0 {
        tracing::warn!(
            category = %category,
            days_rented = days,
            charge = amount,
            "Pricing rental with non-positive duration"
        );
    }
    Price::new(amount)
}

pub fn points_for(category: MovieCategory, days_rented: DaysRented) -> FrequentRenterPoints {
    let points = match category {
        MovieCategory::NewRelease if days_rented.value() > NEW_RELEASE_BONUS_AFTER_DAYS => 2,
        _ => 1,
    };
    FrequentRenterPoints::new(points)
}
