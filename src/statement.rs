use std::fmt;

use crate::common::compound_types::{Customer, Rental};
use crate::common::simple_types::*;

#[derive(Clone, Debug, PartialEq)]
pub struct StatementLine {
    pub title: MovieTitle,
    pub charge: Price,
    pub points: FrequentRenterPoints,
}

impl StatementLine {
    fn for_rental(rental: &Rental) -> Self {
        Self {
            title: rental.movie().title().clone(),
            charge: rental.charge(),
            points: rental.points(),
        }
    }
}

/// Priced rentals of one customer, in rental order, with their totals.
#[derive(Clone, Debug, PartialEq)]
pub struct StatementSummary {
    pub customer_name: CustomerName,
    pub lines: Vec<StatementLine>,
    pub total_amount: BillingAmount,
    pub total_points: FrequentRenterPoints,
}

impl fmt::Display for StatementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rental Record for {}", self.customer_name)?;
        for line in &self.lines {
            writeln!(f, "\t{}\t{}", line.title, line.charge)?;
        }
        writeln!(f, "Amount owed is {}", self.total_amount)?;
        write!(f, "You earned {} frequent renter points", self.total_points)
    }
}

impl Customer {
    pub fn summarize(&self) -> StatementSummary {
        let lines: Vec<StatementLine> = self
            .rentals()
            .iter()
            .map(StatementLine::for_rental)
            .collect();
        let total_amount = BillingAmount::sum_prices(lines.iter().map(|line| line.charge));
        let total_points: FrequentRenterPoints = lines.iter().map(|line| line.points).sum();

        tracing::debug!(
            customer = %self.name(),
            rentals = lines.len(),
            total_amount = %total_amount,
            total_points = %total_points,
            "Summarized rental statement"
        );

        StatementSummary {
            customer_name: self.name().clone(),
            lines,
            total_amount,
            total_points,
        }
    }

    pub fn statement(&self) -> String {
        self.summarize().to_string()
    }
}
