use crate::common::compound_types::{Customer, MovieCategory};
use crate::common::simple_types::*;
use crate::statement::StatementSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendResult {
    Sent,
    NotSent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatementLetter {
    pub customer_name: CustomerName,
    pub body: String,
}

#[derive(Clone, Debug)]
pub(crate) struct PricedStatement {
    pub(crate) customer: Customer,
    pub(crate) summary: StatementSummary,
}

#[derive(Clone, Debug)]
pub struct UnvalidatedRental {
    pub title: String,
    pub category: String,
    pub days_rented: i64,
}

#[derive(Clone, Debug)]
pub struct UnvalidatedCustomer {
    pub name: String,
    pub rentals: Vec<UnvalidatedRental>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ValidatedRental {
    pub(crate) title: MovieTitle,
    pub(crate) category: MovieCategory,
    pub(crate) days_rented: DaysRented,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ValidatedCustomer {
    pub(crate) name: CustomerName,
    pub(crate) rentals: Vec<ValidatedRental>,
}
