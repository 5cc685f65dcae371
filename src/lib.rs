//! Movie rental billing: per-rental charges, frequent renter points and the
//! customer statement, plus a workflow that issues the statement.

pub mod common {
    pub mod compound_types;
    pub mod simple_types;
}

pub mod pricing;
pub mod statement;

pub mod issue_statement {
    pub mod api;
    pub mod implementation;
    pub mod internal_types;
    pub mod public_types;

    #[cfg(test)]
    mod tests;
}

pub use common::compound_types::{Customer, Movie, MovieCategory, Rental};
pub use statement::{StatementLine, StatementSummary};
