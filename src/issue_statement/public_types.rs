use crate::common::simple_types::*;

#[derive(Clone, Debug, PartialEq)]
pub struct StatementSent {
    pub customer_name: CustomerName,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatementIssued {
    pub customer_name: CustomerName,
    pub amount_owed: BillingAmount,
    pub points_earned: FrequentRenterPoints,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IssueStatementEvent {
    StatementSent(StatementSent),
    StatementIssued(StatementIssued),
}

impl From<StatementSent> for IssueStatementEvent {
    fn from(v: StatementSent) -> Self {
        Self::StatementSent(v)
    }
}

impl From<StatementIssued> for IssueStatementEvent {
    fn from(v: StatementIssued) -> Self {
        Self::StatementIssued(v)
    }
}
