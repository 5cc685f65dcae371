use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_fn_traits::AsyncFn1;
use futures_util::future::try_join_all;

use crate::common::compound_types::*;
use crate::common::simple_types::*;

use super::internal_types::*;
use super::public_types::*;

// ======================================================
// Section 1 : Define each step in the workflow using types
// ======================================================

pub trait CheckMovieInCatalog: AsyncFn1<MovieTitle, Output = Result<()>> + Copy {}
impl<T> CheckMovieInCatalog for T where T: AsyncFn1<MovieTitle, Output = Result<()>> + Copy {}

pub trait SendStatement: AsyncFn1<StatementLetter, Output = Result<SendResult>> + Copy {}
impl<T> SendStatement for T where
    T: AsyncFn1<StatementLetter, Output = Result<SendResult>> + Copy
{
}

pub trait IssueStatement:
    AsyncFn1<UnvalidatedCustomer, Output = Result<Vec<IssueStatementEvent>>> + Copy
{
}
impl<T> IssueStatement for T where
    T: AsyncFn1<UnvalidatedCustomer, Output = Result<Vec<IssueStatementEvent>>> + Copy
{
}

// ======================================================
// Section 2 : Implementation
// ======================================================

// ---------------------------
// ValidateCustomer step
// ---------------------------

pub(crate) async fn to_validated_rental(
    check_movie_in_catalog: impl CheckMovieInCatalog,
    unvalidated_rental: UnvalidatedRental,
) -> Result<ValidatedRental> {
    let category: MovieCategory = unvalidated_rental
        .category
        .parse()
        .with_context(|| format!("Invalid rental of {:?}", unvalidated_rental.title))?;
    let title = MovieTitle::new(unvalidated_rental.title);

    check_movie_in_catalog(title.clone()).await?;

    Ok(ValidatedRental {
        title,
        category,
        days_rented: DaysRented::new(unvalidated_rental.days_rented),
    })
}

pub(crate) async fn validate_customer(
    check_movie_in_catalog: impl CheckMovieInCatalog,
    unvalidated_customer: UnvalidatedCustomer,
) -> Result<ValidatedCustomer> {
    let name = CustomerName::new(unvalidated_customer.name);

    let rentals = try_join_all(
        unvalidated_customer
            .rentals
            .into_iter()
            .map(|unvalidated_rental| {
                to_validated_rental(check_movie_in_catalog, unvalidated_rental)
            }),
    )
    .await?;

    tracing::debug!(customer = %name, rentals = rentals.len(), "Validated customer");

    Ok(ValidatedCustomer { name, rentals })
}

// ---------------------------
// PriceStatement step
// ---------------------------

pub(crate) fn price_statement(validated_customer: ValidatedCustomer) -> PricedStatement {
    let mut movies: HashMap<(MovieTitle, MovieCategory), Arc<Movie>> = HashMap::new();

    let rentals: Vec<Rental> = validated_customer
        .rentals
        .into_iter()
        .map(|rental| {
            let movie = movies
                .entry((rental.title.clone(), rental.category))
                .or_insert_with(|| Arc::new(Movie::new(rental.title.value(), rental.category)))
                .clone();
            Rental::new(movie, rental.days_rented)
        })
        .collect();

    let customer = Customer::new(validated_customer.name.value(), rentals);
    let summary = customer.summarize();

    PricedStatement { customer, summary }
}

// ---------------------------
// RenderStatement step
// ---------------------------

fn render_statement(priced_statement: &PricedStatement) -> StatementLetter {
    StatementLetter {
        customer_name: priced_statement.customer.name().clone(),
        body: priced_statement.summary.to_string(),
    }
}

// ---------------------------
// SendStatement step
// ---------------------------

async fn deliver_statement(
    send_statement: impl SendStatement,
    letter: StatementLetter,
) -> Result<Option<CustomerName>> {
    let customer_name = letter.customer_name.clone();
    match send_statement(letter).await? {
        SendResult::Sent => Ok(Some(customer_name)),
        SendResult::NotSent => {
            tracing::warn!(customer = %customer_name, "Statement was not sent");
            Ok(None)
        }
    }
}

// ---------------------------
// Create events
// ---------------------------

fn create_issued_event(priced_statement: &PricedStatement) -> IssueStatementEvent {
    StatementIssued {
        customer_name: priced_statement.summary.customer_name.clone(),
        amount_owed: priced_statement.summary.total_amount,
        points_earned: priced_statement.summary.total_points,
    }
    .into()
}
fn create_sent_event(customer_name: CustomerName) -> IssueStatementEvent {
    StatementSent { customer_name }.into()
}

fn create_events(
    priced_statement: &PricedStatement,
    sent_option: Option<CustomerName>,
) -> Vec<IssueStatementEvent> {
    let sent_events: Vec<_> = sent_option.map(create_sent_event).into_iter().collect();
    let issued_events = vec![create_issued_event(priced_statement)];

    [sent_events, issued_events].concat()
}

// ---------------------------
// overall workflow
// ---------------------------

async fn run_issue_statement(
    check_movie_in_catalog: impl CheckMovieInCatalog,
    send_statement: impl SendStatement,
    unvalidated_customer: UnvalidatedCustomer,
) -> Result<Vec<IssueStatementEvent>> {
    let validated_customer = validate_customer(check_movie_in_catalog, unvalidated_customer).await?;

    let priced_statement = price_statement(validated_customer);

    let letter = render_statement(&priced_statement);

    let sent_option = deliver_statement(send_statement, letter).await?;

    let events = create_events(&priced_statement, sent_option);
    tracing::debug!(
        customer = %priced_statement.summary.customer_name,
        events = events.len(),
        "Issued statement"
    );
    Ok(events)
}

/// A workflow that turns raw rental data into a delivered statement and the
/// events describing what happened.
pub fn issue_statement(
    check_movie_in_catalog: impl CheckMovieInCatalog,
    send_statement: impl SendStatement,
) -> impl IssueStatement {
    move |unvalidated_customer: UnvalidatedCustomer| {
        run_issue_statement(check_movie_in_catalog, send_statement, unvalidated_customer)
    }
}
