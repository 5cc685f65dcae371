use anyhow::anyhow;
use std::sync::{Arc, Mutex};

use crate::common::compound_types::MovieCategory;
use crate::common::simple_types::{CustomerName, DaysRented, MovieTitle};

use super::api::{dto::*, statement_for};
use super::implementation::{issue_statement, price_statement, to_validated_rental};
use super::internal_types::*;
use super::public_types::*;

fn rental(title: &str, category: &str, days_rented: i64) -> UnvalidatedRental {
    UnvalidatedRental {
        title: title.into(),
        category: category.into(),
        days_rented,
    }
}

fn john_doe() -> UnvalidatedCustomer {
    UnvalidatedCustomer {
        name: "John Doe".into(),
        rentals: vec![
            rental("Movie1", "REGULAR", 1),
            rental("Movie2", "NEW_RELEASE", 2),
            rental("Movie3", "CHILDRENS", 3),
        ],
    }
}

#[tokio::test]
async fn converts_to_validated_rental() {
    let titles = Arc::new(vec![MovieTitle::new("Movie1")]);
    let titles_ref = &titles;
    let check_movie_in_catalog = move |title: MovieTitle| async move {
        if titles_ref.contains(&title) {
            return Ok(());
        }
        Err(anyhow!("Not in catalog"))
    };

    let validated = to_validated_rental(check_movie_in_catalog, rental("Movie1", "NEW_RELEASE", -3))
        .await
        .unwrap();
    assert_eq!(
        validated,
        ValidatedRental {
            title: MovieTitle::new("Movie1"),
            category: MovieCategory::NewRelease,
            days_rented: DaysRented::new(-3),
        }
    );

    let missing = to_validated_rental(check_movie_in_catalog, rental("Movie9", "REGULAR", 1)).await;
    assert!(missing.is_err());
}

#[tokio::test]
async fn rejects_unknown_category() {
    let check_movie_in_catalog = |_title: MovieTitle| async { Ok::<_, anyhow::Error>(()) };
    let err = to_validated_rental(check_movie_in_catalog, rental("Movie1", "HORROR", 1))
        .await
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Movie1"));
    assert!(message.contains("HORROR"));
}

#[test]
fn repeated_movies_are_shared() {
    let validated = ValidatedCustomer {
        name: CustomerName::new("John Doe"),
        rentals: vec![
            ValidatedRental {
                title: MovieTitle::new("Movie1"),
                category: MovieCategory::Regular,
                days_rented: DaysRented::new(1),
            },
            ValidatedRental {
                title: MovieTitle::new("Movie1"),
                category: MovieCategory::Regular,
                days_rented: DaysRented::new(3),
            },
        ],
    };
    let priced = price_statement(validated);
    let rentals = priced.customer.rentals();
    assert!(std::ptr::eq(rentals[0].movie(), rentals[1].movie()));
    assert_eq!(priced.summary.total_amount.to_string(), "5.5");
}

#[tokio::test]
async fn sends_statement_and_emits_events() {
    let outbox: Mutex<Vec<StatementLetter>> = Mutex::new(vec![]);
    let outbox_ref = &outbox;
    let check_movie_in_catalog = |_title: MovieTitle| async { Ok::<_, anyhow::Error>(()) };
    let send_statement = move |letter: StatementLetter| async move {
        outbox_ref.lock().unwrap().push(letter);
        Ok::<_, anyhow::Error>(SendResult::Sent)
    };

    let workflow = issue_statement(check_movie_in_catalog, send_statement);
    let events = workflow(john_doe()).await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        IssueStatementEvent::StatementSent(StatementSent {
            customer_name: CustomerName::new("John Doe"),
        })
    );
    match &events[1] {
        IssueStatementEvent::StatementIssued(issued) => {
            assert_eq!(issued.customer_name.value(), "John Doe");
            assert_eq!(issued.amount_owed.to_string(), "9.5");
            assert_eq!(issued.points_earned.value(), 4);
        }
        other => panic!("unexpected event {other:?}"),
    }

    let letters = outbox.lock().unwrap();
    assert_eq!(letters.len(), 1);
    assert!(letters[0].body.starts_with("Rental Record for John Doe\n"));
    assert!(letters[0].body.ends_with("You earned 4 frequent renter points"));
}

#[tokio::test]
async fn unsent_statement_still_emits_issued_event() {
    let check_movie_in_catalog = |_title: MovieTitle| async { Ok::<_, anyhow::Error>(()) };
    let send_statement =
        |_letter: StatementLetter| async { Ok::<_, anyhow::Error>(SendResult::NotSent) };

    let workflow = issue_statement(check_movie_in_catalog, send_statement);
    let events = workflow(john_doe()).await.unwrap();

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], IssueStatementEvent::StatementIssued(_)));
}

#[tokio::test]
async fn delivery_failure_aborts_workflow() {
    let check_movie_in_catalog = |_title: MovieTitle| async { Ok::<_, anyhow::Error>(()) };
    let send_statement = |_letter: StatementLetter| async {
        Err::<SendResult, _>(anyhow!("Mail server unavailable"))
    };

    let workflow = issue_statement(check_movie_in_catalog, send_statement);
    let err = workflow(john_doe()).await.unwrap_err();
    assert_eq!(err.to_string(), "Mail server unavailable");
}

#[tokio::test]
async fn api_returns_delivered_statement_text() {
    let customer = CustomerDto {
        name: "Іван Іванов".into(),
        rentals: vec![RentalDto {
            title: "Фільм1".into(),
            category: "REGULAR".into(),
            days_rented: 3,
        }],
    };
    let statement = statement_for(customer).await.unwrap();
    assert_eq!(
        statement,
        "Rental Record for Іван Іванов\n\
         \tФільм1\t3.5\n\
         Amount owed is 3.5\n\
         You earned 1 frequent renter points"
    );
}

#[tokio::test]
async fn api_surfaces_invalid_category() {
    let customer = CustomerDto {
        name: "John Doe".into(),
        rentals: vec![RentalDto {
            title: "Movie1".into(),
            category: "new release".into(),
            days_rented: 1,
        }],
    };
    assert!(statement_for(customer).await.is_err());
}
