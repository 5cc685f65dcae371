use anyhow::{anyhow, Result};

pub mod dto {
    #[derive(Clone, Debug)]
    pub struct RentalDto {
        pub title: String,
        pub category: String,
        pub days_rented: i64,
    }

    #[derive(Clone, Debug)]
    pub struct CustomerDto {
        pub name: String,
        pub rentals: Vec<RentalDto>,
    }
}
use dto::*;

use crate::{
    common::simple_types::MovieTitle,
    issue_statement::{
        implementation::issue_statement,
        internal_types::{SendResult, StatementLetter, UnvalidatedCustomer, UnvalidatedRental},
    },
};

impl From<RentalDto> for UnvalidatedRental {
    fn from(dto: RentalDto) -> Self {
        Self {
            title: dto.title,
            category: dto.category,
            days_rented: dto.days_rented,
        }
    }
}

impl From<CustomerDto> for UnvalidatedCustomer {
    fn from(dto: CustomerDto) -> Self {
        Self {
            name: dto.name,
            rentals: dto.rentals.into_iter().map(Into::into).collect(),
        }
    }
}

/// Runs the workflow with an open catalog and returns the statement text that
/// was handed to delivery.
pub async fn statement_for(customer: CustomerDto) -> Result<String> {
    let (outbox, mut delivered) = tokio::sync::mpsc::unbounded_channel::<String>();
    let outbox_ref = &outbox;

    let check_movie_in_catalog = |_title: MovieTitle| async { Ok::<_, anyhow::Error>(()) };
    let send_statement = move |letter: StatementLetter| async move {
        outbox_ref
            .send(letter.body)
            .map_err(|_| anyhow!("Statement outbox is closed"))?;
        Ok::<_, anyhow::Error>(SendResult::Sent)
    };

    let workflow = issue_statement(check_movie_in_catalog, send_statement);
    workflow(UnvalidatedCustomer::from(customer)).await?;

    delivered
        .recv()
        .await
        .ok_or_else(|| anyhow!("No statement was delivered"))
}
