use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Error};

use crate::common::simple_types::*;
use crate::pricing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovieCategory {
    Regular,
    NewRelease,
    Childrens,
}

impl MovieCategory {
    pub const ALL: [MovieCategory; 3] = [Self::Regular, Self::NewRelease, Self::Childrens];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            Self::NewRelease => "NEW_RELEASE",
            Self::Childrens => "CHILDRENS",
        }
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MovieCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.tag() == s)
            .ok_or_else(|| anyhow!("Unknown movie category: {s:?}"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Movie {
    title: MovieTitle,
    category: MovieCategory,
}

impl Movie {
    pub fn new(title: impl Into<String>, category: MovieCategory) -> Self {
        Self {
            title: MovieTitle::new(title),
            category,
        }
    }
    pub fn title(&self) -> &MovieTitle {
        &self.title
    }
    pub fn category(&self) -> MovieCategory {
        self.category
    }
}

/// A movie out on rent. The movie itself is shared between rentals.
#[derive(Clone, Debug, PartialEq)]
pub struct Rental {
    movie: Arc<Movie>,
    days_rented: DaysRented,
}

impl Rental {
    pub fn new(movie: impl Into<Arc<Movie>>, days_rented: impl Into<DaysRented>) -> Self {
        Self {
            movie: movie.into(),
            days_rented: days_rented.into(),
        }
    }
    pub fn movie(&self) -> &Movie {
        &self.movie
    }
    pub fn days_rented(&self) -> DaysRented {
        self.days_rented
    }
    pub fn charge(&self) -> Price {
        pricing::charge_for(self.movie.category, self.days_rented)
    }
    pub fn points(&self) -> FrequentRenterPoints {
        pricing::points_for(self.movie.category, self.days_rented)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    name: CustomerName,
    rentals: Vec<Rental>,
}

impl Customer {
    pub fn new(name: impl Into<String>, rentals: impl IntoIterator<Item = Rental>) -> Self {
        Self {
            name: CustomerName::new(name),
            rentals: rentals.into_iter().collect(),
        }
    }
    pub fn name(&self) -> &CustomerName {
        &self.name
    }
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }
}
