use std::fmt;
use std::iter::Sum;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MovieTitle {
    value: String,
}

impl MovieTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            value: title.into(),
        }
    }
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for MovieTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerName {
    value: String,
}

impl CustomerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { value: name.into() }
    }
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Length of a rental in days. Zero and negative values are accepted as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DaysRented {
    value: i64,
}

impl DaysRented {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl From<i64> for DaysRented {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

/// Renders a charge the way a double prints naturally: whole numbers keep
/// one fractional digit.
fn fmt_decimal(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Price {
    value: f64,
}

impl Price {
    pub fn value(&self) -> f64 {
        self.value
    }
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl Sum<Self> for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::new(0.), |a, b| a + b)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_decimal(self.value, f)
    }
}

/// Total owed across a statement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BillingAmount {
    value: Price,
}

impl BillingAmount {
    pub fn value(&self) -> Price {
        self.value
    }
    pub fn sum_prices(prices: impl Iterator<Item = Price>) -> BillingAmount {
        let sum = prices.sum();
        Self { value: sum }
    }
}

impl fmt::Display for BillingAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrequentRenterPoints {
    value: u64,
}

impl FrequentRenterPoints {
    pub fn new(value: u64) -> Self {
        Self { value }
    }
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl std::ops::Add for FrequentRenterPoints {
    type Output = FrequentRenterPoints;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl Sum<Self> for FrequentRenterPoints {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FrequentRenterPoints::default(), |a, b| a + b)
    }
}

impl fmt::Display for FrequentRenterPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
