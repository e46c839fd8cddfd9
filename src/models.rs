//! Product records and the values that flow into the store.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Price in currency subunits (cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Cents(pub u32);

impl Cents {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Cents {
    /// Renders as a two-decimal currency string, e.g. `$1.50`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A stored product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Cents,
    pub quantity: u32,
    /// Date of the data currently stored, not of the last write
    pub last_updated: NaiveDate,
}

/// An incoming record from the seed file or the add flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub price: Cents,
    pub quantity: u32,
    pub date: NaiveDate,
}

impl Candidate {
    pub fn new(name: impl Into<String>, price: Cents, quantity: u32, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            date,
        }
    }
}

/// Fields overwritten by an update; the name and id never change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductUpdate {
    pub price: Cents,
    pub quantity: u32,
    pub last_updated: NaiveDate,
}

impl From<&Candidate> for ProductUpdate {
    fn from(candidate: &Candidate) -> Self {
        Self {
            price: candidate.price,
            quantity: candidate.quantity,
            last_updated: candidate.date,
        }
    }
}
