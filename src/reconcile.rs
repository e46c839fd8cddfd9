//! Merge rule for incoming records that share a name with a stored one.
//!
//! The newer `last_updated` date wins. The same rule is used for seed
//! imports and for products added by hand.

use crate::database::ProductStore;
use crate::error::Result;
use crate::models::{Candidate, Product, ProductUpdate};
use chrono::NaiveDate;

/// What to do with a candidate given the stored record of the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No record with this name yet
    Insert,
    /// Stored record is strictly older; overwrite it in place
    Update { id: i64 },
    /// Stored record is as new or newer; candidate is stale
    Ignore { stored_date: NaiveDate },
}

/// Decides how a candidate merges into the store. Pure; touches nothing.
pub fn decide(existing: Option<&Product>, candidate: &Candidate) -> Decision {
    match existing {
        None => Decision::Insert,
        Some(stored) if stored.last_updated < candidate.date => Decision::Update { id: stored.id },
        Some(stored) => Decision::Ignore {
            stored_date: stored.last_updated,
        },
    }
}

/// Result of applying a decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Inserted(Product),
    Updated(Product),
    /// The stored record, left untouched
    Unchanged(Product),
}

impl Outcome {
    pub fn product(&self) -> &Product {
        match self {
            Outcome::Inserted(p) | Outcome::Updated(p) | Outcome::Unchanged(p) => p,
        }
    }
}

/// Looks up the stored record, decides, and writes the result.
pub fn reconcile(store: &ProductStore, candidate: &Candidate) -> Result<Outcome> {
    let existing = store.find_by_name(&candidate.name)?;
    let decision = decide(existing.as_ref(), candidate);
    log::debug!("Reconciling '{}': {:?}", candidate.name, decision);

    let stored = match (decision, existing) {
        (Decision::Insert, _) | (_, None) => {
            let product = store.create(
                &candidate.name,
                candidate.price,
                candidate.quantity,
                candidate.date,
            )?;
            return Ok(Outcome::Inserted(product));
        }
        (_, Some(stored)) => stored,
    };

    match decision {
        Decision::Update { id } => {
            let fields = ProductUpdate::from(candidate);
            store.update(id, &fields)?;
            Ok(Outcome::Updated(Product {
                price: fields.price,
                quantity: fields.quantity,
                last_updated: fields.last_updated,
                ..stored
            }))
        }
        _ => Ok(Outcome::Unchanged(stored)),
    }
}
