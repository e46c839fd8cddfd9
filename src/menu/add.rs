use super::{normalize, Handler, Session};
use crate::error::{InventoryError, Result};
use crate::models::{Candidate, Cents};
use crate::parsing::{parse_entered_price, parse_name, parse_quantity};
use crate::reconcile::{reconcile, Outcome};

/// Prompts for a new product and merges it into the store
pub struct AddProduct;

impl AddProduct {
    /// Asks for name, price and quantity until all three are usable.
    /// `None` means input ended.
    fn read_fields(session: &mut Session<'_>) -> Result<Option<(String, Cents, u32)>> {
        loop {
            let console = &mut session.console;
            let Some(name) = console.prompt("Enter a product name: ")? else {
                return Ok(None);
            };
            let Some(price) = console.prompt("Enter the product price in the format of $1.50: ")?
            else {
                return Ok(None);
            };
            let Some(quantity) = console.prompt("Enter the product quantity: ")? else {
                return Ok(None);
            };

            let parsed = parse_name(&name).and_then(|name| {
                let price = parse_entered_price(&price)?;
                let quantity = parse_quantity(&quantity)?;
                Ok((name, price, quantity))
            });
            match parsed {
                Ok(fields) => return Ok(Some(fields)),
                Err(InventoryError::MalformedName(_)) => {
                    console.say("A product name is required.")?;
                }
                Err(e) if e.is_malformed_input() => {
                    log::debug!("Rejected add input: {}", e);
                    console.say("Please enter in the format shown in the example.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Handler for AddProduct {
    fn run(&self, session: &mut Session<'_>) -> Result<()> {
        let Some((name, price, quantity)) = Self::read_fields(session)? else {
            return Ok(());
        };

        let confirm = session.console.prompt("Save product? [y/N]: ")?;
        if !matches!(confirm.as_deref().map(normalize).as_deref(), Some("y" | "yes")) {
            session.console.say("Product not saved.")?;
            return Ok(());
        }

        let candidate = Candidate::new(name, price, quantity, (session.today)());
        let outcome = reconcile(session.store, &candidate)?;
        log::info!("Add '{}': {:?}", candidate.name, outcome.product());
        match outcome {
            Outcome::Inserted(product) => {
                session
                    .console
                    .say(format!("Product '{}' added with id {}.", product.name, product.id))?;
            }
            Outcome::Updated(_) => {
                session.console.say("Existing price has been updated")?;
            }
            Outcome::Unchanged(product) => {
                session.console.say(format!(
                    "'{}' already has data from {}, which is as new or newer. Nothing was saved.",
                    product.name, product.last_updated
                ))?;
            }
        }
        Ok(())
    }
}
