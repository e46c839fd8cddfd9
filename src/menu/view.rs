use super::{normalize, Handler, Session, QUIT};
use crate::error::Result;
use crate::models::Product;

/// Looks up products by id, with an option to delete the one shown
pub struct ViewProduct;

fn show_product(session: &mut Session<'_>, product: &Product) -> Result<()> {
    let console = &mut session.console;
    console.say(format!("Product id: {}", product.id))?;
    console.say(format!("Product: {}", product.name))?;
    console.say(format!("Price: {}", product.price))?;
    console.say(format!("Quantity: {}", product.quantity))?;
    console.say(format!("Date updated: {}", product.last_updated))?;
    Ok(())
}

/// Deletes `product` after a yes/no confirmation.
fn confirm_delete(session: &mut Session<'_>, product: &Product) -> Result<()> {
    let answer = session
        .console
        .prompt("Are you sure you want to delete this product? [y/N] ")?;
    if matches!(answer.as_deref().map(normalize).as_deref(), Some("y" | "yes")) {
        session.store.delete(product.id)?;
        session.console.say("The product has been deleted.")?;
    } else {
        session.console.say("The product was kept.")?;
    }
    Ok(())
}

impl Handler for ViewProduct {
    fn run(&self, session: &mut Session<'_>) -> Result<()> {
        loop {
            let Some(upper) = session.store.max_id()? else {
                session.console.say("The inventory is empty.")?;
                return Ok(());
            };

            let prompt = format!("Enter Product id between 1 & {upper} ('{QUIT}' to return): ");
            let Some(input) = session.console.prompt(prompt)? else {
                return Ok(());
            };
            let input = normalize(&input);
            if input == QUIT {
                return Ok(());
            }

            let Ok(id) = input.parse::<i64>() else {
                session.console.say(
                    "There is no product matching that id, please try again and use digits only",
                )?;
                continue;
            };
            let Some(product) = session.store.find_by_id(id)? else {
                session.console.say(
                    "This product is not in the inventory list, try a different product id",
                )?;
                continue;
            };

            show_product(session, &product)?;
            session.console.say("")?;
            session.console.say("Press Enter to pick another product")?;
            session.console.say("d) Delete product")?;
            session.console.say(format!("{QUIT}) Return to main menu"))?;

            let Some(action) = session.console.prompt("Action: Enter [d/q] ")? else {
                return Ok(());
            };
            match normalize(&action).as_str() {
                "d" => confirm_delete(session, &product)?,
                QUIT => return Ok(()),
                _ => {}
            }
        }
    }
}
