//! Interactive main menu.
//!
//! A blocking read loop: show the actions, read one line, dispatch to the
//! matching handler, repeat until the user enters `q` or input ends.

mod add;
mod backup;
mod console;
mod view;

pub use add::AddProduct;
pub use backup::BackupProducts;
pub use console::Console;
pub use view::ViewProduct;

use crate::cli::AppConfig;
use crate::database::ProductStore;
use crate::error::Result;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Input that leaves the current loop
pub const QUIT: &str = "q";

/// Today's date in local time, used to stamp products added by hand.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Lowercased, trimmed form used for every menu choice.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Backup,
    View,
}

impl Command {
    /// Key typed to pick this action
    pub fn key(self) -> &'static str {
        match self {
            Command::Add => "a",
            Command::Backup => "b",
            Command::View => "v",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Add => "Add a product",
            Command::Backup => "Make a backup of the inventory",
            Command::View => "View a product by id",
        }
    }

    /// Parse a normalized key into a Command
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }

    pub fn all() -> &'static [Command] {
        &[Command::Add, Command::Backup, Command::View]
    }
}

/// Everything a handler may touch while it runs
pub struct Session<'a> {
    pub store: &'a ProductStore,
    pub console: Console<'a>,
    pub config: &'a AppConfig,
    /// Clock for the add flow; tests pin it to a fixed date
    pub today: fn() -> NaiveDate,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a ProductStore, console: Console<'a>, config: &'a AppConfig) -> Self {
        Self {
            store,
            console,
            config,
            today: local_today,
        }
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

/// One menu action. Runs to completion before the menu shows again.
pub trait Handler {
    fn run(&self, session: &mut Session<'_>) -> Result<()>;
}

/// Ordered list of commands for display, plus their handlers
pub struct Menu {
    order: Vec<Command>,
    handlers: HashMap<Command, Box<dyn Handler>>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::empty()
            .with(Command::Add, AddProduct)
            .with(Command::Backup, BackupProducts)
            .with(Command::View, ViewProduct)
    }
}

impl Menu {
    pub fn empty() -> Self {
        Self {
            order: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler. Re-registering a command replaces its handler
    /// and keeps its original position.
    pub fn with(mut self, command: Command, handler: impl Handler + 'static) -> Self {
        if self.handlers.insert(command, Box::new(handler)).is_none() {
            self.order.push(command);
        }
        self
    }

    /// Commands in display order
    pub fn commands(&self) -> &[Command] {
        &self.order
    }

    fn show(&self, session: &mut Session<'_>) -> Result<()> {
        session.console.say("")?;
        session.console.say(format!("Enter '{}' to quit.", QUIT))?;
        for command in self.commands() {
            session
                .console
                .say(format!("{}) {}", command.key(), command.description()))?;
        }
        Ok(())
    }

    /// Runs the loop until the quit sentinel or end of input.
    pub fn run(&self, session: &mut Session<'_>) -> Result<()> {
        loop {
            self.show(session)?;
            let Some(line) = session.console.prompt("Action: ")? else {
                break;
            };
            let choice = normalize(&line);
            if choice == QUIT {
                break;
            }

            let handler = Command::from_key(&choice).and_then(|c| self.handlers.get(&c));
            match handler {
                Some(handler) => {
                    if let Err(e) = handler.run(session) {
                        log::error!("Action '{}' failed: {}", choice, e);
                        session.console.say(format!("Error: {}", e))?;
                    }
                }
                None if choice.is_empty() => {}
                None => session
                    .console
                    .say(format!("'{}' is not a menu option.", choice))?,
            }
        }
        log::info!("Menu closed");
        Ok(())
    }
}
