//! Interactive front end.
//!
//! [`App::run`] shows the start menu, then drives either a single prompted
//! search, the searchable-field listing, or the free-form command line until
//! the user quits.

use crate::commands::Command;
use crate::session::{Outcome, Session};
use crate::theme::prompt_theme;
use dialoguer::{Input, Select};
use std::io::{self, Write};

const MENU: &[&str] = &[
    "Search",
    "View a list of searchable fields",
    "Command line",
    "Quit",
];

pub struct App {
    session: Session,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Run the start menu until the user quits.
    pub fn run(self) -> anyhow::Result<()> {
        let theme = prompt_theme();
        loop {
            let choice = Select::with_theme(&theme)
                .with_prompt("Select search option")
                .items(MENU)
                .default(0)
                .interact()?;

            let outcome = match choice {
                0 => self.dispatch(Command::SearchPrompt)?,
                1 => self.dispatch(Command::Fields(None))?,
                2 => self.command_line()?,
                _ => Outcome::Quit,
            };
            if outcome == Outcome::Quit {
                return Ok(());
            }
        }
    }

    /// Read and execute commands until `quit`.
    fn command_line(&self) -> anyhow::Result<Outcome> {
        let theme = prompt_theme();
        let mut stderr = io::stderr();
        loop {
            let line: String = Input::with_theme(&theme)
                .with_prompt("jsearch")
                .allow_empty(true)
                .interact_text()?;

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(msg) if msg.is_empty() => continue,
                Err(msg) => {
                    writeln!(stderr, "{}", self.session.theme().error.apply_to(msg))?;
                    continue;
                }
            };

            tracing::debug!(?command, "command line");
            if self.dispatch(command)? == Outcome::Quit {
                return Ok(Outcome::Quit);
            }
        }
    }

    /// Execute one command against stdout, resolving interactive searches.
    fn dispatch(&self, command: Command) -> anyhow::Result<Outcome> {
        match self.session.execute(&command, &mut io::stdout().lock())? {
            Outcome::PromptSearch => {
                let search = self.prompt_search()?;
                self.session.execute(&search, &mut io::stdout().lock())
            }
            outcome => Ok(outcome),
        }
    }

    /// Only reached with at least one table loaded; the session answers
    /// `SearchPrompt` itself on an empty database.
    fn prompt_search(&self) -> anyhow::Result<Command> {
        let theme = prompt_theme();
        let entities = self.session.database().entities();

        let entity = entities[Select::with_theme(&theme)
            .with_prompt("Enter search table")
            .items(&entities)
            .default(0)
            .interact()?]
        .to_string();

        let field: String = Input::with_theme(&theme)
            .with_prompt("Enter search field")
            .interact_text()?;

        let value: String = Input::with_theme(&theme)
            .with_prompt("Enter search value")
            .allow_empty(true)
            .interact_text()?;

        Ok(Command::Search {
            entity,
            field: field.trim().to_string(),
            value: value.trim().to_string(),
        })
    }
}
