//! Session state and command execution.
//!
//! A [`Session`] owns the loaded [`Database`] for the lifetime of the shell;
//! it is passed explicitly to whatever drives it (the interactive loop, a
//! one-shot CLI invocation, or a test).

use crate::commands::{Command, USAGE};
use crate::render::Renderer;
use crate::theme::Theme;
use jsearch_core::config::DisplayConfig;
use jsearch_core::{Database, Error};
use std::io::Write;

/// What the driver should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Collect entity, field and value interactively, then run a search.
    PromptSearch,
    Quit,
}

pub struct Session {
    db: Database,
    display: DisplayConfig,
    theme: Theme,
}

impl Session {
    pub fn new(db: Database, display: DisplayConfig, theme: Theme) -> Self {
        Self { db, display, theme }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Run `command`, writing its output to `out`.
    ///
    /// Unknown tables are reported on `out` and do not end the session.
    pub fn execute(&self, command: &Command, out: &mut impl Write) -> anyhow::Result<Outcome> {
        let err = match self.try_execute(command, out) {
            Ok(outcome) => return Ok(outcome),
            Err(err) => err,
        };
        if let Some(missing @ Error::TableNotFound(_)) = err.downcast_ref::<Error>() {
            self.report(out, missing)?;
            return Ok(Outcome::Continue);
        }
        Err(err)
    }

    /// Run `command`, returning every engine error to the caller.
    pub fn try_execute(&self, command: &Command, out: &mut impl Write) -> anyhow::Result<Outcome> {
        let renderer = Renderer::new(&self.display, &self.theme);
        match command {
            Command::Search {
                entity,
                field,
                value,
            } => {
                writeln!(
                    out,
                    "{}",
                    self.theme
                        .muted
                        .apply_to(format!("Searching {entity} for {field} = {value:?}"))
                )?;
                renderer.rows(out, &self.db.search(entity, field, value)?)?;
            }
            Command::SearchPrompt if self.db.is_empty() => {
                writeln!(out, "{}", self.theme.error.apply_to("no tables are loaded"))?;
            }
            Command::SearchPrompt => return Ok(Outcome::PromptSearch),
            Command::Fields(Some(entity)) => {
                renderer.fields(out, entity, &self.db.searchable_fields(entity)?)?;
            }
            Command::Fields(None) => {
                for entity in self.db.entities() {
                    renderer.fields(out, entity, &self.db.searchable_fields(entity)?)?;
                    writeln!(out)?;
                }
            }
            Command::Tables => {
                for entity in self.db.entities() {
                    let table = self.db.fetch_table(entity)?;
                    writeln!(
                        out,
                        "{:<kw$}{}",
                        self.theme.key.apply_to(entity),
                        self.theme.muted.apply_to(format!("{} records", table.len())),
                        kw = self.display.key_width,
                    )?;
                }
            }
            Command::Help => writeln!(out, "{USAGE}")?,
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }

    fn report(&self, out: &mut impl Write, err: &Error) -> std::io::Result<()> {
        tracing::debug!(error = %err, "command failed");
        writeln!(out, "{}", self.theme.error.apply_to(format!("error: {err}")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
