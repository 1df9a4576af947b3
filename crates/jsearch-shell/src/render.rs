//! Result rendering.
//!
//! Each row prints one line per field: the key left-aligned in a
//! `key_width` column, a `|` separator, and the value right-aligned in a
//! `value_width` column. Relationship lists (arrays of records) are rendered
//! recursively under a heading line, indented two spaces per level.
//!
//! ```text
//! _id                 |                                                71
//! name                |                               Francisca Rasmussen
//! organizations:
//!   organization_name |                                           zendesk
//! ```

use crate::theme::Theme;
use jsearch_core::config::DisplayConfig;
use jsearch_core::{FieldInfo, Record};
use serde_json::Value;
use std::io::{self, Write};

const INDENT: usize = 2;

pub struct Renderer<'a> {
    display: &'a DisplayConfig,
    theme: &'a Theme,
}

impl<'a> Renderer<'a> {
    pub fn new(display: &'a DisplayConfig, theme: &'a Theme) -> Self {
        Self { display, theme }
    }

    /// Render every row followed by a result count footer.
    pub fn rows(&self, out: &mut impl Write, rows: &[Record]) -> io::Result<()> {
        if rows.is_empty() {
            return writeln!(out, "{}", self.theme.muted.apply_to("No results found."));
        }
        for row in rows {
            self.record(out, row, 0)?;
            writeln!(out)?;
        }
        let noun = if rows.len() == 1 { "result" } else { "results" };
        writeln!(
            out,
            "{}",
            self.theme.count.apply_to(format!("{} {noun} found.", rows.len()))
        )
    }

    fn record(&self, out: &mut impl Write, record: &Record, depth: usize) -> io::Result<()> {
        let indent = " ".repeat(depth * INDENT);
        for (key, value) in record {
            match nested(value) {
                Some(children) if children.is_empty() => self.line(out, &indent, key, "(none)")?,
                Some(children) => {
                    writeln!(out, "{indent}{}", self.theme.heading.apply_to(format!("{key}:")))?;
                    for (i, child) in children.iter().enumerate() {
                        if i > 0 {
                            writeln!(out)?;
                        }
                        self.record(out, child, depth + 1)?;
                    }
                }
                None => self.line(out, &indent, key, &scalar(value))?,
            }
        }
        Ok(())
    }

    fn line(&self, out: &mut impl Write, indent: &str, key: &str, value: &str) -> io::Result<()> {
        // The key column shrinks with depth so separators stay aligned.
        let key_width = self.display.key_width.saturating_sub(indent.len());
        writeln!(
            out,
            "{indent}{:<kw$}|{:>vw$}",
            self.theme.key.apply_to(key),
            self.theme.value.apply_to(value),
            kw = key_width,
            vw = self.display.value_width,
        )
    }

    /// Render the searchable fields of one table.
    pub fn fields(&self, out: &mut impl Write, entity: &str, fields: &[FieldInfo]) -> io::Result<()> {
        writeln!(out, "{}", self.theme.heading.apply_to(format!("{entity}:")))?;
        for field in fields {
            let marker = if field.indexed { "indexed" } else { "" };
            writeln!(
                out,
                "{}{:<kw$}{}",
                " ".repeat(INDENT),
                self.theme.key.apply_to(&field.name),
                self.theme.muted.apply_to(marker),
                kw = self.display.key_width,
            )?;
        }
        Ok(())
    }
}

/// The records of a relationship list, or `None` for anything else.
fn nested(value: &Value) -> Option<Vec<&Record>> {
    match value {
        Value::Object(record) => Some(vec![record]),
        Value::Array(items) if items.is_empty() => Some(Vec::new()),
        Value::Array(items) => items.iter().map(Value::as_object).collect(),
        _ => None,
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
