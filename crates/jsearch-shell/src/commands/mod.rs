// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use regex::Regex;
use std::sync::LazyLock;

static SEARCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^search\s+(\S+)\s+(\S+)(?:\s+(.*))?$").expect("search grammar is valid")
});

pub const USAGE: &str = "\
Commands:
  search                          interactive search
  search <entity> <field> <value> search <entity> where <field> equals <value>
  fields [entity]                 list searchable fields
  tables                          list loaded tables
  help                            show this help
  quit                            leave the shell";

/// A parsed, validated command ready to be executed by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Exact-match search; value may be empty or contain spaces
    Search {
        entity: String,
        field: String,
        value: String,
    },
    // Prompt for entity, field and value
    SearchPrompt,
    // Searchable fields of one table, or all of them
    Fields(Option<String>),
    Tables,
    Help,
    Quit,
}

impl Command {
    /// Parse one line of input.
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// line returns `Err("")` as a sentinel meaning "nothing to do".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word.to_ascii_lowercase().as_str() {
            "search" if rest.is_empty() => Ok(Command::SearchPrompt),
            "search" => {
                let caps = SEARCH
                    .captures(input)
                    .ok_or_else(|| "usage: search <entity> <field> <value>".to_string())?;
                Ok(Command::Search {
                    entity: caps[1].to_string(),
                    field: caps[2].to_string(),
                    value: caps
                        .get(3)
                        .map(|m| m.as_str().trim().to_string())
                        .unwrap_or_default(),
                })
            }
            "fields" => Ok(Command::Fields(
                Some(rest).filter(|r| !r.is_empty()).map(str::to_string),
            )),
            "tables" => Ok(Command::Tables),
            "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn search(entity: &str, field: &str, value: &str) -> Command {
        Command::Search {
            entity: entity.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    #[rstest]
    #[case("search users _id 71", search("users", "_id", "71"))]
    #[case("  SEARCH users name Francisca Rasmussen ", search("users", "name", "Francisca Rasmussen"))]
    #[case("search tickets description", search("tickets", "description", ""))]
    #[case("search", Command::SearchPrompt)]
    #[case("fields", Command::Fields(None))]
    #[case("fields users", Command::Fields(Some("users".into())))]
    #[case("tables", Command::Tables)]
    #[case("help", Command::Help)]
    #[case("exit", Command::Quit)]
    #[case("q", Command::Quit)]
    fn parses(#[case] input: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(input), Ok(expected));
    }

    #[test]
    fn empty_input_is_sentinel() {
        assert_eq!(Command::parse("   "), Err(String::new()));
    }

    #[test]
    fn incomplete_search_is_usage_error() {
        assert_eq!(
            Command::parse("search users"),
            Err("usage: search <entity> <field> <value>".to_string())
        );
    }

    #[test]
    fn unknown_command() {
        let err = Command::parse("delete users").unwrap_err();
        assert!(err.starts_with("unknown command: delete"));
    }
}
